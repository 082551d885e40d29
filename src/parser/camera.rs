//! Camera framing sanitization.

use crate::types::{CameraPoint, CameraSize, MAX_CAMERA_TILES, MIN_CAMERA_TILES};

use super::types::{CameraPointInput, CameraSizeInput};

/// Round each dimension to whole tiles and clamp to the allowed range.
///
/// Missing or non-finite dimensions take the default.
pub fn sanitize_camera_size(input: Option<&CameraSizeInput>) -> CameraSize {
    let default = CameraSize::default();
    let Some(input) = input else {
        return default;
    };

    CameraSize {
        width: clamp_dimension(input.width, default.width),
        height: clamp_dimension(input.height, default.height),
    }
}

fn clamp_dimension(value: Option<f64>, default: u32) -> u32 {
    match value {
        Some(v) if v.is_finite() => {
            v.round()
                .clamp(f64::from(MIN_CAMERA_TILES), f64::from(MAX_CAMERA_TILES)) as u32
        }
        _ => default,
    }
}

/// Clamp a camera anchor into the map. Non-finite coordinates drop the anchor.
pub fn sanitize_camera_point(
    input: Option<&CameraPointInput>,
    width: usize,
    height: usize,
) -> Option<CameraPoint> {
    let input = input?;
    if !input.x.is_finite() || !input.y.is_finite() || width == 0 || height == 0 {
        return None;
    }

    Some(CameraPoint {
        x: clamp_coordinate(input.x, width),
        y: clamp_coordinate(input.y, height),
    })
}

fn clamp_coordinate(value: f64, extent: usize) -> u32 {
    let max = (extent - 1) as f64;
    value.floor().clamp(0.0, max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: Option<f64>, height: Option<f64>) -> CameraSize {
        sanitize_camera_size(Some(&CameraSizeInput { width, height }))
    }

    #[test]
    fn test_default_size() {
        assert_eq!(sanitize_camera_size(None), CameraSize { width: 19, height: 15 });
        assert_eq!(size(None, Some(9.0)), CameraSize { width: 19, height: 9 });
    }

    #[test]
    fn test_size_clamped_and_rounded() {
        assert_eq!(size(Some(0.0), Some(100.0)), CameraSize { width: 1, height: 64 });
        assert_eq!(size(Some(10.6), Some(-3.0)), CameraSize { width: 11, height: 1 });
        assert_eq!(size(Some(f64::NAN), Some(f64::INFINITY)), CameraSize::default());
    }

    #[test]
    fn test_point_clamped() {
        let point = sanitize_camera_point(Some(&CameraPointInput { x: 12.0, y: -4.0 }), 10, 8);
        assert_eq!(point, Some(CameraPoint { x: 9, y: 0 }));

        let point = sanitize_camera_point(Some(&CameraPointInput { x: 3.9, y: 2.0 }), 10, 8);
        assert_eq!(point, Some(CameraPoint { x: 3, y: 2 }));
    }

    #[test]
    fn test_point_absent_or_invalid() {
        assert_eq!(sanitize_camera_point(None, 10, 8), None);
        assert_eq!(
            sanitize_camera_point(Some(&CameraPointInput { x: f64::NAN, y: 1.0 }), 10, 8),
            None
        );
    }
}
