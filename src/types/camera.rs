//! Camera framing for a map.

use serde::Serialize;

/// Default visible area in tiles.
pub const DEFAULT_CAMERA_WIDTH: u32 = 19;
pub const DEFAULT_CAMERA_HEIGHT: u32 = 15;

/// Bounds for either camera dimension.
pub const MIN_CAMERA_TILES: u32 = 1;
pub const MAX_CAMERA_TILES: u32 = 64;

/// Visible area in whole tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CameraSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CameraSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAMERA_WIDTH,
            height: DEFAULT_CAMERA_HEIGHT,
        }
    }
}

/// Fixed camera anchor, always inside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CameraPoint {
    pub x: u32,
    pub y: u32,
}
