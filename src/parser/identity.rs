//! Layer identity resolution.
//!
//! Every layer gets a unique positive order id. Authors may give an explicit
//! token (`base`, `npc`, a number, or a numeric string); anything else falls
//! back to the layer's position. Ids are handed out first-come-first-served
//! in input order: a collision moves the later layer to the next free id and
//! reports a warning.

use std::collections::BTreeSet;

use crate::error::{MapError, Result};
use crate::types::{LayerIdentity, BASE_ORDER_ID, NPC_ORDER_ID};
use crate::validation::{Diagnostic, WarningReporter};

use super::types::RawLayerId;

/// What a raw token asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Requested {
    /// A valid explicit id.
    Explicit(u32),
    /// No token given.
    Absent,
    /// A token that isn't a usable id.
    Invalid,
}

fn interpret(raw: Option<&RawLayerId>) -> Requested {
    match raw {
        None => Requested::Absent,
        Some(RawLayerId::Number(n)) => {
            let n = n.floor();
            if n.is_finite() && n >= 1.0 && n <= f64::from(u32::MAX) {
                Requested::Explicit(n as u32)
            } else {
                Requested::Invalid
            }
        }
        Some(RawLayerId::Text(s)) => {
            let token = s.trim();
            if token.is_empty() {
                Requested::Absent
            } else if token.eq_ignore_ascii_case("base") {
                Requested::Explicit(BASE_ORDER_ID)
            } else if token.eq_ignore_ascii_case("npc") {
                Requested::Explicit(NPC_ORDER_ID)
            } else if token.bytes().all(|b| b.is_ascii_digit()) {
                match token.parse::<u32>() {
                    Ok(n) if n >= 1 => Requested::Explicit(n),
                    _ => Requested::Invalid,
                }
            } else {
                Requested::Invalid
            }
        }
    }
}

/// Position-based fallback id for the layer at `index`.
fn positional(index: usize) -> u32 {
    u32::try_from(index.saturating_add(1))
        .unwrap_or(u32::MAX)
        .max(1)
}

/// Assigns order ids to the layers of a single map.
pub struct LayerIdResolver<'a> {
    map_id: &'a str,
    reporter: &'a dyn WarningReporter,
    strict: bool,
    used: BTreeSet<u32>,
}

impl<'a> LayerIdResolver<'a> {
    pub fn new(map_id: &'a str, reporter: &'a dyn WarningReporter) -> Self {
        Self {
            map_id,
            reporter,
            strict: false,
            used: BTreeSet::new(),
        }
    }

    /// Reject non-numeric tokens and duplicate explicit ids instead of renumbering.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Resolve the identity of the layer at `index`.
    pub fn resolve(&mut self, raw: Option<&RawLayerId>, index: usize) -> Result<LayerIdentity> {
        let fallback = positional(index);

        let requested = match interpret(raw) {
            Requested::Explicit(id) => id,
            Requested::Absent => fallback,
            Requested::Invalid => {
                let token = raw.map(ToString::to_string).unwrap_or_default();
                if self.strict {
                    return Err(MapError::structural(
                        self.map_id,
                        format!("layer {} has invalid id '{}'", index, token),
                    )
                    .with_help("Layer ids must be 'base', 'npc', or a positive integer"));
                }
                self.reporter.report(
                    self.map_id,
                    Diagnostic::warning(
                        "worldmap::invalid-layer-id",
                        format!(
                            "layer {} has invalid id '{}', using {}",
                            index, token, fallback
                        ),
                    ),
                );
                fallback
            }
        };

        let order_id = if self.used.contains(&requested) {
            if self.strict && matches!(interpret(raw), Requested::Explicit(_)) {
                return Err(MapError::structural(
                    self.map_id,
                    format!("layer {} reuses layer id {}", index, requested),
                )
                .with_help("Give every layer a distinct id"));
            }
            let next = self.next_free(requested);
            self.reporter.report(
                self.map_id,
                Diagnostic::warning(
                    "worldmap::duplicate-layer-id",
                    format!(
                        "layer {} wants id {} which is already used, renumbered to {}",
                        index, requested, next
                    ),
                )
                .with_help("Give every layer a distinct id to control stacking order"),
            );
            next
        } else {
            requested
        };

        self.used.insert(order_id);
        Ok(LayerIdentity::from_order_id(order_id))
    }

    /// First unused id strictly above `from`.
    fn next_free(&self, from: u32) -> u32 {
        let mut candidate = from.saturating_add(1);
        while self.used.contains(&candidate) {
            candidate = candidate.saturating_add(1);
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::CollectingReporter;

    fn text(s: &str) -> RawLayerId {
        RawLayerId::Text(s.to_string())
    }

    #[test]
    fn test_reserved_tokens() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter);

        let base = resolver.resolve(Some(&text("BASE")), 0).unwrap();
        let npc = resolver.resolve(Some(&text("Npc")), 1).unwrap();

        assert_eq!(base, LayerIdentity::from_order_id(1));
        assert_eq!(npc.order_id, 2);
        assert_eq!(npc.id, "npc");
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_numeric_tokens() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter);

        assert_eq!(resolver.resolve(Some(&RawLayerId::Number(4.7)), 0).unwrap().order_id, 4);
        assert_eq!(resolver.resolve(Some(&text(" 12 ")), 1).unwrap().order_id, 12);
        assert_eq!(resolver.resolve(Some(&text("12")), 2).unwrap().order_id, 13);
    }

    #[test]
    fn test_absent_uses_position() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter);

        assert_eq!(resolver.resolve(None, 0).unwrap().order_id, 1);
        assert_eq!(resolver.resolve(None, 1).unwrap().order_id, 2);
        assert_eq!(resolver.resolve(Some(&text("")), 4).unwrap().order_id, 5);
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_duplicate_renumbered_with_one_warning() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter);

        let first = resolver.resolve(Some(&text("2")), 0).unwrap();
        let second = resolver.resolve(Some(&text("2")), 1).unwrap();

        assert_eq!(first.order_id, 2);
        assert_eq!(second.order_id, 3);
        assert_eq!(reporter.len(), 1);
        assert_eq!(reporter.warnings()[0].code, "worldmap::duplicate-layer-id");
    }

    #[test]
    fn test_duplicate_skips_taken_ids() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter);

        resolver.resolve(Some(&text("2")), 0).unwrap();
        resolver.resolve(Some(&text("3")), 1).unwrap();
        let third = resolver.resolve(Some(&text("npc")), 2).unwrap();

        assert_eq!(third.order_id, 4);
        assert_eq!(third.id, "4");
    }

    #[test]
    fn test_invalid_tokens_fall_back() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter);

        assert_eq!(resolver.resolve(Some(&text("roof")), 2).unwrap().order_id, 3);
        assert_eq!(resolver.resolve(Some(&RawLayerId::Number(0.0)), 0).unwrap().order_id, 1);
        assert_eq!(resolver.resolve(Some(&text("0")), 5).unwrap().order_id, 6);

        let codes: Vec<String> = reporter.warnings().into_iter().map(|d| d.code).collect();
        assert_eq!(codes, vec!["worldmap::invalid-layer-id"; 3]);
    }

    #[test]
    fn test_strict_rejects_invalid_token() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter).strict(true);

        let err = resolver.resolve(Some(&text("roof")), 0).unwrap_err();
        assert!(err.is_structural());
        assert!(err.to_string().contains("invalid id 'roof'"));
    }

    #[test]
    fn test_strict_rejects_duplicate_explicit() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter).strict(true);

        resolver.resolve(Some(&text("base")), 0).unwrap();
        assert!(resolver.resolve(Some(&RawLayerId::Number(1.0)), 1).is_err());
    }

    #[test]
    fn test_strict_still_renumbers_positional() {
        let reporter = CollectingReporter::new();
        let mut resolver = LayerIdResolver::new("m", &reporter).strict(true);

        resolver.resolve(Some(&text("2")), 0).unwrap();
        let second = resolver.resolve(None, 1).unwrap();
        assert_eq!(second.order_id, 3);
    }
}
