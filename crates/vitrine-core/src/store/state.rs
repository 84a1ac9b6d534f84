// ── Rotation state and transitions ──
//
// The state is one immutable record; every mutation goes through the pure
// `apply` function so transitions stay atomic and auditable. Consumers
// observe whole-state snapshots, never partial updates.

use serde::{Deserialize, Serialize};

use crate::model::{Configuration, Property};

/// The full state of one display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    /// Which branch's content set applies. Absent until configured.
    pub branch_id: Option<u64>,
    /// Which screen within the branch. Absent until configured.
    pub tv_id: Option<String>,
    /// Dwell time per property, in seconds.
    pub duration: u64,
    /// Resync period, in seconds.
    pub refresh: u64,
    /// Content items in display order.
    pub properties: Vec<Property>,
    /// Index into `properties`. Meaningless while `properties` is empty.
    pub current: usize,
    /// Snapshot of `properties[current]` taken at the last transition,
    /// denormalized for consumers.
    pub current_property: Option<Property>,
    /// True once an initial property set has been loaded. Never resets.
    pub ready: bool,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            branch_id: None,
            tv_id: None,
            duration: 10,
            refresh: 120,
            properties: Vec::new(),
            current: 0,
            current_property: None,
            ready: false,
        }
    }
}

/// State transition events.
///
/// Non-exhaustive on purpose: an event added by a newer crate version that
/// this reducer does not know about must be a no-op, not an error.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RotationEvent {
    /// Overwrite the identifiers unconditionally (absent payload fields
    /// clear them); apply `duration`/`refresh` only when present and
    /// nonzero.
    SetConfiguration(Configuration),
    /// Move the display to `current`, updating the denormalized snapshot
    /// in the same transition.
    SetCurrent {
        current: usize,
        current_property: Property,
    },
    /// Replace the property list wholesale. Does not touch `current` --
    /// callers issue a follow-up `SetCurrent` when needed.
    SetProperties(Vec<Property>),
    /// Mark the initial property set as loaded.
    SetReady,
}

/// Pure state transition. Returns a new record; never mutates `state`.
pub fn apply(state: &RotationState, event: RotationEvent) -> RotationState {
    let mut next = state.clone();
    match event {
        RotationEvent::SetConfiguration(config) => {
            // Identifiers are a full overwrite: a payload without them
            // clears them. Duration and refresh are retained when absent.
            // Asymmetric, and contractual.
            next.branch_id = config.branch_id;
            next.tv_id = config.tv_id;
            // Both periods arm timers downstream; a zero would stall the
            // rotation, so it is treated the same as an absent field.
            if let Some(duration) = config.duration.filter(|&secs| secs > 0) {
                next.duration = duration;
            }
            if let Some(refresh) = config.refresh.filter(|&secs| secs > 0) {
                next.refresh = refresh;
            }
        }
        RotationEvent::SetCurrent {
            current,
            current_property,
        } => {
            next.current = current;
            next.current_property = Some(current_property);
        }
        RotationEvent::SetProperties(properties) => {
            next.properties = properties;
        }
        RotationEvent::SetReady => {
            next.ready = true;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn property(name: &str) -> Property {
        let mut extra = serde_json::Map::new();
        extra.insert("name".into(), serde_json::Value::String(name.into()));
        Property {
            images: vec![format!("https://cdn.example/{name}.jpg")],
            extra,
        }
    }

    #[test]
    fn default_state_matches_display_defaults() {
        let state = RotationState::default();
        assert_eq!(state.duration, 10);
        assert_eq!(state.refresh, 120);
        assert!(state.properties.is_empty());
        assert!(!state.ready);
    }

    #[test]
    fn set_configuration_overwrites_identifiers_unconditionally() {
        let configured = apply(
            &RotationState::default(),
            RotationEvent::SetConfiguration(Configuration::identifiers(
                Some(1),
                Some("abc".into()),
            )),
        );
        assert_eq!(configured.branch_id, Some(1));
        assert_eq!(configured.tv_id.as_deref(), Some("abc"));

        // A payload without identifiers clears them, even though it
        // carries other fields.
        let cleared = apply(
            &configured,
            RotationEvent::SetConfiguration(Configuration {
                duration: Some(7),
                ..Configuration::default()
            }),
        );
        assert_eq!(cleared.branch_id, None);
        assert_eq!(cleared.tv_id, None);
        assert_eq!(cleared.duration, 7);
    }

    #[test]
    fn set_configuration_retains_absent_duration_and_refresh() {
        let state = RotationState {
            duration: 30,
            refresh: 600,
            ..RotationState::default()
        };

        let next = apply(
            &state,
            RotationEvent::SetConfiguration(Configuration {
                duration: Some(7),
                ..Configuration::default()
            }),
        );

        assert_eq!(next.duration, 7);
        assert_eq!(next.refresh, 600); // retained
    }

    #[test]
    fn set_configuration_ignores_zero_periods() {
        let state = RotationState {
            duration: 30,
            refresh: 600,
            ..RotationState::default()
        };

        // A zero period would stall the timers downstream; it must be
        // treated exactly like an absent field.
        let next = apply(
            &state,
            RotationEvent::SetConfiguration(Configuration {
                duration: Some(0),
                refresh: Some(0),
                ..Configuration::default()
            }),
        );

        assert_eq!(next.duration, 30);
        assert_eq!(next.refresh, 600);
    }

    #[test]
    fn set_current_updates_both_fields_atomically() {
        let state = apply(
            &RotationState::default(),
            RotationEvent::SetCurrent {
                current: 2,
                current_property: property("villa"),
            },
        );
        assert_eq!(state.current, 2);
        assert_eq!(state.current_property, Some(property("villa")));
    }

    #[test]
    fn set_properties_does_not_touch_current() {
        let state = RotationState {
            current: 5,
            current_property: Some(property("old")),
            ..RotationState::default()
        };

        let next = apply(
            &state,
            RotationEvent::SetProperties(vec![property("a"), property("b")]),
        );

        assert_eq!(next.properties.len(), 2);
        assert_eq!(next.current, 5);
        assert_eq!(next.current_property, Some(property("old")));
    }

    #[test]
    fn ready_is_monotonic() {
        let ready = apply(&RotationState::default(), RotationEvent::SetReady);
        assert!(ready.ready);

        // No recognized event resets it.
        let after = apply(
            &ready,
            RotationEvent::SetConfiguration(Configuration::default()),
        );
        assert!(after.ready);
    }

    #[test]
    fn apply_never_mutates_its_input() {
        let state = RotationState::default();
        let copy = state.clone();
        let _ = apply(&state, RotationEvent::SetReady);
        assert_eq!(state, copy);
    }
}
