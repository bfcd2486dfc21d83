//! Status-to-display mappings for containers and events.

use crate::api::{ContainerState, EventStatus};

/// Glyph shown next to an event.
pub fn event_glyph(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Success => "✅",
        EventStatus::Failure => "❌",
        EventStatus::Stopped => "⏸",
        EventStatus::Created => "🆕",
        EventStatus::Other => "📋",
    }
}

/// Visual class of a container state badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    Running,
    Exited,
    Created,
    Paused,
    /// Fallback for every state without a dedicated badge.
    Other,
}

pub fn state_class(state: ContainerState) -> StateClass {
    match state {
        ContainerState::Running => StateClass::Running,
        ContainerState::Exited => StateClass::Exited,
        ContainerState::Created => StateClass::Created,
        ContainerState::Paused => StateClass::Paused,
        ContainerState::Other => StateClass::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_state(raw: Option<&str>) -> ContainerState {
        let json = match raw {
            Some(s) => format!(r#"{{"id":"x","state":"{}"}}"#, s),
            None => r#"{"id":"x"}"#.to_string(),
        };
        serde_json::from_str::<crate::api::Container>(&json)
            .unwrap()
            .state
    }

    fn decode_status(raw: Option<&str>) -> EventStatus {
        let json = match raw {
            Some(s) => format!(r#"{{"status":"{}"}}"#, s),
            None => "{}".to_string(),
        };
        serde_json::from_str::<crate::api::ContainerEvent>(&json)
            .unwrap()
            .status
    }

    #[test]
    fn test_state_class_known_states() {
        assert_eq!(state_class(decode_state(Some("running"))), StateClass::Running);
        assert_eq!(state_class(decode_state(Some("exited"))), StateClass::Exited);
        assert_eq!(state_class(decode_state(Some("created"))), StateClass::Created);
        assert_eq!(state_class(decode_state(Some("paused"))), StateClass::Paused);
    }

    #[test]
    fn test_state_class_defaults_to_other() {
        assert_eq!(state_class(decode_state(Some("restarting"))), StateClass::Other);
        assert_eq!(state_class(decode_state(Some("dead"))), StateClass::Other);
        assert_eq!(state_class(decode_state(Some(""))), StateClass::Other);
        assert_eq!(state_class(decode_state(None)), StateClass::Other);
    }

    #[test]
    fn test_event_glyphs() {
        assert_eq!(event_glyph(decode_status(Some("success"))), "✅");
        assert_eq!(event_glyph(decode_status(Some("failure"))), "❌");
        assert_eq!(event_glyph(decode_status(Some("stopped"))), "⏸");
        assert_eq!(event_glyph(decode_status(Some("created"))), "🆕");
    }

    #[test]
    fn test_event_glyph_defaults() {
        assert_eq!(event_glyph(decode_status(Some("running"))), "📋");
        assert_eq!(event_glyph(decode_status(Some("exited"))), "📋");
        assert_eq!(event_glyph(decode_status(None)), "📋");
    }
}
