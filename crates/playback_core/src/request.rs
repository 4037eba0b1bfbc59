//! Inbound skill event classification and playback-position decoding.

use serde::Deserialize;
use serde_json::Value;

/// User-event signal sent back by the render document when a video finishes.
pub const VIDEO_END_SIGNAL: &str = "videoEnd";
/// Named intent that starts a playback session.
pub const START_INTENT_NAME: &str = "StartPlaybackIntent";

pub const LAUNCH_REQUEST_TYPE: &str = "LaunchRequest";
pub const INTENT_REQUEST_TYPE: &str = "IntentRequest";
pub const USER_EVENT_REQUEST_TYPE: &str = "Alexa.Presentation.APL.UserEvent";

#[derive(Debug, Clone, Deserialize)]
struct SkillEnvelope {
    request: SkillRequest,
}

#[derive(Debug, Clone, Deserialize)]
struct SkillRequest {
    #[serde(rename = "type")]
    kind: String,
    intent: Option<Intent>,
    #[serde(default)]
    arguments: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct Intent {
    name: String,
}

/// Outcome of classifying one inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    /// Launch request or the start intent: begin playback at the head of the
    /// catalog.
    SessionStart,
    /// A `videoEnd` user event reporting which index just finished.
    AdvancePlayback { reported_index: usize },
    /// A user event whose signal is not `videoEnd`: no-op continuation.
    UnrelatedUserEvent,
    /// Any other request shape: answered with the idle prompt.
    Unrecognized,
}

pub fn classify_event(event: &Value) -> EventClass {
    let Ok(envelope) = SkillEnvelope::deserialize(event) else {
        return EventClass::Unrecognized;
    };

    let request = envelope.request;
    match request.kind.as_str() {
        USER_EVENT_REQUEST_TYPE => match request.arguments.first().and_then(Value::as_str) {
            Some(VIDEO_END_SIGNAL) => EventClass::AdvancePlayback {
                reported_index: decode_position(request.arguments.get(1)),
            },
            _ => EventClass::UnrelatedUserEvent,
        },
        LAUNCH_REQUEST_TYPE => EventClass::SessionStart,
        INTENT_REQUEST_TYPE
            if request
                .intent
                .as_ref()
                .is_some_and(|intent| intent.name == START_INTENT_NAME) =>
        {
            EventClass::SessionStart
        }
        _ => EventClass::Unrecognized,
    }
}

/// Decodes the reported playback position from a user-event argument.
///
/// The upstream client platform does not guarantee a stable argument encoding
/// across client versions, so three shapes are tolerated: a number, a base-10
/// numeric string, and an object carrying the index under `value` or
/// `currentIndex` (first nonzero wins). Everything else defaults to 0.
pub fn decode_position(argument: Option<&Value>) -> usize {
    match argument {
        Some(value @ (Value::Number(_) | Value::String(_))) => decode_scalar(value),
        Some(Value::Object(fields)) => ["value", "currentIndex"]
            .iter()
            .filter_map(|name| fields.get(*name).map(decode_scalar))
            .find(|&index| index != 0)
            .unwrap_or(0),
        _ => 0,
    }
}

fn decode_scalar(value: &Value) -> usize {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0),
        Value::String(text) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_launch_request_as_session_start() {
        let event = json!({"request": {"type": "LaunchRequest"}});

        assert_eq!(classify_event(&event), EventClass::SessionStart);
    }

    #[test]
    fn classifies_start_intent_as_session_start() {
        let event = json!({
            "request": {
                "type": "IntentRequest",
                "intent": {"name": "StartPlaybackIntent"}
            }
        });

        assert_eq!(classify_event(&event), EventClass::SessionStart);
    }

    #[test]
    fn classifies_other_intent_as_unrecognized() {
        let event = json!({
            "request": {
                "type": "IntentRequest",
                "intent": {"name": "AMAZON.HelpIntent"}
            }
        });

        assert_eq!(classify_event(&event), EventClass::Unrecognized);
    }

    #[test]
    fn classifies_video_end_user_event_with_reported_index() {
        let event = json!({
            "request": {
                "type": "Alexa.Presentation.APL.UserEvent",
                "arguments": ["videoEnd", 3]
            }
        });

        assert_eq!(
            classify_event(&event),
            EventClass::AdvancePlayback { reported_index: 3 }
        );
    }

    #[test]
    fn classifies_other_user_event_signal_as_unrelated() {
        let event = json!({
            "request": {
                "type": "Alexa.Presentation.APL.UserEvent",
                "arguments": ["somethingElse", 3]
            }
        });

        assert_eq!(classify_event(&event), EventClass::UnrelatedUserEvent);
    }

    #[test]
    fn classifies_malformed_envelope_as_unrecognized() {
        assert_eq!(classify_event(&json!({})), EventClass::Unrecognized);
        assert_eq!(classify_event(&json!("launch")), EventClass::Unrecognized);
    }

    #[test]
    fn decodes_numeric_string_and_object_shapes_identically() {
        assert_eq!(decode_position(Some(&json!(2))), 2);
        assert_eq!(decode_position(Some(&json!("2"))), 2);
        assert_eq!(decode_position(Some(&json!({"value": 2}))), 2);
        assert_eq!(decode_position(Some(&json!({"currentIndex": 2}))), 2);
    }

    #[test]
    fn object_shape_prefers_first_nonzero_field() {
        assert_eq!(
            decode_position(Some(&json!({"value": 0, "currentIndex": 2}))),
            2
        );
        assert_eq!(
            decode_position(Some(&json!({"value": 5, "currentIndex": 2}))),
            5
        );
    }

    #[test]
    fn unparseable_shapes_default_to_zero() {
        assert_eq!(decode_position(Some(&json!("abc"))), 0);
        assert_eq!(decode_position(Some(&json!({}))), 0);
        assert_eq!(decode_position(Some(&json!(null))), 0);
        assert_eq!(decode_position(Some(&json!(true))), 0);
        assert_eq!(decode_position(Some(&json!([2]))), 0);
        assert_eq!(decode_position(Some(&json!(-4))), 0);
        assert_eq!(decode_position(Some(&json!(1.5))), 0);
        assert_eq!(decode_position(None), 0);
    }
}
