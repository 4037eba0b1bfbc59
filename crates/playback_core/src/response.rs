//! Outbound skill response envelope and the render document template.

use serde::Serialize;
use serde_json::{json, Value};

use crate::request::VIDEO_END_SIGNAL;

pub const ENVELOPE_VERSION: &str = "1.0";
pub const RENDER_DIRECTIVE_TYPE: &str = "Alexa.Presentation.APL.RenderDocument";
pub const RENDER_DOCUMENT_VERSION: &str = "1.8";
pub const PLAIN_TEXT_SPEECH_TYPE: &str = "PlainText";

pub const START_MESSAGE: &str = "Starting playback.";
pub const COMPLETION_MESSAGE: &str = "All videos have finished playing. Goodbye.";
pub const NOTHING_TO_PLAY_MESSAGE: &str = "No videos are available to play.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
pub const IDLE_PROMPT_MESSAGE: &str = "Hello. Say start playback to begin.";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResponseBody {
    #[serde(rename = "outputSpeech", skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<RenderDirective>>,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderDirective {
    #[serde(rename = "type")]
    pub kind: String,
    pub document: Value,
    pub datasources: Datasources,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Datasources {
    #[serde(rename = "videoData")]
    pub video_data: VideoData,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoData {
    #[serde(rename = "currentIndex")]
    pub current_index: usize,
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: PLAIN_TEXT_SPEECH_TYPE.to_string(),
            text: text.into(),
        }
    }
}

impl SkillResponse {
    /// Speech-only response.
    pub fn spoken(text: impl Into<String>, should_end_session: bool) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech::plain(text)),
                directives: None,
                should_end_session,
            },
        }
    }

    /// Neutral continue-listening response: no speech, no directive, session
    /// stays open.
    pub fn listening() -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: None,
                directives: None,
                should_end_session: false,
            },
        }
    }

    /// Render directive for one catalog entry. Speech is carried only on the
    /// session-start response; mid-sequence advances are visual-only so the
    /// platform does not interrupt playback.
    pub fn video(video_url: &str, index: usize, speech: Option<&str>) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: speech.map(OutputSpeech::plain),
                directives: Some(vec![RenderDirective {
                    kind: RENDER_DIRECTIVE_TYPE.to_string(),
                    document: video_document(video_url),
                    datasources: Datasources {
                        video_data: VideoData {
                            current_index: index,
                        },
                    },
                }]),
                should_end_session: false,
            },
        }
    }

    /// Terminal response for any resolve/mint failure. Always the same
    /// generic message; no partial or degraded responses are emitted.
    pub fn generic_error() -> Self {
        Self::spoken(GENERIC_ERROR_MESSAGE, true)
    }
}

/// Fixed render document: a full-viewport autoplaying video surface whose
/// completion callback reports the `videoEnd` signal and the current index.
fn video_document(video_url: &str) -> Value {
    json!({
        "type": "APL",
        "version": RENDER_DOCUMENT_VERSION,
        "mainTemplate": {
            "parameters": ["videoData"],
            "item": {
                "type": "Video",
                "id": "playbackVideo",
                "width": "100vw",
                "height": "100vh",
                "source": video_url,
                "scale": "best-fit",
                "autoplay": true,
                "audioTrack": "foreground",
                "backgroundColor": "black",
                "onEnd": [{
                    "type": "SendEvent",
                    "arguments": [VIDEO_END_SIGNAL, "${videoData.currentIndex}"],
                }],
            },
        },
    })
}
