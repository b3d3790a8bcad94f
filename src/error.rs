use thiserror::Error;
use wasm_bindgen::JsValue;

/// Browser-side failures. None of these are shown to the visitor; callers
/// log them and carry on.
#[derive(Debug, Error, PartialEq)]
pub enum FunnelError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("playback failed after {attempts} attempts: {last}")]
    PlaybackExhausted { attempts: usize, last: String },
    #[error("pixel not loaded")]
    PixelMissing,
    #[error("pixel call failed: {0}")]
    Tracking(String),
}

impl FunnelError {
    pub fn dom(value: JsValue) -> Self {
        FunnelError::Dom(describe(&value))
    }

    pub fn rejected(value: JsValue) -> Self {
        FunnelError::PlaybackRejected(describe(&value))
    }
}

/// Readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn window() -> Result<web_sys::Window, FunnelError> {
    web_sys::window().ok_or(FunnelError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, FunnelError> {
    window()?.document().ok_or(FunnelError::NoDocument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_message_names_attempts() {
        let err = FunnelError::PlaybackExhausted {
            attempts: 3,
            last: FunnelError::PlaybackRejected("NotAllowedError".into()).to_string(),
        };
        assert_eq!(
            err.to_string(),
            "playback failed after 3 attempts: playback rejected: NotAllowedError"
        );
    }
}
