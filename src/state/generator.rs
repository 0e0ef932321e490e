//! Generator pipeline state: the current request and its result.

use log::debug;

use crate::encoder::{self, EncodeRequest, EncodedQr};
use crate::error::Result;

/// Holds the last applied encode request and the result derived from it.
/// The two are updated together, so the stored result is never stale.
#[derive(Default)]
pub struct GeneratorState {
    request: EncodeRequest,
    result: Option<EncodedQr>,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a new request, regenerating the QR code.
    ///
    /// Empty text clears the previous result without attempting
    /// generation. A failed generation also clears it, so the preview
    /// never shows output for a request that did not succeed.
    pub fn apply(&mut self, request: EncodeRequest) -> Result<Option<&EncodedQr>> {
        self.request = request;

        if self.request.text.is_empty() {
            self.result = None;
            return Ok(None);
        }

        let start = std::time::Instant::now();
        match encoder::generate(&self.request) {
            Ok(encoded) => {
                debug!(
                    "Generated {}x{} QR code in {:?}",
                    encoded.width,
                    encoded.height,
                    start.elapsed()
                );
                self.result = Some(encoded);
                Ok(self.result.as_ref())
            }
            Err(e) => {
                self.result = None;
                Err(e)
            }
        }
    }

    /// The result matching the last applied request, if generation
    /// succeeded.
    pub fn result(&self) -> Option<&EncodedQr> {
        self.result.as_ref()
    }

    /// PNG bytes of the current result, cloned for export.
    pub fn export_png(&self) -> Option<Vec<u8>> {
        self.result.as_ref().map(|r| r.png.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> EncodeRequest {
        EncodeRequest {
            text: text.to_string(),
            ..EncodeRequest::default()
        }
    }

    #[test]
    fn empty_text_clears_previous_result() {
        let mut state = GeneratorState::new();
        state.apply(request("hello")).unwrap();
        assert!(state.result().is_some());

        let outcome = state.apply(request("")).unwrap();
        assert!(outcome.is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn failed_generation_clears_previous_result() {
        let mut state = GeneratorState::new();
        state.apply(request("hello")).unwrap();

        assert!(state.apply(request(&"a".repeat(4000))).is_err());
        assert!(state.result().is_none());
        assert!(state.export_png().is_none());
    }

    #[test]
    fn reapplying_identical_request_is_idempotent() {
        let mut state = GeneratorState::new();
        state.apply(request("https://github.com")).unwrap();
        let first = state.export_png().unwrap();

        state.apply(request("https://github.com")).unwrap();
        assert_eq!(state.export_png().unwrap(), first);
    }
}
