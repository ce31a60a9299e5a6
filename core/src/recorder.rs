//! Records the outcome of the most recent API call.
//!
//! # Design
//! Exactly one result is retained; every `record` overwrites the previous one.
//! The JSON parse attempt never fails the recording — a malformed body just
//! leaves `parsed` empty with `parse_succeeded == false`. Assertions read the
//! stored result so they always refer to the most recent call.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Outcome of the most recently recorded call.
#[derive(Debug, Clone)]
pub struct LastResult {
    pub status: u16,
    pub raw_body: String,
    pub parsed: Option<Value>,
    pub parse_succeeded: bool,
}

/// Holds the most recent call result and a running request count.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    last: Option<LastResult>,
    request_count: u64,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `response`, replacing any earlier result.
    ///
    /// The status is stored always; the body is additionally parsed as JSON,
    /// with parse failure recorded as a flag rather than an error.
    pub fn record(&mut self, response: &HttpResponse) {
        let parsed = serde_json::from_str::<Value>(&response.body).ok();
        self.last = Some(LastResult {
            status: response.status,
            raw_body: response.body.clone(),
            parse_succeeded: parsed.is_some(),
            parsed,
        });
        self.request_count += 1;
    }

    /// The most recent result, or `None` before the first call.
    pub fn last(&self) -> Option<&LastResult> {
        self.last.as_ref()
    }

    /// Number of responses recorded so far.
    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    /// Check the most recent status code against `expected`.
    ///
    /// Errors with `StatusAssertion` on mismatch and `NoResponseRecorded`
    /// when nothing has been recorded yet.
    pub fn assert_status(&self, expected: u16) -> Result<(), ApiError> {
        let last = self.last.as_ref().ok_or(ApiError::NoResponseRecorded)?;
        if last.status != expected {
            return Err(ApiError::StatusAssertion {
                expected,
                actual: last.status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn record_stores_status_and_parsed_json() {
        let mut recorder = ResponseRecorder::new();
        recorder.record(&response(200, r#"{"id":1}"#));

        let last = recorder.last().unwrap();
        assert_eq!(last.status, 200);
        assert!(last.parse_succeeded);
        assert_eq!(last.parsed.as_ref().unwrap()["id"], 1);
    }

    #[test]
    fn record_absorbs_parse_failure() {
        let mut recorder = ResponseRecorder::new();
        recorder.record(&response(502, "<html>bad gateway</html>"));

        let last = recorder.last().unwrap();
        assert_eq!(last.status, 502);
        assert!(!last.parse_succeeded);
        assert!(last.parsed.is_none());
        assert_eq!(last.raw_body, "<html>bad gateway</html>");
    }

    #[test]
    fn record_overwrites_previous_result() {
        let mut recorder = ResponseRecorder::new();
        recorder.record(&response(200, "{}"));
        recorder.record(&response(404, "{}"));

        assert_eq!(recorder.last().unwrap().status, 404);
        assert_eq!(recorder.request_count(), 2);
    }

    #[test]
    fn assert_status_passes_on_match() {
        let mut recorder = ResponseRecorder::new();
        recorder.record(&response(200, "{}"));
        assert!(recorder.assert_status(200).is_ok());
    }

    #[test]
    fn assert_status_reports_expected_and_actual() {
        let mut recorder = ResponseRecorder::new();
        recorder.record(&response(404, "{}"));

        let err = recorder.assert_status(200).unwrap_err();
        assert!(matches!(
            err,
            ApiError::StatusAssertion {
                expected: 200,
                actual: 404
            }
        ));
        assert_eq!(err.to_string(), "expected status 200, got 404");
    }

    #[test]
    fn assert_status_before_any_call_is_usage_error() {
        let recorder = ResponseRecorder::new();
        let err = recorder.assert_status(200).unwrap_err();
        assert!(matches!(err, ApiError::NoResponseRecorded));
    }
}
