use serde::Serialize;

/// JSON body returned for the few failures the stub can report
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}
