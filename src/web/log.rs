use axum::http::{Method, StatusCode, Uri};
use serde::Serialize;
use serde_json::json;
use serde_with::skip_serializing_none;
use tracing::debug;

use super::error::ClientError;
use crate::web::Error;

/// Emits one structured log line per request.
pub fn log_request(
    req_id: &str,
    req_method: &Method,
    uri: &Uri,
    status_code: StatusCode,
    web_error: Option<&Error>,
    client_status_and_error: Option<&(StatusCode, ClientError)>,
) {
    let logline = LogLine::new(
        req_id,
        req_method,
        uri,
        status_code,
        web_error,
        client_status_and_error,
    );

    debug!("LOGLINE: {}", json!(logline));
}

#[skip_serializing_none]
#[derive(Serialize)]
struct LogLine {
    timestamp: String,
    req_id: String,

    req_method: String,
    uri: String,
    status_code: u16,

    client_error_type: Option<String>,
    web_error_type: Option<String>,
    web_error_data: Option<String>,
}

impl LogLine {
    /// `web_error_data` is the error's `Display`, which never carries user input.
    fn new(
        req_id: &str,
        req_method: &Method,
        uri: &Uri,
        status_code: StatusCode,
        web_error: Option<&Error>,
        client_status_and_error: Option<&(StatusCode, ClientError)>,
    ) -> Self {
        let status_code = client_status_and_error
            .map(|(sc, _)| *sc)
            .unwrap_or(status_code)
            .as_u16();

        LogLine {
            timestamp: chrono::Utc::now().to_rfc3339(),
            req_id: req_id.to_string(),
            req_method: req_method.to_string(),
            uri: uri.to_string(),
            status_code,
            client_error_type: client_status_and_error.map(|(_, ce)| ce.as_ref().to_string()),
            web_error_type: web_error.map(|we| we.as_ref().to_string()),
            web_error_data: web_error.map(|we| we.to_string()),
        }
    }
}
