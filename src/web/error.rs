use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use std::sync::Arc;
use strum_macros::AsRefStr;

use super::types::{DataParsingError, FieldIssue};
use crate::model;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("data parsing error: {0}")]
    DataParsing(#[from] DataParsingError),

    #[error("model error: {0}")]
    Model(#[from] model::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::DataParsing(data_er) => {
                (StatusCode::BAD_REQUEST, InvalidInput(data_er.to_field_issues()))
            }
            Error::Model(model::Error::EmailAlreadyRegistered) => {
                (StatusCode::BAD_REQUEST, EmailAlreadyRegistered)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<20} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The errors a client gets to see. The `Display` output is the `message` of the response body.
#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Invalid email format")]
    InvalidInput(Vec<FieldIssue>),
    #[display("Email already registered for waitlist")]
    EmailAlreadyRegistered,
    #[display("Internal server error")]
    ServiceError,
}

impl ClientError {
    pub fn body(&self, req_id: &str) -> Value {
        match self {
            ClientError::InvalidInput(issues) => json!({
                "message": self.to_string(),
                "errors": issues,
                "req_id": req_id,
            }),
            _ => json!({
                "message": self.to_string(),
                "req_id": req_id,
            }),
        }
    }
}
