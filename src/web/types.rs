//! Most of the structs in `web` module and their implementations live here.
//! Includes structs that need to be validated, their parsing implementations and tests for those

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use unicode_segmentation::UnicodeSegmentation;
use validator::ValidateEmail;

pub const SIGNUP_CREATED_MSG: &str = "Successfully added to waitlist";

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable waitlist signup
/// A signup that can be Deserialized but can have an invalid, missing or non-string email
#[derive(Debug, Deserialize)]
pub struct DeserWaitlistSignup {
    pub email: Option<Value>,
}

impl DeserWaitlistSignup {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(Value::String(email.into())),
        }
    }
}

/// Validated waitlist signup
#[derive(Debug, Clone)]
pub struct ValidWaitlistSignup {
    pub email: ValidEmail,
}

impl TryFrom<DeserWaitlistSignup> for ValidWaitlistSignup {
    type Error = DataParsingError;

    fn try_from(deser_signup: DeserWaitlistSignup) -> Result<Self, Self::Error> {
        let email = match deser_signup.email {
            None | Some(Value::Null) => return Err(DataParsingError::EmailMissing),
            Some(Value::String(email)) => email,
            Some(_) => return Err(DataParsingError::EmailNotAString),
        };
        Ok(ValidWaitlistSignup {
            email: ValidEmail::parse(email)?,
        })
    }
}

/// Validated Email
/// Kept exactly as provided, no trimming or case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.is_empty() {
            return Err(DataParsingError::EmailEmpty);
        }

        if value.graphemes(true).count() > 256 {
            return Err(DataParsingError::EmailTooLong);
        }

        if value.validate_email() {
            Ok(ValidEmail(value.to_owned()))
        } else {
            Err(DataParsingError::EmailInvalid)
        }
    }
}

/// Body of a successful signup response
#[derive(Debug, Serialize)]
pub struct WaitlistSignupCreated {
    pub message: &'static str,
    pub email: String,
}

impl WaitlistSignupCreated {
    pub fn new(email: String) -> Self {
        Self {
            message: SIGNUP_CREATED_MSG,
            email,
        }
    }
}

/// A single validation problem reported back to the client.
/// `field` is omitted when the problem is with the payload as a whole.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: Option<&'static str>,
    pub message: String,
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("email is required")]
    EmailMissing,
    #[error("email is empty")]
    EmailEmpty,
    #[error("email invalid")]
    EmailInvalid,
    #[error("email too long")]
    EmailTooLong,
    #[error("email must be a string")]
    EmailNotAString,

    #[error("request body must be a JSON object")]
    InvalidPayload,
}

impl DataParsingError {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmailMissing
            | Self::EmailEmpty
            | Self::EmailInvalid
            | Self::EmailTooLong
            | Self::EmailNotAString => Some("email"),
            Self::InvalidPayload => None,
        }
    }

    pub fn to_field_issues(&self) -> Vec<FieldIssue> {
        vec![FieldIssue {
            field: self.field(),
            message: self.to_string(),
        }]
    }
}
