use std::fmt;

use thiserror::Error;

use crate::xml::XmlError;

/// An error reported by the IAM service in a non-200 response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// AWS error code, e.g. `AccessDenied`. Empty when the body carried none.
    pub code: String,
    /// Message explaining the error. Falls back to the HTTP status line.
    pub message: String,
    /// Request id reported alongside the error, if any.
    pub request_id: Option<String>,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.code.is_empty() {
            write!(f, "{}: {}", self.code, self.message)
        } else if self.status_code > 0 {
            write!(f, "{}: {}", self.status_code, self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

/// Errors that can occur when using the IAM client.
#[derive(Debug, Error)]
pub enum IamError {
    /// HTTP/network layer error from reqwest.
    #[error("HTTP request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The service answered with a non-200 status.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A 200 response body that is not the expected XML document.
    #[error("decode error: {0}")]
    Decode(#[from] XmlError),

    /// Signature computation error.
    #[error("signature error: {0}")]
    Signature(String),

    /// Validation error for request parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl IamError {
    /// Returns the HTTP status code if this is a service error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IamError::Service(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// Returns the AWS error code if this is a service error that carried one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            IamError::Service(e) if !e.code.is_empty() => Some(&e.code),
            _ => None,
        }
    }

    /// Returns the request ID if the service reported one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            IamError::Service(e) => e.request_id.as_deref(),
            _ => None,
        }
    }
}

/// A specialized Result type for IAM operations.
pub type Result<T> = std::result::Result<T, IamError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn service_error(status_code: u16, code: &str, message: &str) -> ServiceError {
        ServiceError {
            status_code,
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        }
    }

    #[test]
    fn service_error_display_with_code() {
        let err = service_error(403, "AccessDenied", "no access");
        assert_eq!(err.to_string(), "AccessDenied: no access");
    }

    #[test]
    fn service_error_display_without_code() {
        let err = service_error(500, "", "500 Internal Server Error");
        assert_eq!(err.to_string(), "500: 500 Internal Server Error");
    }

    #[test]
    fn service_error_display_message_only() {
        let err = service_error(0, "", "something broke");
        assert_eq!(err.to_string(), "something broke");
    }

    #[test]
    fn iam_error_service_is_transparent() {
        let err = IamError::from(service_error(403, "AccessDenied", "no access"));
        assert_eq!(err.to_string(), "AccessDenied: no access");
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.error_code(), Some("AccessDenied"));
        assert!(err.request_id().is_none());
    }

    #[test]
    fn error_code_absent_when_empty() {
        let err = IamError::from(service_error(502, "", "502 Bad Gateway"));
        assert_eq!(err.status_code(), Some(502));
        assert!(err.error_code().is_none());
    }

    #[test]
    fn validation_error_display() {
        let err = IamError::Validation("UserName must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: UserName must not be empty"
        );
        assert!(err.status_code().is_none());
    }

    #[test]
    fn decode_error_display() {
        let err = IamError::from(XmlError::MissingElement("CreateUserResult".to_string()));
        assert_eq!(
            err.to_string(),
            "decode error: missing required XML element: CreateUserResult"
        );
    }
}
