//! Common response handling for async and blocking clients.

use crate::error::{Result, ServiceError};
use crate::response::ErrorList;
use crate::transport::RawResponse;
use crate::xml::{FromXml, decode};

/// Builds a [`ServiceError`] from a non-200 response.
///
/// The first reported error supplies `code` and `message`. A body that is
/// empty, unparseable or carries no message falls back to the status line.
pub(crate) fn build_error(response: &RawResponse) -> ServiceError {
    let list = decode::<ErrorList>(&response.body).unwrap_or_default();
    let first = list.errors.into_iter().next().unwrap_or_default();

    let message = if first.message.is_empty() {
        response.status_line.clone()
    } else {
        first.message
    };

    ServiceError {
        status_code: response.status,
        code: first.code,
        message,
        request_id: list.request_id,
    }
}

/// Decodes a 200 response into `T`; any other status becomes a service error.
///
/// Only exactly 200 counts as success.
pub(crate) fn handle_response<T: FromXml>(response: RawResponse) -> Result<T> {
    if response.status == 200 {
        Ok(decode(&response.body)?)
    } else {
        let err = build_error(&response);
        tracing::warn!(
            status = err.status_code,
            code = %err.code,
            request_id = err.request_id.as_deref().unwrap_or(""),
            "IAM request failed"
        );
        Err(err.into())
    }
}
