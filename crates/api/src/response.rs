//! The response envelope shared by every API handler.
//!
//! Success: `{ "status": "success", "message": ..., "<key>": payload }`.
//! Failure: `{ "status": "fail", "message": ... }`, never with a payload.

use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::operation::Operation;

/// Outcome marker in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// `{ status, message, <key>? }` response envelope.
///
/// The payload key varies per operation, so serialization is written by
/// hand rather than derived.
#[derive(Debug)]
pub struct Envelope<T> {
    pub status: Status,
    pub message: Cow<'static, str>,
    pub payload: Option<(&'static str, T)>,
}

impl<T> Envelope<T> {
    /// Successful result of `operation`, carrying `payload`.
    pub fn success(operation: Operation, payload: T) -> Self {
        Self {
            status: Status::Success,
            message: Cow::Borrowed(operation.success_message()),
            payload: Some((operation.payload_key(), payload)),
        }
    }
}

impl Envelope<()> {
    /// Successful result of `operation` with nothing to return.
    pub fn ok(operation: Operation) -> Self {
        Self::message(operation.success_message())
    }

    /// Bare success envelope with a fixed message.
    pub fn message(message: &'static str) -> Self {
        Self {
            status: Status::Success,
            message: Cow::Borrowed(message),
            payload: None,
        }
    }

    /// Failure envelope. Failures never carry a payload.
    pub fn fail(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status: Status::Fail,
            message: message.into(),
            payload: None,
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.payload.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("message", &self.message)?;
        if let Some((key, payload)) = &self.payload {
            map.serialize_entry(key, payload)?;
        }
        map.end()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_places_payload_under_operation_key() {
        let envelope = Envelope::success(Operation::AddUser, json!({"id": 1, "name": "Ada"}));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "status": "success",
                "message": "User added",
                "user": {"id": 1, "name": "Ada"}
            })
        );
    }

    #[test]
    fn ok_and_fail_have_two_fields() {
        let ok = serde_json::to_value(Envelope::ok(Operation::DeleteTask)).unwrap();
        assert_eq!(ok, json!({"status": "success", "message": "Task deleted"}));

        let fail = serde_json::to_value(Envelope::fail("nope")).unwrap();
        assert_eq!(fail, json!({"status": "fail", "message": "nope"}));
    }
}
