//! Route handlers, one module per actor, plus the pieces they share.
//!
//! Handlers never fail internally: each one maps its input to exactly one
//! response. The only error responses are `400` for an unreadable body or a
//! failed signup presence check, `401` for a credential mismatch and `404`
//! for a fixture miss, all carrying a [`Message`] body.

pub mod admin;
pub mod community_admin;
pub mod health;
pub mod root;
pub mod user;
pub mod volunteer;

mod payload;
pub use self::payload::Payload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub(crate) const LOGIN_SUCCESSFUL: &str = "Login successful";
pub(crate) const BAD_REQUEST: &str = "Bad request";

/// `{"message": "..."}` body used for acknowledgements and errors.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shorthand for a status code paired with a [`Message`] body.
pub(crate) fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(Message::new(text))).into_response()
}

/// Keep a body field exactly as sent, `null` included. Only an absent key is `None`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Presence in the loose sense clients expect: absent, `null`, `false`, `0`
/// and `""` count as missing. Arrays and objects are present even when empty.
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Email + password login body shared by the admin, community-admin and volunteer routes.
#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct EmailLogin {
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>, format = Password)]
    pub password: Option<Value>,
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::api::{self, fixtures::Fixtures};
    use anyhow::Result;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    /// Send one request through the full app and decode the JSON body (`Null` when empty).
    pub(crate) async fn call(
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        send(request).await
    }

    /// Same as [`call`] with an urlencoded form body.
    pub(crate) async fn call_form(
        method: Method,
        uri: &str,
        form: &'static str,
    ) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))?;

        send(request).await
    }

    async fn send(request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = api::app(Fixtures::default()).oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    #[tokio::test]
    async fn message_carries_status_and_text() -> anyhow::Result<()> {
        let response = message(StatusCode::NOT_FOUND, "Volunteer not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let decoded: Message = serde_json::from_slice(&body)?;
        assert_eq!(decoded, Message::new("Volunteer not found"));
        Ok(())
    }

    #[test]
    fn truthiness_of_body_values() {
        for value in [json!("a"), json!(1), json!(-0.5), json!(true), json!([]), json!({})] {
            assert!(is_truthy(Some(&value)), "{value} should count as present");
        }
        for value in [json!(""), json!(0), json!(0.0), json!(false), Value::Null] {
            assert!(!is_truthy(Some(&value)), "{value} should count as missing");
        }
        assert!(!is_truthy(None));
    }

    #[derive(Deserialize, Serialize, Default)]
    #[serde(default)]
    struct Echo {
        #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
        note: Option<Value>,
    }

    #[test]
    fn present_keeps_null_and_skips_absent() -> anyhow::Result<()> {
        let echo: Echo = serde_json::from_value(json!({"note": null}))?;
        assert_eq!(serde_json::to_value(&echo)?, json!({"note": null}));

        let echo: Echo = serde_json::from_value(json!({}))?;
        assert_eq!(serde_json::to_value(&echo)?, json!({}));
        Ok(())
    }
}
