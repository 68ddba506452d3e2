use super::{message, BAD_REQUEST};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::Response,
    Form,
};
use serde::de::DeserializeOwned;
use serde_json::{map::Entry, Map, Value};
use tracing::debug;

/// Request body accepted as JSON or as an urlencoded form.
///
/// Both encodings are first read into a JSON object, then mapped onto `T`.
/// A form key sent more than once (or written `key[]`) becomes an array of
/// strings. An empty body and a top-level JSON array decode to `T::default()`.
/// Unreadable JSON, or a top-level scalar, is rejected with
/// `400 {"message": "Bad request"}`.
#[derive(Debug)]
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn bad_request() -> Response {
    message(StatusCode::BAD_REQUEST, BAD_REQUEST)
}

/// Fold decoded form pairs into an object, collecting repeated keys.
fn form_object(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut object = Map::new();

    for (key, value) in pairs {
        let (key, listed) = match key.strip_suffix("[]") {
            Some(name) => (name.to_string(), true),
            None => (key, false),
        };
        let value = Value::String(value);

        match object.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(if listed { Value::Array(vec![value]) } else { value });
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    object
}

async fn body_object<S>(req: Request, state: &S) -> Result<Option<Map<String, Value>>, Response>
where
    S: Send + Sync,
{
    if is_form(&req) {
        return match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => Ok(Some(form_object(pairs))),
            Err(rejection) => {
                debug!("Rejected form body: {}", rejection.body_text());
                Err(bad_request())
            }
        };
    }

    let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
        debug!("Failed to read request body: {}", rejection.body_text());
        bad_request()
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(object)) => Ok(Some(object)),
        Ok(Value::Array(_)) => Ok(None),
        Ok(other) => {
            debug!("Rejected JSON body: top-level {}", other);
            Err(bad_request())
        }
        Err(err) => {
            debug!("Rejected JSON body: {}", err);
            Err(bad_request())
        }
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Some(object) = body_object(req, state).await? else {
            return Ok(Self(T::default()));
        };

        serde_json::from_value(Value::Object(object))
            .map(Self)
            .map_err(|err| {
                debug!("Body does not fit the expected shape: {}", err);
                bad_request()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::present;
    use axum::body::Body;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Fields {
        #[serde(deserialize_with = "present")]
        name: Option<Value>,
        #[serde(deserialize_with = "present")]
        count: Option<Value>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Fields, StatusCode> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(Body::from(body))
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

        Payload::<Fields>::from_request(request, &())
            .await
            .map(|Payload(fields)| fields)
            .map_err(|response| response.status())
    }

    const FORM: Option<&str> = Some("application/x-www-form-urlencoded");

    #[tokio::test]
    async fn json_body_is_decoded() {
        let fields = extract(Some("application/json"), r#"{"name":"a","count":2}"#).await;
        assert_eq!(
            fields,
            Ok(Fields {
                name: Some(json!("a")),
                count: Some(json!(2)),
            })
        );
    }

    #[tokio::test]
    async fn json_without_content_type_is_decoded() {
        let fields = extract(None, r#"{"name":"a"}"#).await;
        assert_eq!(fields.map(|f| f.name), Ok(Some(json!("a"))));
    }

    #[tokio::test]
    async fn any_json_type_is_kept() {
        let fields = extract(Some("application/json"), r#"{"name":["x"],"count":"two"}"#).await;
        assert_eq!(
            fields,
            Ok(Fields {
                name: Some(json!(["x"])),
                count: Some(json!("two")),
            })
        );

        let fields = extract(Some("application/json"), r#"{"name":null}"#).await;
        assert_eq!(fields.map(|f| f.name), Ok(Some(Value::Null)));
    }

    #[tokio::test]
    async fn empty_body_and_arrays_are_default() {
        assert_eq!(extract(None, "").await, Ok(Fields::default()));
        assert_eq!(
            extract(Some("application/json"), "  \n").await,
            Ok(Fields::default())
        );
        assert_eq!(
            extract(Some("application/json"), r#"[{"name":"a"}]"#).await,
            Ok(Fields::default())
        );
    }

    #[tokio::test]
    async fn form_values_are_strings() {
        let fields = extract(FORM, "name=a&count=7").await;
        assert_eq!(
            fields,
            Ok(Fields {
                name: Some(json!("a")),
                count: Some(json!("7")),
            })
        );

        let fields = extract(FORM, "name=&count=1").await;
        assert_eq!(fields.map(|f| f.name), Ok(Some(json!(""))));
    }

    #[tokio::test]
    async fn repeated_form_keys_become_arrays() {
        let fields = extract(FORM, "name=a.jpg&name=b.jpg&count[]=3").await;
        assert_eq!(
            fields,
            Ok(Fields {
                name: Some(json!(["a.jpg", "b.jpg"])),
                count: Some(json!(["3"])),
            })
        );
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        assert_eq!(
            extract(Some("application/json"), "{not json").await,
            Err(StatusCode::BAD_REQUEST)
        );
    }

    #[tokio::test]
    async fn scalar_json_is_bad_request() {
        for body in ["42", r#""text""#, "true", "null"] {
            assert_eq!(
                extract(Some("application/json"), body).await,
                Err(StatusCode::BAD_REQUEST),
                "body {body}"
            );
        }
    }

    #[test]
    fn form_object_collects_in_order() {
        let object = form_object(vec![
            ("images".to_string(), "1".to_string()),
            ("title".to_string(), "t".to_string()),
            ("images".to_string(), "2".to_string()),
            ("images".to_string(), "3".to_string()),
        ]);
        assert_eq!(
            Value::Object(object),
            json!({"images": ["1", "2", "3"], "title": "t"})
        );
    }
}
