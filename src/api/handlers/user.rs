//! End-user routes mounted under `/user`.

use super::{is_truthy, message, present, Message, Payload, BAD_REQUEST, LOGIN_SUCCESSFUL};
use crate::api::fixtures::{DonationScheme, Fixtures};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct UserLogin {
    #[schema(value_type = Option<String>)]
    pub username: Option<Value>,
    #[schema(value_type = Option<String>, format = Password)]
    pub password: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct Signup {
    #[schema(value_type = Option<String>)]
    pub username: Option<Value>,
    #[schema(value_type = Option<String>, format = Password)]
    pub password: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
}

impl Signup {
    /// All three fields present; their values are not inspected further.
    fn is_complete(&self) -> bool {
        [&self.username, &self.password, &self.email]
            .into_iter()
            .all(|field| is_truthy(field.as_ref()))
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct EditProfile {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub password: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Value>,
}

/// Documentation-only shape of the multipart post upload.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct NewPostUpload {
    #[schema(value_type = Vec<String>, format = Binary)]
    images: Vec<Vec<u8>>,
    #[schema(value_type = String, format = Binary)]
    video: Vec<u8>,
    description: String,
    details: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Echo of the id in the request path.
    pub post_id: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    pub description: String,
    pub details: String,
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = UserLogin,
    responses(
        (status = 200, description = "Login successful", body = Message),
        (status = 401, description = "Username or password does not match", body = Message),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "user"
)]
#[instrument(skip_all)]
pub async fn login(
    fixtures: Extension<Arc<Fixtures>>,
    Payload(credentials): Payload<UserLogin>,
) -> impl IntoResponse {
    if fixtures
        .user_credentials
        .matches(credentials.username.as_ref(), credentials.password.as_ref())
    {
        message(StatusCode::OK, LOGIN_SUCCESSFUL)
    } else {
        debug!(username = ?credentials.username, "user login rejected");
        message(StatusCode::UNAUTHORIZED, "Unauthorized")
    }
}

#[utoipa::path(
    post,
    path = "/user/signup",
    request_body = Signup,
    responses(
        (status = 200, description = "Signup successful", body = Message),
        (status = 400, description = "Username, password or email is missing, empty, null, false or 0", body = Message),
    ),
    tag = "user"
)]
#[instrument(skip_all)]
pub async fn signup(Payload(signup): Payload<Signup>) -> impl IntoResponse {
    if signup.is_complete() {
        message(StatusCode::OK, "Signup successful")
    } else {
        debug!("signup rejected: missing fields");
        message(StatusCode::BAD_REQUEST, BAD_REQUEST)
    }
}

#[utoipa::path(
    get,
    path = "/user/donationList",
    responses(
        (status = 200, description = "Donation schemes open to users", body = [DonationScheme]),
    ),
    tag = "user"
)]
pub async fn donation_list(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.donation_schemes.clone())
}

#[utoipa::path(
    put,
    path = "/user/editProfile",
    request_body = EditProfile,
    responses(
        (status = 200, description = "Echo of the submitted profile fields", body = EditProfile),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "user"
)]
pub async fn edit_profile(Payload(profile): Payload<EditProfile>) -> impl IntoResponse {
    Json(profile)
}

#[utoipa::path(
    post,
    path = "/user/addPost",
    request_body(content = NewPostUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Post added successfully", body = Message),
    ),
    tag = "user"
)]
// Uploads are acknowledged without being read.
pub async fn add_post() -> impl IntoResponse {
    message(StatusCode::OK, "Post added successfully")
}

#[utoipa::path(
    get,
    path = "/user/post/{id}",
    params(("id" = String, Path, description = "Post id, echoed back as `postId`")),
    responses(
        (status = 200, description = "The fixture post", body = Post),
    ),
    tag = "user"
)]
pub async fn post(Path(id): Path<String>, fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    let template = &fixtures.user_post;
    Json(Post {
        post_id: id,
        images: template.images.clone(),
        video: template.video.clone(),
        description: template.description.clone(),
        details: template.details.clone(),
    })
}
