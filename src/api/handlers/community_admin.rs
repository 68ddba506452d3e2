//! Routes for the administrator of a single community, mounted under `/communityAdmin`.
//!
//! Covers registration, the home feed, events and posts the community
//! publishes, and the volunteer roster (hiring, interviews, blocking and
//! termination).

use super::{message, present, EmailLogin, Message, Payload, LOGIN_SUCCESSFUL};
use crate::api::fixtures::{EventDetails, Fixtures, HomeEvent, HomePost, RosterEntry, VolunteerCard};
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

pub(crate) const UNAUTHORIZED_EMAIL: &str = "Unauthorized, incorrect email or password";

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Register {
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Value>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>, format = Password)]
    pub password: Option<Value>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub community_name: Option<Value>,
}

/// Registration echo; the password is never returned.
#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredCommunity {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub community_name: Option<Value>,
}

impl From<Register> for RegisteredCommunity {
    fn from(register: Register) -> Self {
        Self {
            phone: register.phone,
            email: register.email,
            community_name: register.community_name,
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct HomeFeed {
    pub events: Vec<HomeEvent>,
    pub posts: Vec<HomePost>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Interview {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub volunteer_id: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub community_id: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2024-05-01T10:00:00Z")]
    pub date_time: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct BlockVolunteer {
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<bool>)]
    pub blocked: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerBlocked {
    /// Echo of the id in the request path.
    pub volunteer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<bool>)]
    pub blocked: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NewEvent {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub number_of_volunteers: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub details: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<String>>)]
    pub images: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub video: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub date_time: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NewPost {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub community_name: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub details: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<String>>)]
    pub images: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub video: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub date_time: Option<Value>,
}

#[utoipa::path(
    post,
    path = "/communityAdmin/register",
    request_body = Register,
    responses(
        (status = 201, description = "Community admin registered", body = RegisteredCommunity),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "communityAdmin"
)]
pub async fn register(Payload(register): Payload<Register>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(RegisteredCommunity::from(register)))
}

#[utoipa::path(
    post,
    path = "/communityAdmin/login",
    request_body = EmailLogin,
    responses(
        (status = 200, description = "Login successful", body = Message),
        (status = 401, description = "Email or password does not match", body = Message),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "communityAdmin"
)]
#[instrument(skip_all)]
pub async fn login(
    fixtures: Extension<Arc<Fixtures>>,
    Payload(credentials): Payload<EmailLogin>,
) -> impl IntoResponse {
    if fixtures
        .community_admin_credentials
        .matches(credentials.email.as_ref(), credentials.password.as_ref())
    {
        message(StatusCode::OK, LOGIN_SUCCESSFUL)
    } else {
        debug!(email = ?credentials.email, "community admin login rejected");
        message(StatusCode::UNAUTHORIZED, UNAUTHORIZED_EMAIL)
    }
}

#[utoipa::path(
    get,
    path = "/communityAdmin/home",
    responses(
        (status = 200, description = "Latest events and posts", body = HomeFeed),
    ),
    tag = "communityAdmin"
)]
pub async fn home(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(HomeFeed {
        events: fixtures.home_events.clone(),
        posts: fixtures.home_posts.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/communityAdmin/events",
    responses(
        (status = 200, description = "Events of the community", body = [EventDetails]),
    ),
    tag = "communityAdmin"
)]
pub async fn events(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.events.clone())
}

#[utoipa::path(
    get,
    path = "/communityAdmin/events/{id}",
    params(("id" = String, Path, description = "Event id; every id resolves to the featured event")),
    responses(
        (status = 200, description = "Event details", body = EventDetails),
        (status = 404, description = "No events are configured", body = Message),
    ),
    tag = "communityAdmin"
)]
pub async fn event(Path(id): Path<String>, fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    featured_event(&id, &fixtures)
}

/// Shared by the community-admin and volunteer event lookups.
pub(crate) fn featured_event(id: &str, fixtures: &Fixtures) -> axum::response::Response {
    match fixtures.featured_event() {
        Some(event) => Json(event.clone()).into_response(),
        None => {
            debug!(event_id = %id, "no featured event configured");
            message(StatusCode::NOT_FOUND, "Event not found")
        }
    }
}

#[utoipa::path(
    get,
    path = "/communityAdmin/hireVolunteers",
    responses(
        (status = 200, description = "Volunteers available for hire", body = [VolunteerCard]),
    ),
    tag = "communityAdmin"
)]
pub async fn hire_volunteers(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.hire_volunteers.clone())
}

#[utoipa::path(
    get,
    path = "/communityAdmin/volunteers/{volunteerId}",
    params(("volunteerId" = String, Path, description = "Volunteer id")),
    responses(
        (status = 200, description = "Volunteer card", body = VolunteerCard),
        (status = 404, description = "Volunteer not found", body = Message),
    ),
    tag = "communityAdmin"
)]
pub async fn volunteer(
    Path(volunteer_id): Path<String>,
    fixtures: Extension<Arc<Fixtures>>,
) -> impl IntoResponse {
    match fixtures.volunteer(&volunteer_id) {
        Some(card) => Json(card.clone()).into_response(),
        None => message(StatusCode::NOT_FOUND, "Volunteer not found"),
    }
}

#[utoipa::path(
    post,
    path = "/communityAdmin/scheduleInterview",
    request_body = Interview,
    responses(
        (status = 201, description = "Interview scheduled", body = Interview),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "communityAdmin"
)]
pub async fn schedule_interview(Payload(interview): Payload<Interview>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(interview))
}

#[utoipa::path(
    get,
    path = "/communityAdmin/volunteersList",
    responses(
        (status = 200, description = "Roster of the community", body = [RosterEntry]),
    ),
    tag = "communityAdmin"
)]
pub async fn volunteers_list(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.roster.clone())
}

#[utoipa::path(
    put,
    path = "/communityAdmin/volunteersList/block/{id}",
    params(("id" = String, Path, description = "Volunteer id")),
    request_body = BlockVolunteer,
    responses(
        (status = 200, description = "Block status updated", body = VolunteerBlocked),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "communityAdmin"
)]
pub async fn block_volunteer(
    Path(id): Path<String>,
    Payload(request): Payload<BlockVolunteer>,
) -> impl IntoResponse {
    Json(VolunteerBlocked {
        volunteer_id: id,
        blocked: request.blocked,
    })
}

#[utoipa::path(
    delete,
    path = "/communityAdmin/volunteersList/terminate/{id}",
    params(("id" = String, Path, description = "Volunteer id")),
    responses(
        (status = 204, description = "Volunteer terminated"),
    ),
    tag = "communityAdmin"
)]
pub async fn terminate_volunteer(Path(id): Path<String>) -> impl IntoResponse {
    debug!(volunteer_id = %id, "terminating volunteer");
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    post,
    path = "/communityAdmin/createEvents",
    request_body = NewEvent,
    responses(
        (status = 201, description = "Event created", body = NewEvent),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "communityAdmin"
)]
pub async fn create_event(Payload(event): Payload<NewEvent>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(event))
}

#[utoipa::path(
    post,
    path = "/communityAdmin/createPosts",
    request_body = NewPost,
    responses(
        (status = 201, description = "Post created", body = NewPost),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "communityAdmin"
)]
pub async fn create_post(Payload(post): Payload<NewPost>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(post))
}
