//! Volunteer routes mounted under `/volunteer`.

use super::{
    community_admin::{featured_event, UNAUTHORIZED_EMAIL},
    message, present, EmailLogin, Message, Payload, LOGIN_SUCCESSFUL,
};
use crate::api::fixtures::{AdminDetails, CommunityProfile, EventDetails, Fixtures, PostPreview};
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
pub struct VolunteerSignup {
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub username: Option<Value>,
    #[schema(value_type = Option<String>, format = Password)]
    pub password: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
pub struct VolunteerAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub username: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct EventSchedule {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub date_time: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub event_id: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub volunteer_id: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct VolunteerProfile {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "O+")]
    pub blood: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub about_me: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Password)]
    pub password: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub volunteer_id: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub community_id: Option<Value>,
}

#[utoipa::path(
    post,
    path = "/volunteer/signup",
    request_body = VolunteerSignup,
    responses(
        (status = 201, description = "Volunteer registered", body = VolunteerAccount),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "volunteer"
)]
pub async fn signup(Payload(signup): Payload<VolunteerSignup>) -> impl IntoResponse {
    let account = VolunteerAccount {
        email: signup.email,
        username: signup.username,
    };
    (StatusCode::CREATED, Json(account))
}

#[utoipa::path(
    post,
    path = "/volunteer/login",
    request_body = EmailLogin,
    responses(
        (status = 200, description = "Login successful", body = Message),
        (status = 401, description = "Email or password does not match", body = Message),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "volunteer"
)]
#[instrument(skip_all)]
pub async fn login(
    fixtures: Extension<Arc<Fixtures>>,
    Payload(credentials): Payload<EmailLogin>,
) -> impl IntoResponse {
    if fixtures
        .volunteer_credentials
        .matches(credentials.email.as_ref(), credentials.password.as_ref())
    {
        message(StatusCode::OK, LOGIN_SUCCESSFUL)
    } else {
        debug!(email = ?credentials.email, "volunteer login rejected");
        message(StatusCode::UNAUTHORIZED, UNAUTHORIZED_EMAIL)
    }
}

#[utoipa::path(
    post,
    path = "/volunteer/events/schedule",
    request_body = EventSchedule,
    responses(
        (status = 201, description = "Volunteer scheduled for the event", body = EventSchedule),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "volunteer"
)]
pub async fn schedule_event(Payload(schedule): Payload<EventSchedule>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(schedule))
}

#[utoipa::path(
    get,
    path = "/volunteer/events",
    responses(
        (status = 200, description = "Upcoming events", body = [EventDetails]),
    ),
    tag = "volunteer"
)]
pub async fn events(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.events.clone())
}

#[utoipa::path(
    get,
    path = "/volunteer/events/{id}",
    params(("id" = String, Path, description = "Event id; every id resolves to the featured event")),
    responses(
        (status = 200, description = "Event details", body = EventDetails),
        (status = 404, description = "No events are configured", body = Message),
    ),
    tag = "volunteer"
)]
pub async fn event(Path(id): Path<String>, fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    featured_event(&id, &fixtures)
}

#[utoipa::path(
    get,
    path = "/volunteer/adminDetails",
    responses(
        (status = 200, description = "Community admin the volunteer reports to", body = AdminDetails),
    ),
    tag = "volunteer"
)]
pub async fn admin_details(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.admin_details.clone())
}

#[utoipa::path(
    put,
    path = "/volunteer/profile",
    request_body = VolunteerProfile,
    responses(
        (status = 200, description = "Echo of the submitted profile", body = VolunteerProfile),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "volunteer"
)]
pub async fn update_profile(Payload(profile): Payload<VolunteerProfile>) -> impl IntoResponse {
    Json(profile)
}

#[utoipa::path(
    get,
    path = "/volunteer/posts",
    responses(
        (status = 200, description = "Posts visible to volunteers", body = [PostPreview]),
    ),
    tag = "volunteer"
)]
pub async fn posts(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.volunteer_posts.clone())
}

#[utoipa::path(
    get,
    path = "/volunteer/communities",
    responses(
        (status = 200, description = "Communities open for enrollment", body = [CommunityProfile]),
    ),
    tag = "volunteer"
)]
pub async fn communities(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.volunteer_communities.clone())
}

#[utoipa::path(
    post,
    path = "/volunteer/enroll",
    request_body = Enrollment,
    responses(
        (status = 201, description = "Volunteer enrolled in the community", body = Enrollment),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "volunteer"
)]
pub async fn enroll(Payload(enrollment): Payload<Enrollment>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(enrollment))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{call, call_form};
    use super::*;
    use anyhow::Result;
    use axum::http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn signup_withholds_password() -> Result<()> {
        let (status, body) = call(
            Method::POST,
            "/volunteer/signup",
            Some(json!({"email": "v@example.com", "username": "vol", "password": "pw"})),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"email": "v@example.com", "username": "vol"}));
        Ok(())
    }

    #[tokio::test]
    async fn login_checks_credentials() -> Result<()> {
        let (status, _) = call(
            Method::POST,
            "/volunteer/login",
            Some(json!({"email": "example@example.com", "password": "password"})),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(Method::POST, "/volunteer/login", None).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"message": "Unauthorized, incorrect email or password"})
        );

        let (status, _) = call(
            Method::POST,
            "/volunteer/login",
            Some(json!({"email": "example@example.com", "password": true})),
        )
        .await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = call_form(
            Method::POST,
            "/volunteer/login",
            "email=example%40example.com&password=password",
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn schedule_and_enroll_echo() -> Result<()> {
        let schedule = json!({"dateTime": "2024-07-04T09:00:00Z", "eventId": 3, "volunteerId": 8});
        let (status, body) =
            call(Method::POST, "/volunteer/events/schedule", Some(schedule.clone())).await?;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, schedule);

        let (status, body) = call(
            Method::POST,
            "/volunteer/enroll",
            Some(json!({"volunteerId": 8, "communityId": 2})),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"volunteerId": 8, "communityId": 2}));

        let (status, body) = call(
            Method::POST,
            "/volunteer/enroll",
            Some(json!({"volunteerId": "12", "communityId": "3"})),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"volunteerId": "12", "communityId": "3"}));

        let (status, body) =
            call_form(Method::POST, "/volunteer/enroll", "volunteerId=12&communityId=3").await?;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"volunteerId": "12", "communityId": "3"}));
        Ok(())
    }

    #[tokio::test]
    async fn events_and_lookup() -> Result<()> {
        let (status, events) = call(Method::GET, "/volunteer/events", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(events.as_array().map(Vec::len), Some(2));

        let (status, event) = call(Method::GET, "/volunteer/events/42", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(event, events[0]);
        Ok(())
    }

    #[tokio::test]
    async fn admin_details_posts_and_communities() -> Result<()> {
        let (_, admin) = call(Method::GET, "/volunteer/adminDetails", None).await?;
        assert_eq!(
            admin,
            json!({
                "image": "admin.jpg",
                "name": "Admin Name",
                "memberAt": ["Community 1", "Community 2"],
                "organiserAt": ["Community 3", "Community 4"]
            })
        );

        let (_, posts) = call(Method::GET, "/volunteer/posts", None).await?;
        assert_eq!(posts[1]["name"], "Post 2");
        assert_eq!(posts[1]["video"], "video2.mp4");

        let (_, communities) = call(Method::GET, "/volunteer/communities", None).await?;
        assert_eq!(communities[0]["numberOfHoursServed"], 5000);
        assert_eq!(communities[1]["about"], "About Community 2");
        Ok(())
    }

    #[tokio::test]
    async fn profile_echoes_every_present_field() -> Result<()> {
        let profile = json!({
            "name": "Ana",
            "email": "ana@example.com",
            "age": 29,
            "blood": "A-",
            "address": "1 Elm St",
            "aboutMe": "Weekend helper",
            "password": "pw"
        });
        let (status, body) = call(Method::PUT, "/volunteer/profile", Some(profile.clone())).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, profile);

        let (_, body) = call(Method::PUT, "/volunteer/profile", Some(json!({"age": 30}))).await?;
        assert_eq!(body, json!({"age": 30}));

        let (status, body) =
            call(Method::PUT, "/volunteer/profile", Some(json!({"age": "25"}))).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"age": "25"}));
        Ok(())
    }
}
