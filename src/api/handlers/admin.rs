//! Platform administrator routes mounted under `/admin`.

use super::{message, present, EmailLogin, Message, Payload, LOGIN_SUCCESSFUL};
use crate::api::fixtures::{CommunitySummary, DashboardStats, DonationStatus, Fixtures};
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
#[serde(default, rename_all = "camelCase")]
pub struct BlockCommunity {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>)]
    pub community_id: Option<Value>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Donation {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2024-01-01")]
    pub start_date: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2024-12-31")]
    pub end_date: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub contact_name: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub target_amount: Option<Value>,
    #[serde(
        rename = "type",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<Vec<String>>)]
    pub categories: Option<Value>,
}

#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = EmailLogin,
    responses(
        (status = 200, description = "Login successful", body = Message),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "admin"
)]
// No credential check exists for administrators.
pub async fn login(Payload(_credentials): Payload<EmailLogin>) -> impl IntoResponse {
    message(StatusCode::OK, LOGIN_SUCCESSFUL)
}

#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Platform counters", body = DashboardStats),
    ),
    tag = "admin"
)]
pub async fn dashboard(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.dashboard.clone())
}

#[utoipa::path(
    get,
    path = "/admin/communities",
    responses(
        (status = 200, description = "All communities", body = [CommunitySummary]),
    ),
    tag = "admin"
)]
pub async fn communities(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.communities.clone())
}

#[utoipa::path(
    put,
    path = "/admin/communities/block/{id}",
    params(("id" = String, Path, description = "Community id, used when the body has none")),
    request_body = BlockCommunity,
    responses(
        (status = 200, description = "Community blocked", body = BlockCommunity),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "admin"
)]
#[instrument(skip_all)]
pub async fn block_community(
    Path(id): Path<String>,
    Payload(request): Payload<BlockCommunity>,
) -> impl IntoResponse {
    let community_id = request
        .community_id
        .or_else(|| id.parse::<i64>().ok().map(Value::from));
    debug!(?community_id, "blocking community");
    Json(BlockCommunity { community_id })
}

#[utoipa::path(
    get,
    path = "/admin/donationList",
    responses(
        (status = 200, description = "Donations and their status", body = [DonationStatus]),
    ),
    tag = "admin"
)]
pub async fn donation_list(fixtures: Extension<Arc<Fixtures>>) -> impl IntoResponse {
    Json(fixtures.donations.clone())
}

#[utoipa::path(
    delete,
    path = "/admin/deleteDonation/{id}",
    params(("id" = String, Path, description = "Donation id")),
    responses(
        (status = 204, description = "Donation deleted"),
    ),
    tag = "admin"
)]
pub async fn delete_donation(Path(id): Path<String>) -> impl IntoResponse {
    debug!(donation_id = %id, "deleting donation");
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    post,
    path = "/admin/addDonation",
    request_body = Donation,
    responses(
        (status = 201, description = "Echo of the submitted donation", body = Donation),
        (status = 400, description = "Body is not valid JSON or form data", body = Message),
    ),
    tag = "admin"
)]
pub async fn add_donation(Payload(donation): Payload<Donation>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(donation))
}
