//! Canned records served in place of persistence.
//!
//! `Fixtures` is built once at startup and shared read-only with every handler
//! through an `Extension<Arc<Fixtures>>`, so tests can swap in their own table.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// One hardcoded identifier/secret pair accepted by a login route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Literal equality on both halves. A missing half, or one that is not a
    /// JSON string, never matches.
    #[must_use]
    pub fn matches(&self, identifier: Option<&Value>, secret: Option<&Value>) -> bool {
        identifier.and_then(Value::as_str) == Some(self.identifier.as_str())
            && secret.and_then(Value::as_str) == Some(self.secret.as_str())
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub number_of_donations: u32,
    pub number_of_communities: u32,
    pub number_of_members: u32,
    pub number_of_events: u32,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySummary {
    pub name: String,
    pub admin_name: String,
    pub number_of_volunteers: u32,
    pub number_of_events_conducted: u32,
    #[schema(example = "Active")]
    pub status: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DonationStatus {
    pub name: String,
    pub amount: u64,
    #[schema(example = "Pending")]
    pub status: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomeEvent {
    pub event_id: u32,
    pub image: String,
    pub header: String,
    pub description: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomePost {
    pub post_id: u32,
    pub image: String,
    pub header: String,
    pub description: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub event_name: String,
    pub volunteers: Vec<String>,
    pub details: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VolunteerCard {
    pub name: String,
    pub image: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub name: String,
    pub image: String,
    pub events_participated: u32,
    /// `true` when active, `false` when blocked.
    pub status: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DonationScheme {
    pub id: u32,
    pub name: String,
    pub target_amount: u64,
    pub photo: String,
}

/// Body of the single post served by the user post lookup; the id is
/// supplied per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTemplate {
    pub images: Vec<String>,
    pub video: Option<String>,
    pub description: String,
    pub details: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminDetails {
    pub image: String,
    pub name: String,
    pub member_at: Vec<String>,
    pub organiser_at: Vec<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostPreview {
    pub name: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityProfile {
    pub name: String,
    pub about: String,
    pub number_of_volunteers: u32,
    pub number_of_hours_served: u32,
}

/// Immutable lookup tables handed to every controller.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub user_credentials: Credentials,
    pub community_admin_credentials: Credentials,
    pub volunteer_credentials: Credentials,
    pub dashboard: DashboardStats,
    pub communities: Vec<CommunitySummary>,
    pub donations: Vec<DonationStatus>,
    pub home_events: Vec<HomeEvent>,
    pub home_posts: Vec<HomePost>,
    pub events: Vec<EventDetails>,
    pub hire_volunteers: Vec<VolunteerCard>,
    pub volunteers_by_id: BTreeMap<String, VolunteerCard>,
    pub roster: Vec<RosterEntry>,
    pub donation_schemes: Vec<DonationScheme>,
    pub user_post: PostTemplate,
    pub admin_details: AdminDetails,
    pub volunteer_posts: Vec<PostPreview>,
    pub volunteer_communities: Vec<CommunityProfile>,
}

impl Fixtures {
    /// The record every event-by-id lookup resolves to.
    #[must_use]
    pub fn featured_event(&self) -> Option<&EventDetails> {
        self.events.first()
    }

    /// Exact key lookup; `"01"` and `"1"` are different keys.
    #[must_use]
    pub fn volunteer(&self, volunteer_id: &str) -> Option<&VolunteerCard> {
        self.volunteers_by_id.get(volunteer_id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn volunteer_card(n: u32) -> VolunteerCard {
    VolunteerCard {
        name: format!("Volunteer {n}"),
        image: format!("volunteer{n}.jpg"),
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        let events = vec![
            EventDetails {
                event_name: "Event 1".to_string(),
                volunteers: strings(&["Volunteer 1", "Volunteer 2", "Volunteer 3"]),
                details: "Details of Event 1".to_string(),
                images: strings(&["image1.jpg", "image2.jpg", "image3.jpg"]),
                video: Some("video1.mp4".to_string()),
            },
            EventDetails {
                event_name: "Event 2".to_string(),
                volunteers: strings(&["Volunteer 4", "Volunteer 5"]),
                details: "Details of Event 2".to_string(),
                images: strings(&["image4.jpg", "image5.jpg", "image6.jpg"]),
                video: Some("video2.mp4".to_string()),
            },
        ];

        Self {
            user_credentials: Credentials::new("example", "password"),
            community_admin_credentials: Credentials::new("example@example.com", "password"),
            volunteer_credentials: Credentials::new("example@example.com", "password"),
            dashboard: DashboardStats {
                number_of_donations: 100,
                number_of_communities: 10,
                number_of_members: 500,
                number_of_events: 50,
            },
            communities: vec![
                CommunitySummary {
                    name: "Community 1".to_string(),
                    admin_name: "Admin 1".to_string(),
                    number_of_volunteers: 50,
                    number_of_events_conducted: 10,
                    status: "Active".to_string(),
                },
                CommunitySummary {
                    name: "Community 2".to_string(),
                    admin_name: "Admin 2".to_string(),
                    number_of_volunteers: 30,
                    number_of_events_conducted: 5,
                    status: "Inactive".to_string(),
                },
            ],
            donations: vec![
                DonationStatus {
                    name: "Donation 1".to_string(),
                    amount: 1000,
                    status: "Pending".to_string(),
                },
                DonationStatus {
                    name: "Donation 2".to_string(),
                    amount: 500,
                    status: "Completed".to_string(),
                },
            ],
            home_events: (1..=2)
                .map(|n| HomeEvent {
                    event_id: n,
                    image: format!("event{n}.jpg"),
                    header: format!("Event {n}"),
                    description: format!("Description of event {n}"),
                })
                .collect(),
            home_posts: (1..=2)
                .map(|n| HomePost {
                    post_id: n,
                    image: format!("post{n}.jpg"),
                    header: format!("Post {n}"),
                    description: format!("Description of post {n}"),
                })
                .collect(),
            events,
            hire_volunteers: (1..=3).map(volunteer_card).collect(),
            volunteers_by_id: (1..=3).map(|n| (n.to_string(), volunteer_card(n))).collect(),
            roster: [(1, 5, true), (2, 10, false), (3, 3, true)]
                .into_iter()
                .map(|(n, events_participated, status)| RosterEntry {
                    name: format!("Volunteer {n}"),
                    image: format!("volunteer{n}.jpg"),
                    events_participated,
                    status,
                })
                .collect(),
            donation_schemes: vec![
                DonationScheme {
                    id: 1,
                    name: "Education Fund".to_string(),
                    target_amount: 5000,
                    photo: "https://example.com/education-fund.jpg".to_string(),
                },
                DonationScheme {
                    id: 2,
                    name: "Medical Fund".to_string(),
                    target_amount: 10000,
                    photo: "https://example.com/medical-fund.jpg".to_string(),
                },
            ],
            user_post: PostTemplate {
                images: strings(&["image1.jpg", "image2.jpg"]),
                video: Some("video.mp4".to_string()),
                description: "Post description".to_string(),
                details: "Post details".to_string(),
            },
            admin_details: AdminDetails {
                image: "admin.jpg".to_string(),
                name: "Admin Name".to_string(),
                member_at: strings(&["Community 1", "Community 2"]),
                organiser_at: strings(&["Community 3", "Community 4"]),
            },
            volunteer_posts: vec![
                PostPreview {
                    name: "Post 1".to_string(),
                    images: strings(&["image1.jpg", "image2.jpg", "image3.jpg"]),
                    video: Some("video1.mp4".to_string()),
                },
                PostPreview {
                    name: "Post 2".to_string(),
                    images: strings(&["image3.jpg", "image4.jpg", "image3.jpg"]),
                    video: Some("video2.mp4".to_string()),
                },
            ],
            volunteer_communities: vec![
                CommunityProfile {
                    name: "Community 1".to_string(),
                    about: "About Community 1".to_string(),
                    number_of_volunteers: 100,
                    number_of_hours_served: 5000,
                },
                CommunityProfile {
                    name: "Community 2".to_string(),
                    about: "About Community 2".to_string(),
                    number_of_volunteers: 50,
                    number_of_hours_served: 3000,
                },
            ],
        }
    }
}
