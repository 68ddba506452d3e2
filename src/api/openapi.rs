use crate::api::handlers::{admin, community_admin, health, user, volunteer};
use utoipa::openapi::{tag::TagBuilder, Contact, InfoBuilder, License, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` spec.
/// `GET /` and `OPTIONS /health` are added outside and stay undocumented.
pub(crate) fn api_router() -> OpenApiRouter {
    OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        // admin
        .routes(routes!(admin::login))
        .routes(routes!(admin::dashboard))
        .routes(routes!(admin::communities))
        .routes(routes!(admin::block_community))
        .routes(routes!(admin::donation_list))
        .routes(routes!(admin::delete_donation))
        .routes(routes!(admin::add_donation))
        // communityAdmin
        .routes(routes!(community_admin::register))
        .routes(routes!(community_admin::login))
        .routes(routes!(community_admin::home))
        .routes(routes!(community_admin::events))
        .routes(routes!(community_admin::event))
        .routes(routes!(community_admin::hire_volunteers))
        .routes(routes!(community_admin::volunteer))
        .routes(routes!(community_admin::schedule_interview))
        .routes(routes!(community_admin::volunteers_list))
        .routes(routes!(community_admin::block_volunteer))
        .routes(routes!(community_admin::terminate_volunteer))
        .routes(routes!(community_admin::create_event))
        .routes(routes!(community_admin::create_post))
        // user
        .routes(routes!(user::login))
        .routes(routes!(user::signup))
        .routes(routes!(user::donation_list))
        .routes(routes!(user::edit_profile))
        .routes(routes!(user::add_post))
        .routes(routes!(user::post))
        // volunteer
        .routes(routes!(volunteer::signup))
        .routes(routes!(volunteer::login))
        .routes(routes!(volunteer::schedule_event))
        .routes(routes!(volunteer::events))
        .routes(routes!(volunteer::event))
        .routes(routes!(volunteer::admin_details))
        .routes(routes!(volunteer::update_profile))
        .routes(routes!(volunteer::posts))
        .routes(routes!(volunteer::communities))
        .routes(routes!(volunteer::enroll))
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    // Title, version and contact come from Cargo.toml.
    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(optional_str(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    info.contact = cargo_contact();
    info.license = cargo_license();

    OpenApiBuilder::new().info(info).tags(Some(tags())).build()
}

fn tags() -> Vec<Tag> {
    [
        ("admin", "Platform administration: communities and donation campaigns"),
        ("communityAdmin", "Community management: events, posts and volunteer roster"),
        ("user", "End users: account, donations and posts"),
        ("volunteer", "Volunteers: events, profile and community enrollment"),
        ("health", "Service health"),
    ]
    .into_iter()
    .map(|(name, description)| TagBuilder::new().name(name).description(Some(description)).build())
    .collect()
}

fn cargo_contact() -> Option<Contact> {
    // Cargo authors are `;` separated and may include "Name <email>".
    let primary = env!("CARGO_PKG_AUTHORS").split(';').next().map(str::trim)?;
    let (name, email) = parse_author(primary);
    if name.is_none() && email.is_none() {
        return None;
    }

    let mut contact = Contact::new();
    contact.name = name.map(str::to_string);
    contact.email = email.map(str::to_string);
    Some(contact)
}

fn cargo_license() -> Option<License> {
    let identifier = optional_str(env!("CARGO_PKG_LICENSE"))?;
    let mut license = License::new(identifier);
    license.identifier = Some(identifier.to_string());
    Some(license)
}

fn optional_str(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|trimmed| !trimmed.is_empty())
}

fn parse_author(author: &str) -> (Option<&str>, Option<&str>) {
    match author.split_once('<') {
        Some((name, email)) => (
            optional_str(name),
            optional_str(email.trim_end_matches('>')),
        ),
        None => (optional_str(author), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::path::HttpMethod;

    #[test]
    fn info_comes_from_cargo() {
        let doc = openapi();
        assert_eq!(doc.info.title, "helpinghands");
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));

        let contact = doc.info.contact.as_ref();
        assert_eq!(contact.and_then(|c| c.name.as_deref()), Some("Team Helpinghands"));
        assert_eq!(
            contact.and_then(|c| c.email.as_deref()),
            Some("team@helpinghands.dev")
        );
        assert_eq!(
            doc.info.license.as_ref().map(|l| l.name.as_str()),
            Some("BSD-3-Clause")
        );
    }

    #[test]
    fn parse_author_variants() {
        assert_eq!(
            parse_author("Jane Doe <jane@example.com>"),
            (Some("Jane Doe"), Some("jane@example.com"))
        );
        assert_eq!(parse_author("Jane Doe"), (Some("Jane Doe"), None));
        assert_eq!(
            parse_author("<jane@example.com>"),
            (None, Some("jane@example.com"))
        );
        assert_eq!(parse_author("  "), (None, None));
    }

    #[test]
    fn every_route_is_documented_under_its_tag() {
        let doc = openapi();
        let expected = [
            ("/admin/login", HttpMethod::Post, "admin"),
            ("/admin/communities/block/{id}", HttpMethod::Put, "admin"),
            ("/admin/deleteDonation/{id}", HttpMethod::Delete, "admin"),
            ("/communityAdmin/volunteers/{volunteerId}", HttpMethod::Get, "communityAdmin"),
            ("/communityAdmin/volunteersList/terminate/{id}", HttpMethod::Delete, "communityAdmin"),
            ("/communityAdmin/createPosts", HttpMethod::Post, "communityAdmin"),
            ("/user/signup", HttpMethod::Post, "user"),
            ("/user/post/{id}", HttpMethod::Get, "user"),
            ("/volunteer/events/schedule", HttpMethod::Post, "volunteer"),
            ("/volunteer/profile", HttpMethod::Put, "volunteer"),
            ("/health", HttpMethod::Get, "health"),
        ];

        for (path, method, tag) in expected {
            let item = doc.paths.paths.get(path);
            assert!(item.is_some(), "missing path {path}");
            let operation = item.and_then(|item| match method {
                HttpMethod::Get => item.get.as_ref(),
                HttpMethod::Post => item.post.as_ref(),
                HttpMethod::Put => item.put.as_ref(),
                HttpMethod::Delete => item.delete.as_ref(),
                _ => None,
            });
            let tags = operation.and_then(|op| op.tags.clone()).unwrap_or_default();
            assert_eq!(tags, vec![tag.to_string()], "wrong tag for {path}");
        }

        // 7 admin + 13 community admin + 6 user + 10 volunteer + health
        assert_eq!(doc.paths.paths.len(), 37);
    }

    #[test]
    fn undocumented_routes_stay_out() {
        let doc = openapi();
        assert!(!doc.paths.paths.contains_key("/"));
        let health = doc.paths.paths.get("/health");
        assert!(health.is_some_and(|item| item.options.is_none()));
    }

    #[test]
    fn tags_are_declared() {
        let names: Vec<String> = openapi()
            .tags
            .unwrap_or_default()
            .into_iter()
            .map(|tag| tag.name)
            .collect();
        assert_eq!(
            names,
            ["admin", "communityAdmin", "user", "volunteer", "health"]
        );
    }
}
