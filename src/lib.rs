//! # Helpinghands (Volunteering & Community Donation API)
//!
//! `helpinghands` serves the HTTP surface of a volunteering platform for four
//! actors: platform admins, community admins, end users and volunteers.
//!
//! ## Fixture-backed contract
//!
//! There is no persistence layer. Every route answers with either a canned
//! fixture or an echo of the fields it was sent, so the API can be used to
//! build and test clients before a backend exists.
//!
//! - **Fixtures:** literal records (events, posts, communities, donations) live
//!   in an immutable [`api::fixtures::Fixtures`] table built once at startup.
//! - **Echo endpoints:** create/update routes return the documented fields that
//!   were present in the request, omitting absent ones.
//! - **Credential checks:** the only branching is an equality check against one
//!   hardcoded credential pair per actor, plus a presence check on user signup.
//!
//! ## Routing
//!
//! Controllers are mounted under `/admin`, `/communityAdmin`, `/user` and
//! `/volunteer`. The `OpenAPI` document is generated from the same router and
//! served at `/api-docs`.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Commit the binary was built from, `unknown` outside a git checkout.
pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
