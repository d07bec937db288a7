//! # glmock
//!
//! `glmock` is a stateless HTTP server that answers a small slice of the GitLab
//! REST API (`/api/v4/projects`, project environments and CI/CD variables) with
//! synthetic, internally consistent data. It exists so clients of the real API
//! can be exercised locally or in CI without a GitLab instance.
//!
//! Every response is computed on demand from fixed catalogs:
//!
//! - **Projects** are the cartesian product of six language groups and eight
//!   composers (48 projects); project `i` always maps to the same pair.
//! - **Environments** are derived from the project id (`2*id-1`, `2*id`).
//! - **Variables** are a fixed list of three `DEBUG_ENABLED` entries.
//!
//! Pagination headers follow GitLab's naming (`X-Total`, `X-Next-Page`, ...)
//! and keep the quirks of the emulated server, see [`api::pagination`].

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
