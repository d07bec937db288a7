//! Synthetic project catalog.
//!
//! Projects are the cartesian product of [`GROUPS`] (outer) and [`NAMES`]
//! (inner), numbered from 1 in declaration order. The mapping from id to
//! `(group, name)` never changes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GROUPS: [&str; 6] = [
    "CPP Language",
    "Go Language",
    "Perl Language",
    "Python Language",
    "PHP Language",
    "C Sharp Language",
];

pub const NAMES: [&str; 8] = [
    "Wolfgang Amadeus Mozart",
    "Johann Sebastian Bach",
    "Ludwig Van Beethoven",
    "Johannes Brahms",
    "Giuseppe Verdi",
    "Piotr Ilitch Tchaïkovski",
    "Robert Schumann",
    "Franz Joseph Haydn",
];

/// Number of projects in the catalog, reported as `X-Total` whatever the filter.
#[allow(clippy::cast_possible_wrap)]
pub const CATALOG_SIZE: i64 = (GROUPS.len() * NAMES.len()) as i64;

const VISIBILITY: &str = "public";

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub path: String,
    pub name_with_namespace: String,
    pub path_with_namespace: String,
    pub ssh_url_to_repo: String,
    pub http_url_to_repo: String,
    pub web_url: String,
    pub visibility: String,
}

impl Project {
    #[must_use]
    pub fn new(id: i64, group: &str, name: &str, port: u16) -> Self {
        let group_path = slug(group);
        let path = slug(name);
        let path_with_namespace = format!("{group_path}/{path}");

        Self {
            id,
            name: name.to_string(),
            description: None,
            ssh_url_to_repo: format!("git@localhost:{path_with_namespace}.git"),
            http_url_to_repo: format!("http://localhost:{port}/{path_with_namespace}.git"),
            web_url: format!("http://localhost:{port}/{path_with_namespace}"),
            name_with_namespace: format!("{group} / {name}"),
            path,
            path_with_namespace,
            visibility: VISIBILITY.to_string(),
        }
    }
}

/// Lowercase and replace spaces with underscores.
#[must_use]
pub fn slug(value: &str) -> String {
    value.replace(' ', "_").to_lowercase()
}

/// Every `(id, group, name)` of the catalog in id order.
pub fn entries() -> impl Iterator<Item = (i64, &'static str, &'static str)> {
    let groups: &'static [&'static str] = &GROUPS;
    let names: &'static [&'static str] = &NAMES;

    groups
        .iter()
        .flat_map(move |group| names.iter().map(move |name| (*group, *name)))
        .zip(1_i64..)
        .map(|((group, name), id)| (id, group, name))
}

/// Projects from the first id `>= min` up to and including the first id `>= max`.
///
/// When `max < min` the single project at `min` is returned. A `min` past the
/// end of the catalog yields nothing.
pub fn projects(min: i64, max: i64, port: u16) -> impl Iterator<Item = Project> {
    entries()
        .skip_while(move |(id, _, _)| *id < min)
        .scan(false, move |done, (id, group, name)| {
            if *done {
                return None;
            }
            *done = id >= max;
            Some(Project::new(id, group, name, port))
        })
}
