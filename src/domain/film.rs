use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FilmId, Patch, UserId};

/// A film in the catalogue.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::actor_framework::ResourceActor); see
/// the `Entity` impl in `film_actor` for the create/update rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: FilmId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub release_date: NaiveDate,
    /// Running time in minutes.
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub likes: BTreeSet<UserId>,
}

/// Payload for creating a new film.
///
/// Required fields are optional here so that a request with a missing field
/// reaches validation instead of failing to deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i32>,
}

/// Partial update of a stored film.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmUpdate {
    pub id: Option<FilmId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub release_date: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub duration: Patch<i32>,
}

impl Film {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

impl FilmCreate {
    pub fn new(name: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            name: Some(name.into()),
            release_date: Some(release_date),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, minutes: i32) -> Self {
        self.duration = Some(minutes);
        self
    }
}

impl FilmUpdate {
    pub fn for_id(id: FilmId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}
