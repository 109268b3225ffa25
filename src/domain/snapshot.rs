//! Versioned wire schema for the structured export.
//!
//! The exported document is defined here explicitly rather than derived from
//! [`Profile`], so the in-memory model can change without changing the file
//! format. Field order in these structs is the order written to disk.

use serde::{Deserialize, Serialize};

use super::profile::{Link, Profile};

/// Highest schema revision this build reads. Version 1 documents carry no
/// `version` key; a missing key means version 1.
pub const SCHEMA_VERSION: u32 = 1;

/// Top-level export document: `{ "themeKey": ..., "profile": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    /// Theme identifier active at export time, written verbatim.
    #[serde(default)]
    pub theme_key: String,
    #[serde(default)]
    pub profile: ProfileRecord,
}

impl ExportSnapshot {
    /// Capture a theme key and profile into a snapshot.
    #[must_use]
    pub fn capture(theme_key: &str, profile: &Profile) -> Self {
        Self {
            theme_key: theme_key.to_string(),
            profile: ProfileRecord::from(profile),
        }
    }
}

/// Profile as written in the export document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

/// Link as written in the export document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

impl From<&Profile> for ProfileRecord {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            links: profile
                .links
                .iter()
                .map(|l| LinkRecord {
                    label: l.label.clone(),
                    url: l.url.clone(),
                })
                .collect(),
        }
    }
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        Self {
            name: record.name,
            title: record.title,
            bio: record.bio,
            avatar_url: record.avatar_url,
            links: record
                .links
                .into_iter()
                .map(|l| Link::new(l.label, l.url))
                .collect(),
        }
    }
}
