//! Normalized GitHub profile summary.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "GitHub User";
pub const DEFAULT_BIO: &str = "No bio available";
pub const DEFAULT_LOCATION: &str = "Unknown";

/// The subset of a GitHub user shown in the profile panel.
///
/// Every field is filled in; missing upstream values become placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub avatar_url: String,
    pub bio: String,
    pub location: String,
    pub blog: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

/// The `GET /users/{username}` payload, as far as the panel cares.
///
/// Every field is optional and `null` is treated like absence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawUser {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub public_repos: Option<u64>,
}

impl From<RawUser> for ProfileSummary {
    fn from(raw: RawUser) -> Self {
        Self {
            name: or_placeholder(raw.name, DEFAULT_NAME),
            avatar_url: raw.avatar_url.unwrap_or_default(),
            bio: or_placeholder(raw.bio, DEFAULT_BIO),
            location: or_placeholder(raw.location, DEFAULT_LOCATION),
            blog: raw.blog.unwrap_or_default(),
            followers: raw.followers.unwrap_or(0),
            following: raw.following.unwrap_or(0),
            public_repos: raw.public_repos.unwrap_or(0),
        }
    }
}

impl ProfileSummary {
    /// Parse a users endpoint body. Anything but a JSON object is rejected.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("expected a JSON object"));
        }
        serde_json::from_value::<RawUser>(value).map(Self::from)
    }
}

// Empty strings count as missing, same as absent or null.
fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}
