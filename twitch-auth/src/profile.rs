//! Signed-in user profile.

use serde::{Deserialize, Deserializer};

use crate::error::{profile_error, Error, ProfileErrorKind};

/// Profile of the signed-in Twitch user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Provider's opaque user identifier.
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub profile_image_url: String,
}

/// Envelope returned by the `/users` route.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub data: Vec<User>,
}

impl UsersResponse {
    /// The first profile record, which describes the token's owner.
    pub fn into_first(self) -> Result<User, Error> {
        self.data.into_iter().next().ok_or_else(|| {
            profile_error(ProfileErrorKind::NotFound, "Profile response contained no users")
        })
    }
}

/// Accept the id as either a JSON string or a number.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}
