use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Patch, UserId};

/// Represents a registered user in the system.
///
/// Friendships are not stored here; the social graph owns them and
/// [`UserProfile`] is the read-only view that joins the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Partial update of a stored user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub email: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub login: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub birthday: Patch<NaiveDate>,
}

/// A user together with the ids of their friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub friends: BTreeSet<UserId>,
}

impl UserCreate {
    /// Creates a payload with the two required fields set.
    ///
    /// # Notes
    /// Leaving `name` empty makes the store fall back to the login.
    pub fn new(login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            login: Some(login.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }
}

impl UserUpdate {
    pub fn for_id(id: UserId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_flattens_user() {
        let profile = UserProfile {
            user: User {
                id: 1,
                email: "bob@x.com".into(),
                login: "bob".into(),
                name: "bob".into(),
                birthday: None,
            },
            friends: BTreeSet::from([2, 3]),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["login"], "bob");
        assert_eq!(json["friends"], serde_json::json!([2, 3]));
    }

    #[test]
    fn test_user_update_null_name_is_clear() {
        let update: UserUpdate = serde_json::from_str(r#"{"id": 1, "name": null}"#).unwrap();
        assert_eq!(update.name, Patch::Clear);
        assert!(update.login.is_absent());
    }
}
