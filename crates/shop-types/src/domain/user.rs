use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A user that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(name: String, email: String) -> anyhow::Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("name empty");
        }
        Ok(Self {
            name,
            email,
            created_at: Utc::now(),
        })
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_keeps_fields_and_stamps_creation_time() {
        let before = Utc::now();
        let user = NewUser::new("Ana".into(), "ana@example.com".into()).unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
        assert!(user.created_at >= before);

        let stored = user.clone().into_user(7);
        assert_eq!(stored.id, 7);
        assert_eq!(stored.created_at, user.created_at);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(NewUser::new("".into(), "a@b.com".into()).is_err());
        assert!(NewUser::new("   ".into(), "a@b.com".into()).is_err());
    }

    #[test]
    fn email_shape_is_not_checked() {
        assert!(NewUser::new("Bob".into(), "not-an-email".into()).is_ok());
    }

    #[test]
    fn serializes_created_at_as_iso8601() {
        let created_at = DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let user = User {
            id: 1,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            created_at,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ana",
                "email": "ana@example.com",
                "created_at": "2024-05-01T12:30:00Z"
            })
        );
    }
}
