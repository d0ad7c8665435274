use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Role written on every provisioning run, overwriting any prior value.
pub const ADMIN_ROLE: &str = "admin";

/// Admin user document stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    /// Argon2 digest in PHC string format, never the plaintext.
    pub password: String,
    pub role: String,
}

impl AdminUser {
    /// Build the document written by an upsert; `_id` is left for the
    /// storage layer to assign on first insert.
    pub fn new(email: &str, password_hash: &str) -> Self {
        AdminUser {
            id: None,
            email: email.to_string(),
            password: password_hash.to_string(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_user_has_admin_role() {
        let user = AdminUser::new("a@x.com", "$argon2id$stub");
        assert_eq!(user.role, ADMIN_ROLE);
        assert!(user.id.is_none());
    }

    #[test]
    fn test_serialization_skips_unset_id() {
        let user = AdminUser::new("a@x.com", "$argon2id$stub");
        let doc = bson::to_document(&user).unwrap();

        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("email").unwrap(), "a@x.com");
        assert_eq!(doc.get_str("password").unwrap(), "$argon2id$stub");
        assert_eq!(doc.get_str("role").unwrap(), "admin");
    }

    #[test]
    fn test_deserialization_reads_stored_id() {
        let id = ObjectId::new();
        let doc = bson::doc! {
            "_id": id,
            "email": "a@x.com",
            "password": "$argon2id$stub",
            "role": "admin",
        };

        let user: AdminUser = bson::from_document(doc).unwrap();
        assert_eq!(user.id, Some(id));
        assert_eq!(user.email, "a@x.com");
    }
}
