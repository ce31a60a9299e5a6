//! Domain DTOs for the pet-store API.
//!
//! # Design
//! These types mirror the pet-store wire schema (camelCase field names) but
//! are defined independently of the mock-server crate. Integration tests
//! catch any schema drift between the two.

use serde::{Deserialize, Serialize};

/// A pet-store user. `username` doubles as the resource key in user URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_status: i32,
}

/// A pet. Keyed by `id` in pet URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

/// Lifecycle status of a pet, as used by `GET /pet/findByStatus`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    /// The wire value used in the `status` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_camel_case() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            phone: "555-0100".to_string(),
            user_status: 1,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["firstName"], "Alice");
        assert_eq!(json["userStatus"], 1);
    }

    #[test]
    fn pet_status_uses_lowercase_wire_values() {
        let pet = Pet {
            id: 7,
            name: "Rex".to_string(),
            photo_urls: vec!["http://example.com/rex.jpg".to_string()],
            status: Some(PetStatus::Available),
        };
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["photoUrls"][0], "http://example.com/rex.jpg");
    }

    #[test]
    fn pet_deserializes_without_optional_fields() {
        let pet: Pet = serde_json::from_str(r#"{"id":3,"name":"Mia"}"#).unwrap();
        assert_eq!(pet.id, 3);
        assert!(pet.photo_urls.is_empty());
        assert!(pet.status.is_none());
    }

    #[test]
    fn pet_status_round_trips() {
        for status in [PetStatus::Available, PetStatus::Pending, PetStatus::Sold] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: PetStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
