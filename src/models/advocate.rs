//! Advocate record
//!
//! The directory entity served by the listing API. Only `city`, `degree`,
//! `years_of_experience`, `first_name` and `last_name` take part in queries;
//! the remaining fields are carried through untouched.

use serde::{Deserialize, Serialize};

/// A single advocate profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Stable identifier, also the listing sort key
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advocate_serializes_camel_case() {
        let advocate = Advocate {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            city: "New York".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["Bipolar".to_string()],
            years_of_experience: 10,
            phone_number: 5551234567,
        };

        let json = serde_json::to_value(&advocate).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["yearsOfExperience"], 10);
        assert_eq!(json["phoneNumber"], 5551234567u64);
        assert_eq!(json["specialties"][0], "Bipolar");
    }

    #[test]
    fn test_advocate_deserialize_without_specialties() {
        let json = r#"{"id":7,"firstName":"Ada","lastName":"King","city":"Austin",
            "degree":"PhD","yearsOfExperience":4,"phoneNumber":5550000000}"#;
        let advocate: Advocate = serde_json::from_str(json).unwrap();
        assert_eq!(advocate.id, 7);
        assert!(advocate.specialties.is_empty());
    }
}
