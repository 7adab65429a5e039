//! Wire and storage representations of a Person
//!
//! Both shapes carry the same field set; the mapper copies between them
//! without any transformation.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::ids::PersonId;

/// Wire form of a Person, exchanged as JSON with HTTP clients.
///
/// All fields decode with defaults: a missing field falls through to
/// validation (400), while malformed JSON or a wrong-typed field fails
/// decoding (422). The id is optional on input; create ignores it entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<PersonId>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    /// Required in the sense of "non-zero": an age of 0 is treated as absent
    /// by validation.
    #[serde(default)]
    pub age: i8,
}

/// Storage form of a Person, persisted in the document collection.
///
/// The id is the document's primary key, assigned by the repository on create
/// and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub age: i8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_person_decodes_with_missing_fields() {
        let person: Person = serde_json::from_str("{}").unwrap();
        assert!(person.id.is_none());
        assert_eq!(person.name, "");
        assert_eq!(person.email, "");
        assert_eq!(person.age, 0);
    }

    #[test]
    fn test_wire_person_decodes_full_body() {
        let person: Person = serde_json::from_str(
            r#"{"id":"5f165e2e4de9b442e60b3904","name":"Lucas","email":"lucas@gmail.com","age":22}"#,
        )
        .unwrap();
        assert_eq!(person.id.unwrap().to_hex(), "5f165e2e4de9b442e60b3904");
        assert_eq!(person.name, "Lucas");
        assert_eq!(person.email, "lucas@gmail.com");
        assert_eq!(person.age, 22);
    }

    #[test]
    fn test_wire_person_rejects_wrong_typed_field() {
        let result: Result<Person, _> = serde_json::from_str(r#"{"age":"twenty"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_person_serializes_id_as_hex() {
        let person = Person {
            id: Some("5f165e2e4de9b442e60b3904".parse().unwrap()),
            name: "Lucas".to_string(),
            email: "lucas@gmail.com".to_string(),
            age: 22,
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["id"], "5f165e2e4de9b442e60b3904");
        assert_eq!(json["age"], 22);
    }

    #[test]
    fn test_document_uses_underscore_id() {
        let document = PersonDocument {
            id: ObjectId::parse_str("5f165e2e4de9b442e60b3904").unwrap(),
            name: "Lucas".to_string(),
            email: "lucas@gmail.com".to_string(),
            age: 22,
        };
        let json = serde_json::to_value(&document).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("id").is_none());
    }
}
