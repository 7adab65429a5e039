//! Mapping between the wire and storage forms of a Person
//!
//! Mapping is a pure structural copy. The fallible signatures exist because a
//! mapping failure (malformed internal data) is a distinct error the handler
//! reports as an internal error; [`PersonMapper`] itself never produces one.

use mongodb::bson::oid::ObjectId;

use crate::ids::PersonId;
use crate::models::{Person, PersonDocument};

/// Result type for mapping operations.
pub type MapperResult<T> = std::result::Result<T, MapperError>;

/// Error raised when a record cannot be translated between representations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mapping failed: {reason}")]
pub struct MapperError {
    /// What went wrong, for the log; never exposed to clients.
    pub reason: String,
}

impl MapperError {
    /// Create a new mapping error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Bidirectional Person mapper, swappable for a test double.
pub trait Mapper: Send + Sync {
    /// Copies a storage document into its wire form.
    fn document_to_dto(&self, document: &PersonDocument) -> MapperResult<Person>;

    /// Element-wise [`Mapper::document_to_dto`]; empty input maps to an empty
    /// vec, never an error.
    fn documents_to_dtos(&self, documents: &[PersonDocument]) -> MapperResult<Vec<Person>>;

    /// Copies a wire record into its storage form. The id is carried over
    /// only when set (update path); on create the repository overwrites it
    /// regardless.
    fn dto_to_document(&self, dto: &Person) -> MapperResult<PersonDocument>;
}

/// The production mapper: a verbatim field-by-field copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonMapper;

impl Mapper for PersonMapper {
    fn document_to_dto(&self, document: &PersonDocument) -> MapperResult<Person> {
        Ok(Person {
            id: Some(PersonId::from(document.id)),
            name: document.name.clone(),
            email: document.email.clone(),
            age: document.age,
        })
    }

    fn documents_to_dtos(&self, documents: &[PersonDocument]) -> MapperResult<Vec<Person>> {
        documents
            .iter()
            .map(|document| self.document_to_dto(document))
            .collect()
    }

    fn dto_to_document(&self, dto: &Person) -> MapperResult<PersonDocument> {
        Ok(PersonDocument {
            // Placeholder when the wire record carries no id; create assigns
            // the real one.
            id: dto
                .id
                .map(PersonId::into)
                .unwrap_or_else(|| ObjectId::from_bytes([0; 12])),
            name: dto.name.clone(),
            email: dto.email.clone(),
            age: dto.age,
        })
    }
}
