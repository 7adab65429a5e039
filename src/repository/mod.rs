//! Person storage operations
//!
//! The [`Repository`] trait is the seam between the request pipeline and the
//! document store: handlers depend on the trait, production wiring supplies
//! [`MongoPersonRepository`], and tests supply doubles.

mod error;
mod mongo;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use mongo::MongoPersonRepository;

use async_trait::async_trait;

use crate::ids::PersonId;
use crate::models::PersonDocument;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Storage operations over the Person collection.
///
/// Every operation is a single round trip with no retries or transactions;
/// storage failures surface as an opaque [`RepositoryError`].
#[async_trait]
pub trait Repository: Send + Sync {
    /// Returns every document in natural collection order.
    async fn find_all(&self) -> RepositoryResult<Vec<PersonDocument>>;

    /// Looks up a document by primary key. `Ok(None)` means no match.
    async fn find_by_id(&self, id: &PersonId) -> RepositoryResult<Option<PersonDocument>>;

    /// Inserts a new document, overwriting any incoming id with a freshly
    /// generated one, and returns the stored record.
    async fn create(&self, document: PersonDocument) -> RepositoryResult<PersonDocument>;

    /// Replaces name/email/age of the document matching the given record's
    /// id. Returns the matched count; 0 means no document matched.
    async fn update(&self, document: &PersonDocument) -> RepositoryResult<u64>;

    /// Removes the document matching `id`. Returns the deleted count; 0
    /// means no match.
    async fn delete(&self, id: &PersonId) -> RepositoryResult<u64>;
}
