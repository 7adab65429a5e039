//! MongoDB-backed Person repository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

use super::{Repository, RepositoryError, RepositoryOperation, RepositoryResult};
use crate::ids::PersonId;
use crate::models::PersonDocument;

/// Stateless facade over the Person collection handle.
///
/// The collection (and the client's connection pool behind it) is safe for
/// concurrent use; this type only invokes it, never mutates it.
#[derive(Debug, Clone)]
pub struct MongoPersonRepository {
    collection: Collection<PersonDocument>,
}

impl MongoPersonRepository {
    /// Create a repository over the given collection handle.
    pub fn new(collection: Collection<PersonDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl Repository for MongoPersonRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<PersonDocument>> {
        let cursor = self.collection.find(doc! {}).await.map_err(|err| {
            RepositoryError::from(err).with_operation(RepositoryOperation::FindAll)
        })?;

        cursor.try_collect().await.map_err(|err| {
            RepositoryError::from(err).with_operation(RepositoryOperation::FindAll)
        })
    }

    async fn find_by_id(&self, id: &PersonId) -> RepositoryResult<Option<PersonDocument>> {
        self.collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(|err| {
                RepositoryError::from(err)
                    .with_operation(RepositoryOperation::FindById)
                    .with_entity_id(id.to_hex())
            })
    }

    async fn create(&self, mut document: PersonDocument) -> RepositoryResult<PersonDocument> {
        // The incoming id is never trusted; the stored record always gets a
        // fresh one.
        document.id = PersonId::new().as_object_id();

        self.collection.insert_one(&document).await.map_err(|err| {
            RepositoryError::from(err)
                .with_operation(RepositoryOperation::Create)
                .with_entity_id(document.id.to_hex())
        })?;

        Ok(document)
    }

    async fn update(&self, document: &PersonDocument) -> RepositoryResult<u64> {
        let filter = doc! { "_id": document.id };
        let update = doc! {
            "$set": {
                "name": document.name.as_str(),
                "email": document.email.as_str(),
                "age": i32::from(document.age),
            }
        };

        let result = self
            .collection
            .update_one(filter, update)
            .await
            .map_err(|err| {
                RepositoryError::from(err)
                    .with_operation(RepositoryOperation::Update)
                    .with_entity_id(document.id.to_hex())
            })?;

        Ok(result.matched_count)
    }

    async fn delete(&self, id: &PersonId) -> RepositoryResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(|err| {
                RepositoryError::from(err)
                    .with_operation(RepositoryOperation::Delete)
                    .with_entity_id(id.to_hex())
            })?;

        Ok(result.deleted_count)
    }
}
