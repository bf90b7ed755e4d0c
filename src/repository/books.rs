//! Books repository, the single point of contact with the document store.
//!
//! Each operation touches exactly one document in one collection. Driver
//! failures surface as `AppError::Database`; a zero-match update or delete
//! surfaces as `AppError::NotFound`.

use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDocument, BookFields},
};

#[derive(Clone)]
pub struct BooksRepository {
    collection: Collection<BookDocument>,
}

impl BooksRepository {
    pub fn new(collection: Collection<BookDocument>) -> Self {
        Self { collection }
    }

    /// Fetch a book by its identifier.
    pub async fn get(&self, id: ObjectId) -> AppResult<BookDocument> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id.to_hex())))
    }

    /// Insert a new book and return the store-assigned identifier.
    pub async fn insert(&self, fields: BookFields) -> AppResult<ObjectId> {
        let result = self.collection.insert_one(fields.into_document()).await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Internal("Store returned a non-ObjectId key".to_string()))
    }

    /// Replace the four mutable fields of an existing book. `_id` is never
    /// rewritten.
    pub async fn replace_fields(&self, id: ObjectId, fields: BookFields) -> AppResult<()> {
        let update = doc! {
            "$set": {
                "title": &fields.title,
                "author": &fields.author,
                "isbn": &fields.isbn,
                "price": fields.price,
            }
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Book with id {} not found",
                id.to_hex()
            )));
        }

        Ok(())
    }

    /// Delete a book. Deleting an already-deleted id reports `NotFound`.
    pub async fn remove(&self, id: ObjectId) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Book with id {} not found",
                id.to_hex()
            )));
        }

        Ok(())
    }
}
