//! Book model and wire/storage conversions.
//!
//! The wire shape (`Book`) carries the identifier as a hex string; the
//! storage shape (`BookDocument`) carries it as a native `ObjectId` under
//! `_id`. The conversions below are the single place where wire field
//! names meet storage field names.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Book as it appears in request and response bodies.
///
/// `id` is optional on input and ignored there; the store assigns it.
/// Unknown extra fields in a request body are ignored by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Store-assigned identifier, 24 hex characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
}

/// Book as persisted, one document per book.
///
/// The four scalar fields default to their zero values when absent in a
/// stored document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub price: f64,
}

/// The mutable fields of a book, replaced wholesale on update.
#[derive(Debug, Clone)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: f64,
}

/// Parse a wire identifier into its native form.
///
/// Fails on anything that is not a well-formed ObjectId hex string, so
/// handlers can reject bad ids before touching the store.
pub fn parse_object_id(text: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(text)
        .map_err(|_| AppError::InvalidId(format!("'{}' is not a valid book id", text)))
}

impl Book {
    /// Drop any client-supplied id and keep the mutable fields.
    pub fn into_fields(self) -> BookFields {
        BookFields {
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            price: self.price,
        }
    }
}

impl BookFields {
    /// Storage form for insertion; the store assigns `_id`.
    pub fn into_document(self) -> BookDocument {
        BookDocument {
            id: None,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            price: self.price,
        }
    }
}

impl BookDocument {
    /// Wire form, with the identifier in its hex string encoding.
    pub fn into_wire(self) -> Book {
        Book {
            id: self.id.map(|oid| oid.to_hex()),
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn object_id_round_trips_through_hex() {
        let oid = ObjectId::new();
        let parsed = parse_object_id(&oid.to_hex()).unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn rejects_malformed_identifier() {
        assert!(matches!(parse_object_id("not-an-id"), Err(AppError::InvalidId(_))));
        assert!(matches!(parse_object_id(""), Err(AppError::InvalidId(_))));
        // right length, wrong charset
        assert!(matches!(
            parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn accepts_all_zero_identifier() {
        // well-formed even though no document will ever carry it
        assert!(parse_object_id("000000000000000000000000").is_ok());
    }

    #[test]
    fn book_json_round_trips() {
        let book = Book {
            id: Some(ObjectId::new().to_hex()),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "9780441013593".to_string(),
            price: 19.99,
        };
        let bytes = serde_json::to_vec(&book).unwrap();
        let decoded: Book = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, book);
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let book: Book = serde_json::from_str(
            r#"{"title":"T","author":"A","isbn":"I","price":1.0,"publisher":"ignored"}"#,
        )
        .unwrap();
        assert_eq!(book.title, "T");
        assert_eq!(book.id, None);
    }

    #[test]
    fn decode_fails_on_non_numeric_price() {
        let result = serde_json::from_str::<Book>(
            r#"{"title":"T","author":"A","isbn":"I","price":"cheap"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn decode_fails_on_missing_title() {
        let result = serde_json::from_str::<Book>(r#"{"author":"A","isbn":"I","price":1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn client_supplied_id_is_dropped_on_create() {
        let book: Book = serde_json::from_str(
            r#"{"id":"0123456789abcdef01234567","title":"T","author":"A","isbn":"I","price":1.0}"#,
        )
        .unwrap();
        let document = book.into_fields().into_document();
        assert_eq!(document.id, None);
    }

    #[test]
    fn document_absent_fields_decode_as_zero_values() {
        let raw = bson::doc! { "_id": ObjectId::new() };
        let document: BookDocument = bson::from_document(raw).unwrap();
        assert_eq!(document.title, "");
        assert_eq!(document.author, "");
        assert_eq!(document.isbn, "");
        assert_eq!(document.price, 0.0);
    }

    #[test]
    fn document_converts_to_wire_with_hex_id() {
        let oid = ObjectId::new();
        let document = BookDocument {
            id: Some(oid),
            title: "T".to_string(),
            author: "A".to_string(),
            isbn: "I".to_string(),
            price: 2.5,
        };
        let wire = document.into_wire();
        assert_eq!(wire.id.as_deref(), Some(oid.to_hex().as_str()));
        assert_eq!(wire.price, 2.5);
    }
}
