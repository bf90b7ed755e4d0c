//! Book catalog endpoints.
//!
//! Each handler is a single translation: parse the identifier and body,
//! make one repository call, map the outcome to a status code. Bad
//! identifiers and malformed bodies are rejected before the store is
//! contacted.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::book::{parse_object_id, Book},
};

fn decode_body(payload: Result<Json<Book>, JsonRejection>) -> AppResult<Book> {
    let Json(book) = payload.map_err(|e| AppError::MalformedPayload(e.body_text()))?;
    Ok(book)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Invalid book ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_object_id(&id)?;

    let document = state.repository.books.get(id).await?;
    Ok(Json(document.into_wire()))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    // Any client-supplied id is dropped; the store assigns one.
    let fields = decode_body(payload)?.into_fields();

    let id = state.repository.books.insert(fields.clone()).await?;

    let created = Book {
        id: Some(id.to_hex()),
        title: fields.title,
        author: fields.author,
        isbn: fields.isbn,
        price: fields.price,
    };
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid book ID or malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let id = parse_object_id(&id)?;
    let fields = decode_body(payload)?.into_fields();

    state
        .repository
        .books
        .replace_fields(id, fields.clone())
        .await?;

    let updated = Book {
        id: Some(id.to_hex()),
        title: fields.title,
        author: fields.author,
        isbn: fields.isbn,
        price: fields.price,
    };
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Invalid book ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_object_id(&id)?;

    state.repository.books.remove(id).await?;
    Ok(StatusCode::OK)
}
