//! JSON lookups against the caller's session dataset.

use axum::{Json, extract::Path};

use crate::domain::{DomainError, Entity};
use crate::infrastructure::auth::Session;
use crate::models::{Book, Student};

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "Stored book", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<Book>, DomainError> {
    session
        .library(|library| library.book(&id).cloned())
        .map(Json)
        .ok_or(DomainError::NotFound(Entity::Book))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Stored student", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<Student>, DomainError> {
    session
        .library(|library| library.student(&id).cloned())
        .map(Json)
        .ok_or(DomainError::NotFound(Entity::Student))
}
