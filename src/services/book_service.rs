//! Book Service - catalog rules without the HTTP layer

use crate::domain::{DomainError, Entity, Library};
use crate::models::{Book, BookInput};

fn isbn_taken(library: &Library, isbn: &str, except_id: Option<&str>) -> bool {
    library
        .books
        .iter()
        .any(|b| b.isbn == isbn && Some(b.id.as_str()) != except_id)
}

/// Add a book to the catalog
pub fn add_book(library: &mut Library, input: BookInput) -> Result<Book, DomainError> {
    if isbn_taken(library, &input.isbn, None) {
        return Err(DomainError::DuplicateIsbn);
    }

    let book = Book::new(input);
    library.books.push(book.clone());
    tracing::info!("Added book {} ({})", book.id, book.title);

    Ok(book)
}

/// Replace a book's fields, keeping its id
pub fn update_book(
    library: &mut Library,
    id: &str,
    input: BookInput,
) -> Result<Book, DomainError> {
    if library.book(id).is_none() {
        return Err(DomainError::NotFound(Entity::Book));
    }

    if isbn_taken(library, &input.isbn, Some(id)) {
        return Err(DomainError::DuplicateIsbn);
    }

    let updated = Book::with_id(id.to_string(), input);
    if let Some(slot) = library.books.iter_mut().find(|b| b.id == id) {
        *slot = updated.clone();
    }
    tracing::info!("Updated book {}", id);

    Ok(updated)
}

/// Remove a book unless an issue record still points at it
pub fn delete_book(library: &mut Library, id: &str) -> Result<(), DomainError> {
    if library.is_book_issued(id) {
        tracing::warn!("Refusing to delete issued book {}", id);
        return Err(DomainError::BookIssued);
    }

    library.books.retain(|b| b.id != id);
    tracing::info!("Deleted book {}", id);

    Ok(())
}
