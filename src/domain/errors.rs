//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Their `Display` text is what users see in flash messages.

use std::fmt;

/// Kind of record a lookup failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Book,
    Student,
    Issue,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DomainError {
    /// Record not found
    NotFound(Entity),
    /// Another book already carries this ISBN
    DuplicateIsbn,
    /// Another student already uses this username
    DuplicateUsername,
    /// Book is referenced by an issue record
    BookIssued,
    /// Student is referenced by an issue record
    StudentHasIssues,
    /// Login failed
    InvalidCredentials,
    /// Validation error with message
    Validation(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(Entity::Book) => write!(f, "Book not found."),
            DomainError::NotFound(Entity::Student) => write!(f, "Student not found."),
            DomainError::NotFound(Entity::Issue) => write!(f, "Issue record not found."),
            DomainError::DuplicateIsbn => write!(f, "A book with this ISBN already exists."),
            DomainError::DuplicateUsername => {
                write!(f, "Username already exists. Please choose another.")
            }
            DomainError::BookIssued => {
                write!(f, "Cannot delete book. It is currently issued to a student.")
            }
            DomainError::StudentHasIssues => {
                write!(f, "Cannot delete student. They have issued books.")
            }
            DomainError::InvalidCredentials => {
                write!(f, "Invalid credentials. Please try again.")
            }
            DomainError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
