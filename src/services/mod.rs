//! Services Layer
//!
//! Business rules extracted from HTTP handlers. Every function works on the
//! `Library` of the calling session.

pub mod book_service;
pub mod issue_service;
pub mod student_service;
