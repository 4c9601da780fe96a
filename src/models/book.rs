use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry. Serialized exactly as stored, so `/api/books/:id`
/// returns this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
}

// Form payload for add/edit
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub genre: String,
}

impl Book {
    pub fn new(input: BookInput) -> Self {
        Self::with_id(format!("book-{}", uuid::Uuid::new_v4()), input)
    }

    pub fn with_id(id: String, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            genre: input.genre,
        }
    }
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            genre: book.genre.clone(),
        }
    }
}
