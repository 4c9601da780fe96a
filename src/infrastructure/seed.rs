use crate::domain::Library;
use crate::models::Book;

// (title, author, isbn, genre)
const SAMPLE_BOOKS: [(&str, &str, &str, &str); 15] = [
    ("To Kill a Mockingbird", "Harper Lee", "9780061120084", "Fiction"),
    ("1984", "George Orwell", "9780451524935", "Science Fiction"),
    ("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", "Fiction"),
    ("Pride and Prejudice", "Jane Austen", "9780141439518", "Romance"),
    ("The Catcher in the Rye", "J.D. Salinger", "9780316769488", "Fiction"),
    ("The Hobbit", "J.R.R. Tolkien", "9780547928227", "Fantasy"),
    (
        "Harry Potter and the Philosopher's Stone",
        "J.K. Rowling",
        "9780747532743",
        "Fantasy",
    ),
    ("The Lord of the Rings", "J.R.R. Tolkien", "9780618640157", "Fantasy"),
    ("The Alchemist", "Paulo Coelho", "9780062315007", "Fiction"),
    ("The Da Vinci Code", "Dan Brown", "9780307474278", "Mystery"),
    ("The Hunger Games", "Suzanne Collins", "9780439023481", "Science Fiction"),
    ("The Shining", "Stephen King", "9780307743657", "Horror"),
    ("Brave New World", "Aldous Huxley", "9780060850524", "Science Fiction"),
    ("The Odyssey", "Homer", "9780140268867", "Classic"),
    ("Moby-Dick", "Herman Melville", "9780142437247", "Adventure"),
];

/// Sample catalog with stable ids `book-1` .. `book-15`
pub fn sample_books() -> Vec<Book> {
    SAMPLE_BOOKS
        .iter()
        .enumerate()
        .map(|(i, (title, author, isbn, genre))| Book {
            id: format!("book-{}", i + 1),
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            genre: genre.to_string(),
        })
        .collect()
}

/// Dataset every new session starts from: the sample catalog, no students,
/// no issue records.
pub fn demo_library() -> Library {
    Library::with_books(sample_books())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_is_unique() {
        let books = sample_books();
        let ids: HashSet<_> = books.iter().map(|b| &b.id).collect();
        let isbns: HashSet<_> = books.iter().map(|b| &b.isbn).collect();

        assert_eq!(books.len(), 15);
        assert_eq!(ids.len(), 15);
        assert_eq!(isbns.len(), 15);
        assert_eq!(books[14].id, "book-15");
        assert_eq!(books[14].title, "Moby-Dick");
    }

    #[test]
    fn test_demo_library_starts_empty_of_people() {
        let library = demo_library();
        assert!(library.students.is_empty());
        assert!(library.issued_books.is_empty());
        assert_eq!(library.available_books().len(), 15);
    }
}
