use maud::{Markup, html};

use crate::models::{Book, BookInput};

pub fn book_list(books: &[Book], issued_ids: &[String], is_admin: bool) -> Markup {
    if books.is_empty() {
        return html! { p { "No books in the catalog." } };
    }

    html! {
        table {
            tr {
                th { "Title" } th { "Author" } th { "ISBN" } th { "Genre" } th { "Status" }
                @if is_admin { th {} }
            }
            @for book in books {
                tr {
                    td { (book.title) }
                    td { (book.author) }
                    td { (book.isbn) }
                    td { (book.genre) }
                    td {
                        @if issued_ids.contains(&book.id) {
                            span.badge.issued { "Issued" }
                        } @else {
                            span.badge.available { "Available" }
                        }
                    }
                    @if is_admin {
                        td {
                            a href={ "/dashboard/books/edit/" (book.id) } { "Edit" }
                            form.inline method="post" action={ "/dashboard/books/delete/" (book.id) } {
                                button type="submit" { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shared add/edit form
pub fn book_form(action: &str, book: &BookInput, submit: &str) -> Markup {
    html! {
        form method="post" action=(action) {
            label { "Title " input name="title" value=(book.title) required; }
            label { "Author " input name="author" value=(book.author) required; }
            label { "ISBN " input name="isbn" value=(book.isbn) required; }
            label { "Genre " input name="genre" value=(book.genre); }
            button type="submit" { (submit) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_escaped() {
        let books = vec![Book::with_id(
            "book-1".into(),
            BookInput {
                title: "<script>alert(1)</script>".into(),
                author: "Mallory".into(),
                isbn: "1".into(),
                genre: String::new(),
            },
        )];

        let page = book_list(&books, &[], true).into_string();

        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains(r#"action="/dashboard/books/delete/book-1""#));
    }

    #[test]
    fn test_students_get_no_edit_controls() {
        let books = vec![Book::with_id(
            "book-1".into(),
            BookInput {
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                isbn: "1".into(),
                genre: String::new(),
            },
        )];

        let page = book_list(&books, &["book-1".to_string()], false).into_string();

        assert!(page.contains("Issued"));
        assert!(!page.contains("/dashboard/books/edit/"));
    }
}
