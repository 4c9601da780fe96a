//! The working dataset of one browser session.
//!
//! Collections are small, so every lookup is a linear scan returning the
//! first match.

use crate::models::{Book, CurrentUser, IssueRecord, Student};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    pub books: Vec<Book>,
    pub students: Vec<Student>,
    pub issued_books: Vec<IssueRecord>,
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_books: usize,
    pub total_students: usize,
    pub total_issued: usize,
    pub user_issued: usize,
    pub available_books: usize,
}

impl Library {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            ..Default::default()
        }
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn issue(&self, id: &str) -> Option<&IssueRecord> {
        self.issued_books.iter().find(|i| i.id == id)
    }

    /// Any issue record occupies its book, whatever its status.
    pub fn is_book_issued(&self, book_id: &str) -> bool {
        self.issued_books.iter().any(|i| i.book_id == book_id)
    }

    pub fn student_has_issues(&self, student_id: &str) -> bool {
        self.issued_books.iter().any(|i| i.student_id == student_id)
    }

    pub fn available_books(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| !self.is_book_issued(&b.id))
            .collect()
    }

    pub fn issues_for_student(&self, student_id: &str) -> Vec<&IssueRecord> {
        self.issued_books
            .iter()
            .filter(|i| i.student_id == student_id)
            .collect()
    }

    /// Issue records the user may see: their own for students, all for admins.
    pub fn issues_visible_to(&self, user: &CurrentUser) -> Vec<&IssueRecord> {
        if user.is_student() {
            self.issues_for_student(&user.id)
        } else {
            self.issued_books.iter().collect()
        }
    }

    pub fn summary(&self, user: &CurrentUser) -> Summary {
        Summary {
            total_books: self.books.len(),
            total_students: self.students.len(),
            total_issued: self.issued_books.len(),
            user_issued: self.issues_visible_to(user).len(),
            available_books: self.available_books().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookInput, IssueStatus, Role};
    use chrono::NaiveDate;

    fn book(id: &str, isbn: &str) -> Book {
        Book::with_id(
            id.to_string(),
            BookInput {
                title: format!("Title {}", id),
                author: "Author".into(),
                isbn: isbn.into(),
                genre: "Fiction".into(),
            },
        )
    }

    fn issue(book_id: &str, student_id: &str, status: IssueStatus) -> IssueRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        IssueRecord::new(book_id.into(), student_id.into(), date, status).unwrap()
    }

    fn student_user(id: &str) -> CurrentUser {
        CurrentUser {
            id: id.into(),
            name: "Someone".into(),
            role: Role::Student,
        }
    }

    #[test]
    fn test_lookup_returns_none_for_unknown_id() {
        let library = Library::with_books(vec![book("book-1", "111")]);

        assert_eq!(library.book("book-1").map(|b| b.isbn.as_str()), Some("111"));
        assert!(library.book("book-2").is_none());
        assert!(library.student("student-1").is_none());
    }

    #[test]
    fn test_any_issue_status_makes_book_unavailable() {
        let mut library = Library::with_books(vec![
            book("book-1", "111"),
            book("book-2", "222"),
            book("book-3", "333"),
        ]);
        library
            .issued_books
            .push(issue("book-1", "student-a", IssueStatus::Issued));
        library
            .issued_books
            .push(issue("book-2", "student-b", IssueStatus::Requested));

        let available: Vec<&str> = library
            .available_books()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(available, vec!["book-3"]);
    }

    #[test]
    fn test_summary_counts_only_own_issues_for_students() {
        let mut library = Library::with_books(vec![book("book-1", "111"), book("book-2", "222")]);
        library
            .issued_books
            .push(issue("book-1", "student-a", IssueStatus::Issued));
        library
            .issued_books
            .push(issue("book-2", "student-b", IssueStatus::Requested));

        let student = library.summary(&student_user("student-a"));
        assert_eq!(student.total_issued, 2);
        assert_eq!(student.user_issued, 1);
        assert_eq!(student.available_books, 0);

        let admin = library.summary(&CurrentUser::admin());
        assert_eq!(admin.user_issued, 2);
    }
}
