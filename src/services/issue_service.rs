//! Issue Service - loans and loan requests without the HTTP layer

use chrono::NaiveDate;

use crate::domain::{DomainError, Entity, Library};
use crate::models::issue::DATE_FORMAT;
use crate::models::{CurrentUser, IssueDetails, IssueRecord, IssueStatus};

fn invalid_date() -> DomainError {
    DomainError::Validation("Please enter a valid issue date (YYYY-MM-DD).".to_string())
}

fn parse_issue_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| invalid_date())
}

// Book must exist and be free of any issue record
fn check_book_available(library: &Library, book_id: &str) -> Result<(), DomainError> {
    if library.book(book_id).is_none() {
        return Err(DomainError::NotFound(Entity::Book));
    }
    if library.is_book_issued(book_id) {
        return Err(DomainError::Validation(
            "This book is not available.".to_string(),
        ));
    }
    Ok(())
}

/// Append a record without checking the book or student. Only fails when
/// the loan would end past the last representable date.
pub fn create_issue(
    library: &mut Library,
    book_id: &str,
    student_id: &str,
    issue_date: NaiveDate,
    status: IssueStatus,
) -> Result<IssueRecord, DomainError> {
    let record = IssueRecord::new(
        book_id.to_string(),
        student_id.to_string(),
        issue_date,
        status,
    )
    .ok_or_else(invalid_date)?;
    library.issued_books.push(record.clone());
    Ok(record)
}

/// Admin issues a book directly to a student
pub fn issue_book(
    library: &mut Library,
    book_id: &str,
    student_id: &str,
    issue_date: &str,
) -> Result<IssueRecord, DomainError> {
    if book_id.is_empty() || student_id.is_empty() || issue_date.is_empty() {
        return Err(DomainError::Validation(
            "Please select both a book and a student.".to_string(),
        ));
    }

    let date = parse_issue_date(issue_date)?;
    check_book_available(library, book_id)?;
    if library.student(student_id).is_none() {
        return Err(DomainError::NotFound(Entity::Student));
    }

    let record = create_issue(library, book_id, student_id, date, IssueStatus::Issued)?;
    tracing::info!(
        "Issued book {} to student {} until {}",
        book_id,
        student_id,
        record.return_date
    );

    Ok(record)
}

/// Student asks for a book; an admin approves it later
pub fn request_book(
    library: &mut Library,
    student_id: &str,
    book_id: &str,
    issue_date: &str,
) -> Result<IssueRecord, DomainError> {
    if book_id.is_empty() || issue_date.is_empty() {
        return Err(DomainError::Validation("Please select a book.".to_string()));
    }

    let date = parse_issue_date(issue_date)?;
    check_book_available(library, book_id)?;

    let record = create_issue(library, book_id, student_id, date, IssueStatus::Requested)?;
    tracing::info!("Student {} requested book {}", student_id, book_id);

    Ok(record)
}

/// Returning a book drops its record entirely
pub fn return_book(library: &mut Library, issue_id: &str) -> Result<IssueRecord, DomainError> {
    let pos = library
        .issued_books
        .iter()
        .position(|i| i.id == issue_id)
        .ok_or(DomainError::NotFound(Entity::Issue))?;

    let record = library.issued_books.remove(pos);
    tracing::info!("Book {} returned ({})", record.book_id, record.id);

    Ok(record)
}

/// `requested -> issued`; no other field changes
pub fn approve_request(
    library: &mut Library,
    request_id: &str,
) -> Result<IssueRecord, DomainError> {
    let record = library
        .issued_books
        .iter_mut()
        .find(|i| i.id == request_id)
        .ok_or(DomainError::NotFound(Entity::Issue))?;

    record.status = IssueStatus::Issued;
    tracing::info!("Approved request {}", request_id);

    Ok(record.clone())
}

/// Issue records the user may see, joined with book and student
pub fn issue_details(library: &Library, user: &CurrentUser) -> Vec<IssueDetails> {
    library
        .issues_visible_to(user)
        .into_iter()
        .map(|issue| {
            IssueDetails::new(
                issue.clone(),
                library.book(&issue.book_id),
                library.student(&issue.student_id),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::demo_library;
    use crate::models::{Role, StudentInput};
    use crate::services::student_service;

    fn library_with_student() -> (Library, String) {
        let mut library = demo_library();
        let student = student_service::register(
            &mut library,
            StudentInput {
                name: "Ada Lovelace".into(),
                username: "ada".into(),
                password: "engine".into(),
                roll_no: "R-42".into(),
            },
        )
        .unwrap();
        (library, student.id)
    }

    #[test]
    fn test_issue_sets_return_date_seven_days_later() {
        let (mut library, student_id) = library_with_student();

        let record = issue_book(&mut library, "book-6", &student_id, "2024-12-28").unwrap();

        assert!(record.id.starts_with("issue-"));
        assert_eq!(record.status, IssueStatus::Issued);
        assert_eq!(record.issue_date.to_string(), "2024-12-28");
        assert_eq!(record.return_date.to_string(), "2025-01-04");
        assert!(!library.available_books().iter().any(|b| b.id == "book-6"));
    }

    #[test]
    fn test_issue_requires_selections() {
        let (mut library, student_id) = library_with_student();

        let err = issue_book(&mut library, "", &student_id, "2024-01-01").unwrap_err();
        assert_eq!(err.to_string(), "Please select both a book and a student.");

        let err = issue_book(&mut library, "book-1", "", "2024-01-01").unwrap_err();
        assert_eq!(err.to_string(), "Please select both a book and a student.");
        assert!(library.issued_books.is_empty());
    }

    #[test]
    fn test_issue_rejects_malformed_date() {
        let (mut library, student_id) = library_with_student();
        let err = issue_book(&mut library, "book-1", &student_id, "01/02/2024").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_loan_cannot_end_past_the_calendar() {
        let (mut library, student_id) = library_with_student();

        let err = create_issue(
            &mut library,
            "book-1",
            &student_id,
            NaiveDate::MAX,
            IssueStatus::Issued,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Please enter a valid issue date (YYYY-MM-DD).");
        assert!(library.issued_books.is_empty());
    }

    #[test]
    fn test_issue_rejects_unavailable_book() {
        let (mut library, student_id) = library_with_student();
        request_book(&mut library, &student_id, "book-1", "2024-01-01").unwrap();

        let err = issue_book(&mut library, "book-1", &student_id, "2024-01-02").unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(library.issued_books.len(), 1);
    }

    #[test]
    fn test_issue_unknown_student() {
        let (mut library, _) = library_with_student();
        let err = issue_book(&mut library, "book-1", "student-nope", "2024-01-01").unwrap_err();
        assert_eq!(err, DomainError::NotFound(Entity::Student));
    }

    #[test]
    fn test_request_then_approve_only_changes_status() {
        let (mut library, student_id) = library_with_student();
        let request = request_book(&mut library, &student_id, "book-2", "2024-02-10").unwrap();
        assert!(request.id.starts_with("request-"));
        assert_eq!(request.status, IssueStatus::Requested);

        let approved = approve_request(&mut library, &request.id).unwrap();

        assert_eq!(approved.status, IssueStatus::Issued);
        assert_eq!(
            IssueRecord {
                status: IssueStatus::Requested,
                ..approved.clone()
            },
            request
        );
        assert_eq!(library.issue(&request.id), Some(&approved));
    }

    #[test]
    fn test_request_requires_book() {
        let (mut library, student_id) = library_with_student();
        let err = request_book(&mut library, &student_id, "", "2024-02-10").unwrap_err();
        assert_eq!(err.to_string(), "Please select a book.");
    }

    #[test]
    fn test_return_frees_the_book() {
        let (mut library, student_id) = library_with_student();
        let record = issue_book(&mut library, "book-3", &student_id, "2024-01-01").unwrap();

        return_book(&mut library, &record.id).unwrap();

        assert!(library.issued_books.is_empty());
        assert!(library.available_books().iter().any(|b| b.id == "book-3"));
        assert_eq!(
            return_book(&mut library, &record.id).unwrap_err(),
            DomainError::NotFound(Entity::Issue)
        );
    }

    #[test]
    fn test_details_are_scoped_to_student() {
        let (mut library, student_id) = library_with_student();
        issue_book(&mut library, "book-1", &student_id, "2024-01-01").unwrap();
        create_issue(
            &mut library,
            "book-2",
            "student-gone",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            IssueStatus::Issued,
        )
        .unwrap();

        let me = CurrentUser {
            id: student_id.clone(),
            name: "Ada Lovelace".into(),
            role: Role::Student,
        };
        let mine = issue_details(&library, &me);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].book_title, "To Kill a Mockingbird");
        assert_eq!(mine[0].student_roll_no, "R-42");

        let all = issue_details(&library, &CurrentUser::admin());
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].student_name, "Unknown Student");
    }
}
