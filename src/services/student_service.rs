//! Student Service - roster rules and student login

use crate::domain::{DomainError, Entity, Library};
use crate::models::{IssueStatus, Student, StudentInput, StudentWithLoans};

fn username_taken(library: &Library, username: &str, except_id: Option<&str>) -> bool {
    library
        .students
        .iter()
        .any(|s| s.username == username && Some(s.id.as_str()) != except_id)
}

/// Self-registration from the student login page
pub fn register(library: &mut Library, input: StudentInput) -> Result<Student, DomainError> {
    if input.name.trim().is_empty()
        || input.username.trim().is_empty()
        || input.password.is_empty()
    {
        return Err(DomainError::Validation(
            "Please fill in name, username and password.".to_string(),
        ));
    }

    if username_taken(library, &input.username, None) {
        return Err(DomainError::DuplicateUsername);
    }

    let student = Student::new(input);
    library.students.push(student.clone());
    tracing::info!("Registered student {} ({})", student.id, student.username);

    Ok(student)
}

/// First student whose username and password both match
pub fn authenticate<'a>(
    library: &'a Library,
    username: &str,
    password: &str,
) -> Result<&'a Student, DomainError> {
    library
        .students
        .iter()
        .find(|s| s.username == username && s.password == password)
        .ok_or(DomainError::InvalidCredentials)
}

/// Replace a student's fields. A blank password keeps the current one.
pub fn update_student(
    library: &mut Library,
    id: &str,
    input: StudentInput,
) -> Result<Student, DomainError> {
    let current = library
        .student(id)
        .ok_or(DomainError::NotFound(Entity::Student))?;

    if username_taken(library, &input.username, Some(id)) {
        return Err(DomainError::DuplicateUsername);
    }

    let password = if input.password.is_empty() {
        current.password.clone()
    } else {
        input.password
    };

    let updated = Student {
        id: id.to_string(),
        name: input.name,
        username: input.username,
        password,
        roll_no: input.roll_no,
    };

    if let Some(slot) = library.students.iter_mut().find(|s| s.id == id) {
        *slot = updated.clone();
    }
    tracing::info!("Updated student {}", id);

    Ok(updated)
}

/// Remove a student unless they still have issue records
pub fn delete_student(library: &mut Library, id: &str) -> Result<(), DomainError> {
    if library.student_has_issues(id) {
        tracing::warn!("Refusing to delete student {} with issue records", id);
        return Err(DomainError::StudentHasIssues);
    }

    library.students.retain(|s| s.id != id);
    tracing::info!("Deleted student {}", id);

    Ok(())
}

/// Roster with per-student loan counts
pub fn roster(library: &Library) -> Vec<StudentWithLoans> {
    library
        .students
        .iter()
        .map(|student| {
            let issues = library.issues_for_student(&student.id);
            StudentWithLoans {
                student: student.clone(),
                issued_count: issues.len(),
                has_requests: issues.iter().any(|i| i.status == IssueStatus::Requested),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::issue_service;
    use chrono::NaiveDate;

    fn input(username: &str) -> StudentInput {
        StudentInput {
            name: "Grace Hopper".into(),
            username: username.into(),
            password: "cobol".into(),
            roll_no: "CS-01".into(),
        }
    }

    #[test]
    fn test_register_and_authenticate() {
        let mut library = Library::default();
        let student = register(&mut library, input("grace")).unwrap();

        assert!(student.id.starts_with("student-"));
        assert_eq!(authenticate(&library, "grace", "cobol").unwrap().id, student.id);
        assert_eq!(
            authenticate(&library, "grace", "fortran").unwrap_err(),
            DomainError::InvalidCredentials
        );
    }

    #[test]
    fn test_register_rejects_duplicate_username() {
        let mut library = Library::default();
        register(&mut library, input("grace")).unwrap();

        let err = register(&mut library, input("grace")).unwrap_err();

        assert_eq!(err, DomainError::DuplicateUsername);
        assert_eq!(library.students.len(), 1);
    }

    #[test]
    fn test_register_requires_credentials() {
        let mut library = Library::default();
        let err = register(&mut library, input("  ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(library.students.is_empty());
    }

    #[test]
    fn test_update_student_keeps_password_when_blank() {
        let mut library = Library::default();
        let student = register(&mut library, input("grace")).unwrap();
        let mut changes = input("ghopper");
        changes.password.clear();

        let updated = update_student(&mut library, &student.id, changes).unwrap();

        assert_eq!(updated.username, "ghopper");
        assert_eq!(updated.password, "cobol");
    }

    #[test]
    fn test_update_student_rejects_username_of_another() {
        let mut library = Library::default();
        register(&mut library, input("grace")).unwrap();
        let other = register(&mut library, input("alan")).unwrap();

        let err = update_student(&mut library, &other.id, input("grace")).unwrap_err();
        assert_eq!(err, DomainError::DuplicateUsername);
    }

    #[test]
    fn test_delete_student_blocked_by_issue_records() {
        let mut library = crate::infrastructure::seed::demo_library();
        let student = register(&mut library, input("grace")).unwrap();
        let idle = register(&mut library, input("alan")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        issue_service::create_issue(
            &mut library,
            "book-1",
            &student.id,
            date,
            IssueStatus::Issued,
        )
        .unwrap();

        assert_eq!(
            delete_student(&mut library, &student.id).unwrap_err(),
            DomainError::StudentHasIssues
        );

        delete_student(&mut library, &idle.id).unwrap();
        assert!(library.student(&idle.id).is_none());
        assert_eq!(roster(&library).len(), 1);
    }

    #[test]
    fn test_roster_flags_pending_requests() {
        let mut library = crate::infrastructure::seed::demo_library();
        let student = register(&mut library, input("grace")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        issue_service::create_issue(
            &mut library,
            "book-1",
            &student.id,
            date,
            IssueStatus::Issued,
        )
        .unwrap();
        issue_service::create_issue(
            &mut library,
            "book-2",
            &student.id,
            date,
            IssueStatus::Requested,
        )
        .unwrap();

        let rows = roster(&library);
        assert_eq!(rows[0].issued_count, 2);
        assert!(rows[0].has_requests);
    }
}
