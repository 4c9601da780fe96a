use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Book, Student};

/// Loan period applied when an issue record is created.
pub const LOAN_PERIOD_DAYS: u64 = 7;

/// Date format used on the wire and in forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Requested,
    Issued,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub id: String,
    pub book_id: String,
    pub student_id: String,
    pub issue_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: IssueStatus,
}

impl IssueRecord {
    /// Builds a record with the return date fixed at creation time.
    /// Admin issues get an `issue-` id, student requests a `request-` id.
    /// `None` when the return date falls past the end of the calendar.
    pub fn new(
        book_id: String,
        student_id: String,
        issue_date: NaiveDate,
        status: IssueStatus,
    ) -> Option<Self> {
        let prefix = match status {
            IssueStatus::Issued => "issue",
            IssueStatus::Requested => "request",
        };

        Some(Self {
            id: format!("{}-{}", prefix, uuid::Uuid::new_v4()),
            book_id,
            student_id,
            issue_date,
            return_date: return_date_for(issue_date)?,
            status,
        })
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == IssueStatus::Issued && self.return_date < today
    }
}

pub fn return_date_for(issue_date: NaiveDate) -> Option<NaiveDate> {
    issue_date.checked_add_days(Days::new(LOAN_PERIOD_DAYS))
}

/// Issue record joined with what the listing page needs to show.
#[derive(Debug, Clone)]
pub struct IssueDetails {
    pub issue: IssueRecord,
    pub book_title: String,
    pub book_author: String,
    pub student_name: String,
    pub student_roll_no: String,
}

impl IssueDetails {
    pub fn new(issue: IssueRecord, book: Option<&Book>, student: Option<&Student>) -> Self {
        let (book_title, book_author) = match book {
            Some(b) => (b.title.clone(), b.author.clone()),
            None => ("Unknown Book".to_string(), "Unknown Author".to_string()),
        };
        let (student_name, student_roll_no) = match student {
            Some(s) => (s.name.clone(), s.roll_no.clone()),
            None => ("Unknown Student".to_string(), "N/A".to_string()),
        };

        Self {
            issue,
            book_title,
            book_author,
            student_name,
            student_roll_no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_return_date_crosses_month_boundary() {
        assert_eq!(return_date_for(date("2024-01-28")), Some(date("2024-02-04")));
        assert_eq!(return_date_for(date("2024-02-26")), Some(date("2024-03-04")));
    }

    #[test]
    fn test_no_record_past_the_last_date() {
        assert_eq!(return_date_for(NaiveDate::MAX), None);
        assert!(
            IssueRecord::new(
                "book-1".into(),
                "student-1".into(),
                NaiveDate::MAX,
                IssueStatus::Issued
            )
            .is_none()
        );
    }

    #[test]
    fn test_record_serializes_with_camel_case_fields() {
        let record = IssueRecord::new(
            "book-1".into(),
            "student-1".into(),
            date("2024-05-01"),
            IssueStatus::Requested,
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert!(record.id.starts_with("request-"));
        assert_eq!(json["bookId"], "book-1");
        assert_eq!(json["studentId"], "student-1");
        assert_eq!(json["issueDate"], "2024-05-01");
        assert_eq!(json["returnDate"], "2024-05-08");
        assert_eq!(json["status"], "requested");
    }

    #[test]
    fn test_only_issued_records_are_overdue() {
        let mut record = IssueRecord::new(
            "book-1".into(),
            "student-1".into(),
            date("2024-05-01"),
            IssueStatus::Requested,
        )
        .unwrap();
        assert!(!record.is_overdue(date("2024-06-01")));

        record.status = IssueStatus::Issued;
        assert!(record.is_overdue(date("2024-06-01")));
        assert!(!record.is_overdue(date("2024-05-08")));
    }

    #[test]
    fn test_unknown_references_get_placeholders() {
        let record = IssueRecord::new(
            "book-x".into(),
            "student-x".into(),
            date("2024-05-01"),
            IssueStatus::Issued,
        )
        .unwrap();
        let details = IssueDetails::new(record, None, None);

        assert_eq!(details.book_title, "Unknown Book");
        assert_eq!(details.book_author, "Unknown Author");
        assert_eq!(details.student_name, "Unknown Student");
        assert_eq!(details.student_roll_no, "N/A");
    }
}
