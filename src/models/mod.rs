pub mod book;
pub mod issue;
pub mod student;
pub mod user;

pub use book::{Book, BookInput};
pub use issue::{IssueDetails, IssueRecord, IssueStatus};
pub use student::{Student, StudentInput, StudentWithLoans};
pub use user::{CurrentUser, Role};
