use chrono::NaiveDate;
use maud::{Markup, html};

use super::options;
use crate::models::{Book, CurrentUser, IssueDetails, IssueStatus, Student};

fn book_options(books: &[Book]) -> Markup {
    options(
        books
            .iter()
            .map(|b| (b.id.as_str(), format!("{} by {}", b.title, b.author))),
        "Select a book",
    )
}

pub fn issue_form(books: &[Book], students: &[Student], today: NaiveDate) -> Markup {
    if students.is_empty() {
        return html! {
            p {
                "No students registered yet. Students sign up from the "
                a href="/login/student" { "student page" } "."
            }
        };
    }

    let student_options = options(
        students
            .iter()
            .map(|s| (s.id.as_str(), format!("{} ({})", s.name, s.roll_no))),
        "Select a student",
    );

    html! {
        form method="post" action="/dashboard/issue-book" {
            label { "Book " select name="book" { (book_options(books)) } }
            label { "Student " select name="student" { (student_options) } }
            label { "Issue date " input type="date" name="issue_date" value=(today); }
            p.hint { "Books are due back seven days after the issue date." }
            button type="submit" { "Issue Book" }
        }
    }
}

pub fn request_form(books: &[Book], today: NaiveDate) -> Markup {
    if books.is_empty() {
        return html! { p { "No books are available right now." } };
    }

    html! {
        form method="post" action="/dashboard/request-book" {
            label { "Book " select name="book" { (book_options(books)) } }
            label { "Pickup date " input type="date" name="issue_date" value=(today); }
            button type="submit" { "Request Book" }
        }
    }
}

// Badge class and label for a record
fn status_badge(details: &IssueDetails, today: NaiveDate) -> (&'static str, &'static str) {
    match details.issue.status {
        IssueStatus::Requested => ("requested", "Requested"),
        _ if details.issue.is_overdue(today) => ("overdue", "Overdue"),
        IssueStatus::Issued => ("issued", "Issued"),
    }
}

pub fn issued_list(details: &[IssueDetails], user: &CurrentUser, today: NaiveDate) -> Markup {
    if details.is_empty() {
        return html! { p { "No issued books." } };
    }

    html! {
        table {
            tr {
                th { "Book" } th { "Student" } th { "Issued" } th { "Due" } th { "Status" } th {}
            }
            @for d in details {
                @let issue = &d.issue;
                @let (class, label) = status_badge(d, today);
                @let requested = issue.status == IssueStatus::Requested;
                tr {
                    td { (d.book_title) br; small { (d.book_author) } }
                    td { (d.student_name) br; small { (d.student_roll_no) } }
                    td { (issue.issue_date) }
                    td { (issue.return_date) }
                    td { span class={ "badge " (class) } { (label) } }
                    td {
                        @if user.is_admin() && requested {
                            form.inline method="post" action={ "/dashboard/approve-request/" (issue.id) } {
                                button type="submit" { "Approve" }
                            }
                        }
                        form.inline method="post" action={ "/dashboard/return-book/" (issue.id) } {
                            button type="submit" { @if requested { "Cancel" } @else { "Return" } }
                        }
                    }
                }
            }
        }
    }
}
