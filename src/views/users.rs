use maud::{Markup, html};

use crate::models::{Student, StudentWithLoans};

pub fn roster(rows: &[StudentWithLoans]) -> Markup {
    if rows.is_empty() {
        return html! { p { "No students registered." } };
    }

    html! {
        table {
            tr {
                th { "Name" } th { "Roll number" } th { "Username" } th { "Books" } th {}
            }
            @for row in rows {
                @let s = &row.student;
                tr {
                    td { (s.name) }
                    td { (s.roll_no) }
                    td { (s.username) }
                    td {
                        (row.issued_count)
                        @if row.has_requests {
                            " " span.badge.requested { "Pending request" }
                        }
                    }
                    td {
                        a href={ "/dashboard/users/edit/" (s.id) } { "Edit" }
                        form.inline method="post" action={ "/dashboard/users/delete/" (s.id) } {
                            button type="submit" { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

pub fn student_form(student: &Student) -> Markup {
    html! {
        form method="post" action={ "/dashboard/users/edit/" (student.id) } {
            label { "Name " input name="name" value=(student.name) required; }
            label { "Roll number " input name="roll_no" value=(student.roll_no) required; }
            label { "Username " input name="username" value=(student.username) required; }
            label {
                "Password "
                input name="password" type="password" placeholder="Leave blank to keep current";
            }
            button type="submit" { "Update Student" }
        }
    }
}
