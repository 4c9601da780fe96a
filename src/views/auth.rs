use maud::{Markup, html};

pub fn landing() -> Markup {
    html! {
        p { "Manage the catalog, students and loans, or browse and request books." }
        ul.choices {
            li { a.button href="/login/admin" { "Admin login" } }
            li { a.button href="/login/student" { "Student login / register" } }
        }
    }
}

pub fn admin_login() -> Markup {
    html! {
        form method="post" action="/login/admin" {
            label { "Username " input name="username" required; }
            label { "Password " input name="password" type="password" required; }
            button type="submit" { "Login" }
        }
    }
}

pub fn student_login() -> Markup {
    html! {
        section {
            h2 { "Login" }
            form method="post" action="/login/student" {
                input type="hidden" name="action" value="login";
                label { "Username " input name="username" required; }
                label { "Password " input name="password" type="password" required; }
                button type="submit" { "Login" }
            }
        }
        section {
            h2 { "Register" }
            form method="post" action="/login/student" {
                input type="hidden" name="action" value="register";
                label { "Name " input name="name" required; }
                label { "Roll number " input name="roll_no" required; }
                label { "Username " input name="username" required; }
                label { "Password " input name="password" type="password" required; }
                button type="submit" { "Register" }
            }
        }
    }
}
