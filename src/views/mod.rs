//! HTML rendering with `maud`. Pages render their body as [`Markup`] and
//! [`layout`] wraps it with navigation and pending flashes.

pub mod auth;
pub mod books;
pub mod dashboard;
pub mod issues;
pub mod users;

use maud::{DOCTYPE, Markup, html};

use crate::infrastructure::session::{Flash, FlashKind};
use crate::models::CurrentUser;

fn nav(user: Option<&CurrentUser>) -> Markup {
    let Some(user) = user else {
        return html! { nav { a href="/" { "Library" } } };
    };

    let mut links = vec![
        ("/dashboard", "Dashboard"),
        ("/dashboard/books", "Books"),
        ("/dashboard/issued-books", "Issued Books"),
    ];
    if user.is_admin() {
        links.push(("/dashboard/books/add", "Add Book"));
        links.push(("/dashboard/issue-book", "Issue Book"));
        links.push(("/dashboard/users", "Students"));
    } else {
        links.push(("/dashboard/request-book", "Request Book"));
    }
    let role = if user.is_admin() { "admin" } else { "student" };

    html! {
        nav {
            @for (href, label) in links {
                a href=(href) { (label) }
            }
            span.who { (user.name) " (" (role) ")" }
            a href="/logout" { "Logout" }
        }
    }
}

fn flashes(flashes: &[Flash]) -> Markup {
    html! {
        @for flash in flashes {
            @let class = match flash.kind {
                FlashKind::Success => "success",
                FlashKind::Error => "error",
            };
            div class={ "flash " (class) } { (flash.message) }
        }
    }
}

pub fn layout(title: &str, user: Option<&CurrentUser>, pending: &[Flash], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " | Library Management" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                (nav(user))
                main {
                    (flashes(pending))
                    h1 { (title) }
                    (body)
                }
            }
        }
    }
}

/// `<option>` list led by an empty placeholder entry.
pub(crate) fn options<'a>(
    items: impl Iterator<Item = (&'a str, String)>,
    placeholder: &str,
) -> Markup {
    html! {
        option value="" { (placeholder) }
        @for (value, label) in items {
            option value=(value) { (label) }
        }
    }
}
