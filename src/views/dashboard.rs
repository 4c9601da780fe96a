use maud::{Markup, html};

use crate::domain::Summary;
use crate::models::CurrentUser;

pub fn dashboard(user: &CurrentUser, summary: &Summary) -> Markup {
    let mut cards = vec![
        ("Total books", summary.total_books),
        ("Available books", summary.available_books),
    ];
    if user.is_admin() {
        cards.push(("Students", summary.total_students));
        cards.push(("Issue records", summary.total_issued));
    } else {
        cards.push(("My books", summary.user_issued));
    }

    html! {
        p { "Welcome, " (user.name) "." }
        div.cards {
            @for (label, value) in cards {
                div.card {
                    span.value { (value) }
                    span.label { (label) }
                }
            }
        }
    }
}
