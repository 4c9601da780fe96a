use maud::Markup;

use super::render;
use crate::infrastructure::auth::{LoggedIn, Session};
use crate::views;

pub async fn dashboard(LoggedIn(user): LoggedIn, session: Session) -> Markup {
    let summary = session.library(|library| library.summary(&user));
    render(
        &session,
        "Dashboard",
        views::dashboard::dashboard(&user, &summary),
    )
}
