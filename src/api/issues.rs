use axum::{
    Form,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Local;
use maud::Markup;
use serde::Deserialize;

use super::{finish, render};
use crate::infrastructure::auth::{AdminUser, LoggedIn, Session};
use crate::models::Book;
use crate::services::issue_service;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct IssueForm {
    #[serde(default)]
    book: String,
    #[serde(default)]
    student: String,
    #[serde(default)]
    issue_date: String,
}

#[derive(Debug, Deserialize)]
pub struct RequestForm {
    #[serde(default)]
    book: String,
    #[serde(default)]
    issue_date: String,
}

fn available_books(session: &Session) -> Vec<Book> {
    session.library(|library| library.available_books().into_iter().cloned().collect())
}

pub async fn issue_book_page(_admin: AdminUser, session: Session) -> Markup {
    let books = available_books(&session);
    let students = session.library(|library| library.students.clone());
    let today = Local::now().date_naive();

    render(
        &session,
        "Issue Book",
        views::issues::issue_form(&books, &students, today),
    )
}

pub async fn issue_book(
    _admin: AdminUser,
    session: Session,
    Form(form): Form<IssueForm>,
) -> Redirect {
    let result = session.library_mut(|library| {
        issue_service::issue_book(library, &form.book, &form.student, &form.issue_date)
    });
    finish(
        &session,
        result,
        "Book issued successfully!",
        "/dashboard/issued-books",
        "/dashboard/issue-book",
    )
}

pub async fn request_book_page(LoggedIn(user): LoggedIn, session: Session) -> Response {
    if !user.is_student() {
        return Redirect::to("/dashboard/issue-book").into_response();
    }

    let books = available_books(&session);
    let today = Local::now().date_naive();
    render(
        &session,
        "Request Book",
        views::issues::request_form(&books, today),
    )
    .into_response()
}

pub async fn request_book(
    LoggedIn(user): LoggedIn,
    session: Session,
    Form(form): Form<RequestForm>,
) -> Redirect {
    if !user.is_student() {
        return Redirect::to("/dashboard/issue-book");
    }

    let result = session.library_mut(|library| {
        issue_service::request_book(library, &user.id, &form.book, &form.issue_date)
    });
    finish(
        &session,
        result,
        "Book request submitted successfully!",
        "/dashboard/issued-books",
        "/dashboard/request-book",
    )
}

pub async fn issued_books(LoggedIn(user): LoggedIn, session: Session) -> Markup {
    let details = session.library(|library| issue_service::issue_details(library, &user));
    let today = Local::now().date_naive();
    let title = if user.is_student() {
        "My Books"
    } else {
        "Issued Books"
    };

    render(
        &session,
        title,
        views::issues::issued_list(&details, &user, today),
    )
}

pub async fn return_book(
    LoggedIn(_user): LoggedIn,
    session: Session,
    Path(id): Path<String>,
) -> Redirect {
    let result = session.library_mut(|library| issue_service::return_book(library, &id));
    finish(
        &session,
        result,
        "Book returned successfully!",
        "/dashboard/issued-books",
        "/dashboard/issued-books",
    )
}

pub async fn approve_request(
    _admin: AdminUser,
    session: Session,
    Path(id): Path<String>,
) -> Redirect {
    let result = session.library_mut(|library| issue_service::approve_request(library, &id));
    finish(
        &session,
        result,
        "Book request approved!",
        "/dashboard/issued-books",
        "/dashboard/issued-books",
    )
}
