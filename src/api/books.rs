use axum::{
    Form,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;

use super::{finish, render};
use crate::domain::{DomainError, Entity};
use crate::infrastructure::auth::{AdminUser, LoggedIn, Session};
use crate::infrastructure::session::FlashKind;
use crate::models::BookInput;
use crate::services::book_service;
use crate::views;

pub async fn list_books(LoggedIn(user): LoggedIn, session: Session) -> Markup {
    let (books, issued_ids) = session.library(|library| {
        let issued: Vec<String> = library
            .issued_books
            .iter()
            .map(|i| i.book_id.clone())
            .collect();
        (library.books.clone(), issued)
    });

    render(
        &session,
        "Books",
        views::books::book_list(&books, &issued_ids, user.is_admin()),
    )
}

pub async fn add_book_page(_admin: AdminUser, session: Session) -> Markup {
    render(
        &session,
        "Add Book",
        views::books::book_form("/dashboard/books/add", &BookInput::default(), "Add Book"),
    )
}

pub async fn add_book(
    _admin: AdminUser,
    session: Session,
    Form(input): Form<BookInput>,
) -> Redirect {
    let result = session.library_mut(|library| book_service::add_book(library, input));
    finish(
        &session,
        result,
        "Book added successfully!",
        "/dashboard/books",
        "/dashboard/books/add",
    )
}

pub async fn edit_book_page(
    _admin: AdminUser,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let Some(book) = session.library(|library| library.book(&id).cloned()) else {
        session.flash(
            FlashKind::Error,
            DomainError::NotFound(Entity::Book).to_string(),
        );
        return Redirect::to("/dashboard/books").into_response();
    };

    let action = format!("/dashboard/books/edit/{}", book.id);
    render(
        &session,
        "Edit Book",
        views::books::book_form(&action, &BookInput::from(&book), "Update Book"),
    )
    .into_response()
}

pub async fn edit_book(
    _admin: AdminUser,
    session: Session,
    Path(id): Path<String>,
    Form(input): Form<BookInput>,
) -> Redirect {
    let result = session.library_mut(|library| book_service::update_book(library, &id, input));

    // An unknown id has no edit page to go back to
    let err_to = match &result {
        Err(DomainError::NotFound(_)) => "/dashboard/books".to_string(),
        _ => format!("/dashboard/books/edit/{}", id),
    };
    finish(
        &session,
        result,
        "Book updated successfully!",
        "/dashboard/books",
        &err_to,
    )
}

pub async fn delete_book(
    _admin: AdminUser,
    session: Session,
    Path(id): Path<String>,
) -> Redirect {
    let result = session.library_mut(|library| book_service::delete_book(library, &id));
    finish(
        &session,
        result,
        "Book deleted successfully!",
        "/dashboard/books",
        "/dashboard/books",
    )
}
