pub mod auth;
pub mod books;
pub mod dashboard;
pub mod health;
pub mod issues;
pub mod lookup;
pub mod users;

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use maud::Markup;
use serde_json::json;

use crate::domain::{DomainError, Entity};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::{Session, session_middleware};
use crate::infrastructure::session::FlashKind;
use crate::views;

pub fn api_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/", get(auth::index))
        // Login
        .route(
            "/login/admin",
            get(auth::admin_login_page).post(auth::admin_login),
        )
        .route(
            "/login/student",
            get(auth::student_login_page).post(auth::student_login),
        )
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(dashboard::dashboard))
        // Catalog
        .route("/dashboard/books", get(books::list_books))
        .route(
            "/dashboard/books/add",
            get(books::add_book_page).post(books::add_book),
        )
        .route(
            "/dashboard/books/edit/:id",
            get(books::edit_book_page).post(books::edit_book),
        )
        .route("/dashboard/books/delete/:id", post(books::delete_book))
        // Loans
        .route(
            "/dashboard/issue-book",
            get(issues::issue_book_page).post(issues::issue_book),
        )
        .route(
            "/dashboard/request-book",
            get(issues::request_book_page).post(issues::request_book),
        )
        .route("/dashboard/issued-books", get(issues::issued_books))
        .route("/dashboard/return-book/:id", post(issues::return_book))
        .route(
            "/dashboard/approve-request/:id",
            post(issues::approve_request),
        )
        // Roster
        .route("/dashboard/users", get(users::list_users))
        .route(
            "/dashboard/users/edit/:id",
            get(users::edit_user_page).post(users::edit_user),
        )
        .route("/dashboard/users/delete/:id", post(users::delete_user))
        // JSON lookups
        .route("/api/books/:id", get(lookup::get_book))
        .route("/api/students/:id", get(lookup::get_student))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .merge(session_routes)
        .route("/api/health", get(health::health_check))
        .with_state(state)
}

/// Render a full page, consuming the session's pending flashes.
pub(crate) fn render(session: &Session, title: &str, body: Markup) -> Markup {
    let user = session.user();
    let flashes = session.take_flashes();
    views::layout(title, user.as_ref(), &flashes, body)
}

/// Flash the outcome of a mutation and redirect: `ok_to` on success with
/// `success` as message, `err_to` with the error's message otherwise.
pub(crate) fn finish<T>(
    session: &Session,
    result: Result<T, DomainError>,
    success: &str,
    ok_to: &str,
    err_to: &str,
) -> Redirect {
    match result {
        Ok(_) => {
            session.flash(FlashKind::Success, success);
            Redirect::to(ok_to)
        }
        Err(e) => {
            tracing::debug!("Rejected: {}", e);
            session.flash(FlashKind::Error, e.to_string());
            Redirect::to(err_to)
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match self {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::DuplicateIsbn
            | DomainError::DuplicateUsername
            | DomainError::BookIssued
            | DomainError::StudentHasIssues => StatusCode::CONFLICT,
            DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        let message = match &self {
            DomainError::NotFound(Entity::Book) => "Book not found".to_string(),
            DomainError::NotFound(Entity::Student) => "Student not found".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
