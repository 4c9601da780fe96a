use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;
use serde::Deserialize;

use super::{finish, render};
use crate::infrastructure::AppState;
use crate::infrastructure::auth::Session;
use crate::infrastructure::session::FlashKind;
use crate::models::{CurrentUser, Role, StudentInput};
use crate::services::student_service;
use crate::views;

#[derive(Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Both student forms post here; `action` tells them apart.
#[derive(Deserialize)]
pub struct StudentLoginForm {
    #[serde(default)]
    action: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    roll_no: String,
}

pub async fn index(session: Session) -> Response {
    if session.user().is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    render(&session, "Library Management System", views::auth::landing()).into_response()
}

pub async fn admin_login_page(session: Session) -> Markup {
    render(&session, "Admin Login", views::auth::admin_login())
}

pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AdminLoginForm>,
) -> Response {
    tracing::info!("Admin login attempt for user: {}", form.username);

    if form.username == state.config.admin_username && form.password == state.config.admin_password
    {
        session.login(CurrentUser::admin());
        session.flash(FlashKind::Success, "Welcome back, Admin!");
        return Redirect::to("/dashboard").into_response();
    }

    tracing::warn!("Admin login failed for user: {}", form.username);
    session.flash(FlashKind::Error, "Invalid credentials. Please try again.");
    render(&session, "Admin Login", views::auth::admin_login()).into_response()
}

pub async fn student_login_page(session: Session) -> Markup {
    render(&session, "Student Login", views::auth::student_login())
}

pub async fn student_login(session: Session, Form(form): Form<StudentLoginForm>) -> Response {
    match form.action.as_str() {
        "login" => {
            tracing::info!("Student login attempt for user: {}", form.username);
            let found = session.library(|library| {
                student_service::authenticate(library, &form.username, &form.password)
                    .map(|s| CurrentUser {
                        id: s.id.clone(),
                        name: s.name.clone(),
                        role: Role::Student,
                    })
            });

            match found {
                Ok(user) => {
                    session.flash(FlashKind::Success, format!("Welcome back, {}!", user.name));
                    session.login(user);
                    Redirect::to("/dashboard").into_response()
                }
                Err(e) => {
                    tracing::warn!("Student login failed for user: {}", form.username);
                    session.flash(FlashKind::Error, e.to_string());
                    render(&session, "Student Login", views::auth::student_login())
                        .into_response()
                }
            }
        }
        "register" => {
            let input = StudentInput {
                name: form.name,
                username: form.username,
                password: form.password,
                roll_no: form.roll_no,
            };
            let result = session.library_mut(|library| student_service::register(library, input));
            finish(
                &session,
                result,
                "Registration successful! You can now login.",
                "/login/student",
                "/login/student",
            )
            .into_response()
        }
        _ => render(&session, "Student Login", views::auth::student_login()).into_response(),
    }
}

pub async fn logout(session: Session) -> Redirect {
    if let Some(user) = session.user() {
        tracing::info!("User {} logged out", user.id);
    }
    session.logout();
    session.flash(FlashKind::Success, "You have been logged out successfully.");
    Redirect::to("/")
}
