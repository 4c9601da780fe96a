use axum::{
    Form,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;

use super::{finish, render};
use crate::domain::{DomainError, Entity};
use crate::infrastructure::auth::{AdminUser, Session};
use crate::infrastructure::session::FlashKind;
use crate::models::StudentInput;
use crate::services::student_service;
use crate::views;

pub async fn list_users(_admin: AdminUser, session: Session) -> Markup {
    let rows = session.library(student_service::roster);
    render(&session, "Students", views::users::roster(&rows))
}

pub async fn edit_user_page(
    _admin: AdminUser,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let Some(student) = session.library(|library| library.student(&id).cloned()) else {
        session.flash(
            FlashKind::Error,
            DomainError::NotFound(Entity::Student).to_string(),
        );
        return Redirect::to("/dashboard/users").into_response();
    };

    render(
        &session,
        "Edit Student",
        views::users::student_form(&student),
    )
    .into_response()
}

pub async fn edit_user(
    _admin: AdminUser,
    session: Session,
    Path(id): Path<String>,
    Form(input): Form<StudentInput>,
) -> Redirect {
    let result =
        session.library_mut(|library| student_service::update_student(library, &id, input));

    let err_to = match &result {
        Err(DomainError::NotFound(_)) => "/dashboard/users".to_string(),
        _ => format!("/dashboard/users/edit/{}", id),
    };
    finish(
        &session,
        result,
        "Student updated successfully!",
        "/dashboard/users",
        &err_to,
    )
}

pub async fn delete_user(
    _admin: AdminUser,
    session: Session,
    Path(id): Path<String>,
) -> Redirect {
    let result = session.library_mut(|library| student_service::delete_student(library, &id));
    finish(
        &session,
        result,
        "Student deleted successfully!",
        "/dashboard/users",
        "/dashboard/users",
    )
}
