use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub username: String,
    pub password: String, // plaintext, demo only
    #[serde(rename = "rollNo")]
    pub roll_no: String,
}

/// Registration and edit form payload.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StudentInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub roll_no: String,
}

impl Student {
    pub fn new(input: StudentInput) -> Self {
        Self {
            id: format!("student-{}", uuid::Uuid::new_v4()),
            name: input.name,
            username: input.username,
            password: input.password,
            roll_no: input.roll_no,
        }
    }
}

/// A roster row: the student plus loan bookkeeping shown to admins.
#[derive(Debug, Clone)]
pub struct StudentWithLoans {
    pub student: Student,
    pub issued_count: usize,
    pub has_requests: bool,
}
