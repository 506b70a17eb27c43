//! In-memory student roster.
//!
//! Process-wide and non-durable: empty at startup, mutated only by request
//! handlers, gone on restart. Not a substitute for the database.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::ToSchema;
use validator::Validate;

/// A student as submitted to the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Student {
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Default)]
pub struct StudentRoster {
    students: RwLock<Vec<Student>>,
}

impl StudentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a student, returning the roster size afterwards
    pub async fn add(&self, student: Student) -> usize {
        let mut students = self.students.write().await;
        students.push(student);
        students.len()
    }

    /// Snapshot of every student in arrival order
    pub async fn all(&self) -> Vec<Student> {
        self.students.read().await.clone()
    }
}
