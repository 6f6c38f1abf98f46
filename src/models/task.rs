use serde::{Deserialize, Serialize};

use crate::core::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewTask {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TaskUpdate {
    pub description: String,
}

pub fn parse_task(body: &str) -> Result<Task, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(format!("task: {}", e)))
}
