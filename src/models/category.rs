use serde::{Deserialize, Serialize};

use super::Task;
use crate::core::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    // Create responses omit the task list
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

pub fn parse_categories(body: &str) -> Result<Vec<Category>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(format!("category list: {}", e)))
}

pub fn parse_category(body: &str) -> Result<Category, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(format!("category: {}", e)))
}
