use thiserror::Error;

// Cause of a failed call. Only logged; the page shows the BoardFailure message
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("no browser window available")]
    Unavailable,
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardFailure {
    LoadCategories,
    AddCategory,
    DeleteCategory,
    AddTask,
    UpdateTask,
    DeleteTask,
}

impl BoardFailure {
    pub fn message(&self) -> &'static str {
        match self {
            BoardFailure::LoadCategories => "Failed to load categories. Please try again later.",
            BoardFailure::AddCategory => "Failed to add category.",
            BoardFailure::DeleteCategory => "Failed to delete category.",
            BoardFailure::AddTask => "Failed to add task.",
            BoardFailure::UpdateTask => "Failed to update task.",
            BoardFailure::DeleteTask => "Failed to delete task.",
        }
    }
}
