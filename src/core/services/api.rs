use super::http::{encode_body, execute_request, Method};
use crate::core::config::ApiConfig;
use crate::core::error::ApiError;
use crate::models::{
    parse_categories, parse_category, parse_task, Category, NewCategory, NewTask, Task, TaskUpdate,
};

// No auth headers, no timeouts, no retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let body = execute_request(Method::Get, &self.config.categories_url(), None).await?;
        parse_categories(&body)
    }

    pub async fn create_category(&self, new_category: &NewCategory) -> Result<Category, ApiError> {
        let payload = encode_body(new_category)?;
        let body = execute_request(Method::Post, &self.config.categories_url(), Some(payload)).await?;
        parse_category(&body)
    }

    // Response body is ignored
    pub async fn delete_category(&self, category_id: i64) -> Result<(), ApiError> {
        execute_request(Method::Delete, &self.config.category_url(category_id), None).await?;
        Ok(())
    }

    pub async fn create_task(&self, category_id: i64, new_task: &NewTask) -> Result<Task, ApiError> {
        let payload = encode_body(new_task)?;
        let body = execute_request(Method::Post, &self.config.tasks_url(category_id), Some(payload)).await?;
        parse_task(&body)
    }

    pub async fn update_task(&self, category_id: i64, task_id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        let payload = encode_body(update)?;
        let url = self.config.task_url(category_id, task_id);
        let body = execute_request(Method::Put, &url, Some(payload)).await?;
        parse_task(&body)
    }

    pub async fn delete_task(&self, category_id: i64, task_id: i64) -> Result<(), ApiError> {
        execute_request(Method::Delete, &self.config.task_url(category_id, task_id), None).await?;
        Ok(())
    }
}
