pub const DEFAULT_API_URL: &str = "http://localhost:5005";
pub const DEFAULT_EDIT_DEBOUNCE_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub edit_debounce_ms: u32,
}

impl ApiConfig {
    // Read from the environment of the `trunk build` invocation
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TASK_BOARD_API_URL"),
            option_env!("TASK_BOARD_EDIT_DEBOUNCE_MS"),
        )
    }

    pub fn from_values(base_url: Option<&str>, edit_debounce_ms: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let edit_debounce_ms = edit_debounce_ms
            .and_then(|ms| ms.trim().parse().ok())
            .unwrap_or(DEFAULT_EDIT_DEBOUNCE_MS);

        Self { base_url, edit_debounce_ms }
    }

    pub fn categories_url(&self) -> String {
        format!("{}/api/categories", self.base_url)
    }

    pub fn category_url(&self, category_id: i64) -> String {
        format!("{}/{}", self.categories_url(), category_id)
    }

    pub fn tasks_url(&self, category_id: i64) -> String {
        format!("{}/tasks", self.category_url(category_id))
    }

    // Update and delete both use the category-scoped path
    pub fn task_url(&self, category_id: i64, task_id: i64) -> String {
        format!("{}/{}", self.tasks_url(category_id), task_id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
