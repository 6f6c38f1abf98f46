use std::collections::HashMap;

use crate::core::error::{ApiError, BoardFailure};
use crate::models::{Category, NewCategory, NewTask, Task, TaskUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub categories: Vec<Category>,
    pub new_category_name: String,
    pub task_inputs: HashMap<i64, String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    CategoryNameStaged(String),
    TaskInputStaged { category_id: i64, text: String },
    CategoriesLoaded(Vec<Category>),
    CategoryCreated(Category),
    CategoryDeleted(i64),
    TaskCreated { category_id: i64, task: Task },
    TaskUpdated { category_id: i64, task_id: i64, task: Task },
    TaskDeleted { category_id: i64, task_id: i64 },
    Failed(BoardFailure),
}

// A finished request resolves to the action to apply, or the failure and its cause
pub type Outcome = Result<BoardAction, (BoardFailure, ApiError)>;

impl BoardAction {
    pub fn after_load(result: Result<Vec<Category>, ApiError>) -> Outcome {
        result
            .map(BoardAction::CategoriesLoaded)
            .map_err(|e| (BoardFailure::LoadCategories, e))
    }

    pub fn after_create_category(result: Result<Category, ApiError>) -> Outcome {
        result
            .map(BoardAction::CategoryCreated)
            .map_err(|e| (BoardFailure::AddCategory, e))
    }

    pub fn after_delete_category(category_id: i64, result: Result<(), ApiError>) -> Outcome {
        result
            .map(|()| BoardAction::CategoryDeleted(category_id))
            .map_err(|e| (BoardFailure::DeleteCategory, e))
    }

    pub fn after_create_task(category_id: i64, result: Result<Task, ApiError>) -> Outcome {
        result
            .map(|task| BoardAction::TaskCreated { category_id, task })
            .map_err(|e| (BoardFailure::AddTask, e))
    }

    pub fn after_update_task(category_id: i64, task_id: i64, result: Result<Task, ApiError>) -> Outcome {
        result
            .map(|task| BoardAction::TaskUpdated { category_id, task_id, task })
            .map_err(|e| (BoardFailure::UpdateTask, e))
    }

    pub fn after_delete_task(category_id: i64, task_id: i64, result: Result<(), ApiError>) -> Outcome {
        result
            .map(|()| BoardAction::TaskDeleted { category_id, task_id })
            .map_err(|e| (BoardFailure::DeleteTask, e))
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl BoardState {
    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::CategoryNameStaged(name) => {
                self.new_category_name = name;
            }
            BoardAction::TaskInputStaged { category_id, text } => {
                self.task_inputs.insert(category_id, text);
            }
            BoardAction::CategoriesLoaded(categories) => {
                self.categories = categories;
            }
            BoardAction::CategoryCreated(category) => {
                self.categories.push(Category { tasks: Vec::new(), ..category });
                self.new_category_name.clear();
            }
            BoardAction::CategoryDeleted(category_id) => {
                self.categories.retain(|c| c.id != category_id);
                self.task_inputs.remove(&category_id);
            }
            BoardAction::TaskCreated { category_id, task } => {
                if let Some(category) = self.category_mut(category_id) {
                    category.tasks.push(task);
                }
                // Only this category's staged text is reset
                if let Some(input) = self.task_inputs.get_mut(&category_id) {
                    input.clear();
                }
            }
            BoardAction::TaskUpdated { category_id, task_id, task } => {
                if let Some(slot) = self
                    .category_mut(category_id)
                    .and_then(|c| c.tasks.iter_mut().find(|t| t.id == task_id))
                {
                    *slot = task;
                }
            }
            BoardAction::TaskDeleted { category_id, task_id } => {
                if let Some(category) = self.category_mut(category_id) {
                    category.tasks.retain(|t| t.id != task_id);
                }
            }
            BoardAction::Failed(failure) => {
                self.error = Some(failure.message().to_string());
            }
        }
    }

    pub fn category(&self, category_id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    fn category_mut(&mut self, category_id: i64) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    pub fn task(&self, category_id: i64, task_id: i64) -> Option<&Task> {
        self.category(category_id)
            .and_then(|c| c.tasks.iter().find(|t| t.id == task_id))
    }

    pub fn task_input(&self, category_id: i64) -> &str {
        self.task_inputs.get(&category_id).map(String::as_str).unwrap_or("")
    }

    pub fn category_submission(&self) -> Option<NewCategory> {
        if is_blank(&self.new_category_name) {
            return None;
        }
        Some(NewCategory { name: self.new_category_name.clone() })
    }

    pub fn task_submission(&self, category_id: i64) -> Option<NewTask> {
        let description = self.task_input(category_id);
        if is_blank(description) {
            return None;
        }
        Some(NewTask { description: description.to_string() })
    }

    // Blur or idle timer: only send a draft that differs from the confirmed description.
    // Focus moving to the row's own Edit/Done button sends nothing; those buttons act themselves.
    pub fn edit_commit(
        &self,
        category_id: i64,
        task_id: i64,
        draft: &str,
        toward_row_action: bool,
    ) -> Option<TaskUpdate> {
        if toward_row_action {
            return None;
        }
        let task = self.task(category_id, task_id)?;
        if task.description == draft {
            return None;
        }
        Some(TaskUpdate { description: draft.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, description: &str) -> Task {
        Task { id, description: description.to_string() }
    }

    fn category(id: i64, name: &str, tasks: Vec<Task>) -> Category {
        Category { id, name: name.to_string(), tasks }
    }

    fn loaded_board() -> BoardState {
        let mut state = BoardState::default();
        state.apply(BoardAction::CategoriesLoaded(vec![
            category(7, "Groceries", vec![task(41, "Bread"), task(42, "Buy milk"), task(43, "Eggs")]),
            category(8, "Chores", vec![task(50, "Laundry")]),
        ]));
        state
    }

    #[test]
    fn blank_category_name_is_not_submitted() {
        let mut state = loaded_board();
        assert_eq!(state.category_submission(), None);

        state.apply(BoardAction::CategoryNameStaged("   \t".into()));
        assert_eq!(state.category_submission(), None);
        assert_eq!(state.categories.len(), 2);
    }

    #[test]
    fn category_name_is_submitted_as_typed() {
        let mut state = BoardState::default();
        state.apply(BoardAction::CategoryNameStaged(" Groceries".into()));
        assert_eq!(state.category_submission(), Some(NewCategory { name: " Groceries".into() }));
    }

    #[test]
    fn created_category_is_appended_with_empty_tasks() {
        let mut state = BoardState::default();
        state.apply(BoardAction::CategoriesLoaded(vec![category(1, "Work", vec![task(2, "Report")])]));
        state.apply(BoardAction::CategoryNameStaged("Groceries".into()));

        state.apply(BoardAction::CategoryCreated(category(7, "Groceries", vec![task(99, "stray")])));

        assert_eq!(state.categories.last(), Some(&category(7, "Groceries", vec![])));
        assert_eq!(state.categories.len(), 2);
        assert_eq!(state.new_category_name, "");
    }

    #[test]
    fn failed_category_creation_keeps_staged_name() {
        let mut state = BoardState::default();
        state.apply(BoardAction::CategoryNameStaged("Groceries".into()));
        state.apply(BoardAction::Failed(BoardFailure::AddCategory));

        assert_eq!(state.new_category_name, "Groceries");
        assert!(state.categories.is_empty());
        assert_eq!(state.error.as_deref(), Some(BoardFailure::AddCategory.message()));
    }

    #[test]
    fn deleting_category_removes_only_that_category() {
        let mut state = loaded_board();
        state.apply(BoardAction::Failed(BoardFailure::UpdateTask));
        state.apply(BoardAction::TaskInputStaged { category_id: 7, text: "half typed".into() });

        state.apply(BoardAction::CategoryDeleted(7));

        assert_eq!(state.categories.len(), 1);
        assert_eq!(state.categories[0].id, 8);
        assert_eq!(state.task_input(7), "");
        // Success never clears the error slot
        assert_eq!(state.error.as_deref(), Some(BoardFailure::UpdateTask.message()));
    }

    #[test]
    fn blank_task_input_is_not_submitted() {
        let mut state = loaded_board();
        assert_eq!(state.task_submission(7), None);

        state.apply(BoardAction::TaskInputStaged { category_id: 7, text: "  ".into() });
        assert_eq!(state.task_submission(7), None);
        assert_eq!(state.category(7).unwrap().tasks.len(), 3);
    }

    #[test]
    fn created_task_is_appended_and_only_its_input_cleared() {
        let mut state = loaded_board();
        state.apply(BoardAction::TaskInputStaged { category_id: 7, text: "Buy milk".into() });
        state.apply(BoardAction::TaskInputStaged { category_id: 8, text: "Vacuum".into() });
        assert_eq!(state.task_submission(7), Some(NewTask { description: "Buy milk".into() }));

        state.apply(BoardAction::TaskCreated { category_id: 7, task: task(44, "Buy milk") });

        assert_eq!(state.category(7).unwrap().tasks.last(), Some(&task(44, "Buy milk")));
        assert_eq!(state.task_input(7), "");
        assert_eq!(state.task_input(8), "Vacuum");
    }

    #[test]
    fn updated_task_is_replaced_in_place() {
        let mut state = loaded_board();

        state.apply(BoardAction::TaskUpdated { category_id: 7, task_id: 42, task: task(42, "Buy oat milk") });

        let tasks = &state.category(7).unwrap().tasks;
        assert_eq!(tasks, &vec![task(41, "Bread"), task(42, "Buy oat milk"), task(43, "Eggs")]);
        assert_eq!(state.category(8).unwrap().tasks, vec![task(50, "Laundry")]);
    }

    #[test]
    fn late_update_for_deleted_category_is_a_no_op() {
        let mut state = loaded_board();
        state.apply(BoardAction::CategoryDeleted(7));
        let before = state.clone();

        state.apply(BoardAction::TaskUpdated { category_id: 7, task_id: 42, task: task(42, "Buy oat milk") });
        state.apply(BoardAction::TaskCreated { category_id: 7, task: task(44, "Late") });

        assert_eq!(state.categories, before.categories);
    }

    #[test]
    fn load_failure_leaves_categories_empty() {
        let mut state = BoardState::default();
        state.apply(BoardAction::Failed(BoardFailure::LoadCategories));

        assert!(state.categories.is_empty());
        assert_eq!(state.error.as_deref(), Some(BoardFailure::LoadCategories.message()));
    }

    #[test]
    fn latest_failure_overwrites_error() {
        let mut state = BoardState::default();
        state.apply(BoardAction::Failed(BoardFailure::AddTask));
        state.apply(BoardAction::Failed(BoardFailure::DeleteTask));
        assert_eq!(state.error.as_deref(), Some(BoardFailure::DeleteTask.message()));
    }

    #[test]
    fn deleting_task_leaves_other_categories_untouched() {
        let mut state = loaded_board();

        state.apply(BoardAction::TaskDeleted { category_id: 7, task_id: 42 });

        assert_eq!(state.category(7).unwrap().tasks, vec![task(41, "Bread"), task(43, "Eggs")]);
        assert_eq!(state.category(8).unwrap().tasks, vec![task(50, "Laundry")]);
    }

    #[test]
    fn load_replaces_previous_categories() {
        let mut state = loaded_board();
        state.apply(BoardAction::CategoriesLoaded(vec![category(9, "Only", vec![])]));
        assert_eq!(state.categories, vec![category(9, "Only", vec![])]);
    }

    #[test]
    fn update_replaces_the_requested_task_with_the_server_record() {
        let mut state = loaded_board();

        // Server record carries another id; the slot that was asked for is the one replaced
        state.apply(BoardAction::TaskUpdated { category_id: 7, task_id: 42, task: task(420, "Buy oat milk") });

        let ids: Vec<_> = state.category(7).unwrap().tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![41, 420, 43]);
    }

    fn network() -> ApiError {
        ApiError::Network("connection refused".into())
    }

    #[test]
    fn each_request_failure_maps_to_its_own_message() {
        let cases = [
            (BoardAction::after_load(Err(network())), BoardFailure::LoadCategories),
            (BoardAction::after_create_category(Err(network())), BoardFailure::AddCategory),
            (BoardAction::after_delete_category(7, Err(network())), BoardFailure::DeleteCategory),
            (BoardAction::after_create_task(7, Err(network())), BoardFailure::AddTask),
            (BoardAction::after_update_task(7, 42, Err(network())), BoardFailure::UpdateTask),
            (BoardAction::after_delete_task(7, 42, Err(network())), BoardFailure::DeleteTask),
        ];
        for (outcome, expected) in cases {
            assert_eq!(outcome, Err((expected, network())));
        }
    }

    #[test]
    fn successful_requests_map_to_their_actions() {
        assert_eq!(
            BoardAction::after_create_category(Ok(category(7, "Groceries", vec![]))),
            Ok(BoardAction::CategoryCreated(category(7, "Groceries", vec![])))
        );
        assert_eq!(BoardAction::after_delete_category(7, Ok(())), Ok(BoardAction::CategoryDeleted(7)));
        assert_eq!(
            BoardAction::after_create_task(7, Ok(task(44, "Buy milk"))),
            Ok(BoardAction::TaskCreated { category_id: 7, task: task(44, "Buy milk") })
        );
        assert_eq!(
            BoardAction::after_update_task(7, 42, Ok(task(42, "Buy oat milk"))),
            Ok(BoardAction::TaskUpdated { category_id: 7, task_id: 42, task: task(42, "Buy oat milk") })
        );
        assert_eq!(
            BoardAction::after_delete_task(7, 42, Ok(())),
            Ok(BoardAction::TaskDeleted { category_id: 7, task_id: 42 })
        );
    }

    #[test]
    fn failed_load_keeps_empty_board() {
        let mut state = BoardState::default();
        let (failure, _) = BoardAction::after_load(Err(ApiError::Status(503))).unwrap_err();
        state.apply(BoardAction::Failed(failure));

        assert!(state.categories.is_empty());
        assert_eq!(state.error.as_deref(), Some(BoardFailure::LoadCategories.message()));
    }

    #[test]
    fn unchanged_draft_is_not_committed() {
        let state = loaded_board();
        assert_eq!(state.edit_commit(7, 42, "Buy milk", false), None);
    }

    #[test]
    fn changed_draft_is_committed() {
        let state = loaded_board();
        assert_eq!(
            state.edit_commit(7, 42, "Buy oat milk", false),
            Some(TaskUpdate { description: "Buy oat milk".into() })
        );
    }

    #[test]
    fn blur_toward_row_button_leaves_commit_to_the_button() {
        let state = loaded_board();
        assert_eq!(state.edit_commit(7, 42, "Buy oat milk", true), None);
    }

    #[test]
    fn draft_for_removed_task_is_not_committed() {
        let mut state = loaded_board();
        state.apply(BoardAction::TaskDeleted { category_id: 7, task_id: 42 });
        assert_eq!(state.edit_commit(7, 42, "Buy oat milk", false), None);
    }
}
