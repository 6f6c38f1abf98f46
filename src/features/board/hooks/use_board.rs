use leptos::prelude::*;

use crate::core::config::ApiConfig;
use crate::core::services::ApiClient;
use crate::features::board::debounce::EditDebouncer;
use crate::features::board::services::{
    add_category, add_task, commit_edit, delete_category, delete_task, dispatch, load_categories,
    schedule_edit, submit_edit,
};
use crate::features::board::store::{BoardAction, BoardState};
use crate::models::TaskUpdate;

// Copy handle to the board state and every operation on it
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub state: RwSignal<BoardState>,
    client: StoredValue<ApiClient>,
    debouncer: RwSignal<EditDebouncer>,
    edit_debounce_ms: u32,
}

pub fn use_board(config: ApiConfig) -> BoardHook {
    let edit_debounce_ms = config.edit_debounce_ms;
    let hook = BoardHook {
        state: RwSignal::new(BoardState::default()),
        client: StoredValue::new(ApiClient::new(config)),
        debouncer: RwSignal::new(EditDebouncer::default()),
        edit_debounce_ms,
    };

    // Load categories on mount
    load_categories(hook.client(), hook.state);

    hook
}

impl BoardHook {
    fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn stage_category_name(&self, name: String) {
        dispatch(self.state, BoardAction::CategoryNameStaged(name));
    }

    pub fn stage_task_input(&self, category_id: i64, text: String) {
        dispatch(self.state, BoardAction::TaskInputStaged { category_id, text });
    }

    pub fn add_category(&self) {
        add_category(self.client(), self.state);
    }

    pub fn delete_category(&self, category_id: i64) {
        delete_category(self.client(), self.state, category_id);
    }

    pub fn add_task(&self, category_id: i64) {
        add_task(self.client(), self.state, category_id);
    }

    pub fn schedule_edit(&self, category_id: i64, task_id: i64, description: String) {
        schedule_edit(
            self.client(),
            self.state,
            self.debouncer,
            self.edit_debounce_ms,
            category_id,
            task_id,
            description,
        );
    }

    pub fn commit_edit(&self, category_id: i64, task_id: i64, draft: String, toward_row_action: bool) {
        commit_edit(
            self.client(),
            self.state,
            self.debouncer,
            category_id,
            task_id,
            draft,
            toward_row_action,
        );
    }

    pub fn submit_edit(&self, category_id: i64, task_id: i64, description: String) {
        let update = TaskUpdate { description };
        submit_edit(self.client(), self.state, self.debouncer, category_id, task_id, update);
    }

    // Tracked, so effects re-run when an edit settles
    pub fn is_edit_idle(&self, task_id: i64) -> bool {
        self.debouncer.with(|d| d.is_idle(task_id))
    }

    pub fn delete_task(&self, category_id: i64, task_id: i64) {
        delete_task(self.client(), self.state, self.debouncer, category_id, task_id);
    }
}
