use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::services::ApiClient;
use crate::features::board::debounce::EditDebouncer;
use crate::features::board::store::{BoardAction, BoardState, Outcome};
use crate::models::TaskUpdate;

pub fn dispatch(state: RwSignal<BoardState>, action: BoardAction) {
    state.update(|s| s.apply(action));
}

// The cause goes to the console, the fixed message goes to the page
fn resolve(state: RwSignal<BoardState>, outcome: Outcome) {
    match outcome {
        Ok(action) => dispatch(state, action),
        Err((failure, err)) => {
            web_sys::console::error_1(&format!("{} ({})", failure.message(), err).into());
            dispatch(state, BoardAction::Failed(failure));
        }
    }
}

// Initial read of the category collection
pub fn load_categories(client: ApiClient, state: RwSignal<BoardState>) {
    spawn_local(async move {
        let result = client.list_categories().await;
        if let Ok(categories) = &result {
            web_sys::console::log_1(&format!("Loaded {} categories", categories.len()).into());
        }
        resolve(state, BoardAction::after_load(result));
    });
}

pub fn add_category(client: ApiClient, state: RwSignal<BoardState>) {
    let Some(new_category) = state.with_untracked(|s| s.category_submission()) else {
        return;
    };

    spawn_local(async move {
        let result = client.create_category(&new_category).await;
        resolve(state, BoardAction::after_create_category(result));
    });
}

pub fn delete_category(client: ApiClient, state: RwSignal<BoardState>, category_id: i64) {
    spawn_local(async move {
        let result = client.delete_category(category_id).await;
        resolve(state, BoardAction::after_delete_category(category_id, result));
    });
}

pub fn add_task(client: ApiClient, state: RwSignal<BoardState>, category_id: i64) {
    let Some(new_task) = state.with_untracked(|s| s.task_submission(category_id)) else {
        return;
    };

    spawn_local(async move {
        let result = client.create_task(category_id, &new_task).await;
        resolve(state, BoardAction::after_create_task(category_id, result));
    });
}

// Sends the update right away, replacing any edit still waiting on its timer
pub fn submit_edit(
    client: ApiClient,
    state: RwSignal<BoardState>,
    debouncer: RwSignal<EditDebouncer>,
    category_id: i64,
    task_id: i64,
    update: TaskUpdate,
) {
    debouncer.update(|d| {
        d.cancel(task_id);
        d.begin(task_id);
    });

    spawn_local(async move {
        let result = client.update_task(category_id, task_id, &update).await;
        resolve(state, BoardAction::after_update_task(category_id, task_id, result));
        debouncer.try_update(|d| d.finish(task_id));
    });
}

pub fn commit_edit(
    client: ApiClient,
    state: RwSignal<BoardState>,
    debouncer: RwSignal<EditDebouncer>,
    category_id: i64,
    task_id: i64,
    draft: String,
    toward_row_action: bool,
) {
    let update = state.with_untracked(|s| s.edit_commit(category_id, task_id, &draft, toward_row_action));
    match update {
        Some(update) => submit_edit(client, state, debouncer, category_id, task_id, update),
        // The row's own button takes over any pending edit
        None if !toward_row_action => debouncer.update(|d| d.cancel(task_id)),
        None => {}
    }
}

pub fn schedule_edit(
    client: ApiClient,
    state: RwSignal<BoardState>,
    debouncer: RwSignal<EditDebouncer>,
    delay_ms: u32,
    category_id: i64,
    task_id: i64,
    draft: String,
) {
    let Some(ticket) = debouncer.try_update(|d| d.schedule(task_id)) else {
        return;
    };

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let fire = debouncer
            .try_update(|d| d.take_if_current(task_id, ticket))
            .unwrap_or(false);
        if fire {
            commit_edit(client, state, debouncer, category_id, task_id, draft, false);
        }
    });
}

pub fn delete_task(
    client: ApiClient,
    state: RwSignal<BoardState>,
    debouncer: RwSignal<EditDebouncer>,
    category_id: i64,
    task_id: i64,
) {
    debouncer.update(|d| d.cancel(task_id));

    spawn_local(async move {
        let result = client.delete_task(category_id, task_id).await;
        resolve(state, BoardAction::after_delete_task(category_id, task_id, result));
    });
}
