use std::collections::HashMap;

// Per-task edit bookkeeping. Each keystroke takes a new ticket and only the
// latest ticket may fire; sent updates are counted until they resolve.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditDebouncer {
    next_ticket: u64,
    pending: HashMap<i64, u64>,
    in_flight: HashMap<i64, u32>,
}

impl EditDebouncer {
    pub fn schedule(&mut self, task_id: i64) -> u64 {
        self.next_ticket += 1;
        self.pending.insert(task_id, self.next_ticket);
        self.next_ticket
    }

    // Consumes the pending entry if `ticket` is still current
    pub fn take_if_current(&mut self, task_id: i64, ticket: u64) -> bool {
        if self.pending.get(&task_id) == Some(&ticket) {
            self.pending.remove(&task_id);
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self, task_id: i64) {
        self.pending.remove(&task_id);
    }

    pub fn begin(&mut self, task_id: i64) {
        *self.in_flight.entry(task_id).or_insert(0) += 1;
    }

    pub fn finish(&mut self, task_id: i64) {
        if let Some(count) = self.in_flight.get_mut(&task_id) {
            *count -= 1;
            if *count == 0 {
                self.in_flight.remove(&task_id);
            }
        }
    }

    // Nothing waiting on a timer and nothing on the wire
    pub fn is_idle(&self, task_id: i64) -> bool {
        !self.pending.contains_key(&task_id) && !self.in_flight.contains_key(&task_id)
    }
}

// New value for a row's draft so it mirrors the confirmed description.
// Left alone while the user is in the field or an edit is still settling.
pub fn synced_draft(confirmed: Option<&str>, draft: &str, focused: bool, idle: bool) -> Option<String> {
    if focused || !idle {
        return None;
    }
    confirmed.filter(|c| *c != draft).map(str::to_string)
}
