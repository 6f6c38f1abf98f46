pub mod category;
pub mod task;

// Payload types shared by the services and the board store
pub use category::{parse_categories, parse_category, Category, NewCategory};
pub use task::{parse_task, NewTask, Task, TaskUpdate};
