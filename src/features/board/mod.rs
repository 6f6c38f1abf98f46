pub mod components;
pub mod debounce;
pub mod hooks;
pub mod services;
pub mod store;

pub use components::*;
pub use hooks::*;
