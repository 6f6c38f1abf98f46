pub mod api;
pub mod http;

pub use api::*;
