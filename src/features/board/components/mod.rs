pub mod category_card;
pub mod error_banner;
pub mod task_row;

pub use category_card::CategoryCard;
pub use error_banner::ErrorBanner;
pub use task_row::TaskRow;
