pub mod actor;
pub mod category;
pub mod content;
pub mod errors;
