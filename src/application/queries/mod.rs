pub mod categories;
pub mod content;
