pub mod announcements;
pub mod articles;
pub mod categories;
pub mod content;
pub mod moderation;
