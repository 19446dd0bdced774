pub mod sqlite_content;

pub use sqlite_content::{SqliteContentReadRepository, SqliteContentWriteRepository};
