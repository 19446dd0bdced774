mod create;
mod delete;
mod moderate;
mod service;
mod submit;
mod update;

pub use create::CreateArticleCommand;
pub use service::ContentCommandService;
pub use submit::{SubmitAnnouncementCommand, SubmitArticleCommand};
pub use update::UpdateContentCommand;
