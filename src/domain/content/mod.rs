pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContentItem, ContentPatch, NewContent};
pub use repository::{ContentReadRepository, ContentWriteRepository};
pub use value_objects::{
    AnnouncementContent, ArticleContent, ContentBody, ContentId, ContentKind, ContentStatus,
    Infobox, InfoboxRow, Section, Title, normalize_categories,
};
