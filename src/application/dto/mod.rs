pub mod categories;
pub mod content;

pub use categories::CategoryCountDto;
pub use content::{
    AnnouncementPayloadDto, ArticlePayloadDto, ContentItemDto, InfoboxDto, InfoboxRowDto,
    SectionDto,
};
