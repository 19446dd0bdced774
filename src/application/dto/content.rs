use crate::domain::content::{
    AnnouncementContent, ArticleContent, ContentBody, ContentItem, Infobox, InfoboxRow, Section,
};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionDto {
    pub heading: String,
    pub level: u8,
    pub html: String,
}

impl From<Section> for SectionDto {
    fn from(section: Section) -> Self {
        Self {
            heading: section.heading,
            level: section.level,
            html: section.html,
        }
    }
}

impl From<SectionDto> for Section {
    fn from(dto: SectionDto) -> Self {
        Self {
            heading: dto.heading,
            level: dto.level,
            html: dto.html,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoboxRowDto {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoboxDto {
    pub title: String,
    pub rows: Vec<InfoboxRowDto>,
}

impl From<Infobox> for InfoboxDto {
    fn from(infobox: Infobox) -> Self {
        Self {
            title: infobox.title,
            rows: infobox
                .rows
                .into_iter()
                .map(|row| InfoboxRowDto {
                    label: row.label,
                    value: row.value,
                })
                .collect(),
        }
    }
}

impl From<InfoboxDto> for Infobox {
    fn from(dto: InfoboxDto) -> Self {
        Self {
            title: dto.title,
            rows: dto
                .rows
                .into_iter()
                .map(|row| InfoboxRow {
                    label: row.label,
                    value: row.value,
                })
                .collect(),
        }
    }
}

/// Article payload as accepted from and returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticlePayloadDto {
    pub intro: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infobox: Option<InfoboxDto>,
    #[serde(default)]
    pub sections: Vec<SectionDto>,
    #[serde(default)]
    pub see_also: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

impl ArticlePayloadDto {
    pub fn into_domain(self) -> DomainResult<ArticleContent> {
        ArticleContent::new(
            self.intro,
            self.infobox.map(Into::into),
            self.sections.into_iter().map(Into::into).collect(),
            self.see_also,
            self.references,
        )
    }
}

impl From<ArticleContent> for ArticlePayloadDto {
    fn from(content: ArticleContent) -> Self {
        Self {
            intro: content.intro,
            infobox: content.infobox.map(Into::into),
            sections: content.sections.into_iter().map(Into::into).collect(),
            see_also: content.see_also,
            references: content.references,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementPayloadDto {
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub contact: String,
}

impl AnnouncementPayloadDto {
    pub fn into_domain(self) -> DomainResult<AnnouncementContent> {
        AnnouncementContent::new(self.description, self.images, self.contact)
    }
}

impl From<AnnouncementContent> for AnnouncementPayloadDto {
    fn from(content: AnnouncementContent) -> Self {
        Self {
            description: content.description,
            images: content.images,
            contact: content.contact,
        }
    }
}

/// Wire shape shared by articles and announcements; exactly one of `article`
/// and `announcement` is present, matching `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentItemDto {
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticlePayloadDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement: Option<AnnouncementPayloadDto>,
    pub categories: Vec<String>,
    pub status: String,
    pub author_id: Uuid,
    pub updated_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentItem> for ContentItemDto {
    fn from(item: ContentItem) -> Self {
        let (article, announcement) = match item.body {
            ContentBody::Article(content) => (Some(content.into()), None),
            ContentBody::Announcement(content) => (None, Some(content.into())),
        };
        Self {
            id: item.id.into(),
            kind: item.kind.as_str().to_string(),
            title: item.title.into(),
            article,
            announcement,
            categories: item.categories,
            status: item.status.as_str().to_string(),
            author_id: item.author_id.into(),
            updated_by: item.updated_by,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
