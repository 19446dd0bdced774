// src/domain/content/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub Uuid);

impl ContentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("malformed content id '{value}'")))
    }
}

impl From<ContentId> for Uuid {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Article,
    Announcement,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Announcement => "announcement",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(ContentKind::Article),
            "announcement" => Ok(ContentKind::Announcement),
            other => Err(DomainError::Validation(format!(
                "unknown content kind '{other}'"
            ))),
        }
    }
}

/// The only two statuses a record can ever hold. Rejection deletes the record
/// outright instead of parking it in a `rejected` state, so no such variant
/// exists here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentStatus {
    Pending,
    Published,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Pending => "pending",
            ContentStatus::Published => "published",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ContentStatus::Pending),
            "published" => Ok(ContentStatus::Published),
            other => Err(DomainError::Validation(format!(
                "unknown content status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ordered article section: heading, nesting level and pre-rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub level: u8,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoboxRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infobox {
    pub title: String,
    pub rows: Vec<InfoboxRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub intro: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infobox: Option<Infobox>,
    pub sections: Vec<Section>,
    pub see_also: Vec<String>,
    pub references: Vec<String>,
}

impl ArticleContent {
    pub fn new(
        intro: impl Into<String>,
        infobox: Option<Infobox>,
        sections: Vec<Section>,
        see_also: Vec<String>,
        references: Vec<String>,
    ) -> DomainResult<Self> {
        let intro = intro.into();
        if intro.trim().is_empty() {
            return Err(DomainError::Validation(
                "article intro cannot be empty".into(),
            ));
        }
        if sections.iter().any(|s| s.heading.trim().is_empty()) {
            return Err(DomainError::Validation(
                "section heading cannot be empty".into(),
            ));
        }
        Ok(Self {
            intro,
            infobox,
            sections,
            see_also,
            references,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementContent {
    pub description: String,
    pub images: Vec<String>,
    pub contact: String,
}

impl AnnouncementContent {
    pub fn new(
        description: impl Into<String>,
        images: Vec<String>,
        contact: impl Into<String>,
    ) -> DomainResult<Self> {
        let description = description.into();
        let contact = contact.into();
        if description.trim().is_empty() {
            return Err(DomainError::Validation(
                "announcement description cannot be empty".into(),
            ));
        }
        if contact.trim().is_empty() {
            return Err(DomainError::Validation(
                "announcement contact cannot be empty".into(),
            ));
        }
        Ok(Self {
            description,
            images,
            contact,
        })
    }
}

/// Kind-specific payload. The kind of an item is fixed at creation, so the
/// payload variant never changes over an item's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentBody {
    Article(ArticleContent),
    Announcement(AnnouncementContent),
}

impl ContentBody {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentBody::Article(_) => ContentKind::Article,
            ContentBody::Announcement(_) => ContentKind::Announcement,
        }
    }

    pub fn intro(&self) -> Option<&str> {
        match self {
            ContentBody::Article(article) => Some(article.intro.as_str()),
            ContentBody::Announcement(_) => None,
        }
    }
}

/// Trim labels, drop empties and duplicates; first-seen order is preserved
/// for display, aggregation does not care about order.
pub fn normalize_categories(names: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|existing: &String| existing == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    seen
}
