// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use veche::application::dto::{AnnouncementPayloadDto, ArticlePayloadDto};
use veche::domain::actor::ActorId;
use veche::domain::content::{
    AnnouncementContent, ArticleContent, ContentBody, ContentId, ContentItem, ContentKind,
    ContentStatus, Title,
};

pub struct ContentItemBuilder {
    kind: ContentKind,
    title: String,
    intro: String,
    categories: Vec<String>,
    status: ContentStatus,
    author_id: ActorId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContentItemBuilder {
    pub fn article(title: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Article,
            title: title.into(),
            intro: "intro text".into(),
            categories: vec![],
            status: ContentStatus::Pending,
            author_id: ActorId::generate(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn announcement(title: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Announcement,
            ..Self::article(title)
        }
    }

    pub fn published(mut self) -> Self {
        self.status = ContentStatus::Published;
        self
    }

    pub fn intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn author(mut self, author_id: ActorId) -> Self {
        self.author_id = author_id;
        self
    }

    /// Shifts both timestamps so ordering tests can stage history.
    pub fn aged(mut self, hours: i64) -> Self {
        self.created_at -= Duration::hours(hours);
        self.updated_at -= Duration::hours(hours);
        self
    }

    pub fn updated_hours_ago(mut self, hours: i64) -> Self {
        self.updated_at = Utc::now() - Duration::hours(hours);
        self
    }

    pub fn build(self) -> ContentItem {
        let body = match self.kind {
            ContentKind::Article => ContentBody::Article(
                ArticleContent::new(self.intro, None, vec![], vec![], vec![]).unwrap(),
            ),
            ContentKind::Announcement => ContentBody::Announcement(
                AnnouncementContent::new(self.intro, vec![], "@contact").unwrap(),
            ),
        };
        ContentItem {
            id: ContentId::generate(),
            kind: self.kind,
            title: Title::new(self.title).unwrap(),
            body,
            categories: self.categories,
            status: self.status,
            author_id: self.author_id,
            updated_by: "tester".into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub fn article_payload(intro: &str) -> ArticlePayloadDto {
    ArticlePayloadDto {
        intro: intro.into(),
        infobox: None,
        sections: vec![],
        see_also: vec![],
        references: vec![],
    }
}

pub fn announcement_payload(description: &str) -> AnnouncementPayloadDto {
    AnnouncementPayloadDto {
        description: description.into(),
        images: vec![],
        contact: "@contact".into(),
    }
}
