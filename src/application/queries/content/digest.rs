use super::ContentQueryService;
use crate::{application::error::ApplicationResult, domain::content::ContentKind};

const DIGEST_INTRO_CHARS: usize = 200;

impl ContentQueryService {
    /// Read-only text digest of published articles, fed as grounding context
    /// to the external chat collaborator. One line per article:
    /// `- {title}: {intro truncated to 200 chars}`.
    pub async fn published_digest(&self) -> ApplicationResult<String> {
        let articles = self.read_repo.list_published(ContentKind::Article).await?;

        let lines: Vec<String> = articles
            .into_iter()
            .map(|article| {
                let intro = article.body.intro().unwrap_or_default();
                let truncated: String = intro.chars().take(DIGEST_INTRO_CHARS).collect();
                let ellipsis = if intro.chars().count() > DIGEST_INTRO_CHARS {
                    "..."
                } else {
                    ""
                };
                format!("- {}: {truncated}{ellipsis}", article.title)
            })
            .collect();

        Ok(lines.join("\n"))
    }
}
