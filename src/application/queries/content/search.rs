use super::ContentQueryService;
use crate::{
    application::{dto::ContentItemDto, error::ApplicationResult},
    domain::content::ContentKind,
};

impl ContentQueryService {
    /// Case-insensitive substring search over published items only. A blank
    /// query degrades to the plain published listing.
    pub async fn search(
        &self,
        kind: ContentKind,
        query: &str,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return self.list_published(kind).await;
        }

        let items = self.read_repo.search_published(kind, trimmed).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
