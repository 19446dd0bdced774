use super::ContentQueryService;
use crate::{
    application::{dto::ContentItemDto, error::ApplicationResult},
    domain::content::ContentKind,
};

const DEFAULT_RECENT_LIMIT: u32 = 10;
const MAX_RECENT_LIMIT: u32 = 100;

impl ContentQueryService {
    /// Public listing; pending items are filtered out at the repository.
    pub async fn list_published(
        &self,
        kind: ContentKind,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        let items = self.read_repo.list_published(kind).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_category(&self, name: &str) -> ApplicationResult<Vec<ContentItemDto>> {
        let items = self.read_repo.list_published_by_category(name).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    /// Recently changed published articles, newest `updated_at` first.
    pub async fn list_recent(&self, limit: Option<u32>) -> ApplicationResult<Vec<ContentItemDto>> {
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .min(MAX_RECENT_LIMIT);
        let items = self.read_repo.list_recent_published(limit).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
