// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{dto::CategoryCountDto, error::ApplicationResult},
    domain::{
        category::aggregate_categories,
        content::{ContentKind, ContentReadRepository},
    },
};

pub struct CategoryQueryService {
    read_repo: Arc<dyn ContentReadRepository>,
}

impl CategoryQueryService {
    pub fn new(read_repo: Arc<dyn ContentReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Recomputed from the live published-article view on every call; no
    /// cached counters to drift.
    pub async fn with_counts(&self) -> ApplicationResult<Vec<CategoryCountDto>> {
        let published = self.read_repo.list_published(ContentKind::Article).await?;
        Ok(aggregate_categories(&published)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
