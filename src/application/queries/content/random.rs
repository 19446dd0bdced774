use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::ContentKind,
};
use rand::Rng;

impl ContentQueryService {
    /// Uniformly random published article, the "random page" navigation
    /// affordance. Not found while nothing is published yet.
    pub async fn random_article(&self) -> ApplicationResult<ContentItemDto> {
        let mut items = self.read_repo.list_published(ContentKind::Article).await?;
        if items.is_empty() {
            return Err(ApplicationError::not_found("no published articles"));
        }
        let index = rand::rng().random_range(0..items.len());
        Ok(items.swap_remove(index).into())
    }
}
