// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::content::ContentCommandService,
        ports::{security::ActorTokenVerifier, time::Clock},
        queries::{categories::CategoryQueryService, content::ContentQueryService},
    },
    domain::content::{ContentReadRepository, ContentWriteRepository},
};

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    actor_tokens: Arc<dyn ActorTokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        actor_tokens: Arc<dyn ActorTokenVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&write_repo),
            Arc::clone(&read_repo),
            Arc::clone(&clock),
        ));
        let content_queries = Arc::new(ContentQueryService::new(Arc::clone(&read_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&read_repo)));

        Self {
            content_commands,
            content_queries,
            category_queries,
            actor_tokens,
        }
    }

    pub fn actor_tokens(&self) -> Arc<dyn ActorTokenVerifier> {
        Arc::clone(&self.actor_tokens)
    }
}
