// src/domain/category.rs
use crate::domain::content::ContentItem;
use std::collections::HashMap;

/// Derived aggregate: one entry per category name referenced by at least one
/// currently published article. Never stored, always recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}

/// Tally category references across the given published articles. The input
/// is expected to be the repository's published-article view; a name that no
/// published article references simply does not appear. Entries come back
/// sorted by case-folded name so navigation stays stable between recomputes.
pub fn aggregate_categories(published_articles: &[ContentItem]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for article in published_articles {
        for name in &article.categories {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actor::ActorId;
    use crate::domain::content::{
        ArticleContent, ContentBody, ContentId, ContentItem, ContentKind, ContentStatus, Title,
    };
    use chrono::Utc;

    fn published_article(title: &str, categories: &[&str]) -> ContentItem {
        let now = Utc::now();
        ContentItem {
            id: ContentId::generate(),
            kind: ContentKind::Article,
            title: Title::new(title).unwrap(),
            body: ContentBody::Article(
                ArticleContent::new("intro", None, vec![], vec![], vec![]).unwrap(),
            ),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            status: ContentStatus::Published,
            author_id: ActorId::generate(),
            updated_by: "seed".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn counts_match_references() {
        let articles = vec![
            published_article("A", &["Основы", "Практика"]),
            published_article("B", &["Основы"]),
            published_article("C", &[]),
        ];
        let counts = aggregate_categories(&articles);
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    name: "Основы".into(),
                    count: 2
                },
                CategoryCount {
                    name: "Практика".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_aggregates() {
        assert!(aggregate_categories(&[]).is_empty());
    }

    #[test]
    fn sorting_folds_case() {
        let articles = vec![
            published_article("A", &["beta"]),
            published_article("B", &["Alpha"]),
        ];
        let names: Vec<_> = aggregate_categories(&articles)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Alpha".to_string(), "beta".to_string()]);
    }
}
