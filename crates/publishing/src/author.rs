use serde::Serialize;

use masthead_core::{
    ArticleId, AuthorId, DomainResult, Entity, MagazineId, ValueObject,
};

use crate::catalog::{Catalog, first_seen};
use crate::rules::check_non_empty;

/// Validated author name (non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        check_non_empty("author name", &raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for AuthorName {}

/// Entity: Author.
///
/// The name is fixed at construction. `articles` is the back-reference list,
/// in link order, and is only touched by catalog linkage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    articles: Vec<ArticleId>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: AuthorName) -> Self {
        Self {
            id,
            name,
            articles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn link(&mut self, article: ArticleId) {
        if !self.articles.contains(&article) {
            self.articles.push(article);
        }
    }

    pub(crate) fn unlink(&mut self, article: ArticleId) {
        self.articles.retain(|a| *a != article);
    }
}

impl Entity for Author {
    type Id = AuthorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only view of an author with the queries that need the rest of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'a> {
    pub(crate) author: &'a Author,
    pub(crate) catalog: &'a Catalog,
}

impl<'a> AuthorView<'a> {
    pub fn id(&self) -> AuthorId {
        *self.author.id()
    }

    pub fn name(&self) -> &'a str {
        self.author.name()
    }

    pub fn articles(&self) -> &'a [ArticleId] {
        self.author.articles()
    }

    pub fn entity(&self) -> &'a Author {
        self.author
    }

    /// Distinct magazines this author has written for, first-seen order.
    pub fn magazines(&self) -> Vec<MagazineId> {
        first_seen(
            self.author
                .articles
                .iter()
                .filter_map(|id| self.catalog.get_article(*id))
                .filter_map(|article| article.magazine()),
        )
    }

    /// Distinct categories of [`Self::magazines`], or `None` when the author
    /// has not written for any magazine.
    pub fn topic_areas(&self) -> Option<Vec<&'a str>> {
        let magazines = self.magazines();
        if magazines.is_empty() {
            return None;
        }
        let catalog = self.catalog;
        Some(first_seen(
            magazines
                .into_iter()
                .filter_map(|id| catalog.get_magazine(id))
                .map(|magazine| magazine.category()),
        ))
    }
}
