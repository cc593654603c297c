use serde::Serialize;

use masthead_core::{ArticleId, AuthorId, DomainResult, Entity, MagazineId, ValueObject};

use crate::rules::CatalogRules;

/// Validated article title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn parse(raw: impl Into<String>, rules: &CatalogRules) -> DomainResult<Self> {
        let raw = raw.into();
        rules.check_title(&raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Title {}

/// Entity: Article (join between one author and one magazine).
///
/// Each field moves independently from unset to set:
/// - `title`: unset -> set, terminal.
/// - `author` / `magazine`: unset -> set -> re-set, never back to unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    title: Option<Title>,
    pub(crate) author: Option<AuthorId>,
    pub(crate) magazine: Option<MagazineId>,
}

impl Article {
    pub(crate) fn new(id: ArticleId, title: Option<Title>) -> Self {
        Self {
            id,
            title,
            author: None,
            magazine: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(Title::as_str)
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    pub fn author(&self) -> Option<AuthorId> {
        self.author
    }

    pub fn magazine(&self) -> Option<MagazineId> {
        self.magazine
    }

    /// Only fills an empty title; the catalog checks that first.
    pub(crate) fn fill_title(&mut self, title: Title) {
        if self.title.is_none() {
            self.title = Some(title);
        }
    }
}

impl Entity for Article {
    type Id = ArticleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
