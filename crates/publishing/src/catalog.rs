//! Catalog: owner of every author, magazine and article, plus the article registry.
//!
//! All link mutations go through [`Catalog::link_author`] and
//! [`Catalog::link_magazine`], which keep the back-reference lists of both
//! sides in step: an article is listed by its current author and magazine,
//! once each, and by nobody else.

use std::collections::HashMap;

use masthead_core::{ArticleId, AuthorId, DomainError, DomainResult, MagazineId};

use crate::article::{Article, Title};
use crate::author::{Author, AuthorName, AuthorView};
use crate::magazine::{Magazine, MagazineView};
use crate::rules::{CatalogRules, check_non_empty};

/// A freshly constructed article plus whatever was left unset while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub id: ArticleId,
    /// Title, author and magazine rejections, in that order.
    pub rejected: Vec<DomainError>,
}

impl NewArticle {
    /// Whether title, author and magazine were all applied.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    rules: CatalogRules,
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    articles: HashMap<ArticleId, Article>,
    /// Every article ever constructed, in construction order. Append-only.
    registry: Vec<ArticleId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: CatalogRules) -> DomainResult<Self> {
        rules.validate()?;
        Ok(Self {
            rules,
            ..Self::default()
        })
    }

    pub fn rules(&self) -> &CatalogRules {
        &self.rules
    }

    // ---- construction ----

    /// Register a new author. The only constructor that can fail.
    pub fn create_author(&mut self, name: impl Into<String>) -> DomainResult<AuthorId> {
        let name = AuthorName::parse(name)?;
        let id = AuthorId::new();
        tracing::debug!(author_id = %id, name = name.as_str(), "author created");
        self.authors.insert(id, Author::new(id, name));
        Ok(id)
    }

    /// Register a new magazine. Name and category are not validated here.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> MagazineId {
        let id = MagazineId::new();
        let magazine = Magazine::new(id, name.into(), category.into());
        tracing::debug!(
            magazine_id = %id,
            name = magazine.name(),
            category = magazine.category(),
            "magazine created"
        );
        self.magazines.insert(id, magazine);
        id
    }

    /// Construct an article joining `author` and `magazine`.
    ///
    /// Never fails. The title is applied first, then the author link, then the
    /// magazine link; any part that does not check out is left unset. The
    /// article is appended to the registry either way.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ArticleId {
        self.construct_article(author, magazine, title).id
    }

    /// Author-side convenience constructor.
    ///
    /// Builds the article exactly like [`Self::create_article`]; the returned
    /// [`NewArticle`] also lists the parts that were left unset. Fails only
    /// when `author` is unknown, in which case nothing is created.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> DomainResult<NewArticle> {
        self.ensure_author(author)?;
        Ok(self.construct_article(author, magazine, title))
    }

    fn construct_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> NewArticle {
        let id = ArticleId::new();
        let mut rejected = Vec::new();

        let title = match Title::parse(title, &self.rules) {
            Ok(title) => Some(title),
            Err(e) => {
                tracing::debug!(article_id = %id, error = %e, "title left unset");
                rejected.push(e);
                None
            }
        };
        self.articles.insert(id, Article::new(id, title));

        if let Err(e) = self.link_author(id, author) {
            tracing::debug!(article_id = %id, error = %e, "author link skipped");
            rejected.push(e);
        }
        if let Err(e) = self.link_magazine(id, magazine) {
            tracing::debug!(article_id = %id, error = %e, "magazine link skipped");
            rejected.push(e);
        }

        self.registry.push(id);
        NewArticle { id, rejected }
    }

    // ---- writes ----

    /// Author names are immutable; this only reports why nothing changed.
    pub fn rename_author(&mut self, author: AuthorId, name: impl Into<String>) -> DomainResult<()> {
        self.ensure_author(author)?;
        let name = name.into();
        tracing::debug!(author_id = %author, rejected = %name, "author rename ignored");
        Err(DomainError::immutable("author name cannot change"))
    }

    pub fn rename_magazine(
        &mut self,
        magazine: MagazineId,
        name: impl Into<String>,
    ) -> DomainResult<()> {
        let name = name.into();
        let entry = self
            .magazines
            .get_mut(&magazine)
            .ok_or_else(|| DomainError::not_found(format!("magazine {magazine}")))?;
        self.rules
            .check_magazine_name(&name)
            .inspect_err(|e| tracing::debug!(magazine_id = %magazine, error = %e, "rename rejected"))?;
        entry.set_name(name);
        Ok(())
    }

    pub fn recategorize_magazine(
        &mut self,
        magazine: MagazineId,
        category: impl Into<String>,
    ) -> DomainResult<()> {
        let category = category.into();
        let entry = self
            .magazines
            .get_mut(&magazine)
            .ok_or_else(|| DomainError::not_found(format!("magazine {magazine}")))?;
        check_non_empty("category", &category).inspect_err(
            |e| tracing::debug!(magazine_id = %magazine, error = %e, "category rejected"),
        )?;
        entry.set_category(category);
        Ok(())
    }

    /// Set an article's title. Succeeds only while no title has been set.
    pub fn retitle_article(
        &mut self,
        article: ArticleId,
        title: impl Into<String>,
    ) -> DomainResult<()> {
        let entry = self
            .articles
            .get_mut(&article)
            .ok_or_else(|| DomainError::not_found(format!("article {article}")))?;
        if entry.has_title() {
            tracing::debug!(article_id = %article, "retitle ignored, title already set");
            return Err(DomainError::immutable("article title is already set"));
        }
        let title = Title::parse(title, &self.rules)
            .inspect_err(|e| tracing::debug!(article_id = %article, error = %e, "retitle rejected"))?;
        entry.fill_title(title);
        Ok(())
    }

    /// Move an article to another author.
    pub fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> DomainResult<()> {
        self.link_author(article, author)
            .inspect_err(|e| tracing::debug!(article_id = %article, error = %e, "reassign rejected"))
    }

    /// Move an article to another magazine.
    pub fn reassign_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> DomainResult<()> {
        self.link_magazine(article, magazine)
            .inspect_err(|e| tracing::debug!(article_id = %article, error = %e, "reassign rejected"))
    }

    /// Drop every entity and clear the registry.
    pub fn reset(&mut self) {
        tracing::debug!(articles = self.registry.len(), "catalog reset");
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
        self.registry.clear();
    }

    // ---- reads ----

    pub fn author(&self, id: AuthorId) -> DomainResult<AuthorView<'_>> {
        let author = self
            .get_author(id)
            .ok_or_else(|| DomainError::not_found(format!("author {id}")))?;
        Ok(AuthorView {
            author,
            catalog: self,
        })
    }

    pub fn magazine(&self, id: MagazineId) -> DomainResult<MagazineView<'_>> {
        let magazine = self
            .get_magazine(id)
            .ok_or_else(|| DomainError::not_found(format!("magazine {id}")))?;
        Ok(MagazineView {
            magazine,
            catalog: self,
        })
    }

    pub fn article(&self, id: ArticleId) -> DomainResult<&Article> {
        self.get_article(id)
            .ok_or_else(|| DomainError::not_found(format!("article {id}")))
    }

    /// Ids of every constructed article, in construction order.
    pub fn registry(&self) -> &[ArticleId] {
        &self.registry
    }

    pub fn registered_articles(&self) -> impl Iterator<Item = &Article> {
        self.registry
            .iter()
            .filter_map(move |id| self.articles.get(id))
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.registry.len()
    }

    pub(crate) fn get_author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    pub(crate) fn get_magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    pub(crate) fn get_article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    // ---- linkage ----

    fn ensure_author(&self, id: AuthorId) -> DomainResult<()> {
        if !self.authors.contains_key(&id) {
            return Err(DomainError::not_found(format!("author {id}")));
        }
        Ok(())
    }

    fn ensure_magazine(&self, id: MagazineId) -> DomainResult<()> {
        if !self.magazines.contains_key(&id) {
            return Err(DomainError::not_found(format!("magazine {id}")));
        }
        Ok(())
    }

    fn link_author(&mut self, article_id: ArticleId, author_id: AuthorId) -> DomainResult<()> {
        self.ensure_author(author_id)?;
        let article = self
            .articles
            .get_mut(&article_id)
            .ok_or_else(|| DomainError::not_found(format!("article {article_id}")))?;

        if let Some(previous) = article.author.replace(author_id) {
            if let Some(old) = self.authors.get_mut(&previous) {
                old.unlink(article_id);
            }
        }
        if let Some(author) = self.authors.get_mut(&author_id) {
            author.link(article_id);
        }
        tracing::trace!(article_id = %article_id, author_id = %author_id, "author linked");
        Ok(())
    }

    fn link_magazine(
        &mut self,
        article_id: ArticleId,
        magazine_id: MagazineId,
    ) -> DomainResult<()> {
        self.ensure_magazine(magazine_id)?;
        let article = self
            .articles
            .get_mut(&article_id)
            .ok_or_else(|| DomainError::not_found(format!("article {article_id}")))?;

        if let Some(previous) = article.magazine.replace(magazine_id) {
            if let Some(old) = self.magazines.get_mut(&previous) {
                old.unlink(article_id);
            }
        }
        if let Some(magazine) = self.magazines.get_mut(&magazine_id) {
            magazine.link(article_id);
        }
        tracing::trace!(article_id = %article_id, magazine_id = %magazine_id, "magazine linked");
        Ok(())
    }
}

/// Deduplicate while keeping the order in which items were first seen.
pub(crate) fn first_seen<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
