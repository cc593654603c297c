use serde::Serialize;

use masthead_core::{ArticleId, AuthorId, Entity, MagazineId};

use crate::catalog::{Catalog, first_seen};

/// Entity: Magazine.
///
/// `name` and `category` are taken as given at construction; only later
/// writes go through validation (see [`Catalog::rename_magazine`] and
/// [`Catalog::recategorize_magazine`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

impl Magazine {
    pub(crate) fn new(id: MagazineId, name: String, category: String) -> Self {
        Self {
            id,
            name,
            category,
            articles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_category(&mut self, category: String) {
        self.category = category;
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

impl Entity for Magazine {
    type Id = MagazineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only view of a magazine with its contributor queries.
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'a> {
    pub(crate) magazine: &'a Magazine,
    pub(crate) catalog: &'a Catalog,
}

impl<'a> MagazineView<'a> {
    pub fn id(&self) -> MagazineId {
        *self.magazine.id()
    }

    pub fn name(&self) -> &'a str {
        self.magazine.name()
    }

    pub fn category(&self) -> &'a str {
        self.magazine.category()
    }

    pub fn articles(&self) -> &'a [ArticleId] {
        self.magazine.articles()
    }

    pub fn entity(&self) -> &'a Magazine {
        self.magazine
    }

    /// Authors of this magazine's articles, in article order.
    ///
    /// Articles whose author link was never set are skipped.
    fn article_authors(&self) -> impl Iterator<Item = AuthorId> + 'a {
        let (magazine, catalog) = (self.magazine, self.catalog);
        magazine
            .articles
            .iter()
            .filter_map(move |id| catalog.get_article(*id))
            .filter_map(|article| article.author())
    }

    /// Distinct authors who wrote for this magazine, first-seen order.
    pub fn contributors(&self) -> Vec<AuthorId> {
        first_seen(self.article_authors())
    }

    /// Titles in article order, or `None` when the magazine has no articles.
    ///
    /// Untitled articles show up as `None` entries so positions line up with
    /// [`Self::articles`].
    pub fn article_titles(&self) -> Option<Vec<Option<&'a str>>> {
        let (magazine, catalog) = (self.magazine, self.catalog);
        if magazine.articles.is_empty() {
            return None;
        }
        Some(
            magazine
                .articles
                .iter()
                .filter_map(|id| catalog.get_article(*id))
                .map(|article| article.title())
                .collect(),
        )
    }

    /// Authors with more than `contributor_threshold` articles here, first-seen
    /// order, or `None` when nobody qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<AuthorId>> {
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for author in self.article_authors() {
            match counts.iter_mut().find(|(a, _)| *a == author) {
                Some((_, n)) => *n += 1,
                None => counts.push((author, 1)),
            }
        }

        let threshold = self.catalog.rules().contributor_threshold;
        let qualified: Vec<AuthorId> = counts
            .into_iter()
            .filter(|(_, n)| *n > threshold)
            .map(|(author, _)| author)
            .collect();

        if qualified.is_empty() {
            None
        } else {
            Some(qualified)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_magazine_has_no_titles_or_contributors() {
        let mut catalog = Catalog::new();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology");
        let view = catalog.magazine(magazine).unwrap();

        assert!(view.contributors().is_empty());
        assert_eq!(view.article_titles(), None);
        assert_eq!(view.contributing_authors(), None);
    }

    #[test]
    fn exactly_two_articles_is_not_enough_to_contribute() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("John Doe").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology");
        catalog.create_article(author, magazine, "First Article");
        catalog.create_article(author, magazine, "Second Article");

        let view = catalog.magazine(magazine).unwrap();
        assert_eq!(view.contributors(), vec![author]);
        assert_eq!(view.contributing_authors(), None);
    }

    #[test]
    fn contributing_authors_keeps_first_seen_order() {
        let mut catalog = Catalog::new();
        let john = catalog.create_author("John Doe").unwrap();
        let jane = catalog.create_author("Jane Smith").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology");

        for title in ["Jane One", "Jane Two", "Jane Three"] {
            catalog.create_article(jane, magazine, title);
        }
        for title in ["John One", "John Two", "John Three", "John Four"] {
            catalog.create_article(john, magazine, title);
        }

        let view = catalog.magazine(magazine).unwrap();
        assert_eq!(view.contributors(), vec![jane, john]);
        assert_eq!(view.contributing_authors(), Some(vec![jane, john]));
    }

    #[test]
    fn untitled_articles_keep_their_slot_in_titles() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("John Doe").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology");
        catalog.create_article(author, magazine, "Hi");
        catalog.create_article(author, magazine, "Hello World");

        let view = catalog.magazine(magazine).unwrap();
        assert_eq!(view.article_titles(), Some(vec![None, Some("Hello World")]));
    }

    #[test]
    fn contributor_threshold_comes_from_rules() {
        let rules = crate::CatalogRules {
            contributor_threshold: 0,
            ..Default::default()
        };
        let mut catalog = Catalog::with_rules(rules).unwrap();
        let author = catalog.create_author("John Doe").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology");
        catalog.create_article(author, magazine, "Only Article");

        let view = catalog.magazine(magazine).unwrap();
        assert_eq!(view.contributing_authors(), Some(vec![author]));
    }
}
