//! Walks through a small newsroom: two authors, two magazines, four articles,
//! then prints what the magazine and author queries report.

use std::env::VarError;

use anyhow::Context;
use serde::Serialize;

use masthead_core::{AuthorId, MagazineId};
use masthead_publishing::{Catalog, CatalogRules};

/// Optional JSON override for [`CatalogRules`].
const RULES_ENV: &str = "MASTHEAD_RULES";

#[derive(Debug, Serialize)]
struct Summary<'a> {
    contributing_authors: Option<Vec<&'a str>>,
    contributors: Vec<&'a str>,
    article_titles: Option<Vec<Option<&'a str>>>,
    author_magazines: Vec<&'a str>,
    author_topic_areas: Option<Vec<&'a str>>,
    registered_articles: usize,
}

fn load_rules() -> anyhow::Result<CatalogRules> {
    rules_from(std::env::var(RULES_ENV))
}

/// Only an unset variable means "use the defaults".
fn rules_from(var: Result<String, VarError>) -> anyhow::Result<CatalogRules> {
    match var {
        Ok(raw) => CatalogRules::from_json(&raw).with_context(|| format!("invalid {RULES_ENV}")),
        Err(VarError::NotPresent) => Ok(CatalogRules::default()),
        Err(e @ VarError::NotUnicode(_)) => {
            Err(anyhow::Error::new(e).context(format!("unreadable {RULES_ENV}")))
        }
    }
}

fn author_names<'a>(catalog: &'a Catalog, ids: &[AuthorId]) -> anyhow::Result<Vec<&'a str>> {
    ids.iter()
        .map(|id| {
            catalog
                .author(*id)
                .map(|author| author.name())
                .map_err(anyhow::Error::from)
        })
        .collect()
}

fn magazine_names<'a>(catalog: &'a Catalog, ids: &[MagazineId]) -> anyhow::Result<Vec<&'a str>> {
    ids.iter()
        .map(|id| {
            catalog
                .magazine(*id)
                .map(|magazine| magazine.name())
                .map_err(anyhow::Error::from)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    masthead_observability::init();

    let rules = load_rules()?;
    let mut catalog = Catalog::with_rules(rules)?;

    let john = catalog.create_author("John Doe")?;
    let jane = catalog.create_author("Jane Smith")?;
    let tech = catalog.create_magazine("Tech Weekly", "Technology");
    catalog.create_magazine("Science Today", "Science");

    catalog.create_article(john, tech, "Python Programming Basics");
    catalog.create_article(john, tech, "Advanced Python Techniques");
    catalog.create_article(john, tech, "Web Development with Python");
    catalog.create_article(jane, tech, "Data Science Methods");

    let magazine = catalog.magazine(tech)?;
    let author = catalog.author(john)?;

    let contributing_authors = match magazine.contributing_authors() {
        Some(ids) => Some(author_names(&catalog, &ids)?),
        None => None,
    };

    let summary = Summary {
        contributing_authors,
        contributors: author_names(&catalog, &magazine.contributors())?,
        article_titles: magazine.article_titles(),
        author_magazines: magazine_names(&catalog, &author.magazines())?,
        author_topic_areas: author.topic_areas(),
        registered_articles: catalog.article_count(),
    };

    tracing::info!(
        magazine = magazine.name(),
        articles = magazine.articles().len(),
        "newsroom populated"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
