//! Publishing domain module (authors, magazines and the articles joining them).
//!
//! A [`Catalog`] owns every entity plus the article registry. Entities refer
//! to each other by id; the catalog is the only place links are mutated, so
//! an article always sits in exactly its current author's and magazine's
//! collections.

pub mod article;
pub mod author;
pub mod catalog;
pub mod magazine;
pub mod rules;

pub use article::{Article, Title};
pub use author::{Author, AuthorName, AuthorView};
pub use catalog::{Catalog, NewArticle};
pub use magazine::{Magazine, MagazineView};
pub use rules::CatalogRules;
