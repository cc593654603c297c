//! `masthead-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the publishing
//! model: the error type, strongly-typed identifiers and the entity/value
//! object markers. No IO, no logging.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ArticleId, AuthorId, MagazineId};
pub use value_object::ValueObject;
