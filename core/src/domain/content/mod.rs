pub mod blocks;
pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{ContentTypeDefinition, ContentTypes, TaxonomyDefinition};
pub use ports::ContentService;
