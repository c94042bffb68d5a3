mod catalog;
mod entry;

pub use catalog::Catalog;
pub use entry::CatalogEntry;
