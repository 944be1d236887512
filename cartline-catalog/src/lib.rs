pub mod product;
pub mod pricing;
pub mod catalog;

pub use product::{Product, ProductId};
pub use pricing::{Money, PriceParseError};
pub use catalog::{Catalog, CatalogError, ProductSeed};
