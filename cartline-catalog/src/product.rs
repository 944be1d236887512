use serde::{Deserialize, Serialize};
use std::fmt;
use crate::pricing::Money;

/// Stable handle assigned to a product when the catalog is loaded.
///
/// Two products with the same name and price are still distinct handles,
/// so ledgers key on this rather than on the product's contents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name, self.price.compact())
    }
}
