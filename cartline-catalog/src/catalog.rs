use serde::{Deserialize, Serialize};
use crate::pricing::{Money, PriceParseError};
use crate::product::{Product, ProductId};

/// Raw catalog entry as it appears in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSeed {
    pub name: String,
    pub price: String,
}

impl ProductSeed {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

/// Fixed, ordered list of products loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, handing out ids in seed order starting at 1.
    pub fn from_seeds<I>(seeds: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ProductSeed>,
    {
        let mut products = Vec::new();

        for (position, seed) in seeds.into_iter().enumerate() {
            let name = seed.name.trim();
            if name.is_empty() {
                return Err(CatalogError::BlankName { position: position + 1 });
            }

            let price = seed.price.parse::<Money>().map_err(|source| CatalogError::InvalidPrice {
                product: name.to_string(),
                source,
            })?;

            let raw_id = u32::try_from(position + 1).map_err(|_| CatalogError::TooLarge)?;
            products.push(Product::new(ProductId::new(raw_id), name, price));
        }

        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { products })
    }

    /// Seeds for the stock catalog.
    pub fn default_seeds() -> Vec<ProductSeed> {
        vec![
            ProductSeed::new("Shirt", "20.0"),
            ProductSeed::new("Pants", "30.0"),
            ProductSeed::new("Shoes", "50.0"),
            ProductSeed::new("Hat", "15.0"),
        ]
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up by the 1-based position shown in listings.
    pub fn by_position(&self, position: i64) -> Option<&Product> {
        let index = usize::try_from(position).ok()?.checked_sub(1)?;
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Numbered display lines: `1. Shirt - $20.0`
    pub fn listing(&self) -> impl Iterator<Item = String> + '_ {
        self.products
            .iter()
            .enumerate()
            .map(|(i, product)| format!("{}. {}", i + 1, product))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let stock = [("Shirt", 2000), ("Pants", 3000), ("Shoes", 5000), ("Hat", 1500)];
        let products = stock
            .into_iter()
            .zip(1u32..)
            .map(|((name, cents), id)| Product::new(ProductId::new(id), name, Money::from_cents(cents)))
            .collect();
        Self { products }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no products")]
    Empty,

    #[error("Product at position {position} has a blank name")]
    BlankName {
        position: usize,
    },

    #[error("Invalid price for {product}: {source}")]
    InvalidPrice {
        product: String,
        #[source]
        source: PriceParseError,
    },

    #[error("Catalog has too many products")]
    TooLarge,
}
