use cartline_catalog::{Money, Product};
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::ledger::QuantityLedger;

/// Bargain hunter's cart: a ledger that also reports its total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingCart {
    items: QuantityLedger,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        self.items.add(product, quantity);
    }

    pub fn remove_product(&mut self, product: &Product, quantity: u32) {
        self.items.remove(product, quantity);
    }

    pub fn total_amount(&self) -> Money {
        self.items.total_value()
    }

    pub fn items(&self) -> &QuantityLedger {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut QuantityLedger {
        &mut self.items
    }
}

impl fmt::Display for ShoppingCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content: Vec<String> = self.items.render().collect();
        write!(
            f,
            "Shopping Cart:\n{}\nTotal amount: ${}",
            content.join("\n"),
            self.total_amount()
        )
    }
}
