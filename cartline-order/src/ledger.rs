use cartline_catalog::{Money, Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product and how many of it are held
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    pub product: Product,
    pub quantity: u32,
}

impl LedgerEntry {
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// Product quantities keyed by product id, in insertion order.
///
/// `remove` deletes an entry as soon as its count would reach zero. `add`
/// never deletes, so adding zero of an absent product leaves a zero entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuantityLedger {
    entries: Vec<LedgerEntry>,
}

impl QuantityLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `quantity` units, inserting the product if it is not held yet.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        match self.entry_mut(product.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => self.entries.push(LedgerEntry {
                product: product.clone(),
                quantity,
            }),
        }
        tracing::debug!(product = %product.id, quantity, "ledger add");
    }

    /// Take away `quantity` units; absent products are ignored.
    pub fn remove(&mut self, product: &Product, quantity: u32) {
        let Some(index) = self.position(product.id) else {
            return;
        };

        let entry = &mut self.entries[index];
        if entry.quantity <= quantity {
            self.entries.remove(index);
        } else {
            entry.quantity -= quantity;
        }
        tracing::debug!(product = %product.id, quantity, "ledger remove");
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.entries.iter().find(|e| e.product.id == id).map(|e| e.quantity)
    }

    /// Sum of price * quantity over every entry
    pub fn total_value(&self) -> Money {
        self.entries.iter().map(LedgerEntry::line_total).sum()
    }

    /// Total units held across all entries
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Display lines, one per entry: `Shirt - $20.0 - Quantity: 2`
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|e| format!("{} - Quantity: {}", e.product, e.quantity))
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.entries.iter().position(|e| e.product.id == id)
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut LedgerEntry> {
        self.entries.iter_mut().find(|e| e.product.id == id)
    }
}
