use cartline_catalog::{Money, ProductId};
use cartline_shared::CheckoutCompletedEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::customer::{Customer, CustomerKind};

/// Snapshot of one ledger entry at checkout time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Everything shown to the customer before they confirm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub customer_id: Uuid,
    pub kind: CustomerKind,
    pub description: String,
    pub lines: Vec<CheckoutLine>,
    pub total: Money,
}

impl CheckoutSummary {
    /// Snapshot the customer's ledger. Fails when there is nothing to buy.
    pub fn prepare(customer: &Customer) -> Result<Self, CheckoutError> {
        let shopper = customer.shopper();
        let ledger = shopper.ledger();

        if ledger.is_empty() {
            return Err(CheckoutError::EmptyLedger);
        }

        let lines = ledger
            .entries()
            .iter()
            .map(|entry| CheckoutLine {
                product_id: entry.product.id,
                product_name: entry.product.name.clone(),
                unit_price: entry.product.price,
                quantity: entry.quantity,
                line_total: entry.line_total(),
            })
            .collect();

        Ok(Self {
            customer_id: shopper.profile().id,
            kind: shopper.kind(),
            description: shopper.summary(),
            lines,
            total: ledger.total_value(),
        })
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Close the checkout, producing the event that records it.
    pub fn complete(&self) -> CheckoutCompletedEvent {
        CheckoutCompletedEvent::new(
            self.customer_id,
            self.kind.code(),
            self.item_count(),
            self.total.cents(),
        )
    }
}

/// Customer's answer to the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Only "yes" (any case) confirms.
    pub fn parse(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("yes") {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Nothing to check out")]
    EmptyLedger,
}
