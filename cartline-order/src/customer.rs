use cartline_catalog::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use crate::cart::ShoppingCart;
use crate::ledger::QuantityLedger;

/// The closed set of customer variants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerKind {
    Loyal,
    BargainHunter,
}

impl CustomerKind {
    /// Stable code used in events
    pub fn code(self) -> &'static str {
        match self {
            CustomerKind::Loyal => "LOYAL",
            CustomerKind::BargainHunter => "BARGAIN_HUNTER",
        }
    }
}

impl FromStr for CustomerKind {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loyal" => Ok(CustomerKind::Loyal),
            "bargain" => Ok(CustomerKind::BargainHunter),
            other => Err(CustomerError::InvalidType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("Unknown customer type: {0}")]
    InvalidType(String),
}

/// Identity shared by every customer variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerProfile {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl CustomerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Capabilities every customer variant exposes to the session.
///
/// Each variant owns exactly one ledger; the variants only differ in labels
/// and in how they present themselves.
pub trait Shopper {
    fn profile(&self) -> &CustomerProfile;

    fn kind(&self) -> CustomerKind;

    /// Variant label, e.g. "Loyal Customer"
    fn label(&self) -> &'static str;

    /// Heading for the ledger, e.g. "Exclusive Products"
    fn ledger_title(&self) -> &'static str;

    fn ledger(&self) -> &QuantityLedger;

    fn ledger_mut(&mut self) -> &mut QuantityLedger;

    /// Full description shown at checkout
    fn summary(&self) -> String;

    /// What "see current shopping cart" shows
    fn ledger_view(&self) -> String {
        self.summary()
    }

    fn name(&self) -> &str {
        &self.profile().name
    }

    fn add(&mut self, product: &Product, quantity: u32) {
        self.ledger_mut().add(product, quantity);
    }

    fn remove(&mut self, product: &Product, quantity: u32) {
        self.ledger_mut().remove(product, quantity);
    }

    fn is_empty(&self) -> bool {
        self.ledger().is_empty()
    }
}

/// Customer who buys from an exclusive product list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoyalCustomer {
    pub profile: CustomerProfile,
    exclusive_products: QuantityLedger,
}

impl LoyalCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            profile: CustomerProfile::new(name),
            exclusive_products: QuantityLedger::new(),
        }
    }

    pub fn add_exclusive_product(&mut self, product: &Product, quantity: u32) {
        self.exclusive_products.add(product, quantity);
    }

    pub fn remove_exclusive_product(&mut self, product: &Product, quantity: u32) {
        self.exclusive_products.remove(product, quantity);
    }

    pub fn exclusive_products(&self) -> &QuantityLedger {
        &self.exclusive_products
    }
}

impl Shopper for LoyalCustomer {
    fn profile(&self) -> &CustomerProfile {
        &self.profile
    }

    fn kind(&self) -> CustomerKind {
        CustomerKind::Loyal
    }

    fn label(&self) -> &'static str {
        "Loyal Customer"
    }

    fn ledger_title(&self) -> &'static str {
        "Exclusive Products"
    }

    fn ledger(&self) -> &QuantityLedger {
        &self.exclusive_products
    }

    fn ledger_mut(&mut self) -> &mut QuantityLedger {
        &mut self.exclusive_products
    }

    fn summary(&self) -> String {
        let content: Vec<String> = self.exclusive_products.render().collect();
        format!(
            "{}: {}\n{}:\n{}",
            self.label(),
            self.profile.name,
            self.ledger_title(),
            content.join("\n")
        )
    }
}

/// Customer who shops from a regular cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BargainHunter {
    pub profile: CustomerProfile,
    shopping_cart: ShoppingCart,
}

impl BargainHunter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            profile: CustomerProfile::new(name),
            shopping_cart: ShoppingCart::new(),
        }
    }

    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        self.shopping_cart.add_product(product, quantity);
    }

    pub fn remove_from_cart(&mut self, product: &Product, quantity: u32) {
        self.shopping_cart.remove_product(product, quantity);
    }

    pub fn shopping_cart(&self) -> &ShoppingCart {
        &self.shopping_cart
    }
}

impl Shopper for BargainHunter {
    fn profile(&self) -> &CustomerProfile {
        &self.profile
    }

    fn kind(&self) -> CustomerKind {
        CustomerKind::BargainHunter
    }

    fn label(&self) -> &'static str {
        "Bargain Hunter"
    }

    fn ledger_title(&self) -> &'static str {
        "Shopping Cart"
    }

    fn ledger(&self) -> &QuantityLedger {
        self.shopping_cart.items()
    }

    fn ledger_mut(&mut self) -> &mut QuantityLedger {
        self.shopping_cart.items_mut()
    }

    fn summary(&self) -> String {
        format!("{}: {}\n{}", self.label(), self.profile.name, self.shopping_cart)
    }

    fn ledger_view(&self) -> String {
        self.shopping_cart.to_string()
    }
}

/// Whichever customer is currently shopping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Customer {
    Loyal(LoyalCustomer),
    BargainHunter(BargainHunter),
}

impl Customer {
    pub fn new(name: impl Into<String>, kind: CustomerKind) -> Self {
        match kind {
            CustomerKind::Loyal => Customer::Loyal(LoyalCustomer::new(name)),
            CustomerKind::BargainHunter => Customer::BargainHunter(BargainHunter::new(name)),
        }
    }

    pub fn shopper(&self) -> &dyn Shopper {
        match self {
            Customer::Loyal(c) => c,
            Customer::BargainHunter(c) => c,
        }
    }

    pub fn shopper_mut(&mut self) -> &mut dyn Shopper {
        match self {
            Customer::Loyal(c) => c,
            Customer::BargainHunter(c) => c,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shopper().summary())
    }
}
