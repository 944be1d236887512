pub mod ledger;
pub mod cart;
pub mod customer;
pub mod checkout;

pub use ledger::{LedgerEntry, QuantityLedger};
pub use cart::ShoppingCart;
pub use customer::{BargainHunter, Customer, CustomerError, CustomerKind, CustomerProfile, LoyalCustomer, Shopper};
pub use checkout::{CheckoutError, CheckoutLine, CheckoutSummary, Confirmation};
