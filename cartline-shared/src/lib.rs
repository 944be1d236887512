pub mod models;
pub mod pii;

pub use models::events::{CheckoutCompletedEvent, CustomerCreatedEvent};
pub use pii::Masked;
