use uuid::Uuid;

/// Tracing target every domain event is written to.
pub const EVENT_TARGET: &str = "cartline::events";

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct CustomerCreatedEvent {
    pub customer_id: Uuid,
    pub kind: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct CheckoutCompletedEvent {
    pub checkout_id: Uuid,
    pub customer_id: Uuid,
    pub kind: String,
    pub item_count: u64,
    pub total_cents: u64,
    pub timestamp: i64,
}

impl CustomerCreatedEvent {
    pub fn new(customer_id: Uuid, kind: impl Into<String>) -> Self {
        Self {
            customer_id,
            kind: kind.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl CheckoutCompletedEvent {
    pub fn new(customer_id: Uuid, kind: impl Into<String>, item_count: u64, total_cents: u64) -> Self {
        Self {
            checkout_id: Uuid::new_v4(),
            customer_id,
            kind: kind.into(),
            item_count,
            total_cents,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Serialize an event into the JSON payload that gets logged.
pub fn to_payload<E: serde::Serialize>(event: &E) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}
