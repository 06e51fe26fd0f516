use serde::{Deserialize, Serialize};

/// Platform order status as seen by the bank transfer gateway.
///
/// Only `Pending` and `OnHold` produce transfer instructions. Unknown statuses
/// are kept verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    OnHold,
    Paid,
    Other(String),
}

impl OrderStatus {
    /// Whether the shopper still has to transfer the money.
    pub fn awaits_transfer(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::OnHold)
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        let status = normalized.strip_prefix("wc-").unwrap_or(&normalized);
        match status {
            "pending" => OrderStatus::Pending,
            "on-hold" => OrderStatus::OnHold,
            "paid" | "processing" | "completed" => OrderStatus::Paid,
            _ => OrderStatus::Other(value.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        OrderStatus::from(value.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => "pending".to_string(),
            OrderStatus::OnHold => "on-hold".to_string(),
            OrderStatus::Paid => "processing".to_string(),
            OrderStatus::Other(raw) => raw,
        }
    }
}

/// Read-only view of a platform order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderIdentity {
    pub id: u64,
    /// Secret key the platform appends to order received links.
    #[serde(default)]
    pub order_key: String,
    #[serde(default)]
    pub billing_email: Option<String>,
    pub status: OrderStatus,
}

impl OrderIdentity {
    pub fn new(id: u64, status: OrderStatus) -> Self {
        Self {
            id,
            order_key: String::new(),
            billing_email: None,
            status,
        }
    }

    pub fn with_order_key(mut self, key: impl Into<String>) -> Self {
        self.order_key = key.into();
        self
    }

    pub fn with_billing_email(mut self, email: impl Into<String>) -> Self {
        self.billing_email = Some(email.into());
        self
    }

    /// The billing email, unless it is empty or whitespace only.
    pub fn billing_email(&self) -> Option<&str> {
        self.billing_email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!(OrderStatus::from("pending"), OrderStatus::Pending);
        assert_eq!(OrderStatus::from("on-hold"), OrderStatus::OnHold);
        assert_eq!(OrderStatus::from("wc-on-hold"), OrderStatus::OnHold);
        assert_eq!(OrderStatus::from("completed"), OrderStatus::Paid);
        assert_eq!(
            OrderStatus::from("cancelled"),
            OrderStatus::Other("cancelled".to_string())
        );
    }

    #[test]
    fn test_order_deserialization() {
        let json = r#"{"id": 42, "orderKey": "wc_order_abc", "billingEmail": "a@b.com", "status": "on-hold"}"#;
        let order: OrderIdentity = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, 42);
        assert_eq!(order.order_key, "wc_order_abc");
        assert_eq!(order.billing_email(), Some("a@b.com"));
        assert!(order.status.awaits_transfer());
    }

    #[test]
    fn test_unknown_status_does_not_fail_deserialization() {
        let json = r#"{"id": 1, "status": "refunded"}"#;
        let order: OrderIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Other("refunded".to_string()));
        assert!(!order.status.awaits_transfer());
    }

    #[test]
    fn test_blank_billing_email_is_absent() {
        let order = OrderIdentity::new(1, OrderStatus::Pending).with_billing_email(" \t ");
        assert_eq!(order.billing_email(), None);

        let order = OrderIdentity::new(1, OrderStatus::Pending).with_billing_email("");
        assert_eq!(order.billing_email(), None);
    }
}
