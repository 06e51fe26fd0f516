use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the optional nested payment structure (orders API requests).
pub const PAYMENT_KEY: &str = "payment";
pub const DUE_DATE_KEY: &str = "dueDate";
pub const BILLING_EMAIL_KEY: &str = "billingEmail";

/// Open request body sent to the provider when creating a payment or order.
///
/// The body may or may not carry a nested `payment` object; callers that
/// augment it must target whichever shape is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentArguments(Map<String, Value>);

impl PaymentArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// The nested payment object, if the body has one.
    pub fn payment_mut(&mut self) -> Option<&mut Map<String, Value>> {
        match self.0.get_mut(PAYMENT_KEY) {
            Some(Value::Object(payment)) => Some(payment),
            _ => None,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for PaymentArguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
