use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Payment status as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Open,
    Pending,
    Authorized,
    Paid,
    Expired,
    Canceled,
    Failed,
    #[serde(other)]
    Other,
}

/// Bank and consumer identifiers the provider fills in once it has processed
/// the transfer. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentDetails {
    pub consumer_name: Option<String>,
    /// Full account number. Only the last four characters are ever rendered.
    pub consumer_account: Option<String>,
    pub consumer_bic: Option<String>,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub bank_bic: Option<String>,
    pub transfer_reference: Option<String>,
}

/// A payment returned by the provider after create-payment / create-order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default, deserialize_with = "deserialize_expiry")]
    pub expires_at: Option<NaiveDate>,
    #[serde(default)]
    pub details: Option<PaymentDetails>,
}

impl PaymentRecord {
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` and plain dates.
fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(ts.date_naive()));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(Some(ts.date()));
    }
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid expiresAt '{}': {}", raw, e)))
}
