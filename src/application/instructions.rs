use crate::domain::order::OrderIdentity;
use crate::domain::payment::{PaymentDetails, PaymentRecord};
use crate::domain::settings::{DEFAULT_DATE_FORMAT, GatewaySettings};
use chrono::NaiveDate;
use std::fmt::Write;
use tracing::debug;

/// Renders bank transfer instructions for the thank-you page, emails and the
/// admin order screen.
///
/// Output is plain text with inline `<strong>` markup. Provider values are not
/// escaped here; that is up to whatever template prints the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionsRenderer {
    date_format: String,
}

impl Default for InstructionsRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl InstructionsRenderer {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn from_settings(settings: &GatewaySettings) -> Self {
        Self::new(settings.date_format.clone())
    }

    /// Classifies the payment and renders the matching instructions.
    ///
    /// * `None` - the provider has not populated payment details yet.
    /// * `Some("")` - details exist but the order status has nothing to show.
    /// * otherwise a paid confirmation or the transfer instructions.
    pub fn generate(
        &self,
        order: &OrderIdentity,
        payment: &PaymentRecord,
        is_admin_view: bool,
    ) -> Option<String> {
        let details = payment.details.as_ref()?;

        if payment.is_paid() {
            return Some(paid_confirmation(details));
        }

        if !order.status.awaits_transfer() {
            return Some(String::new());
        }

        let mut instructions = String::new();
        if !is_admin_view {
            instructions.push_str(
                "Please complete your payment by transferring the total amount to the following bank account:\n\n\n",
            );
        }

        instructions.push_str(&format!("Beneficiary: {}\n", field(&details.bank_name)));
        instructions.push_str(&format!(
            "IBAN: <strong>{}</strong>\n",
            group_iban(field(&details.bank_account))
        ));
        instructions.push_str(&format!("BIC: {}\n", field(&details.bank_bic)));

        let reference = field(&details.transfer_reference);
        if is_admin_view {
            instructions.push_str(&format!("Payment reference: {}\n", reference));
        } else {
            instructions.push_str(&format!(
                "Please provide the payment reference <strong>{}</strong>\n",
                reference
            ));
        }

        if let Some(expires_at) = payment.expires_at {
            debug!(payment = %payment.id, due_date = %expires_at, "due date assigned");
            let expiry = self.format_date(expires_at);
            if is_admin_view {
                instructions.push_str(&format!(
                    "\nThe payment will expire on <strong>{}</strong>.\n",
                    expiry
                ));
            } else {
                instructions.push_str(&format!(
                    "\nThe payment will expire on <strong>{}</strong>. Please make sure you transfer the total amount before this date.\n",
                    expiry
                ));
            }
        }

        Some(instructions)
    }

    /// Formats with the configured pattern, falling back to ISO when the pattern is invalid.
    fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            out = date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

/// Instructions with the default date format.
pub fn generate_instructions(
    order: &OrderIdentity,
    payment: &PaymentRecord,
    is_admin_view: bool,
) -> Option<String> {
    InstructionsRenderer::default().generate(order, payment, is_admin_view)
}

fn paid_confirmation(details: &PaymentDetails) -> String {
    format!(
        "Payment completed by <strong>{}</strong> (IBAN (last 4 digits): {}, BIC: {})",
        field(&details.consumer_name),
        last_four(field(&details.consumer_account)),
        field(&details.consumer_bic)
    )
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn last_four(account: &str) -> String {
    let count = account.chars().count();
    account.chars().skip(count.saturating_sub(4)).collect()
}

/// `NL00INGB1234567890` -> `NL00 INGB 1234 5678 90`
fn group_iban(account: &str) -> String {
    let chars: Vec<char> = account.chars().collect();
    chars
        .chunks(4)
        .map(|block| block.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
