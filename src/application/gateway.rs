use super::arguments::build_payment_arguments;
use super::instructions::InstructionsRenderer;
use super::redirect::resolve_redirect;
use crate::domain::arguments::PaymentArguments;
use crate::domain::order::OrderIdentity;
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::{OrderStoreBox, SettingsStoreBox};
use crate::domain::settings::GatewaySettings;
use crate::error::{GatewayError, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info};
use url::Url;

/// Checkout and order rendering pipeline for a bank transfer payment method.
///
/// The gateway owns the stores it reads from. Every call loads a fresh settings
/// snapshot and the order, then hands both to the pure functions in this
/// module's siblings. Another payment method reuses the same pipeline with a
/// different settings store.
pub struct BankTransferGateway {
    settings_store: SettingsStoreBox,
    order_store: OrderStoreBox,
}

impl BankTransferGateway {
    /// Creates a new `BankTransferGateway`.
    ///
    /// # Arguments
    ///
    /// * `settings_store` - Options of this payment method.
    /// * `order_store` - Read access to platform orders.
    pub fn new(settings_store: SettingsStoreBox, order_store: OrderStoreBox) -> Self {
        Self {
            settings_store,
            order_store,
        }
    }

    /// Loads and normalizes the current settings snapshot.
    pub async fn settings(&self) -> Result<GatewaySettings> {
        let mut options = HashMap::new();
        for name in GatewaySettings::OPTIONS {
            if let Some(value) = self.settings_store.get(name).await? {
                options.insert(name.to_string(), value);
            }
        }
        Ok(GatewaySettings::from_options(&options))
    }

    async fn order(&self, order_id: u64) -> Result<OrderIdentity> {
        self.order_store
            .get(order_id)
            .await?
            .ok_or(GatewayError::OrderNotFound(order_id))
    }

    /// Augments the create-payment request for `order_id`.
    pub async fn payment_arguments(
        &self,
        order_id: u64,
        today: NaiveDate,
        args: PaymentArguments,
    ) -> Result<PaymentArguments> {
        let settings = self.settings().await?;
        let order = self.order(order_id).await?;

        let args = build_payment_arguments(&settings, &order, today, args);
        debug!(order = order_id, ?args, "payment arguments built");
        Ok(args)
    }

    /// Instructions for the thank-you page (`is_admin_view = false`) or the admin order screen.
    pub async fn instructions(
        &self,
        order_id: u64,
        payment: &PaymentRecord,
        is_admin_view: bool,
    ) -> Result<Option<String>> {
        let settings = self.settings().await?;
        let order = self.order(order_id).await?;

        let instructions =
            InstructionsRenderer::from_settings(&settings).generate(&order, payment, is_admin_view);
        if instructions.is_none() {
            debug!(order = order_id, payment = %payment.id, "payment details not available yet");
        }
        Ok(instructions)
    }

    /// Where to send the shopper once the payment has been created.
    pub async fn process_payment_redirect<F>(&self, order_id: u64, default_redirect: F) -> Result<Url>
    where
        F: FnOnce() -> Url + Send,
    {
        let settings = self.settings().await?;
        let order = self.order(order_id).await?;
        let order_received = self.order_store.order_received_url(&order).await?;

        let url = resolve_redirect(&settings, order_received, default_redirect);
        info!(
            order = order_id,
            skip_payment_screen = settings.skip_payment_screen,
            %url,
            "payment redirect resolved"
        );
        Ok(url)
    }
}
