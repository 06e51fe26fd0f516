use crate::domain::ports::{
    Notice, NoticeLevel, NoticeSinkBox, SchemaMigratorBox, SettingsStoreBox,
};
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

pub const DB_VERSION_OPTION: &str = "mollie-db-version";
pub const DB_VERSION: &str = "1.0";
pub const PENDING_PAYMENT_TABLE: &str = "mollie_pending_payment";
pub const LIVE_API_KEY_OPTION: &str = "mollie-payments-for-woocommerce_live_api_key";
pub const TEST_API_KEY_OPTION: &str = "mollie-payments-for-woocommerce_test_api_key";

/// One-shot initialization step run before the gateway serves requests.
#[async_trait]
pub trait StartupTask: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self) -> Result<()>;
}

/// Ordered list of startup tasks, run once at process start.
#[derive(Default)]
pub struct Bootstrap {
    tasks: Vec<Box<dyn StartupTask>>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, task: impl StartupTask + 'static) -> Self {
        self.tasks.push(Box::new(task));
        self
    }

    /// Runs every task in registration order, stopping at the first failure.
    pub async fn run_all(&self) -> Result<()> {
        for task in &self.tasks {
            debug!(task = task.name(), "running startup task");
            task.run().await.map_err(|e| {
                warn!(task = task.name(), error = %e, "startup task failed");
                GatewayError::StartupError {
                    task: task.name().to_string(),
                    reason: e.to_string(),
                }
            })?;
        }
        info!(tasks = self.tasks.len(), "startup complete");
        Ok(())
    }
}

/// Creates the pending-payment table once per schema version.
pub struct PendingPaymentSchemaTask {
    settings: SettingsStoreBox,
    migrator: SchemaMigratorBox,
    table_prefix: String,
}

impl PendingPaymentSchemaTask {
    pub fn new(
        settings: SettingsStoreBox,
        migrator: SchemaMigratorBox,
        table_prefix: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            migrator,
            table_prefix: table_prefix.into(),
        }
    }
}

#[async_trait]
impl StartupTask for PendingPaymentSchemaTask {
    fn name(&self) -> &'static str {
        "pending-payment-schema"
    }

    async fn run(&self) -> Result<()> {
        let current = self.settings.get(DB_VERSION_OPTION).await?;
        if current.as_deref() == Some(DB_VERSION) {
            return Ok(());
        }

        let table = format!("{}{}", self.table_prefix, PENDING_PAYMENT_TABLE);
        if !self.migrator.table_exists(&table).await? {
            self.migrator.create_pending_payment_table(&table).await?;
            info!(%table, "created pending payment table");
        }

        self.settings
            .set(DB_VERSION_OPTION, DB_VERSION.to_string())
            .await
    }
}

/// Raises an admin notice when neither a live nor a test API key is configured.
pub struct ApiKeyPresenceTask {
    settings: SettingsStoreBox,
    notices: NoticeSinkBox,
}

impl ApiKeyPresenceTask {
    pub fn new(settings: SettingsStoreBox, notices: NoticeSinkBox) -> Self {
        Self { settings, notices }
    }

    async fn is_set(&self, option: &str) -> Result<bool> {
        Ok(self
            .settings
            .get(option)
            .await?
            .is_some_and(|key| !key.trim().is_empty()))
    }
}

#[async_trait]
impl StartupTask for ApiKeyPresenceTask {
    fn name(&self) -> &'static str {
        "api-key-presence"
    }

    async fn run(&self) -> Result<()> {
        if self.is_set(LIVE_API_KEY_OPTION).await? || self.is_set(TEST_API_KEY_OPTION).await? {
            return Ok(());
        }

        warn!("no live or test API key configured");
        self.notices
            .add_notice(Notice {
                level: NoticeLevel::Error,
                message: "<strong>Bank transfer payments: API keys missing</strong> Please set your API keys in the payment settings.".to_string(),
            })
            .await
    }
}
