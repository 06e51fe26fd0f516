use super::order::OrderIdentity;
use crate::error::Result;
use async_trait::async_trait;
use url::Url;

/// Read/write access to persisted gateway options.
///
/// Values are stored as strings the way the platform keeps them; typed
/// normalization happens in `GatewaySettings`.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, option: &str) -> Result<Option<String>>;
    async fn set(&self, option: &str, value: String) -> Result<()>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn get(&self, order_id: u64) -> Result<Option<OrderIdentity>>;
    /// The platform's canonical "order received" page for `order`.
    async fn order_received_url(&self, order: &OrderIdentity) -> Result<Url>;
}

/// Schema operations needed by the pending-payment table startup task.
#[async_trait]
pub trait SchemaMigrator: Send + Sync {
    async fn table_exists(&self, table: &str) -> Result<bool>;
    async fn create_pending_payment_table(&self, table: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Collects notices for the admin screens.
#[async_trait]
pub trait NoticeSink: Send + Sync {
    async fn add_notice(&self, notice: Notice) -> Result<()>;
}

pub type SettingsStoreBox = Box<dyn SettingsStore>;
pub type OrderStoreBox = Box<dyn OrderStore>;
pub type SchemaMigratorBox = Box<dyn SchemaMigrator>;
pub type NoticeSinkBox = Box<dyn NoticeSink>;
