use crate::domain::order::OrderIdentity;
use crate::domain::ports::{Notice, NoticeSink, OrderStore, SchemaMigrator, SettingsStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

/// A thread-safe in-memory options table.
///
/// Cloning shares the underlying map, so startup tasks and the gateway can
/// each hold a handle to the same store.
#[derive(Default, Clone)]
pub struct InMemorySettingsStore {
    options: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySettingsStore {
    /// Creates a new, empty settings store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(options: HashMap<String, String>) -> Self {
        Self {
            options: Arc::new(RwLock::new(options)),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, option: &str) -> Result<Option<String>> {
        let options = self.options.read().await;
        Ok(options.get(option).cloned())
    }

    async fn set(&self, option: &str, value: String) -> Result<()> {
        let mut options = self.options.write().await;
        options.insert(option.to_string(), value);
        Ok(())
    }
}

/// In-memory order lookup.
///
/// Order received links are built as `{checkout}/order-received/{id}/?key={order_key}`.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<std::sync::RwLock<HashMap<u64, OrderIdentity>>>,
    checkout_url: Url,
}

impl InMemoryOrderStore {
    pub fn new(mut checkout_url: Url) -> Self {
        if !checkout_url.path().ends_with('/') {
            let path = format!("{}/", checkout_url.path());
            checkout_url.set_path(&path);
        }
        Self {
            orders: Arc::default(),
            checkout_url,
        }
    }

    /// Adds or replaces an order. Usable outside an async context, e.g. while wiring up.
    pub fn insert(&self, order: OrderIdentity) {
        let mut orders = self
            .orders
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        orders.insert(order.id, order);
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, order_id: u64) -> Result<Option<OrderIdentity>> {
        let orders = self
            .orders
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(orders.get(&order_id).cloned())
    }

    async fn order_received_url(&self, order: &OrderIdentity) -> Result<Url> {
        let mut url = self
            .checkout_url
            .join(&format!("order-received/{}/", order.id))?;
        if !order.order_key.is_empty() {
            url.query_pairs_mut().append_pair("key", &order.order_key);
        }
        Ok(url)
    }
}

/// Records created tables instead of touching a database.
#[derive(Default, Clone)]
pub struct InMemorySchemaMigrator {
    tables: Arc<RwLock<HashSet<String>>>,
    created: Arc<RwLock<Vec<String>>>,
}

impl InMemorySchemaMigrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: Arc::new(RwLock::new(tables.into_iter().map(Into::into).collect())),
            created: Arc::default(),
        }
    }

    /// Tables created through this migrator, in creation order.
    pub async fn created(&self) -> Vec<String> {
        self.created.read().await.clone()
    }
}

#[async_trait]
impl SchemaMigrator for InMemorySchemaMigrator {
    async fn table_exists(&self, table: &str) -> Result<bool> {
        Ok(self.tables.read().await.contains(table))
    }

    async fn create_pending_payment_table(&self, table: &str) -> Result<()> {
        if self.tables.write().await.insert(table.to_string()) {
            self.created.write().await.push(table.to_string());
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryNoticeSink {
    notices: Arc<RwLock<Vec<Notice>>>,
}

impl InMemoryNoticeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notices(&self) -> Vec<Notice> {
        self.notices.read().await.clone()
    }
}

#[async_trait]
impl NoticeSink for InMemoryNoticeSink {
    async fn add_notice(&self, notice: Notice) -> Result<()> {
        self.notices.write().await.push(notice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    #[tokio::test]
    async fn test_in_memory_settings_store() {
        let store = InMemorySettingsStore::from_pairs([("order_dueDate", "12")]);

        assert_eq!(store.get("order_dueDate").await.unwrap().as_deref(), Some("12"));
        assert!(store.get("missing").await.unwrap().is_none());

        store.set("order_dueDate", "30".to_string()).await.unwrap();
        assert_eq!(store.get("order_dueDate").await.unwrap().as_deref(), Some("30"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemorySettingsStore::new();
        let handle = store.clone();
        handle.set("a", "b".to_string()).await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_order_received_url() {
        let store = InMemoryOrderStore::new(Url::parse("https://shop.test/checkout").unwrap());
        let order = OrderIdentity::new(42, OrderStatus::Pending).with_order_key("wc_order_abc");
        store.insert(order.clone());

        assert_eq!(store.get(42).await.unwrap(), Some(order.clone()));
        assert!(store.get(43).await.unwrap().is_none());

        let url = store.order_received_url(&order).await.unwrap();
        assert_eq!(
            url.as_str(),
            "https://shop.test/checkout/order-received/42/?key=wc_order_abc"
        );
    }
}
