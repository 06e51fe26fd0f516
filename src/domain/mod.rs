//! Domain types and pure policies for bank transfer payments.
//!
//! Nothing in here touches a store or the clock: settings, orders and payment
//! records are plain values handed in by the application layer.

pub mod arguments;
pub mod expiry;
pub mod order;
pub mod payment;
pub mod ports;
pub mod settings;
