//! Application layer: the reconciliation operations and the pipeline that runs them.
//!
//! `arguments`, `instructions` and `redirect` are pure functions over domain
//! values. `BankTransferGateway` loads settings and orders through the ports
//! and calls them; `bootstrap` holds the startup tasks run once per process.

pub mod arguments;
pub mod bootstrap;
pub mod gateway;
pub mod instructions;
pub mod redirect;
