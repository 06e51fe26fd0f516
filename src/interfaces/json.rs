//! JSON readers for orders, provider payments and request bodies.

use crate::domain::arguments::PaymentArguments;
use crate::domain::order::OrderIdentity;
use crate::domain::payment::PaymentRecord;
use crate::error::Result;
use std::io::Read;

pub fn read_order<R: Read>(source: R) -> Result<OrderIdentity> {
    Ok(serde_json::from_reader(source)?)
}

pub fn read_payment<R: Read>(source: R) -> Result<PaymentRecord> {
    Ok(serde_json::from_reader(source)?)
}

pub fn read_arguments<R: Read>(source: R) -> Result<PaymentArguments> {
    Ok(serde_json::from_reader(source)?)
}
