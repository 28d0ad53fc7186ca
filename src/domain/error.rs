//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::shop::{CoffeeId, CustomerId, OrderId};

/// Domain errors represent business rule violations.
/// These are independent of scenario loading and CLI concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("coffee name must be at least 3 characters: {name:?}")]
    CoffeeNameTooShort { name: String },

    #[error("customer name must be 1 to 15 characters: {name:?}")]
    CustomerNameLength { name: String },

    #[error("price must be a finite number: {price}")]
    PriceNotFinite { price: f64 },

    #[error("price must be between 1.0 and 10.0: {price}")]
    PriceOutOfRange { price: f64 },

    #[error("unknown customer handle: {0:?}")]
    UnknownCustomer(CustomerId),

    #[error("unknown coffee handle: {0:?}")]
    UnknownCoffee(CoffeeId),

    #[error("unknown order handle: {0:?}")]
    UnknownOrder(OrderId),
}
