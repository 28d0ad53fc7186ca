//! Domain entities: customers, coffees, and the orders linking them.
//!
//! Entities hold their own data plus append-only lists of order handles.
//! Linking happens exclusively through [`crate::domain::Shop::place_order`],
//! which validates everything before touching either list.

use crate::domain::error::DomainError;
use crate::domain::shop::{CoffeeId, CustomerId, OrderId};

/// A coffee on the menu. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    name: String,
    orders: Vec<OrderId>,
}

impl Coffee {
    /// Create a coffee with a validated name (at least 3 characters).
    pub fn new(name: &str) -> Result<Self, DomainError> {
        if name.chars().count() < 3 {
            return Err(DomainError::CoffeeNameTooShort {
                name: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            orders: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Order handles for this coffee, in placement order.
    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    pub(crate) fn record_order(&mut self, order: OrderId) {
        self.orders.push(order);
    }
}

/// A registered customer. The name stays mutable, see
/// [`crate::domain::Shop::rename_customer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    orders: Vec<OrderId>,
}

impl Customer {
    /// Create a customer with a validated name (1 to 15 characters).
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let mut customer = Self {
            name: String::new(),
            orders: Vec::new(),
        };
        customer.set_name(name)?;
        Ok(customer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Order handles for this customer, in placement order.
    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    /// Rename with the same validation as construction.
    /// On failure the current name is kept.
    pub(crate) fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        let len = name.chars().count();
        if !(1..=15).contains(&len) {
            return Err(DomainError::CustomerNameLength {
                name: name.to_string(),
            });
        }
        self.name = name.to_string();
        Ok(())
    }

    pub(crate) fn record_order(&mut self, order: OrderId) {
        self.orders.push(order);
    }
}

/// An immutable fact linking one customer, one coffee, and a price.
///
/// Orders exist only inside a [`crate::domain::Shop`]; there is no removal
/// operation and no field can change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    customer: CustomerId,
    coffee: CoffeeId,
    price: f64,
}

impl Order {
    /// Validate the price and build the order. Handle validation and linkage
    /// are the shop's responsibility.
    pub(crate) fn new(
        customer: CustomerId,
        coffee: CoffeeId,
        price: f64,
    ) -> Result<Self, DomainError> {
        if !price.is_finite() {
            return Err(DomainError::PriceNotFinite { price });
        }
        if !(1.0..=10.0).contains(&price) {
            return Err(DomainError::PriceOutOfRange { price });
        }
        Ok(Self {
            customer,
            coffee,
            price,
        })
    }

    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    pub fn coffee(&self) -> CoffeeId {
        self.coffee
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
