//! Aggregate reports over a shop.
//!
//! Snapshots the derived domain queries into plain data structs so the
//! CLI (or any other caller) can render them without touching handles.

use tracing::debug;

use crate::domain::{CoffeeId, CustomerId, DomainResult, Shop};

/// Per-coffee aggregate view.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeStats {
    pub name: String,
    pub num_orders: usize,
    /// Mean order price, `0.0` when the coffee has no orders.
    pub average_price: f64,
    /// Distinct customer names, first-order order.
    pub customers: Vec<String>,
    /// Top spender's name, `None` when nobody has bought this coffee.
    pub aficionado: Option<String>,
}

impl CoffeeStats {
    pub fn for_coffee(shop: &Shop, id: CoffeeId) -> DomainResult<Self> {
        let coffee = shop.coffee(id)?;

        let mut customers = Vec::new();
        for customer in shop.coffee_customers(id)? {
            customers.push(shop.customer(customer)?.name().to_string());
        }

        let aficionado = match shop.most_aficionado(id)? {
            Some(customer) => Some(shop.customer(customer)?.name().to_string()),
            None => None,
        };

        Ok(Self {
            name: coffee.name().to_string(),
            num_orders: shop.num_orders(id)?,
            average_price: shop.average_price(id)?,
            customers,
            aficionado,
        })
    }
}

/// Aggregate view over the whole menu, in menu order.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuReport {
    pub coffees: Vec<CoffeeStats>,
}

impl MenuReport {
    pub fn for_shop(shop: &Shop) -> DomainResult<Self> {
        let mut coffees = Vec::new();
        for (id, _) in shop.coffees() {
            coffees.push(CoffeeStats::for_coffee(shop, id)?);
        }
        debug!("menu report: {} coffees", coffees.len());
        Ok(Self { coffees })
    }
}

/// Per-customer aggregate view.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerStats {
    pub name: String,
    pub num_orders: usize,
    pub total_spent: f64,
    /// Distinct coffee names, first-order order.
    pub coffees: Vec<String>,
}

impl CustomerStats {
    pub fn for_customer(shop: &Shop, id: CustomerId) -> DomainResult<Self> {
        let customer = shop.customer(id)?;

        let mut total_spent = 0.0;
        for order in shop.customer_orders(id)? {
            total_spent += shop.order(order)?.price();
        }

        let mut coffees = Vec::new();
        for coffee in shop.customer_coffees(id)? {
            coffees.push(shop.coffee(coffee)?.name().to_string());
        }

        Ok(Self {
            name: customer.name().to_string(),
            num_orders: customer.orders().len(),
            total_spent,
            coffees,
        })
    }

    /// Stats for every customer, in registration order.
    pub fn for_all(shop: &Shop) -> DomainResult<Vec<Self>> {
        let mut stats = Vec::new();
        for (id, _) in shop.customers() {
            stats.push(Self::for_customer(shop, id)?);
        }
        Ok(stats)
    }
}
