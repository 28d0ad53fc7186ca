//! Declarative order scenarios.
//!
//! A scenario file lists customers, coffees, and orders by name:
//!
//! ```toml
//! [[customers]]
//! name = "Alice"
//!
//! [[coffees]]
//! name = "Espresso"
//!
//! [[orders]]
//! customer = "Alice"
//! coffee = "Espresso"
//! price = 3.5
//! ```
//!
//! Building a scenario produces a fresh [`Shop`] with every entity
//! registered and every order placed in file order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{CoffeeId, CustomerId, Shop};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub customers: Vec<CustomerEntry>,
    #[serde(default)]
    pub coffees: Vec<CoffeeEntry>,
    #[serde(default)]
    pub orders: Vec<OrderEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerEntry {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoffeeEntry {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderEntry {
    pub customer: String,
    pub coffee: String,
    pub price: f64,
}

impl Scenario {
    /// Parse scenario TOML.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ApplicationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|e| ApplicationError::ScenarioParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The built-in demonstration scenario: three customers, three
    /// coffees, five orders.
    pub fn demo() -> Self {
        let customers = ["Alice", "Bob", "Charlie"]
            .map(|name| CustomerEntry {
                name: name.to_string(),
            })
            .to_vec();
        let coffees = ["Espresso", "Latte", "Cappuccino"]
            .map(|name| CoffeeEntry {
                name: name.to_string(),
            })
            .to_vec();
        let orders = [
            ("Alice", "Espresso", 3.50),
            ("Bob", "Latte", 4.25),
            ("Alice", "Latte", 4.50),
            ("Charlie", "Espresso", 3.25),
            ("Bob", "Espresso", 3.75),
        ]
        .map(|(customer, coffee, price)| OrderEntry {
            customer: customer.to_string(),
            coffee: coffee.to_string(),
            price,
        })
        .to_vec();

        Self {
            customers,
            coffees,
            orders,
        }
    }

    /// Build a fresh shop from this scenario.
    ///
    /// Customers and coffees are registered in file order; names must be
    /// unique within their kind since orders reference entities by name.
    pub fn build(&self) -> ApplicationResult<Shop> {
        let mut shop = Shop::new();
        let mut customers: HashMap<&str, CustomerId> = HashMap::new();
        let mut coffees: HashMap<&str, CoffeeId> = HashMap::new();

        for entry in &self.customers {
            if customers.contains_key(entry.name.as_str()) {
                return Err(ApplicationError::DuplicateName {
                    kind: "customer",
                    name: entry.name.clone(),
                });
            }
            let id = shop.add_customer(&entry.name)?;
            customers.insert(entry.name.as_str(), id);
        }

        for entry in &self.coffees {
            if coffees.contains_key(entry.name.as_str()) {
                return Err(ApplicationError::DuplicateName {
                    kind: "coffee",
                    name: entry.name.clone(),
                });
            }
            let id = shop.add_coffee(&entry.name)?;
            coffees.insert(entry.name.as_str(), id);
        }

        for entry in &self.orders {
            let customer = *customers.get(entry.customer.as_str()).ok_or_else(|| {
                ApplicationError::UnknownName {
                    kind: "customer",
                    name: entry.customer.clone(),
                }
            })?;
            let coffee = *coffees.get(entry.coffee.as_str()).ok_or_else(|| {
                ApplicationError::UnknownName {
                    kind: "coffee",
                    name: entry.coffee.clone(),
                }
            })?;
            shop.place_order(customer, coffee, entry.price)?;
        }

        debug!(
            "built shop: {} customers, {} coffees, {} orders",
            self.customers.len(),
            self.coffees.len(),
            self.orders.len()
        );
        Ok(shop)
    }
}
