//! Arena-backed shop registry.
//!
//! The shop owns all customers, coffees, and orders in three
//! generational arenas. Order ↔ customer/coffee links are stored as
//! index-based handles in both directions, so no reference cycles exist.
//! Nothing is ever removed, which makes arena iteration order equal to
//! registration order; the aggregate queries rely on that.

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

use crate::domain::entities::{Coffee, Customer, Order};
use crate::domain::error::DomainError;

/// Result type for shop operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Handle to a customer registered in a [`Shop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(Index);

/// Handle to a coffee on a [`Shop`] menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoffeeId(Index);

/// Handle to an order placed in a [`Shop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(Index);

/// Owns every entity of one order-tracking scenario.
///
/// Handles are only valid for the shop that issued them; resolving a
/// foreign or stale handle fails with the matching `Unknown*` error.
/// Independent scenarios (and tests) each build their own `Shop`, so no
/// state leaks between them.
#[derive(Debug)]
pub struct Shop {
    customers: Arena<Customer>,
    coffees: Arena<Coffee>,
    orders: Arena<Order>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    pub fn new() -> Self {
        Self {
            customers: Arena::new(),
            coffees: Arena::new(),
            orders: Arena::new(),
        }
    }

    /// Register a customer. Fails on an invalid name (1 to 15 characters).
    #[instrument(level = "debug", skip(self))]
    pub fn add_customer(&mut self, name: &str) -> DomainResult<CustomerId> {
        let customer = Customer::new(name)?;
        Ok(CustomerId(self.customers.insert(customer)))
    }

    /// Put a coffee on the menu. Fails on an invalid name (at least 3 characters).
    #[instrument(level = "debug", skip(self))]
    pub fn add_coffee(&mut self, name: &str) -> DomainResult<CoffeeId> {
        let coffee = Coffee::new(name)?;
        Ok(CoffeeId(self.coffees.insert(coffee)))
    }

    /// Rename a customer, with the same validation as registration.
    #[instrument(level = "debug", skip(self))]
    pub fn rename_customer(&mut self, id: CustomerId, name: &str) -> DomainResult<()> {
        let customer = self
            .customers
            .get_mut(id.0)
            .ok_or(DomainError::UnknownCustomer(id))?;
        customer.set_name(name)
    }

    /// Place an order, linking it into both the customer's and the
    /// coffee's order lists.
    ///
    /// Both handles and the price are validated before either list is
    /// touched; a failed call leaves the shop exactly as it was.
    #[instrument(level = "debug", skip(self))]
    pub fn place_order(
        &mut self,
        customer: CustomerId,
        coffee: CoffeeId,
        price: f64,
    ) -> DomainResult<OrderId> {
        self.customer(customer)?;
        self.coffee(coffee)?;
        let order = Order::new(customer, coffee, price)?;

        let id = OrderId(self.orders.insert(order));
        if let Some(customer) = self.customers.get_mut(customer.0) {
            customer.record_order(id);
        }
        if let Some(coffee) = self.coffees.get_mut(coffee.0) {
            coffee.record_order(id);
        }
        Ok(id)
    }

    pub fn customer(&self, id: CustomerId) -> DomainResult<&Customer> {
        self.customers
            .get(id.0)
            .ok_or(DomainError::UnknownCustomer(id))
    }

    pub fn coffee(&self, id: CoffeeId) -> DomainResult<&Coffee> {
        self.coffees.get(id.0).ok_or(DomainError::UnknownCoffee(id))
    }

    pub fn order(&self, id: OrderId) -> DomainResult<&Order> {
        self.orders.get(id.0).ok_or(DomainError::UnknownOrder(id))
    }

    /// Customers in registration order.
    pub fn customers(&self) -> impl Iterator<Item = (CustomerId, &Customer)> {
        self.customers.iter().map(|(idx, c)| (CustomerId(idx), c))
    }

    /// Coffees in menu order.
    pub fn coffees(&self) -> impl Iterator<Item = (CoffeeId, &Coffee)> {
        self.coffees.iter().map(|(idx, c)| (CoffeeId(idx), c))
    }

    /// Orders in placement order.
    pub fn orders(&self) -> impl Iterator<Item = (OrderId, &Order)> {
        self.orders.iter().map(|(idx, o)| (OrderId(idx), o))
    }

    /// Owned snapshot of a customer's order handles.
    pub fn customer_orders(&self, id: CustomerId) -> DomainResult<Vec<OrderId>> {
        Ok(self.customer(id)?.orders().to_vec())
    }

    /// Owned snapshot of a coffee's order handles.
    pub fn coffee_orders(&self, id: CoffeeId) -> DomainResult<Vec<OrderId>> {
        Ok(self.coffee(id)?.orders().to_vec())
    }

    /// Distinct coffees this customer has ordered, in first-order order.
    #[instrument(level = "trace", skip(self))]
    pub fn customer_coffees(&self, id: CustomerId) -> DomainResult<Vec<CoffeeId>> {
        Ok(self
            .customer(id)?
            .orders()
            .iter()
            .filter_map(|&o| self.orders.get(o.0))
            .map(|o| o.coffee())
            .unique()
            .collect())
    }

    /// Distinct customers who ordered this coffee, in first-order order.
    #[instrument(level = "trace", skip(self))]
    pub fn coffee_customers(&self, id: CoffeeId) -> DomainResult<Vec<CustomerId>> {
        Ok(self
            .coffee(id)?
            .orders()
            .iter()
            .filter_map(|&o| self.orders.get(o.0))
            .map(|o| o.customer())
            .unique()
            .collect())
    }

    /// Number of orders placed for this coffee.
    pub fn num_orders(&self, id: CoffeeId) -> DomainResult<usize> {
        Ok(self.coffee(id)?.orders().len())
    }

    /// Mean order price for this coffee, `0.0` when it has no orders.
    #[instrument(level = "trace", skip(self))]
    pub fn average_price(&self, id: CoffeeId) -> DomainResult<f64> {
        let orders = self.coffee(id)?.orders();
        if orders.is_empty() {
            return Ok(0.0);
        }
        let total: f64 = orders
            .iter()
            .filter_map(|&o| self.orders.get(o.0))
            .map(|o| o.price())
            .sum();
        Ok(total / orders.len() as f64)
    }

    /// Customer with the highest cumulative spend on this coffee.
    ///
    /// Customers with zero spend are not considered; `None` when nobody
    /// has bought the coffee. On equal totals the earliest-registered
    /// customer wins: a later customer only replaces the running best
    /// with a strictly greater total.
    #[instrument(level = "debug", skip(self))]
    pub fn most_aficionado(&self, coffee: CoffeeId) -> DomainResult<Option<CustomerId>> {
        self.coffee(coffee)?;

        let mut best: Option<(CustomerId, f64)> = None;
        for (id, customer) in self.customers() {
            let spent: f64 = customer
                .orders()
                .iter()
                .filter_map(|&o| self.orders.get(o.0))
                .filter(|o| o.coffee() == coffee)
                .map(|o| o.price())
                .sum();
            if spent <= 0.0 {
                continue;
            }
            match best {
                Some((_, max)) if spent <= max => {}
                _ => best = Some((id, spent)),
            }
        }
        Ok(best.map(|(id, _)| id))
    }
}
