//! brewlog: in-memory coffee shop order tracking.
//!
//! Customers place orders for coffees at a given price; aggregate views
//! (unique coffees per customer, unique customers per coffee, average
//! price and top spender per coffee) are derived from the order log.
//!
//! The crate is layered:
//! - [`domain`]: entities and the arena-backed [`Shop`] registry with its
//!   derived queries (pure, no I/O)
//! - [`application`]: declarative scenario files and report building
//! - [`cli`]: argument parsing, command dispatch, terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    Coffee, CoffeeId, Customer, CustomerId, DomainError, DomainResult, Order, OrderId, Shop,
};
