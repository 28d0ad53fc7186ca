//! Application services
//!
//! Concrete report builders that orchestrate domain queries.

mod report;

pub use report::{CoffeeStats, CustomerStats, MenuReport};
