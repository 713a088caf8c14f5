//! Barista: a simulated coffee machine.
//!
//! A [`CoffeeMachine`] holds water, coffee and milk levels and a heating
//! flag. Drinks are made by chaining asynchronous steps (heat, grind,
//! extract, steam), each a fixed simulated delay followed by a level
//! change.
//!
//! # Core Concepts
//!
//! - **Drink**: one of two hard-coded recipes, coffee or cappuccino
//! - **Inspection**: ingredient checks that report every shortage at once
//! - **Clock**: the injected wait capability behind every delay
//! - **History**: the stages each order went through
//!
//! # Example
//!
//! ```rust
//! use barista::clock::InstantClock;
//! use barista::core::{BrewStage, Levels};
//! use barista::CoffeeMachine;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut machine = CoffeeMachine::with_clock(InstantClock::new());
//! machine.refill_water(100);
//! machine.refill_coffee(100);
//! machine.refill_milk(100);
//!
//! let receipt = machine.order_drink("cappuccino").await;
//! assert!(receipt.is_served());
//! assert!(receipt.history.visited(BrewStage::Steaming));
//! assert_eq!(machine.levels(), Levels::new(50, 90, 80));
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod core;
pub mod error;
pub mod inspection;
pub mod logging;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Drink, Levels};
pub use error::{BrewError, Shortage};
pub use machine::{CoffeeMachine, OrderOutcome, OrderReceipt};
