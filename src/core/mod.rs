//! Core value types of the machine.
//!
//! Everything here is plain data with pure methods:
//! - `Drink` and its fixed `Recipe`
//! - `Levels` of water, coffee and milk
//! - `BrewStage` and the immutable `BrewHistory` of an order

mod drink;
mod history;
mod levels;
mod stage;

pub use drink::{Drink, Recipe, COFFEE_PER_SHOT, MILK_PER_FOAM, WATER_PER_SHOT};
pub use history::{BrewHistory, StageTransition};
pub use levels::{Ingredient, Levels};
pub use stage::BrewStage;
