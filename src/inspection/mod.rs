//! Ingredient inspection before a drink is started.
//!
//! Checks use stillwater's `Validation` so that every missing ingredient
//! is reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use barista::core::{Drink, Levels};
//! use barista::inspection::IngredientCheck;
//!
//! let check = IngredientCheck::for_drink(Drink::Cappuccino);
//! let shortages = check.shortages(&Levels::new(0, 0, 0));
//! assert_eq!(shortages.len(), 3);
//! ```

use crate::core::{Drink, Ingredient, Levels};
use crate::error::{BrewError, Shortage};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Minimum level required of one ingredient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub ingredient: Ingredient,
    pub minimum: u32,
}

impl Requirement {
    fn evaluate(&self, levels: &Levels) -> Validation<(), NonEmptyVec<Shortage>> {
        let available = levels.get(self.ingredient);
        if available >= self.minimum {
            Validation::success(())
        } else {
            Validation::fail(Shortage::new(self.ingredient, self.minimum, available))
        }
    }
}

/// All requirements a drink's recipe places on the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientCheck {
    drink: Drink,
    requirements: Vec<Requirement>,
}

impl IngredientCheck {
    pub fn for_drink(drink: Drink) -> Self {
        let recipe = drink.recipe();
        let requirements = [
            (Ingredient::Water, recipe.water),
            (Ingredient::Coffee, recipe.coffee),
            (Ingredient::Milk, recipe.milk),
        ]
        .into_iter()
        .filter(|(_, minimum)| *minimum > 0)
        .map(|(ingredient, minimum)| Requirement {
            ingredient,
            minimum,
        })
        .collect();

        Self {
            drink,
            requirements,
        }
    }

    pub fn drink(&self) -> Drink {
        self.drink
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Evaluate every requirement, accumulating all shortages.
    pub fn inspect(&self, levels: &Levels) -> Validation<(), NonEmptyVec<Shortage>> {
        let checks: Vec<Validation<(), NonEmptyVec<Shortage>>> = self
            .requirements
            .iter()
            .map(|requirement| requirement.evaluate(levels))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Shortages found against `levels`, empty when the drink can be made.
    pub fn shortages(&self, levels: &Levels) -> Vec<Shortage> {
        match self.inspect(levels) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().copied().collect(),
        }
    }

    /// Collapse the inspection into a `Result` for `?` propagation.
    pub fn ensure(&self, levels: &Levels) -> Result<(), BrewError> {
        let shortages = self.shortages(levels);
        if shortages.is_empty() {
            Ok(())
        } else {
            Err(BrewError::CannotPrepare {
                drink: self.drink,
                shortages,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coffee_requires_water_and_coffee_only() {
        let check = IngredientCheck::for_drink(Drink::Coffee);
        let ingredients: Vec<_> = check.requirements().iter().map(|r| r.ingredient).collect();
        assert_eq!(ingredients, vec![Ingredient::Water, Ingredient::Coffee]);
    }

    #[test]
    fn exact_minimums_pass() {
        let check = IngredientCheck::for_drink(Drink::Cappuccino);
        assert!(check.inspect(&Levels::new(50, 10, 20)).is_success());
        assert!(check.ensure(&Levels::new(50, 10, 20)).is_ok());
    }

    #[test]
    fn inspection_accumulates_all_shortages() {
        let check = IngredientCheck::for_drink(Drink::Cappuccino);

        match check.inspect(&Levels::new(49, 9, 19)) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, Shortage::InsufficientWater { available: 49, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, Shortage::InsufficientCoffee { available: 9, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, Shortage::InsufficientMilk { available: 19, .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn coffee_ignores_missing_milk() {
        let check = IngredientCheck::for_drink(Drink::Coffee);
        assert!(check.shortages(&Levels::new(100, 100, 0)).is_empty());
    }

    #[test]
    fn ensure_reports_the_drink() {
        let check = IngredientCheck::for_drink(Drink::Coffee);
        let err = check.ensure(&Levels::new(10, 100, 0)).unwrap_err();
        assert_eq!(
            err,
            BrewError::CannotPrepare {
                drink: Drink::Coffee,
                shortages: vec![Shortage::InsufficientWater {
                    required: 50,
                    available: 10
                }],
            }
        );
    }
}
