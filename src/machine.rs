//! The coffee machine and its brew steps.

use crate::clock::{Clock, TokioClock};
use crate::core::{BrewHistory, BrewStage, Drink, Ingredient, Levels, StageTransition};
use crate::error::BrewError;
use crate::inspection::IngredientCheck;
use std::time::Duration;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Time for cold water to come up to temperature.
pub const HEAT_DELAY: Duration = Duration::from_secs(3);
pub const GRIND_DELAY: Duration = Duration::from_secs(2);
pub const EXTRACT_DELAY: Duration = Duration::from_secs(3);
pub const STEAM_DELAY: Duration = Duration::from_secs(3);

/// Result of an order once it has been handled.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderOutcome {
    Served(Drink),
    Rejected(BrewError),
}

/// What `order_drink` hands back. Failures are recorded here, not raised.
#[derive(Clone, Debug)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub drink: String,
    pub outcome: OrderOutcome,
    pub history: BrewHistory,
    pub levels: Levels,
}

impl OrderReceipt {
    pub fn is_served(&self) -> bool {
        matches!(self.outcome, OrderOutcome::Served(_))
    }

    pub fn error(&self) -> Option<&BrewError> {
        match &self.outcome {
            OrderOutcome::Served(_) => None,
            OrderOutcome::Rejected(err) => Some(err),
        }
    }
}

/// A single coffee machine.
///
/// Every mutating operation takes `&mut self`, so one instance can only
/// run one order at a time: the ingredient check and the consumption
/// that follows it cannot interleave with another order.
///
/// # Example
///
/// ```rust
/// use barista::clock::InstantClock;
/// use barista::core::Levels;
/// use barista::CoffeeMachine;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut machine = CoffeeMachine::with_clock(InstantClock::new());
/// machine.refill_water(100);
/// machine.refill_coffee(100);
/// machine.refill_milk(100);
///
/// machine.order_drink("coffee").await;
/// assert_eq!(machine.levels(), Levels::new(50, 90, 100));
/// # }
/// ```
#[derive(Debug)]
pub struct CoffeeMachine<C: Clock = TokioClock> {
    levels: Levels,
    heating: bool,
    clock: C,
    last_history: BrewHistory,
}

impl CoffeeMachine<TokioClock> {
    /// Empty machine driven by real timers.
    pub fn new() -> Self {
        Self::with_clock(TokioClock)
    }
}

impl Default for CoffeeMachine<TokioClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CoffeeMachine<C> {
    /// Empty, cold machine that waits on `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            levels: Levels::default(),
            heating: false,
            clock,
            last_history: BrewHistory::new(),
        }
    }

    pub fn levels(&self) -> Levels {
        self.levels
    }

    pub fn water_level(&self) -> u32 {
        self.levels.water
    }

    pub fn coffee_level(&self) -> u32 {
        self.levels.coffee
    }

    pub fn milk_level(&self) -> u32 {
        self.levels.milk
    }

    pub fn is_heating(&self) -> bool {
        self.heating
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Stage history of the most recent `prepare_drink` call.
    pub fn last_history(&self) -> &BrewHistory {
        &self.last_history
    }

    pub fn refill_water(&mut self, amount: u32) {
        self.refill(Ingredient::Water, amount);
    }

    pub fn refill_coffee(&mut self, amount: u32) {
        self.refill(Ingredient::Coffee, amount);
    }

    pub fn refill_milk(&mut self, amount: u32) {
        self.refill(Ingredient::Milk, amount);
    }

    fn refill(&mut self, ingredient: Ingredient, amount: u32) {
        if !self.levels.add(ingredient, amount) {
            warn!(%ingredient, amount, "Refill overflowed, level capped at maximum");
        }
        debug!(%ingredient, amount, level = self.levels.get(ingredient), "Refilled");
    }

    fn consume(&mut self, ingredient: Ingredient, amount: u32) {
        let available = self.levels.get(ingredient);
        if !self.levels.draw(ingredient, amount) {
            warn!(
                %ingredient,
                amount,
                available,
                "Drew more than available, level clamped at zero"
            );
        }
    }

    /// Check the levels against the recipe for `drink_type`.
    ///
    /// Unknown names fail with [`BrewError::UnsupportedDrink`]. Known
    /// drinks fail with [`BrewError::CannotPrepare`] listing every
    /// missing ingredient. Nothing is mutated.
    pub fn check_ingredients(&self, drink_type: &str) -> Result<Drink, BrewError> {
        let drink: Drink = drink_type.parse()?;
        IngredientCheck::for_drink(drink).ensure(&self.levels)?;
        Ok(drink)
    }

    /// Bring the water up to temperature.
    ///
    /// Fails with [`BrewError::TankEmpty`] when there is no water. Returns
    /// immediately without waiting if the water is already hot.
    pub async fn heat_water(&mut self) -> Result<(), BrewError> {
        if self.levels.water == 0 {
            return Err(BrewError::TankEmpty);
        }
        if self.heating {
            debug!("Water already hot");
            return Ok(());
        }

        self.clock.wait(HEAT_DELAY).await;
        self.heating = true;
        info!("Water is hot");
        Ok(())
    }

    pub async fn grind_coffee(&mut self) {
        self.clock.wait(GRIND_DELAY).await;
        self.consume(Ingredient::Coffee, Drink::Coffee.recipe().coffee);
        info!("Coffee is ground");
    }

    pub async fn extract_espresso(&mut self) {
        self.clock.wait(EXTRACT_DELAY).await;
        self.consume(Ingredient::Water, Drink::Coffee.recipe().water);
        info!("Espresso is extracted");
    }

    pub async fn steam_milk(&mut self) {
        self.clock.wait(STEAM_DELAY).await;
        self.consume(Ingredient::Milk, Drink::Cappuccino.recipe().milk);
        info!("Milk is steamed and frothed");
    }

    /// Run the full sequence for `drink_type`, stopping at the first error.
    ///
    /// The stages visited are kept in [`CoffeeMachine::last_history`].
    pub async fn prepare_drink(&mut self, drink_type: &str) -> Result<Drink, BrewError> {
        let mut stages = StageLog::default();
        let result = self.run_recipe(drink_type, &mut stages).await;
        if result.is_err() {
            stages.enter(BrewStage::Failed);
        }
        self.last_history = stages.history;
        result
    }

    async fn run_recipe(
        &mut self,
        drink_type: &str,
        stages: &mut StageLog,
    ) -> Result<Drink, BrewError> {
        stages.enter(BrewStage::Checking);
        let drink = self.check_ingredients(drink_type)?;
        info!(%drink, "Preparing {drink}...");

        stages.enter(BrewStage::Heating);
        self.heat_water().await?;

        stages.enter(BrewStage::Grinding);
        self.grind_coffee().await;

        stages.enter(BrewStage::Extracting);
        self.extract_espresso().await;

        if drink.recipe().needs_milk() {
            stages.enter(BrewStage::Steaming);
            self.steam_milk().await;
        }

        stages.enter(BrewStage::Ready);
        info!(%drink, levels = %self.levels, "Your {drink} is ready");
        Ok(drink)
    }

    /// Prepare `drink_type`, logging any failure instead of returning it.
    pub async fn order_drink(&mut self, drink_type: &str) -> OrderReceipt {
        let id = Uuid::new_v4();
        let span = info_span!("order", %id, drink = drink_type);

        let outcome = match self.prepare_drink(drink_type).instrument(span).await {
            Ok(drink) => OrderOutcome::Served(drink),
            Err(err) => {
                error!(%id, drink = drink_type, "{err}");
                OrderOutcome::Rejected(err)
            }
        };

        OrderReceipt {
            id,
            drink: drink_type.to_string(),
            outcome,
            history: self.last_history.clone(),
            levels: self.levels,
        }
    }
}

#[derive(Default)]
struct StageLog {
    history: BrewHistory,
}

impl StageLog {
    fn enter(&mut self, to: BrewStage) {
        let from = self.history.current();
        debug!(from = from.name(), to = to.name(), "Stage");
        self.history = self.history.record(StageTransition::now(from, to));
    }
}
