//! Centralized balance and tuning constants for Pippet simulation logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that behavior can only be adjusted via
//! code changes reviewed in version control, rather than through external
//! assets.

// Attribute bounds ----------------------------------------------------------
pub(crate) const VITAL_MIN: i32 = 0;
pub(crate) const VITAL_MAX: i32 = 100;

// Starting attributes -------------------------------------------------------
pub(crate) const START_HUNGER: i32 = 40;
pub(crate) const START_HAPPINESS: i32 = 80;
pub(crate) const START_ENERGY: i32 = 70;
pub(crate) const START_CLEANLINESS: i32 = 90;
pub(crate) const START_HEALTH: i32 = 90;

// Feed tuning ---------------------------------------------------------------
pub(crate) const FEED_HUNGER_RELIEF: i32 = 20;
pub(crate) const FEED_HAPPINESS_GAIN: i32 = 5;
pub(crate) const FEED_ENERGY_GAIN: i32 = 5;

// Play tuning ---------------------------------------------------------------
pub(crate) const PLAY_ENERGY_FLOOR: i32 = 10;
pub(crate) const PLAY_HUNGER_CEILING: i32 = 90;
pub(crate) const PLAY_HAPPINESS_GAIN: i32 = 20;
pub(crate) const PLAY_HUNGER_COST: i32 = 10;
pub(crate) const PLAY_ENERGY_COST: i32 = 15;

// Bath tuning ---------------------------------------------------------------
pub(crate) const BATH_CLEANLINESS_GAIN: i32 = 30;
pub(crate) const BATH_HAPPINESS_GAIN: i32 = 15;
pub(crate) const BATH_ENERGY_COST: i32 = 5;
pub(crate) const BATH_HUNGER_COST: i32 = 3;

// Medicine tuning -----------------------------------------------------------
pub(crate) const MEDICINE_HUNGER_TRIGGER: i32 = 80;
pub(crate) const MEDICINE_ENERGY_TRIGGER: i32 = 25;
pub(crate) const MEDICINE_HAPPINESS_TRIGGER: i32 = 35;
pub(crate) const MEDICINE_CLEANLINESS_TRIGGER: i32 = 25;
pub(crate) const MEDICINE_HEALTH_GAIN: i32 = 35;
pub(crate) const MEDICINE_HUNGER_RELIEF: i32 = 15;
pub(crate) const MEDICINE_ENERGY_GAIN: i32 = 20;
pub(crate) const MEDICINE_HAPPINESS_GAIN: i32 = 12;
pub(crate) const MEDICINE_COMFORT_GAIN: i32 = 3;

// Tick tuning ---------------------------------------------------------------
pub(crate) const TICK_HUNGER_AWAKE: i32 = 2;
pub(crate) const TICK_HUNGER_ASLEEP: i32 = 1;
pub(crate) const TICK_CLEANLINESS_LOSS: i32 = 2;
pub(crate) const SLEEP_ENERGY_RECOVERY: i32 = 4;
pub(crate) const SLEEP_HAPPINESS_DRIFT: i32 = 1;
pub(crate) const TICK_ENERGY_LOSS: i32 = 2;
pub(crate) const TICK_ENERGY_LOSS_HUNGRY: i32 = 3;
pub(crate) const TICK_HUNGER_DRAIN_TRIGGER: i32 = 80;
pub(crate) const TICK_HAPPINESS_GAIN: i32 = 1;
pub(crate) const TICK_HAPPINESS_LOSS: i32 = 3;
pub(crate) const TICK_MOOD_HUNGER_TRIGGER: i32 = 80;
pub(crate) const TICK_MOOD_ENERGY_TRIGGER: i32 = 20;
pub(crate) const TICK_MOOD_CLEANLINESS_TRIGGER: i32 = 25;

// Health drift --------------------------------------------------------------
pub(crate) const HEALTH_DECAY: i32 = 4;
pub(crate) const HEALTH_DECAY_HUNGER_TRIGGER: i32 = 90;
pub(crate) const HEALTH_DECAY_ENERGY_TRIGGER: i32 = 15;
pub(crate) const HEALTH_DECAY_CLEANLINESS_TRIGGER: i32 = 15;
pub(crate) const HEALTH_RECOVERY: i32 = 2;
pub(crate) const HEALTH_RECOVERY_HUNGER_CEILING: i32 = 60;
pub(crate) const HEALTH_RECOVERY_ENERGY_FLOOR: i32 = 40;
pub(crate) const HEALTH_RECOVERY_CLEANLINESS_FLOOR: i32 = 40;

// Day and night hysteresis --------------------------------------------------
pub(crate) const NIGHTFALL_HUNGER_TRIGGER: i32 = 90;
pub(crate) const NIGHTFALL_ENERGY_TRIGGER: i32 = 10;
pub(crate) const NIGHTFALL_HAPPINESS_TRIGGER: i32 = 20;
pub(crate) const DAYBREAK_HUNGER_CEILING: i32 = 70;
pub(crate) const DAYBREAK_ENERGY_FLOOR: i32 = 30;
pub(crate) const DAYBREAK_HAPPINESS_FLOOR: i32 = 40;

// Condition thresholds ------------------------------------------------------
pub(crate) const HEALTH_CRITICAL: i32 = 10;
pub(crate) const CLEANLINESS_FILTHY: i32 = 10;
pub(crate) const HUNGER_STARVING: i32 = 95;
pub(crate) const ENERGY_EXHAUSTED: i32 = 5;
pub(crate) const HAPPINESS_LONELY: i32 = 25;
pub(crate) const CLEANLINESS_VERY_DIRTY: i32 = 25;
pub(crate) const HEALTH_VERY_SICK: i32 = 25;
pub(crate) const HUNGER_VERY_HUNGRY: i32 = 80;
pub(crate) const ENERGY_VERY_TIRED: i32 = 20;
pub(crate) const THRILLED_HAPPINESS_FLOOR: i32 = 90;
pub(crate) const THRILLED_HUNGER_CEILING: i32 = 40;
pub(crate) const THRILLED_ENERGY_FLOOR: i32 = 60;

// Dirt appearance -----------------------------------------------------------
pub(crate) const DIRT_VISIBLE_THRESHOLD: i32 = 60;
pub(crate) const DIRT_HEAVY_THRESHOLD: i32 = 30;
