//! Pet attribute state and delta arithmetic.
use serde::{Deserialize, Serialize};

use crate::constants::{
    START_CLEANLINESS, START_ENERGY, START_HAPPINESS, START_HEALTH, START_HUNGER, VITAL_MAX,
    VITAL_MIN,
};

/// The five bounded attributes describing the pet's wellbeing.
///
/// `hunger` is higher-is-worse (0 = full, 100 = starving); the other four
/// are higher-is-better. Every mutation path routes through [`Vitals::apply`]
/// or [`Vitals::clamp`], so no value is observable outside `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub cleanliness: i32,
    pub health: i32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hunger: START_HUNGER,
            happiness: START_HAPPINESS,
            energy: START_ENERGY,
            cleanliness: START_CLEANLINESS,
            health: START_HEALTH,
        }
    }
}

impl Vitals {
    /// Force every attribute back into the `[0, 100]` band.
    pub const fn clamp(&mut self) {
        self.hunger = clamp_vital(self.hunger);
        self.happiness = clamp_vital(self.happiness);
        self.energy = clamp_vital(self.energy);
        self.cleanliness = clamp_vital(self.cleanliness);
        self.health = clamp_vital(self.health);
    }

    /// Apply an accumulated delta, clamping each attribute afterwards.
    pub const fn apply(&mut self, delta: VitalsDelta) {
        self.hunger = clamp_vital(self.hunger.saturating_add(delta.hunger));
        self.happiness = clamp_vital(self.happiness.saturating_add(delta.happiness));
        self.energy = clamp_vital(self.energy.saturating_add(delta.energy));
        self.cleanliness = clamp_vital(self.cleanliness.saturating_add(delta.cleanliness));
        self.health = clamp_vital(self.health.saturating_add(delta.health));
    }
}

const fn clamp_vital(value: i32) -> i32 {
    if value < VITAL_MIN {
        VITAL_MIN
    } else if value > VITAL_MAX {
        VITAL_MAX
    } else {
        value
    }
}

/// Per-attribute deltas accumulated by a rule before being applied in one
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VitalsDelta {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub cleanliness: i32,
    pub health: i32,
}

impl VitalsDelta {
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            hunger: 0,
            happiness: 0,
            energy: 0,
            cleanliness: 0,
            health: 0,
        }
    }

    /// Whether the delta leaves every attribute untouched.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.hunger == 0
            && self.happiness == 0
            && self.energy == 0
            && self.cleanliness == 0
            && self.health == 0
    }
}

/// Complete simulation state: attributes plus the sleeping and day/night
/// flags. Owned exclusively by the session; rules only ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PetState {
    pub vitals: Vitals,
    /// The pet is asleep; care actions are blocked until it wakes.
    pub sleeping: bool,
    /// Day/night flag, driven only by the tick hysteresis.
    pub night: bool,
}

impl PetState {
    /// Restore the fixed starting state, waking the pet and resetting the
    /// clock to day.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
