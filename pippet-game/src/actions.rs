//! User-initiated action rules.
//!
//! Each rule is a pure function over the current state: it never mutates
//! anything, it only reports what should happen. The session applies the
//! resulting effect and re-derives the condition label.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    BATH_CLEANLINESS_GAIN, BATH_ENERGY_COST, BATH_HAPPINESS_GAIN, BATH_HUNGER_COST,
    FEED_ENERGY_GAIN, FEED_HAPPINESS_GAIN, FEED_HUNGER_RELIEF, MEDICINE_CLEANLINESS_TRIGGER,
    MEDICINE_COMFORT_GAIN, MEDICINE_ENERGY_GAIN, MEDICINE_ENERGY_TRIGGER,
    MEDICINE_HAPPINESS_GAIN, MEDICINE_HAPPINESS_TRIGGER, MEDICINE_HEALTH_GAIN,
    MEDICINE_HUNGER_RELIEF, MEDICINE_HUNGER_TRIGGER, PLAY_ENERGY_COST, PLAY_ENERGY_FLOOR,
    PLAY_HAPPINESS_GAIN, PLAY_HUNGER_CEILING, PLAY_HUNGER_COST,
};
use crate::state::{PetState, VitalsDelta};

const MSG_ASLEEP: &str = "Your pet is fast asleep. Wake it up first.";
const MSG_FEED: &str = "Your pet gobbles down the meal.";
const MSG_PLAY: &str = "Your pet romps around happily.";
const MSG_PLAY_BLOCKED: &str =
    "Your pet is too tired or hungry to play. Feed or let it sleep first.";
const MSG_BATH: &str = "Your pet is enjoying a nice bath.";
const MSG_MEDICINE_HELPED: &str = "Medicine helped your pet feel much better.";
const MSG_MEDICINE_SPARE: &str = "Your pet is already healthy but appreciates the care.";
const MSG_SLEEP: &str = "Shh... your pet is sleeping.";
const MSG_WAKE: &str = "Your pet wakes up and stretches.";
const MSG_RESET: &str = "Welcome back! Take good care of your pet.";

/// Identifier for a user-initiated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    Feed,
    Play,
    Bathe,
    Medicate,
    ToggleSleep,
    Reset,
}

impl ActionId {
    /// All actions, in the order they are presented to the player.
    pub const ALL: [Self; 6] = [
        Self::Feed,
        Self::Play,
        Self::Bathe,
        Self::Medicate,
        Self::ToggleSleep,
        Self::Reset,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Bathe => "bathe",
            Self::Medicate => "medicate",
            Self::ToggleSleep => "toggle_sleep",
            Self::Reset => "reset",
        }
    }

    /// Whether this is one of the four care actions gated by sleep.
    #[must_use]
    pub const fn is_care(self) -> bool {
        matches!(self, Self::Feed | Self::Play | Self::Bathe | Self::Medicate)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" => Ok(Self::Feed),
            "play" => Ok(Self::Play),
            "bathe" => Ok(Self::Bathe),
            "medicate" => Ok(Self::Medicate),
            "toggle_sleep" => Ok(Self::ToggleSleep),
            "reset" => Ok(Self::Reset),
            _ => Err(()),
        }
    }
}

impl From<ActionId> for String {
    fn from(value: ActionId) -> Self {
        value.as_str().to_string()
    }
}

/// State change requested by an action rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    /// Nothing changes (blocked actions).
    None,
    /// Adjust the vitals by the given delta, clamped on application.
    Adjust(VitalsDelta),
    /// Set the sleeping flag.
    SetSleeping(bool),
    /// Restore the fixed starting state.
    Restore,
}

/// Result of evaluating an action against the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    /// False when the action was blocked and nothing should change.
    pub allowed: bool,
    pub effect: ActionEffect,
    /// Player-facing line describing what happened.
    pub message: &'static str,
}

impl ActionOutcome {
    const fn blocked(message: &'static str) -> Self {
        Self {
            allowed: false,
            effect: ActionEffect::None,
            message,
        }
    }

    const fn applied(effect: ActionEffect, message: &'static str) -> Self {
        Self {
            allowed: true,
            effect,
            message,
        }
    }
}

/// Evaluate a single action against the current state.
///
/// Care actions are blocked while the pet sleeps; the sleep toggle and
/// reset always go through.
#[must_use]
pub fn resolve_action(state: &PetState, action: ActionId) -> ActionOutcome {
    if state.sleeping && action.is_care() {
        return ActionOutcome::blocked(MSG_ASLEEP);
    }
    match action {
        ActionId::Feed => feed(),
        ActionId::Play => play(state),
        ActionId::Bathe => bathe(),
        ActionId::Medicate => medicate(state),
        ActionId::ToggleSleep => toggle_sleep(state),
        ActionId::Reset => reset(),
    }
}

fn feed() -> ActionOutcome {
    let delta = VitalsDelta {
        hunger: -FEED_HUNGER_RELIEF,
        happiness: FEED_HAPPINESS_GAIN,
        energy: FEED_ENERGY_GAIN,
        ..VitalsDelta::zero()
    };
    ActionOutcome::applied(ActionEffect::Adjust(delta), MSG_FEED)
}

fn play(state: &PetState) -> ActionOutcome {
    if state.vitals.energy <= PLAY_ENERGY_FLOOR || state.vitals.hunger >= PLAY_HUNGER_CEILING {
        return ActionOutcome::blocked(MSG_PLAY_BLOCKED);
    }
    let delta = VitalsDelta {
        happiness: PLAY_HAPPINESS_GAIN,
        hunger: PLAY_HUNGER_COST,
        energy: -PLAY_ENERGY_COST,
        ..VitalsDelta::zero()
    };
    ActionOutcome::applied(ActionEffect::Adjust(delta), MSG_PLAY)
}

fn bathe() -> ActionOutcome {
    let delta = VitalsDelta {
        cleanliness: BATH_CLEANLINESS_GAIN,
        happiness: BATH_HAPPINESS_GAIN,
        energy: -BATH_ENERGY_COST,
        hunger: BATH_HUNGER_COST,
        ..VitalsDelta::zero()
    };
    ActionOutcome::applied(ActionEffect::Adjust(delta), MSG_BATH)
}

fn medicate(state: &PetState) -> ActionOutcome {
    // Wellness check runs against the pre-action state.
    let unwell = state.vitals.hunger >= MEDICINE_HUNGER_TRIGGER
        || state.vitals.energy <= MEDICINE_ENERGY_TRIGGER
        || state.vitals.happiness <= MEDICINE_HAPPINESS_TRIGGER
        || state.vitals.cleanliness <= MEDICINE_CLEANLINESS_TRIGGER;

    if unwell {
        let delta = VitalsDelta {
            health: MEDICINE_HEALTH_GAIN,
            hunger: -MEDICINE_HUNGER_RELIEF,
            energy: MEDICINE_ENERGY_GAIN,
            happiness: MEDICINE_HAPPINESS_GAIN,
            ..VitalsDelta::zero()
        };
        ActionOutcome::applied(ActionEffect::Adjust(delta), MSG_MEDICINE_HELPED)
    } else {
        let delta = VitalsDelta {
            happiness: MEDICINE_COMFORT_GAIN,
            ..VitalsDelta::zero()
        };
        ActionOutcome::applied(ActionEffect::Adjust(delta), MSG_MEDICINE_SPARE)
    }
}

const fn toggle_sleep(state: &PetState) -> ActionOutcome {
    if state.sleeping {
        ActionOutcome::applied(ActionEffect::SetSleeping(false), MSG_WAKE)
    } else {
        ActionOutcome::applied(ActionEffect::SetSleeping(true), MSG_SLEEP)
    }
}

const fn reset() -> ActionOutcome {
    ActionOutcome::applied(ActionEffect::Restore, MSG_RESET)
}
