//! Time-driven decay and recovery for one elapsed tick.
//!
//! The rule is evaluated in two phases. Hunger, cleanliness, energy and
//! happiness deltas are all computed from the pre-tick snapshot and applied
//! together; health drift and the day/night transition then react to the
//! values those deltas produce.
use serde::{Deserialize, Serialize};

use crate::constants::{
    DAYBREAK_ENERGY_FLOOR, DAYBREAK_HAPPINESS_FLOOR, DAYBREAK_HUNGER_CEILING,
    HEALTH_DECAY, HEALTH_DECAY_CLEANLINESS_TRIGGER, HEALTH_DECAY_ENERGY_TRIGGER,
    HEALTH_DECAY_HUNGER_TRIGGER, HEALTH_RECOVERY, HEALTH_RECOVERY_CLEANLINESS_FLOOR,
    HEALTH_RECOVERY_ENERGY_FLOOR, HEALTH_RECOVERY_HUNGER_CEILING, NIGHTFALL_ENERGY_TRIGGER,
    NIGHTFALL_HAPPINESS_TRIGGER, NIGHTFALL_HUNGER_TRIGGER, SLEEP_ENERGY_RECOVERY,
    SLEEP_HAPPINESS_DRIFT, TICK_CLEANLINESS_LOSS, TICK_ENERGY_LOSS, TICK_ENERGY_LOSS_HUNGRY,
    TICK_HAPPINESS_GAIN, TICK_HAPPINESS_LOSS, TICK_HUNGER_ASLEEP, TICK_HUNGER_AWAKE,
    TICK_HUNGER_DRAIN_TRIGGER, TICK_MOOD_CLEANLINESS_TRIGGER, TICK_MOOD_ENERGY_TRIGGER,
    TICK_MOOD_HUNGER_TRIGGER,
};
use crate::state::{PetState, Vitals, VitalsDelta};

/// Resulting deltas and day/night transition for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub delta: VitalsDelta,
    /// `Some(flag)` when the tick crosses a day/night trigger; `None` in
    /// the hysteresis dead zone, where the flag keeps its previous value.
    pub night: Option<bool>,
}

/// Evaluate one elapsed time unit against the current state.
#[must_use]
pub fn resolve_tick(state: &PetState) -> TickOutcome {
    let before = state.vitals;
    let mut delta = VitalsDelta::zero();

    delta.hunger = if state.sleeping {
        TICK_HUNGER_ASLEEP
    } else {
        TICK_HUNGER_AWAKE
    };
    delta.cleanliness = if state.sleeping {
        0
    } else {
        -TICK_CLEANLINESS_LOSS
    };

    if state.sleeping {
        delta.energy = SLEEP_ENERGY_RECOVERY;
        delta.happiness = -SLEEP_HAPPINESS_DRIFT;
    } else {
        delta.energy = if before.hunger >= TICK_HUNGER_DRAIN_TRIGGER {
            -TICK_ENERGY_LOSS_HUNGRY
        } else {
            -TICK_ENERGY_LOSS
        };
        let gloomy = before.hunger >= TICK_MOOD_HUNGER_TRIGGER
            || before.energy <= TICK_MOOD_ENERGY_TRIGGER
            || before.cleanliness <= TICK_MOOD_CLEANLINESS_TRIGGER;
        delta.happiness = if gloomy {
            -TICK_HAPPINESS_LOSS
        } else {
            TICK_HAPPINESS_GAIN
        };
    }

    // Health and the clock react to the post-delta, clamped values.
    let mut after = before;
    after.apply(delta);
    delta.health = health_drift(&after);
    let night = night_transition(&after);

    TickOutcome { delta, night }
}

const fn health_drift(vitals: &Vitals) -> i32 {
    if vitals.hunger >= HEALTH_DECAY_HUNGER_TRIGGER
        || vitals.energy <= HEALTH_DECAY_ENERGY_TRIGGER
        || vitals.cleanliness <= HEALTH_DECAY_CLEANLINESS_TRIGGER
    {
        -HEALTH_DECAY
    } else if vitals.hunger <= HEALTH_RECOVERY_HUNGER_CEILING
        && vitals.energy >= HEALTH_RECOVERY_ENERGY_FLOOR
        && vitals.cleanliness >= HEALTH_RECOVERY_CLEANLINESS_FLOOR
    {
        HEALTH_RECOVERY
    } else {
        0
    }
}

const fn night_transition(vitals: &Vitals) -> Option<bool> {
    if vitals.hunger >= NIGHTFALL_HUNGER_TRIGGER
        || vitals.energy <= NIGHTFALL_ENERGY_TRIGGER
        || vitals.happiness <= NIGHTFALL_HAPPINESS_TRIGGER
    {
        Some(true)
    } else if vitals.hunger <= DAYBREAK_HUNGER_CEILING
        && vitals.energy >= DAYBREAK_ENERGY_FLOOR
        && vitals.happiness >= DAYBREAK_HAPPINESS_FLOOR
    {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awake(vitals: Vitals) -> PetState {
        PetState {
            vitals,
            ..PetState::default()
        }
    }

    fn asleep(vitals: Vitals) -> PetState {
        PetState {
            vitals,
            sleeping: true,
            ..PetState::default()
        }
    }

    #[test]
    fn awake_tick_decays_and_cheers_when_comfortable() {
        let outcome = resolve_tick(&awake(Vitals::default()));
        assert_eq!(outcome.delta.hunger, 2);
        assert_eq!(outcome.delta.cleanliness, -2);
        assert_eq!(outcome.delta.energy, -2);
        assert_eq!(outcome.delta.happiness, 1);
        // 42/68/88 keeps the recovery band satisfied.
        assert_eq!(outcome.delta.health, 2);
        assert_eq!(outcome.night, Some(false));
    }

    #[test]
    fn sleeping_tick_restores_energy_and_pauses_dirt() {
        let outcome = resolve_tick(&asleep(Vitals::default()));
        assert_eq!(outcome.delta.hunger, 1);
        assert_eq!(outcome.delta.cleanliness, 0);
        assert_eq!(outcome.delta.energy, 4);
        assert_eq!(outcome.delta.happiness, -1);
    }

    #[test]
    fn hunger_accelerates_energy_drain() {
        let vitals = Vitals {
            hunger: 80,
            ..Vitals::default()
        };
        let outcome = resolve_tick(&awake(vitals));
        assert_eq!(outcome.delta.energy, -3);
        // The same hunger also trips the mood gate.
        assert_eq!(outcome.delta.happiness, -3);
    }

    #[test]
    fn mood_gate_reads_pre_tick_values() {
        // Energy 22 pre-tick: the -2 decay lands on 20, but the gate reads
        // the pre-tick 22 and still cheers the pet up.
        let vitals = Vitals {
            energy: 22,
            ..Vitals::default()
        };
        let outcome = resolve_tick(&awake(vitals));
        assert_eq!(outcome.delta.energy, -2);
        assert_eq!(outcome.delta.happiness, 1);
    }

    #[test]
    fn health_decay_reads_post_delta_values() {
        // Hunger 88 pre-tick becomes 90 after the awake gain, crossing the
        // decay trigger within the same tick.
        let vitals = Vitals {
            hunger: 88,
            ..Vitals::default()
        };
        let outcome = resolve_tick(&awake(vitals));
        assert_eq!(outcome.delta.health, -4);
    }

    #[test]
    fn health_holds_steady_between_bands() {
        // Hunger 63 post-tick: outside both the decay and recovery bands.
        let vitals = Vitals {
            hunger: 61,
            ..Vitals::default()
        };
        let outcome = resolve_tick(&awake(vitals));
        assert_eq!(outcome.delta.health, 0);
    }

    #[test]
    fn night_triggers_and_dead_zone() {
        // Post-tick hunger 92 forces night.
        let vitals = Vitals {
            hunger: 90,
            ..Vitals::default()
        };
        assert_eq!(resolve_tick(&awake(vitals)).night, Some(true));

        // Post-tick hunger 85 with healthy energy/happiness sits in the
        // dead zone: neither trigger fires.
        let vitals = Vitals {
            hunger: 83,
            ..Vitals::default()
        };
        assert_eq!(resolve_tick(&awake(vitals)).night, None);

        // Comfortable pets get daylight back.
        assert_eq!(resolve_tick(&awake(Vitals::default())).night, Some(false));
    }

    #[test]
    fn sleeping_toward_recovery_flips_day() {
        // Asleep with low energy: +4 per tick eventually re-crosses the
        // daybreak floor.
        let mut state = asleep(Vitals {
            energy: 26,
            ..Vitals::default()
        });
        let outcome = resolve_tick(&state);
        state.vitals.apply(outcome.delta);
        assert_eq!(outcome.night, Some(false));
        assert_eq!(state.vitals.energy, 30);
    }
}
