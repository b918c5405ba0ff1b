//! Session orchestration: the single owner of the pet state.
use serde::{Deserialize, Serialize};

use crate::actions::{ActionEffect, ActionId, resolve_action};
use crate::condition::{Condition, DirtTier, classify};
use crate::state::PetState;
use crate::tick::resolve_tick;

/// Full externally-visible state emitted after every call.
///
/// Presentation collaborators map this into bars, colors and enabled
/// controls; the core never renders anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub cleanliness: i32,
    pub health: i32,
    pub sleeping: bool,
    pub night: bool,
    pub condition: Condition,
    pub dirt_tier: DirtTier,
    /// Human-readable line describing the outcome of the last call.
    pub message: String,
    /// True exactly when the last call was a successful care action; the
    /// renderer may flash a transient cue off this signal. Never true
    /// while the pet sleeps.
    pub excited: bool,
}

/// High-level session binding the rules to a single owned [`PetState`].
///
/// Every mutating call applies the relevant rule, clamps, re-derives the
/// classification and returns a fresh [`Snapshot`]. No call fails:
/// blocked actions echo the unchanged state with an explanatory message.
#[derive(Debug, Clone, Default)]
pub struct PetSession {
    state: PetState,
}

impl PetSession {
    /// Start a fresh session with the fixed initial attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from an existing state.
    #[must_use]
    pub const fn from_state(state: PetState) -> Self {
        Self { state }
    }

    /// Borrow the underlying state.
    #[must_use]
    pub const fn state(&self) -> &PetState {
        &self.state
    }

    /// Consume the session, returning the underlying state.
    #[must_use]
    pub const fn into_state(self) -> PetState {
        self.state
    }

    /// Evaluate and apply a user action, returning the resulting snapshot.
    pub fn apply_action(&mut self, action: ActionId) -> Snapshot {
        let outcome = resolve_action(&self.state, action);
        match outcome.effect {
            ActionEffect::None => {}
            ActionEffect::Adjust(delta) => self.state.vitals.apply(delta),
            ActionEffect::SetSleeping(sleeping) => self.state.sleeping = sleeping,
            ActionEffect::Restore => self.state.reset(),
        }
        let excited = outcome.allowed && action.is_care();
        self.emit(outcome.message.to_string(), excited)
    }

    /// Advance the simulation by one time unit.
    pub fn tick(&mut self) -> Snapshot {
        let outcome = resolve_tick(&self.state);
        self.state.vitals.apply(outcome.delta);
        if let Some(night) = outcome.night {
            self.state.night = night;
        }
        self.snapshot()
    }

    /// Restore the fixed starting state.
    pub fn reset(&mut self) -> Snapshot {
        self.apply_action(ActionId::Reset)
    }

    /// Current snapshot without mutating anything; the message is the
    /// condition's status line.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let condition = classify(&self.state);
        self.emit(condition.describe().to_string(), false)
    }

    fn emit(&self, message: String, excited: bool) -> Snapshot {
        let v = self.state.vitals;
        Snapshot {
            hunger: v.hunger,
            happiness: v.happiness,
            energy: v.energy,
            cleanliness: v.cleanliness,
            health: v.health,
            sleeping: self.state.sleeping,
            night: self.state.night,
            condition: classify(&self.state),
            dirt_tier: DirtTier::from_cleanliness(v.cleanliness),
            message,
            excited: excited && !self.state.sleeping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::NeedyCause;
    use crate::state::Vitals;

    #[test]
    fn feed_moves_the_needles_and_flags_excitement() {
        let mut session = PetSession::new();
        let snap = session.apply_action(ActionId::Feed);
        assert_eq!(snap.hunger, 20);
        assert_eq!(snap.happiness, 85);
        assert_eq!(snap.energy, 75);
        assert!(snap.excited);
        assert_eq!(snap.message, "Your pet gobbles down the meal.");
    }

    #[test]
    fn blocked_action_echoes_unchanged_state() {
        let mut session = PetSession::from_state(PetState {
            vitals: Vitals {
                energy: 10,
                hunger: 50,
                ..Vitals::default()
            },
            ..PetState::default()
        });
        let before = *session.state();
        let snap = session.apply_action(ActionId::Play);
        assert_eq!(*session.state(), before);
        assert!(!snap.excited);
        assert_eq!(snap.energy, 10);
        assert_eq!(snap.hunger, 50);
    }

    #[test]
    fn sleep_suppresses_care_and_the_cue() {
        let mut session = PetSession::new();
        let snap = session.apply_action(ActionId::ToggleSleep);
        assert!(snap.sleeping);
        assert!(!snap.excited);
        assert_eq!(snap.condition, Condition::Sleeping);

        let before = session.state().vitals;
        let snap = session.apply_action(ActionId::Feed);
        assert_eq!(session.state().vitals, before);
        assert!(!snap.excited);

        let snap = session.apply_action(ActionId::ToggleSleep);
        assert!(!snap.sleeping);
    }

    #[test]
    fn tick_snapshot_carries_the_status_line() {
        let mut session = PetSession::from_state(PetState {
            vitals: Vitals {
                hunger: 85,
                ..Vitals::default()
            },
            ..PetState::default()
        });
        let snap = session.tick();
        assert_eq!(snap.condition, Condition::Needy(NeedyCause::Hungry));
        assert_eq!(snap.message, "Your pet is getting hungry...");
        assert!(!snap.excited);
    }

    #[test]
    fn reset_restores_the_initial_snapshot() {
        let mut session = PetSession::new();
        for _ in 0..25 {
            session.tick();
        }
        session.apply_action(ActionId::ToggleSleep);
        let snap = session.reset();
        assert_eq!(snap.hunger, 40);
        assert_eq!(snap.happiness, 80);
        assert_eq!(snap.energy, 70);
        assert_eq!(snap.cleanliness, 90);
        assert_eq!(snap.health, 90);
        assert!(!snap.sleeping);
        assert!(!snap.night);
        assert!(!snap.excited);
    }

    #[test]
    fn night_flag_follows_tick_hysteresis() {
        let mut session = PetSession::from_state(PetState {
            vitals: Vitals {
                energy: 8,
                ..Vitals::default()
            },
            ..PetState::default()
        });
        let snap = session.tick();
        assert!(snap.night, "exhaustion should bring nightfall");

        // Sleep restores energy; daylight returns once the pet recovers.
        session.apply_action(ActionId::ToggleSleep);
        let mut last = session.tick();
        for _ in 0..12 {
            last = session.tick();
        }
        assert!(!last.night, "recovered pet should see daylight again");
    }
}
