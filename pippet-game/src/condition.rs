//! Derived mood/condition classification.
use serde::{Deserialize, Serialize};

use crate::constants::{
    CLEANLINESS_FILTHY, CLEANLINESS_VERY_DIRTY, DIRT_HEAVY_THRESHOLD, DIRT_VISIBLE_THRESHOLD,
    ENERGY_EXHAUSTED, ENERGY_VERY_TIRED, HAPPINESS_LONELY, HEALTH_CRITICAL, HEALTH_VERY_SICK,
    HUNGER_STARVING, HUNGER_VERY_HUNGRY, THRILLED_ENERGY_FLOOR, THRILLED_HAPPINESS_FLOOR,
    THRILLED_HUNGER_CEILING,
};
use crate::state::PetState;

/// Why a distressed pet is distressed, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistressCause {
    Starving,
    Exhausted,
    Lonely,
}

/// Why an unwell pet is unwell; dirt is checked before sickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnwellCause {
    Dirty,
    Sick,
}

/// Why a needy pet is needy; hunger is checked before tiredness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedyCause {
    Hungry,
    Tired,
}

/// The single derived mood/condition label, chosen by strict priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sleeping,
    CriticallySick,
    Filthy,
    Distressed(DistressCause),
    Unwell(UnwellCause),
    Needy(NeedyCause),
    Thrilled,
    Content,
}

impl Condition {
    /// Stable identifier for the label, ignoring the sub-cause.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sleeping => "sleeping",
            Self::CriticallySick => "critically_sick",
            Self::Filthy => "filthy",
            Self::Distressed(_) => "distressed",
            Self::Unwell(_) => "unwell",
            Self::Needy(_) => "needy",
            Self::Thrilled => "thrilled",
            Self::Content => "content",
        }
    }

    /// Player-facing status line for the label and sub-cause.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Sleeping => "Your pet is sleeping peacefully...",
            Self::CriticallySick => "Your pet feels very sick... please give it medicine.",
            Self::Filthy => "Your pet is really dirty and uncomfortable. It needs a bath!",
            Self::Distressed(DistressCause::Starving) => "Your pet is starving! Please feed it.",
            Self::Distressed(DistressCause::Exhausted) => "Your pet is exhausted. Time for sleep.",
            Self::Distressed(DistressCause::Lonely) => "Your pet feels very lonely. Try playing.",
            Self::Unwell(UnwellCause::Dirty) => "Your pet feels dirty. Please give it a bath.",
            Self::Unwell(UnwellCause::Sick) => {
                "Your pet feels a bit unwell. Some medicine would help."
            }
            Self::Needy(NeedyCause::Hungry) => "Your pet is getting hungry...",
            Self::Needy(NeedyCause::Tired) => "Your pet is getting tired...",
            Self::Thrilled => "Your pet is thrilled! Best day ever!",
            Self::Content => "Your pet feels great! Keep it up.",
        }
    }
}

/// Cosmetic dirt tier, independent of the condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DirtTier {
    #[default]
    Clean,
    Dirty,
    VeryDirty,
}

impl DirtTier {
    /// Derive the tier from cleanliness alone.
    #[must_use]
    pub const fn from_cleanliness(cleanliness: i32) -> Self {
        if cleanliness <= DIRT_HEAVY_THRESHOLD {
            Self::VeryDirty
        } else if cleanliness <= DIRT_VISIBLE_THRESHOLD {
            Self::Dirty
        } else {
            Self::Clean
        }
    }

    /// Whether any dirt shows; the heavy tier counts as dirty too.
    #[must_use]
    pub const fn is_dirty(self) -> bool {
        matches!(self, Self::Dirty | Self::VeryDirty)
    }
}

/// Derive the condition label from current state. First match wins, in
/// strict descending priority.
#[must_use]
pub const fn classify(state: &PetState) -> Condition {
    let v = &state.vitals;
    if state.sleeping {
        Condition::Sleeping
    } else if v.health <= HEALTH_CRITICAL {
        Condition::CriticallySick
    } else if v.cleanliness <= CLEANLINESS_FILTHY {
        Condition::Filthy
    } else if v.hunger >= HUNGER_STARVING {
        Condition::Distressed(DistressCause::Starving)
    } else if v.energy <= ENERGY_EXHAUSTED {
        Condition::Distressed(DistressCause::Exhausted)
    } else if v.happiness <= HAPPINESS_LONELY {
        Condition::Distressed(DistressCause::Lonely)
    } else if v.cleanliness <= CLEANLINESS_VERY_DIRTY {
        Condition::Unwell(UnwellCause::Dirty)
    } else if v.health <= HEALTH_VERY_SICK {
        Condition::Unwell(UnwellCause::Sick)
    } else if v.hunger >= HUNGER_VERY_HUNGRY {
        Condition::Needy(NeedyCause::Hungry)
    } else if v.energy <= ENERGY_VERY_TIRED {
        Condition::Needy(NeedyCause::Tired)
    } else if v.happiness >= THRILLED_HAPPINESS_FLOOR
        && v.hunger <= THRILLED_HUNGER_CEILING
        && v.energy >= THRILLED_ENERGY_FLOOR
    {
        Condition::Thrilled
    } else {
        Condition::Content
    }
}
