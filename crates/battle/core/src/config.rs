//! Encounter configuration and combat tunables.
//!
//! Fractional constants are stored as integer hundredths (`*_x100`) so every
//! formula is evaluated in exact integer arithmetic and replays are
//! bit-identical across platforms.

use core::time::Duration;

use crate::combat::DamageStrategy;

/// Hit chance parameters.
///
/// `hit = clamp(floor(base + dex_delta*dex_diff + luck_delta*luck + level_delta*level + accuracy), min, max)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitParams {
    pub base: i32,
    pub dex_diff: i32,
    pub luck_x100: i32,
    pub level_x100: i32,
    pub min: i32,
    pub max: i32,
    /// Rolls in `(hit, hit + graze_window]` graze instead of missing.
    pub graze_window: i32,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            base: 88,
            dex_diff: 2,
            luck_x100: 50,
            level_x100: 150,
            min: 60,
            max: 98,
            graze_window: 8,
        }
    }
}

/// Crit chance parameters.
///
/// `crit = clamp(floor(base + luck*luck_crit + weapon_crit), 0, max)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CritParams {
    pub base: i32,
    pub luck_x100: i32,
    pub max: i32,
}

impl Default for CritParams {
    fn default() -> Self {
        Self {
            base: 5,
            luck_x100: 100,
            max: 50,
        }
    }
}

/// Damage composition parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    /// Strength scaling for raw physical damage.
    pub strength_x100: i32,
    /// Raw damage multiplier on a crit.
    pub crit_mult_x100: i32,
    /// Multiplier applied to the non-crit roll on a graze.
    pub graze_mult_x100: i32,
    /// Upper bound of armor mitigation, in percent.
    pub max_mitigation_pct: i32,
    /// Inclusive variance added to a non-crit hit.
    pub variance: (i32, i32),
    /// Inclusive variance added to a crit.
    pub crit_variance: (i32, i32),
    /// Floor of a crit before the non-crit comparison.
    pub crit_floor: i32,
    /// Inclusive variance of the simplified formula.
    pub simple_variance: (i32, i32),
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            strength_x100: 50,
            crit_mult_x100: 150,
            graze_mult_x100: 50,
            max_mitigation_pct: 60,
            variance: (-2, 2),
            crit_variance: (0, 2),
            crit_floor: 2,
            simple_variance: (-1, 1),
        }
    }
}

/// All combat tunables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatParams {
    pub hit: HitParams,
    pub crit: CritParams,
    pub damage: DamageParams,
}

/// Suspension lengths between engine sub-steps.
///
/// The engine never waits itself; it reports these delays to the host, which
/// resumes it once they have elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacingConfig {
    /// Pause after an action resolves, before the other side acts.
    pub step_delay: Duration,
    /// Pause between announcing the enemy turn and its strike.
    pub enemy_turn_delay: Duration,
}

impl PacingConfig {
    pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(300);
    pub const DEFAULT_ENEMY_TURN_DELAY: Duration = Duration::from_millis(700);

    /// No pauses at all; useful for tests and headless simulation.
    pub const fn instant() -> Self {
        Self {
            step_delay: Duration::ZERO,
            enemy_turn_delay: Duration::ZERO,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            step_delay: Self::DEFAULT_STEP_DELAY,
            enemy_turn_delay: Self::DEFAULT_ENEMY_TURN_DELAY,
        }
    }
}

/// Encounter configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterConfig {
    pub params: CombatParams,
    pub pacing: PacingConfig,
    /// Damage formula driving the live turn loop.
    pub strategy: DamageStrategy,
    /// Maximum retained log lines; `None` keeps everything.
    pub log_capacity: Option<usize>,
}

impl EncounterConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 8;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: DamageStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_params(mut self, params: CombatParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = Some(capacity);
        self
    }
}
