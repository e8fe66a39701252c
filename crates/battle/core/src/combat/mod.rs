//! Combat resolution system.
//!
//! Pure functions over actor snapshots and an injected [`RngStream`](crate::env::RngStream).
//! Nothing here mutates state; the turn engine applies the returned damage.
//!
//! # Core Functions
//!
//! - `resolve_attack`: full rules resolution (hit/graze/crit + damage)
//! - `calculate_hit_chance` / `calculate_crit_chance`: clamped percentages
//! - `raw_physical_damage` / `apply_mitigation`: damage composition
//! - `DamageStrategy`: host-selected formula for the live turn loop

pub mod damage;
pub mod hit;
pub mod result;
pub mod strategy;

pub use damage::{
    apply_mitigation, deal_physical_damage, mitigation_pct, raw_physical_damage, simple_damage,
};
pub use hit::{calculate_crit_chance, calculate_hit_chance};
pub use result::{AttackOutcome, AttackResult, LineForm, resolve_attack, verb_for_weapon};
pub use strategy::DamageStrategy;
