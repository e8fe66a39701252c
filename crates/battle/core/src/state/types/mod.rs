//! Actor record types.
//!
//! - Actor: identity, progression, tags, attributes, equipment, resources
//! - Resource: clamped current/max pools
//! - Equipment: optional weapon with unarmed fallback
//! - Status: status effects keyed by code

pub mod actor;
pub mod attributes;
pub mod common;
pub mod equipment;
pub mod resource;
pub mod status;

pub use actor::Actor;
pub use attributes::{Attributes, TagFlags, Tags};
pub use common::{ActorId, Progression};
pub use equipment::{Equipment, Weapon, WeaponProfile};
pub use resource::{Resource, ResourceError, ResourceKind, clamp_resource};
pub use status::{StatusCode, StatusEffect, StatusEffects};
