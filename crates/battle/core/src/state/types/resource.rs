//! Current/maximum resource pools (HP, MP, SP).

use crate::error::{BattleError, ErrorSeverity};

/// Enum representing individual resource pools on an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum ResourceKind {
    Hp,
    Mp,
    Sp,
}

/// Errors raised by resource mutators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// Damage and healing amounts must be non-negative.
    #[error("invalid argument: {kind} amount must be non-negative (got {amount})")]
    InvalidArgument { kind: ResourceKind, amount: i32 },
}

impl BattleError for ResourceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "RESOURCE_INVALID_ARGUMENT",
        }
    }
}

/// Clamps `value` into `[0, max]`.
///
/// A negative `max` is treated as an empty pool.
#[inline]
pub fn clamp_resource(value: i32, max: i32) -> i32 {
    value.clamp(0, max.max(0))
}

/// A current/maximum pair.
///
/// # Invariants
///
/// `0 <= current <= max`. Fields are private so the only writers are the
/// clamping mutators below; deserialized pools are re-clamped through
/// [`Resource::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawResource"))]
pub struct Resource {
    current: i32,
    max: i32,
}

/// Unchecked wire form of [`Resource`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawResource {
    current: i32,
    max: i32,
}

#[cfg(feature = "serde")]
impl From<RawResource> for Resource {
    fn from(raw: RawResource) -> Self {
        Self::new(raw.current, raw.max)
    }
}

impl Resource {
    /// An empty `{0, 0}` pool.
    pub const EMPTY: Self = Self { current: 0, max: 0 };

    /// Creates a pool, clamping `current` into `[0, max]`.
    pub fn new(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: clamp_resource(current, max),
            max,
        }
    }

    /// Creates a pool with `current == max`.
    pub fn full(max: i32) -> Self {
        Self::new(max, max)
    }

    #[inline]
    pub const fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub const fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Changes the maximum and re-clamps the current value.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(0);
        self.current = clamp_resource(self.current, self.max);
    }

    /// Sets `current = max`.
    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Lowers the pool by `amount`, never below zero.
    pub fn drain(&mut self, kind: ResourceKind, amount: i32) -> Result<(), ResourceError> {
        if amount < 0 {
            return Err(ResourceError::InvalidArgument { kind, amount });
        }
        self.current = clamp_resource(self.current.saturating_sub(amount), self.max);
        Ok(())
    }

    /// Raises the pool by `amount`, never above `max`.
    pub fn restore(&mut self, kind: ResourceKind, amount: i32) -> Result<(), ResourceError> {
        if amount < 0 {
            return Err(ResourceError::InvalidArgument { kind, amount });
        }
        self.current = clamp_resource(self.current.saturating_add(amount), self.max);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_resource_bounds() {
        assert_eq!(clamp_resource(-4, 10), 0);
        assert_eq!(clamp_resource(4, 10), 4);
        assert_eq!(clamp_resource(40, 10), 10);
        assert_eq!(clamp_resource(3, -1), 0);
    }

    #[test]
    fn new_clamps_current() {
        assert_eq!(Resource::new(15, 10).current(), 10);
        assert_eq!(Resource::new(-3, 10).current(), 0);
    }

    #[test]
    fn drain_and_restore_stay_in_bounds() {
        let mut hp = Resource::full(20);
        let script = [(true, 7), (true, 50), (false, 3), (false, 90), (true, 1)];

        for (is_damage, amount) in script {
            if is_damage {
                hp.drain(ResourceKind::Hp, amount).unwrap();
            } else {
                hp.restore(ResourceKind::Hp, amount).unwrap();
            }
            assert!((0..=hp.max()).contains(&hp.current()));
        }
        assert_eq!(hp.current(), 19);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut hp = Resource::full(10);
        let err = hp.drain(ResourceKind::Hp, -1).unwrap_err();
        assert_eq!(
            err,
            ResourceError::InvalidArgument {
                kind: ResourceKind::Hp,
                amount: -1
            }
        );
        assert!(hp.restore(ResourceKind::Hp, -5).is_err());
        assert_eq!(hp.current(), 10);
    }

    #[test]
    fn lowering_max_reclamps_current() {
        let mut mp = Resource::full(30);
        mp.set_max(12);
        assert_eq!(mp, Resource::new(12, 12));
    }
}
