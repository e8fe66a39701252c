//! Phases, intents and progress reports of the turn state machine.

use core::time::Duration;

/// Discrete state of the turn engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Starting,
    PlayerTurn,
    EnemyTurn,
    /// An action's damage application or pacing delay is in flight.
    Busy,
    Victory,
    Defeat,
}

impl Phase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }

    /// Guard table of the state machine.
    ///
    /// ```text
    /// Starting   -> PlayerTurn
    /// PlayerTurn -> Busy
    /// Busy       -> EnemyTurn | Victory
    /// EnemyTurn  -> PlayerTurn | Defeat
    /// ```
    pub const fn can_transition_to(&self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Self::Starting, Phase::PlayerTurn)
                | (Self::PlayerTurn, Phase::Busy)
                | (Self::Busy, Phase::EnemyTurn)
                | (Self::Busy, Phase::Victory)
                | (Self::EnemyTurn, Phase::PlayerTurn)
                | (Self::EnemyTurn, Phase::Defeat)
        )
    }
}

/// Player action codes accepted during [`Phase::PlayerTurn`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Intent {
    #[strum(to_string = "attack", serialize = "1")]
    Attack,
    #[strum(to_string = "defend", serialize = "2")]
    Defend,
    #[strum(to_string = "pass", serialize = "3")]
    Pass,
}

/// Terminal result of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Sub-step the engine continues with once a suspension has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Resume {
    /// Announce the enemy turn.
    EnterEnemyTurn,
    /// Enemy attacks the player.
    EnemyStrike,
    /// Hand control back to the player.
    EnterPlayerTurn,
}

/// A pending timed continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suspension {
    pub delay: Duration,
    pub resume: Resume,
}

/// What the host has to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Progress {
    /// Player input is awaited.
    AwaitingInput,
    /// Wait `delay`, then call [`Encounter::advance`](super::Encounter::advance).
    Suspended(Suspension),
    /// The encounter ended.
    Finished(Outcome),
    /// Input arrived outside the player turn and was dropped.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const ALL: [Phase; 6] = [
        Phase::Starting,
        Phase::PlayerTurn,
        Phase::EnemyTurn,
        Phase::Busy,
        Phase::Victory,
        Phase::Defeat,
    ];

    #[test]
    fn terminal_phases_have_no_outgoing_edges() {
        for next in ALL {
            assert!(!Phase::Victory.can_transition_to(next));
            assert!(!Phase::Defeat.can_transition_to(next));
        }
    }

    #[test]
    fn player_turn_only_leads_to_busy() {
        let targets: Vec<_> = ALL
            .into_iter()
            .filter(|next| Phase::PlayerTurn.can_transition_to(*next))
            .collect();
        assert_eq!(targets, [Phase::Busy]);
    }

    #[test]
    fn intents_parse_from_keys_and_names() {
        assert_eq!("1".parse::<Intent>().unwrap(), Intent::Attack);
        assert_eq!("Defend".parse::<Intent>().unwrap(), Intent::Defend);
        assert_eq!("3".parse::<Intent>().unwrap(), Intent::Pass);
        assert!("4".parse::<Intent>().is_err());
        assert_eq!(Intent::iter().count(), 3);
    }
}
