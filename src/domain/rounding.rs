//! Rounding direction for integer division.

/// Which way an integer division rounds.
///
/// Pool math always rounds against the party receiving value: outputs,
/// minted shares and withdrawals round [`Down`](Self::Down), fees round
/// [`Up`](Self::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}
