//! Three-valued flag for allocation fields some tools cannot determine.
use serde::{Deserialize, Serialize};

/// True, false, or not reported by the producing tool.
///
/// Serialised as a nullable boolean so `null` and a missing field both
/// read back as [`TriState::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    True,
    False,
    #[default]
    Unknown,
}

impl TriState {
    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }

    /// Short-circuit AND: a false or unknown left operand is returned
    /// unchanged, otherwise the right operand is returned as-is.
    ///
    /// This is deliberately *not* Kleene logic: `Unknown.and(False)` is
    /// `Unknown`, and `True.and(Unknown)` is `Unknown`.
    #[inline]
    pub fn and(self, rhs: TriState) -> TriState {
        match self {
            Self::True => rhs,
            Self::False | Self::Unknown => self,
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::True,
            Some(false) => Self::False,
            None => Self::Unknown,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_short_circuits_on_left_operand() {
        assert_eq!(TriState::False.and(TriState::True), TriState::False);
        assert_eq!(TriState::False.and(TriState::Unknown), TriState::False);
        assert_eq!(TriState::Unknown.and(TriState::False), TriState::Unknown);
        assert_eq!(TriState::Unknown.and(TriState::True), TriState::Unknown);
    }

    #[test]
    fn and_returns_right_operand_when_left_is_true() {
        assert_eq!(TriState::True.and(TriState::True), TriState::True);
        assert_eq!(TriState::True.and(TriState::False), TriState::False);
        assert_eq!(TriState::True.and(TriState::Unknown), TriState::Unknown);
    }

    #[test]
    fn option_conversion() {
        assert_eq!(TriState::from(Some(true)), TriState::True);
        assert_eq!(TriState::from(Some(false)), TriState::False);
        assert_eq!(TriState::from(None), TriState::Unknown);
        assert_eq!(Option::<bool>::from(TriState::Unknown), None);
    }
}
