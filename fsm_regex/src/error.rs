use thiserror::Error;

/// Reasons a pattern cannot be compiled. A string that merely fails to match
/// is not an error, see [`crate::Automaton::matches`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("unsupported token '{token}' at position {position}")]
    UnsupportedToken { token: char, position: usize },
    #[error("quantifier '{quantifier}' at position {position} has nothing to repeat")]
    NothingToRepeat { quantifier: char, position: usize },
}

impl RegexError {
    /// Char index in the pattern where compilation stopped.
    pub fn position(&self) -> usize {
        match self {
            RegexError::UnsupportedToken { position, .. }
            | RegexError::NothingToRepeat { position, .. } => *position,
        }
    }
}
