#[macro_use]
mod macros;

mod automaton;
mod compiler;
mod error;
mod matcher;
mod token;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use automaton::{Automaton, State, StateId, Unit};
pub use error::RegexError;

/// A compiled pattern. Supports literal ASCII characters, `.` and the postfix
/// `*` and `+` quantifiers on a single preceding unit.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    automaton: Automaton,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self, RegexError> {
        let automaton = Automaton::compile(pattern)?;

        Ok(Self {
            pattern: pattern.to_string(),
            automaton,
        })
    }

    /// Whether the whole of `s` matches, not just a part of it.
    pub fn is_exact_match(&self, s: &str) -> bool {
        self.automaton.matches(s)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }
}

impl FromStr for Regex {
    type Err = RegexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::new(s)
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("a.c", "abc", true)]
    #[case("a.c", "ac", false)]
    #[case("a*", "", true)]
    #[case("a*", "aaaa", true)]
    #[case("a*", "b", false)]
    #[case("a+", "", false)]
    #[case("a+", "a", true)]
    #[case("a+", "aaa", true)]
    #[case("a*4+g*hi", "aaaaaa444ghi", true)]
    #[case("a*4+g*hi", "4hi", true)]
    #[case("a*4+g*hi", "meow", false)]
    #[case("", "", true)]
    #[case("", "x", false)]
    fn is_exact_match(#[case] pattern: &str, #[case] input: &str, #[case] expected: bool) {
        // given
        let regex = Regex::new(pattern).unwrap();

        // when
        let matched = regex.is_exact_match(input);

        // then
        assert_eq!(matched, expected);
    }

    #[test]
    fn unsupported_pattern_returns_no_regex() {
        // when
        let res = Regex::new("a|b");

        // then
        assert_eq!(
            res.unwrap_err(),
            RegexError::UnsupportedToken {
                token: '|',
                position: 1
            }
        );
    }

    #[test]
    fn parses_from_str_and_keeps_the_pattern() {
        // when
        let regex: Regex = "x.+y".parse().unwrap();

        // then
        assert_eq!(regex.as_str(), "x.+y");
        assert_eq!(regex.to_string(), "x.+y");
        assert_eq!(regex.automaton().state_count(), 5);
    }

    #[test]
    fn from_str_propagates_errors() {
        assert!("*".parse::<Regex>().is_err());
    }

    #[test]
    fn compiled_regex_is_shared_between_threads() {
        // given
        let regex = Regex::new("a*4+g*hi").unwrap();
        let inputs = ["aaaaaa444ghi", "4hi", "meow", "44hi"];
        let shared = &regex;

        // when
        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|&input| scope.spawn(move || shared.is_exact_match(input)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // then
        assert_eq!(results, vec![true, true, false, true]);
    }
}
