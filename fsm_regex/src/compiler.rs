use crate::automaton::{Automaton, State, StateId, Unit};
use crate::error::RegexError;
use crate::token::{Token, TokenSequence};

/// Single left-to-right pass over the tokens. `tail` is the state the next
/// unit hangs off, `predecessor` the state whose last transition points at
/// `tail`, which is where a quantifier splices its wrapper in.
struct Compiler {
    automaton: Automaton,
    tail: StateId,
    predecessor: StateId,
}

impl Compiler {
    fn new(capacity: usize) -> Self {
        let automaton = Automaton::with_capacity(capacity);
        let start = automaton.start();
        Self {
            automaton,
            tail: start,
            predecessor: start,
        }
    }

    fn compile(seq: TokenSequence) -> Result<Automaton, RegexError> {
        // one state per token at most, plus start and termination
        let mut compiler = Self::new(seq.len() + 2);

        for (position, token) in seq {
            match token {
                Token::Dot => compiler.push_unit(State::AnyChar),
                Token::Literal(c) if c.is_ascii() => compiler.push_unit(State::Literal(c)),
                Token::Star => compiler.repeat_tail(State::RepeatZeroOrMore, token, position)?,
                Token::Plus => compiler.repeat_tail(State::RepeatOneOrMore, token, position)?,
                unsupported => {
                    return Err(RegexError::UnsupportedToken {
                        token: char::from(unsupported),
                        position,
                    });
                }
            }
        }

        Ok(compiler.finish())
    }

    fn push_unit(&mut self, state: State) {
        let next = self.automaton.add_state(state);
        self.automaton.add_transition(self.tail, next);
        trace!("{} -> {} ({})", self.tail, next, state);

        self.predecessor = self.tail;
        self.tail = next;
    }

    fn repeat_tail(
        &mut self,
        wrap: fn(Unit) -> State,
        quantifier: Token,
        position: usize,
    ) -> Result<(), RegexError> {
        let nothing_to_repeat = || RegexError::NothingToRepeat {
            quantifier: char::from(quantifier),
            position,
        };

        let repeated = self
            .automaton
            .pop_transition(self.predecessor)
            .ok_or_else(nothing_to_repeat)?;

        let unit = match *self.automaton.state(repeated) {
            State::AnyChar => Unit::AnyChar,
            State::Literal(c) => Unit::Literal(c),
            _ => return Err(nothing_to_repeat()),
        };

        // the unit was the tail, so it has no transitions yet and the
        // self-loop lands first in its list
        self.automaton.replace_state(repeated, wrap(unit));
        self.automaton.add_transition(repeated, repeated);
        self.automaton.add_transition(self.predecessor, repeated);
        trace!("{} wrapped as {}", repeated, self.automaton.state(repeated));

        self.tail = repeated;
        Ok(())
    }

    fn finish(mut self) -> Automaton {
        let end = self.automaton.add_state(State::Termination);
        self.automaton.add_transition(self.tail, end);
        debug!("compiled automaton with {} states", self.automaton.state_count());

        self.automaton
    }
}

impl Automaton {
    /// Builds the state graph for `pattern`. Every call allocates its own
    /// graph, starting from a fresh start state.
    pub fn compile(pattern: &str) -> Result<Self, RegexError> {
        Compiler::compile(TokenSequence::from(pattern))
    }
}
