use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

/// Index of a state inside the [`Automaton`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single-character payload a repeat wrapper repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    AnyChar,
    Literal(char),
}

impl Unit {
    pub fn matches(self, c: char) -> bool {
        match self {
            Unit::AnyChar => true,
            Unit::Literal(symbol) => symbol == c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Termination,
    AnyChar,
    Literal(char),
    RepeatZeroOrMore(Unit),
    RepeatOneOrMore(Unit),
}

impl State {
    /// Whether this state consumes `c` when it is the target of a transition.
    pub fn check_self(&self, c: char) -> bool {
        match self {
            State::Start => true,
            State::Termination => false,
            State::AnyChar => true,
            State::Literal(symbol) => *symbol == c,
            State::RepeatZeroOrMore(unit) | State::RepeatOneOrMore(unit) => unit.matches(c),
        }
    }

    pub fn is_repeat(&self) -> bool {
        matches!(self, State::RepeatZeroOrMore(_) | State::RepeatOneOrMore(_))
    }

    /// The repeatable payload of a plain unit state or of a wrapper.
    pub fn unit(&self) -> Option<Unit> {
        match self {
            State::AnyChar => Some(Unit::AnyChar),
            State::Literal(symbol) => Some(Unit::Literal(*symbol)),
            State::RepeatZeroOrMore(unit) | State::RepeatOneOrMore(unit) => Some(*unit),
            State::Start | State::Termination => None,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::AnyChar => write!(f, "AnyChar"),
            Unit::Literal(c) => write!(f, "Literal({c:?})"),
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Start => write!(f, "Start"),
            State::Termination => write!(f, "Termination"),
            State::AnyChar => write!(f, "AnyChar"),
            State::Literal(c) => write!(f, "Literal({c:?})"),
            State::RepeatZeroOrMore(unit) => write!(f, "RepeatZeroOrMore({unit})"),
            State::RepeatOneOrMore(unit) => write!(f, "RepeatOneOrMore({unit})"),
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    state: State,
    transitions: Vec<StateId>, // order is the priority used while matching
}

/// Compiled state graph. States live in an arena and refer to each other by
/// [`StateId`], so the self-loops of repeat wrappers need no shared ownership.
#[derive(Debug, Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
    start: StateId,
}

impl Automaton {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut automaton = Automaton {
            nodes: Vec::with_capacity(capacity),
            start: StateId(0),
        };
        automaton.start = automaton.add_state(State::Start);
        automaton
    }

    pub(crate) fn add_state(&mut self, state: State) -> StateId {
        self.nodes.push(Node {
            state,
            transitions: vec![],
        });
        StateId(self.nodes.len() - 1)
    }

    pub(crate) fn add_transition(&mut self, from: StateId, to: StateId) {
        self.nodes[from.0].transitions.push(to);
    }

    pub(crate) fn pop_transition(&mut self, from: StateId) -> Option<StateId> {
        self.nodes[from.0].transitions.pop()
    }

    pub(crate) fn replace_state(&mut self, id: StateId, state: State) {
        self.nodes[id.0].state = state;
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.nodes[id.0].state
    }

    pub fn transitions(&self, id: StateId) -> &[StateId] {
        &self.nodes[id.0].transitions
    }

    /// Number of states in the arena, reachable or not.
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every state reachable from the start, each exactly once, in
    /// breadth-first transition order.
    pub fn walk(&self) -> Vec<StateId> {
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([self.start]);
        visited[self.start.0] = true;

        while let Some(cur) = queue.pop_front() {
            order.push(cur);
            for &next in self.transitions(cur) {
                if !visited[next.0] {
                    visited[next.0] = true;
                    queue.push_back(next);
                }
            }
        }

        order
    }
}

impl Display for Automaton {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, id) in self.walk().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let targets: Vec<String> = self
                .transitions(id)
                .iter()
                .map(|t| t.to_string())
                .collect();
            write!(f, "{id}: {} -> [{}]", self.state(id), targets.join(", "))?;
        }
        Ok(())
    }
}
