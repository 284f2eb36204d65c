use crate::automaton::{Automaton, State, StateId};

impl Automaton {
    /// Walks the graph one character at a time, committing to the first
    /// transition that accepts each character. Returns whether the whole of
    /// `input` is matched.
    pub fn matches(&self, input: &str) -> bool {
        let mut current = self.start();

        for c in input.chars() {
            match self.next_state(current, c) {
                Some(next) => current = next,
                None => {
                    trace!("rejected {:?} in state {}", c, current);
                    return false;
                }
            }
        }

        self.reaches_termination(current)
    }

    fn next_state(&self, current: StateId, c: char) -> Option<StateId> {
        let mut skipped = Vec::new();
        if let Some(next) = self.select_transition(current, c, &mut skipped) {
            return Some(next);
        }

        // nothing ahead takes `c`, so a wrapper tries its own self-loop last
        let state = self.state(current);
        (state.is_repeat() && state.check_self(c)).then_some(current)
    }

    /// First target of `from`, in transition order, that consumes `c`. A
    /// zero-or-more wrapper that does not take `c` is looked through into its
    /// own continuation. `skipped` holds wrappers already looked through.
    fn select_transition(
        &self,
        from: StateId,
        c: char,
        skipped: &mut Vec<StateId>,
    ) -> Option<StateId> {
        for &candidate in self.transitions(from) {
            if candidate == from {
                continue;
            }

            let state = self.state(candidate);
            if state.check_self(c) {
                return Some(candidate);
            }

            if self.is_skippable(candidate, skipped) {
                skipped.push(candidate);
                if let Some(next) = self.select_transition(candidate, c, skipped) {
                    return Some(next);
                }
            }
        }

        None
    }

    /// Acceptance looks one step ahead for the termination marker, seeing
    /// through zero-or-more wrappers the same way transition selection does.
    fn reaches_termination(&self, from: StateId) -> bool {
        let mut skipped = Vec::new();
        let mut pending = vec![from];

        while let Some(cur) = pending.pop() {
            for &candidate in self.transitions(cur) {
                if candidate == cur {
                    continue;
                }
                if *self.state(candidate) == State::Termination {
                    return true;
                }
                if self.is_skippable(candidate, &skipped) {
                    skipped.push(candidate);
                    pending.push(candidate);
                }
            }
        }

        false
    }

    // one-or-more wrappers must be entered by a match, never skipped
    fn is_skippable(&self, id: StateId, skipped: &[StateId]) -> bool {
        matches!(self.state(id), State::RepeatZeroOrMore(_)) && !skipped.contains(&id)
    }
}
