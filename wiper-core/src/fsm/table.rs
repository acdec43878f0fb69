//! Transition table
//!
//! States are addressed by index and transitions are stored as indices,
//! so a table is a flat, immutable slice that can live in flash. Only the
//! interpreter's cursor changes at runtime.

use heapless::Vec;

use super::input::{InputVector, INPUT_COMBINATIONS};
use super::output::OutputCode;

/// Largest table [`Table::validate`] can walk without allocating
pub const MAX_STATES: usize = 64;

/// Index of a state in its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateId(pub usize);

impl StateId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One node of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct State {
    /// Code written to the actuators while this state is active
    pub output: OutputCode,
    /// Time to hold the output before sampling, in base time quanta
    pub dwell: u32,
    /// Next state for each input vector, indexed by [`InputVector::index`]
    pub next: [StateId; INPUT_COMBINATIONS],
}

impl State {
    /// Transition row entry for `input`
    pub const fn next_for(&self, input: InputVector) -> StateId {
        self.next[input.index()]
    }
}

/// Structural faults found while checking a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableError {
    /// Table has no states
    Empty,
    /// Start state index is past the end of the table
    StartOutOfRange,
    /// A transition points past the end of the table
    TransitionOutOfRange { state: StateId, input: InputVector },
    /// State cannot be reached from the start state
    Unreachable(StateId),
    /// Table is larger than [`MAX_STATES`]
    TooManyStates,
}

/// Immutable transition table with a designated start state
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    states: &'a [State],
    start: StateId,
}

impl<'a> Table<'a> {
    /// Build a table, asserting that every reference is in range
    ///
    /// Intended for `const` tables: an out-of-range transition fails
    /// constant evaluation, so a table built this way is total by
    /// construction. Use [`Table::checked`] for tables built at runtime.
    pub const fn new(states: &'a [State], start: StateId) -> Self {
        assert!(!states.is_empty(), "transition table is empty");
        assert!(start.0 < states.len(), "start state out of range");

        let mut i = 0;
        while i < states.len() {
            let mut j = 0;
            while j < INPUT_COMBINATIONS {
                assert!(
                    states[i].next[j].0 < states.len(),
                    "transition target out of range"
                );
                j += 1;
            }
            i += 1;
        }

        Self { states, start }
    }

    /// Build a table, reporting the first out-of-range reference
    pub fn checked(states: &'a [State], start: StateId) -> Result<Self, TableError> {
        if states.is_empty() {
            return Err(TableError::Empty);
        }
        if start.0 >= states.len() {
            return Err(TableError::StartOutOfRange);
        }
        check_totality(states)?;
        Ok(Self { states, start })
    }

    /// State the cursor starts in
    pub const fn start(&self) -> StateId {
        self.start
    }

    pub const fn len(&self) -> usize {
        self.states.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub const fn states(&self) -> &'a [State] {
        self.states
    }

    /// Look up a state
    ///
    /// Ids produced by this table (its start and its transitions) are always
    /// in range. Panics on a foreign id past the end of the table.
    pub const fn state(&self, id: StateId) -> &'a State {
        &self.states[id.0]
    }

    /// Next state for `input` while in `state`
    ///
    /// Constant-time and side-effect free.
    pub const fn resolve(&self, state: StateId, input: InputVector) -> StateId {
        self.states[state.0].next_for(input)
    }

    /// Check that the table is total and closed
    ///
    /// Every transition must land inside the table and every state must be
    /// reachable from the start state.
    pub fn validate(&self) -> Result<(), TableError> {
        check_totality(self.states)?;

        if self.states.len() > MAX_STATES {
            return Err(TableError::TooManyStates);
        }

        let mut seen = [false; MAX_STATES];
        let mut stack: Vec<StateId, MAX_STATES> = Vec::new();

        seen[self.start.0] = true;
        stack
            .push(self.start)
            .map_err(|_| TableError::TooManyStates)?;

        while let Some(id) = stack.pop() {
            for next in self.states[id.0].next {
                if !seen[next.0] {
                    seen[next.0] = true;
                    // Each state is pushed at most once
                    stack.push(next).map_err(|_| TableError::TooManyStates)?;
                }
            }
        }

        match seen[..self.states.len()].iter().position(|s| !s) {
            Some(index) => Err(TableError::Unreachable(StateId(index))),
            None => Ok(()),
        }
    }
}

fn check_totality(states: &[State]) -> Result<(), TableError> {
    for (index, state) in states.iter().enumerate() {
        for input in InputVector::ALL {
            if state.next_for(input).0 >= states.len() {
                return Err(TableError::TransitionOutOfRange {
                    state: StateId(index),
                    input,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(output: u8, next: [usize; 4]) -> State {
        State {
            output: OutputCode::plain(output),
            dwell: 5,
            next: next.map(StateId),
        }
    }

    #[test]
    fn test_resolve_uses_input_column() {
        let states = [state(1, [0, 1, 0, 1]), state(2, [1, 0, 1, 0])];
        let table = Table::new(&states, StateId(0));

        assert_eq!(table.resolve(StateId(0), InputVector::NONE), StateId(0));
        assert_eq!(table.resolve(StateId(0), InputVector::MINOR), StateId(1));
        assert_eq!(table.resolve(StateId(1), InputVector::MINOR), StateId(0));
        assert_eq!(table.state(StateId(1)).output.windings(), 2);
    }

    #[test]
    fn test_checked_rejects_dangling_transition() {
        let states = [state(1, [0, 0, 2, 0]), state(2, [0, 0, 0, 0])];
        let err = Table::checked(&states, StateId(0)).unwrap_err();
        assert_eq!(
            err,
            TableError::TransitionOutOfRange {
                state: StateId(0),
                input: InputVector::MAJOR,
            }
        );
    }

    #[test]
    fn test_checked_rejects_bad_start() {
        let states = [state(1, [0, 0, 0, 0])];
        assert_eq!(
            Table::checked(&states, StateId(1)).unwrap_err(),
            TableError::StartOutOfRange
        );
        assert_eq!(
            Table::checked(&[], StateId(0)).unwrap_err(),
            TableError::Empty
        );
    }

    #[test]
    fn test_validate_finds_unreachable_state() {
        // State 2 only points at itself and nothing points at it
        let states = [
            state(1, [0, 1, 1, 1]),
            state(2, [0, 0, 0, 0]),
            state(4, [2, 2, 2, 2]),
        ];
        let table = Table::new(&states, StateId(0));
        assert_eq!(table.validate(), Err(TableError::Unreachable(StateId(2))));
    }

    #[test]
    fn test_validate_accepts_closed_loop() {
        let states = [
            state(1, [1, 1, 1, 1]),
            state(2, [2, 2, 2, 2]),
            state(4, [0, 0, 0, 0]),
        ];
        let table = Table::new(&states, StateId(0));
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    #[should_panic(expected = "transition target out of range")]
    fn test_new_panics_on_dangling_transition() {
        let states = [state(1, [0, 3, 0, 0])];
        let _ = Table::new(&states, StateId(0));
    }
}
