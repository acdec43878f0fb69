//! Wiper sweep table
//!
//! Four cycles of five phases each. A phase energizes one winding; each
//! phase has a plain state (pump idle) and a pulse state (pump pulsing).
//! Cycles one and two walk the windings forward across the travel, cycles
//! three and four walk them back, and the last phase of cycle four wraps to
//! the first state of cycle one.
//!
//! Transition policy:
//!
//! | From  | none        | wipe        | wash        | both        |
//! |-------|-------------|-------------|-------------|-------------|
//! | plain | hold        | next plain  | next pulse  | next pulse  |
//! | pulse | same plain  | same plain  | same plain  | hold        |
//!
//! Wash takes priority over wipe when both are pressed on a plain state,
//! and a pulse is only sustained while both buttons stay held.

use super::input::INPUT_COMBINATIONS;
use super::output::OutputCode;
use super::table::{State, StateId, Table};

/// Number of cycles in one full sweep
pub const CYCLE_COUNT: usize = 4;

/// Phases per cycle
pub const PHASES_PER_CYCLE: usize = 5;

/// Plain + pulse state for every phase of every cycle
pub const STATE_COUNT: usize = CYCLE_COUNT * PHASES_PER_CYCLE * 2;

/// Dwell of every state, in base time quanta (5 x 10 ms)
pub const DEFAULT_DWELL: u32 = 5;

/// Winding energized at each phase of each cycle
pub const CYCLES: [[u8; PHASES_PER_CYCLE]; CYCLE_COUNT] = [
    [1, 2, 4, 8, 16],
    [1, 2, 4, 8, 16],
    [16, 8, 4, 2, 1],
    [16, 8, 4, 2, 1],
];

/// Plain state of `phase` within `cycle` (both zero-based)
pub const fn plain(cycle: usize, phase: usize) -> StateId {
    StateId((cycle * PHASES_PER_CYCLE + phase) * 2)
}

/// Pulse state of `phase` within `cycle` (both zero-based)
pub const fn pulse(cycle: usize, phase: usize) -> StateId {
    StateId((cycle * PHASES_PER_CYCLE + phase) * 2 + 1)
}

/// Where a state sits in the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Zero-based cycle
    pub cycle: usize,
    /// Zero-based phase within the cycle
    pub phase: usize,
    /// Pump pulsing
    pub pulse: bool,
}

impl Position {
    /// Decode a wiper table id
    pub const fn of(id: StateId) -> Self {
        let slot = id.0 / 2;
        Self {
            cycle: slot / PHASES_PER_CYCLE,
            phase: slot % PHASES_PER_CYCLE,
            pulse: id.0 % 2 == 1,
        }
    }

    pub const fn id(self) -> StateId {
        if self.pulse {
            pulse(self.cycle, self.phase)
        } else {
            plain(self.cycle, self.phase)
        }
    }

    /// Winding energized at this position
    ///
    /// Positions decoded from wiper table ids are always in range. Returns
    /// `None` for a position past the last cycle.
    pub const fn winding(self) -> Option<u8> {
        if self.cycle < CYCLE_COUNT && self.phase < PHASES_PER_CYCLE {
            Some(CYCLES[self.cycle][self.phase])
        } else {
            None
        }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kind = if self.pulse { "pulse" } else { "plain" };
        write!(f, "{}/phase{}/cycle{}", kind, self.phase + 1, self.cycle + 1)
    }
}

/// Cycle and phase one step further along the sweep
const fn advance(cycle: usize, phase: usize) -> (usize, usize) {
    if phase + 1 < PHASES_PER_CYCLE {
        (cycle, phase + 1)
    } else if cycle + 1 < CYCLE_COUNT {
        (cycle + 1, 0)
    } else {
        (0, 0)
    }
}

const fn build() -> [State; STATE_COUNT] {
    let mut states = [State {
        output: OutputCode::OFF,
        dwell: 0,
        next: [StateId(0); INPUT_COMBINATIONS],
    }; STATE_COUNT];

    let mut cycle = 0;
    while cycle < CYCLE_COUNT {
        let mut phase = 0;
        while phase < PHASES_PER_CYCLE {
            let winding = CYCLES[cycle][phase];
            let here = plain(cycle, phase);
            let held = pulse(cycle, phase);
            let (next_cycle, next_phase) = advance(cycle, phase);
            let step = plain(next_cycle, next_phase);
            let step_pulse = pulse(next_cycle, next_phase);

            states[here.0] = State {
                output: OutputCode::plain(winding),
                dwell: DEFAULT_DWELL,
                next: [here, step, step_pulse, step_pulse],
            };
            states[held.0] = State {
                output: OutputCode::pulse(winding),
                dwell: DEFAULT_DWELL,
                next: [here, here, here, held],
            };

            phase += 1;
        }
        cycle += 1;
    }

    states
}

const WIPER_STATES: [State; STATE_COUNT] = build();

/// The wiper table, starting at the plain state of cycle 1 phase 1
pub static WIPER_TABLE: Table<'static> = Table::new(&WIPER_STATES, plain(0, 0));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::InputVector;
    use proptest::prelude::*;

    fn all_positions() -> impl Iterator<Item = (usize, usize)> {
        (0..CYCLE_COUNT).flat_map(|c| (0..PHASES_PER_CYCLE).map(move |p| (c, p)))
    }

    #[test]
    fn test_layout() {
        assert_eq!(WIPER_TABLE.len(), STATE_COUNT);
        assert_eq!(WIPER_TABLE.start(), StateId(0));

        for (cycle, phase) in all_positions() {
            let plain_state = WIPER_TABLE.state(plain(cycle, phase));
            let pulse_state = WIPER_TABLE.state(pulse(cycle, phase));

            assert_eq!(plain_state.output, OutputCode::plain(CYCLES[cycle][phase]));
            assert_eq!(pulse_state.output, OutputCode::pulse(CYCLES[cycle][phase]));
            assert_eq!(plain_state.dwell, DEFAULT_DWELL);
            assert_eq!(pulse_state.dwell, DEFAULT_DWELL);
        }
    }

    #[test]
    fn test_single_winding_per_phase() {
        for state in WIPER_TABLE.states() {
            assert_eq!(state.output.windings().count_ones(), 1);
        }
    }

    #[test]
    fn test_table_is_total_and_closed() {
        assert_eq!(WIPER_TABLE.validate(), Ok(()));
    }

    #[test]
    fn test_released_buttons_hold_position() {
        let start = WIPER_TABLE.start();
        assert_eq!(WIPER_TABLE.resolve(start, InputVector::NONE), start);
    }

    #[test]
    fn test_wipe_walks_the_whole_sweep() {
        let start = WIPER_TABLE.start();
        let mut cursor = start;
        let mut visited = [false; STATE_COUNT];

        for _ in 0..CYCLE_COUNT * PHASES_PER_CYCLE {
            visited[cursor.index()] = true;
            cursor = WIPER_TABLE.resolve(cursor, InputVector::MINOR);
        }

        assert_eq!(cursor, start);
        for (cycle, phase) in all_positions() {
            assert!(visited[plain(cycle, phase).index()]);
        }
    }

    #[test]
    fn test_wash_priority_over_wipe() {
        for (cycle, phase) in all_positions() {
            let id = plain(cycle, phase);
            assert_eq!(
                WIPER_TABLE.resolve(id, InputVector::BOTH),
                WIPER_TABLE.resolve(id, InputVector::MAJOR)
            );
        }
    }

    #[test]
    fn test_pulse_needs_both_buttons() {
        for (cycle, phase) in all_positions() {
            let id = pulse(cycle, phase);
            assert_eq!(WIPER_TABLE.resolve(id, InputVector::BOTH), id);
            for input in [InputVector::NONE, InputVector::MINOR, InputVector::MAJOR] {
                assert_eq!(WIPER_TABLE.resolve(id, input), plain(cycle, phase));
            }
        }
    }

    #[test]
    fn test_first_cycle_phase_order() {
        let mut cursor = WIPER_TABLE.start();
        let mut windings = [0u8; PHASES_PER_CYCLE];

        for slot in windings.iter_mut() {
            *slot = WIPER_TABLE.state(cursor).output.windings();
            cursor = WIPER_TABLE.resolve(cursor, InputVector::MINOR);
        }

        assert_eq!(windings, [1, 2, 4, 8, 16]);
        assert_eq!(cursor, plain(1, 0));
    }

    #[test]
    fn test_last_phase_wraps_to_start() {
        let last = plain(CYCLE_COUNT - 1, PHASES_PER_CYCLE - 1);
        assert_eq!(WIPER_TABLE.resolve(last, InputVector::MINOR), plain(0, 0));
        assert_eq!(WIPER_TABLE.resolve(last, InputVector::MAJOR), pulse(0, 0));
    }

    #[test]
    fn test_reverse_cycles() {
        assert_eq!(Position::of(plain(2, 0)).winding(), Some(16));
        assert_eq!(Position::of(plain(3, 4)).winding(), Some(1));
        // End of cycle 2 steps into the reverse pass
        assert_eq!(WIPER_TABLE.resolve(plain(1, 4), InputVector::MINOR), plain(2, 0));
    }

    #[test]
    fn test_winding_of_foreign_id() {
        assert_eq!(Position::of(StateId(STATE_COUNT)).winding(), None);
        assert_eq!(Position::of(StateId(STATE_COUNT - 1)).winding(), Some(1));
    }

    #[test]
    fn test_scenario() {
        let mut cursor = WIPER_TABLE.start();
        let inputs = [
            InputVector::MINOR,
            InputVector::MINOR,
            InputVector::MAJOR,
            InputVector::BOTH,
            InputVector::NONE,
        ];
        let expected = [
            plain(0, 1),
            plain(0, 2),
            pulse(0, 3),
            pulse(0, 3),
            plain(0, 3),
        ];

        for (input, want) in inputs.into_iter().zip(expected) {
            cursor = WIPER_TABLE.resolve(cursor, input);
            assert_eq!(cursor, want);
        }
    }

    #[test]
    fn test_position_round_trip_and_display() {
        let pos = Position::of(pulse(0, 3));
        assert_eq!(
            pos,
            Position {
                cycle: 0,
                phase: 3,
                pulse: true
            }
        );
        assert_eq!(pos.id(), pulse(0, 3));

        let mut buf = heapless::String::<32>::new();
        core::fmt::write(&mut buf, format_args!("{}", pos)).unwrap();
        assert_eq!(buf.as_str(), "pulse/phase4/cycle1");
    }

    proptest! {
        #[test]
        fn prop_every_input_sequence_stays_in_table(raw in proptest::collection::vec(any::<u8>(), 0..200)) {
            let mut cursor = WIPER_TABLE.start();
            for bits in raw {
                cursor = WIPER_TABLE.resolve(cursor, InputVector::from_bits(bits));
                prop_assert!(cursor.index() < STATE_COUNT);
            }
        }

        #[test]
        fn prop_aux_bit_matches_pulse_slot(index in 0..STATE_COUNT) {
            let id = StateId(index);
            prop_assert_eq!(WIPER_TABLE.state(id).output.aux(), Position::of(id).pulse);
        }
    }
}
