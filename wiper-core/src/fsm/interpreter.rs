//! Interpreter loop
//!
//! One cursor, three steps per iteration, no terminal state:
//!
//! 1. Emit - write the active state's output code
//! 2. Dwell - block for the active state's dwell
//! 3. Sample & transition - read the buttons and move the cursor
//!
//! The dwell always runs to completion, which fixes the minimum interval
//! between two button samples.

use super::input::InputVector;
use super::table::{StateId, Table};
use crate::traits::{ActuatorOutput, ButtonInput, Dwell};

/// Record of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// State whose output was emitted
    pub from: StateId,
    /// Buttons sampled after the dwell
    pub input: InputVector,
    /// New cursor
    pub to: StateId,
}

/// Table interpreter
///
/// Owns the cursor and the three platform collaborators.
pub struct Interpreter<'t, I, O, D> {
    table: &'t Table<'t>,
    cursor: StateId,
    input: I,
    output: O,
    dwell: D,
}

impl<'t, I, O, D> Interpreter<'t, I, O, D>
where
    I: ButtonInput,
    O: ActuatorOutput,
    D: Dwell,
{
    /// Create an interpreter with the cursor on the table's start state
    pub fn new(table: &'t Table<'t>, input: I, output: O, dwell: D) -> Self {
        Self {
            table,
            cursor: table.start(),
            input,
            output,
            dwell,
        }
    }

    /// Currently active state
    pub fn cursor(&self) -> StateId {
        self.cursor
    }

    pub fn table(&self) -> &'t Table<'t> {
        self.table
    }

    /// Run one emit / dwell / sample iteration
    pub fn step(&mut self) -> Step {
        let from = self.cursor;
        let state = self.table.state(from);

        self.output.write_output(state.output);
        self.dwell.wait(state.dwell);

        let input = self.input.read_input();
        let to = self.table.resolve(from, input);
        self.cursor = to;

        Step { from, input, to }
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Run forever, handing every completed step to `observer`
    pub fn run_with<F: FnMut(&Step)>(&mut self, mut observer: F) -> ! {
        loop {
            let step = self.step();
            observer(&step);
        }
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (I, O, D) {
        (self.input, self.output, self.dwell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fsm::wiper::{plain, pulse, DEFAULT_DWELL, WIPER_TABLE};
    use crate::fsm::{OutputCode, State};
    use heapless::Vec;

    /// Plays back a fixed button script, then reports nothing pressed
    struct ScriptedButtons<'a> {
        script: &'a [InputVector],
        pos: usize,
    }

    impl<'a> ScriptedButtons<'a> {
        fn new(script: &'a [InputVector]) -> Self {
            Self { script, pos: 0 }
        }
    }

    impl ButtonInput for ScriptedButtons<'_> {
        fn read_input(&mut self) -> InputVector {
            let input = self.script.get(self.pos).copied().unwrap_or_default();
            self.pos += 1;
            input
        }
    }

    /// Event log shared by the mock output and delay
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Write(OutputCode),
        Wait(u32),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event, 64>,
    }

    struct MockOutput<'a>(&'a core::cell::RefCell<Recorder>);
    struct MockDwell<'a>(&'a core::cell::RefCell<Recorder>);

    impl ActuatorOutput for MockOutput<'_> {
        fn write_output(&mut self, code: OutputCode) {
            self.0.borrow_mut().events.push(Event::Write(code)).unwrap();
        }
    }

    impl Dwell for MockDwell<'_> {
        fn wait(&mut self, units: u32) {
            self.0.borrow_mut().events.push(Event::Wait(units)).unwrap();
        }
    }

    #[test]
    fn test_starts_on_table_start() {
        let log = core::cell::RefCell::new(Recorder::default());
        let fsm = Interpreter::new(
            &WIPER_TABLE,
            ScriptedButtons::new(&[]),
            MockOutput(&log),
            MockDwell(&log),
        );
        assert_eq!(fsm.cursor(), plain(0, 0));
    }

    #[test]
    fn test_emit_then_dwell_then_sample() {
        let log = core::cell::RefCell::new(Recorder::default());
        let script = [InputVector::MINOR];
        let mut fsm = Interpreter::new(
            &WIPER_TABLE,
            ScriptedButtons::new(&script),
            MockOutput(&log),
            MockDwell(&log),
        );

        let step = fsm.step();

        assert_eq!(
            step,
            Step {
                from: plain(0, 0),
                input: InputVector::MINOR,
                to: plain(0, 1),
            }
        );
        assert_eq!(
            log.borrow().events.as_slice(),
            &[Event::Write(OutputCode::plain(1)), Event::Wait(DEFAULT_DWELL)]
        );
        assert_eq!(fsm.cursor(), plain(0, 1));
    }

    #[test]
    fn test_scenario_cursor_sequence() {
        let log = core::cell::RefCell::new(Recorder::default());
        let script = [
            InputVector::MINOR,
            InputVector::MINOR,
            InputVector::MAJOR,
            InputVector::BOTH,
            InputVector::NONE,
        ];
        let mut fsm = Interpreter::new(
            &WIPER_TABLE,
            ScriptedButtons::new(&script),
            MockOutput(&log),
            MockDwell(&log),
        );

        let mut cursors: Vec<StateId, 5> = Vec::new();
        for _ in 0..script.len() {
            cursors.push(fsm.step().to).unwrap();
        }

        assert_eq!(
            cursors.as_slice(),
            &[plain(0, 1), plain(0, 2), pulse(0, 3), pulse(0, 3), plain(0, 3)]
        );

        // Pulse state written twice in a row with the same code
        let writes: Vec<OutputCode, 8> = log
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Write(code) => Some(*code),
                Event::Wait(_) => None,
            })
            .collect();
        assert_eq!(writes[3], OutputCode::pulse(8));
        assert_eq!(writes[4], OutputCode::pulse(8));
    }

    #[test]
    fn test_every_iteration_dwells() {
        let log = core::cell::RefCell::new(Recorder::default());
        let mut fsm = Interpreter::new(
            &WIPER_TABLE,
            ScriptedButtons::new(&[]),
            MockOutput(&log),
            MockDwell(&log),
        );

        for _ in 0..10 {
            let step = fsm.step();
            // Nothing pressed: the start state holds
            assert_eq!(step.to, step.from);
        }

        let waits = log
            .borrow()
            .events
            .iter()
            .filter(|e| matches!(e, Event::Wait(DEFAULT_DWELL)))
            .count();
        assert_eq!(waits, 10);
    }

    #[test]
    fn test_dwell_follows_active_state() {
        // Two states with different dwells, wipe flips between them
        let states = [
            State {
                output: OutputCode::plain(1),
                dwell: 3,
                next: [StateId(0), StateId(1), StateId(0), StateId(0)],
            },
            State {
                output: OutputCode::plain(2),
                dwell: 9,
                next: [StateId(1), StateId(0), StateId(1), StateId(1)],
            },
        ];
        let table = Table::new(&states, StateId(0));
        let log = core::cell::RefCell::new(Recorder::default());
        let script = [InputVector::MINOR; 4];
        let mut fsm = Interpreter::new(
            &table,
            ScriptedButtons::new(&script),
            MockOutput(&log),
            MockDwell(&log),
        );

        for _ in 0..script.len() {
            fsm.step();
        }

        let waits: Vec<u32, 4> = log
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Wait(units) => Some(*units),
                Event::Write(_) => None,
            })
            .collect();
        assert_eq!(waits.as_slice(), &[3, 9, 3, 9]);
    }

    #[test]
    fn test_into_parts_returns_collaborators() {
        let log = core::cell::RefCell::new(Recorder::default());
        let script = [InputVector::BOTH, InputVector::BOTH];
        let mut fsm = Interpreter::new(
            &WIPER_TABLE,
            ScriptedButtons::new(&script),
            MockOutput(&log),
            MockDwell(&log),
        );
        fsm.step();
        fsm.step();

        let (buttons, _, _) = fsm.into_parts();
        assert_eq!(buttons.pos, 2);
    }
}
