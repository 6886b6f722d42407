//! The per-tick pump.
//!
//! Once per tick the shell translates held keys into engine commands,
//! advances the engine one frame, and reports whether the engine has
//! stopped. Timer lifecycle belongs to the platform layer (`main.rs`); the
//! shell itself is platform-free and drives any [`GameRunner`].

use crate::input::PressedKeys;
use crate::keymap;
use crate::runner::GameRunner;

/// Result of one tick, used by the platform layer to stop the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Stopped,
}

/// Owns the pressed-key set and the engine handle for the session.
pub struct Shell<R: GameRunner> {
    keys: PressedKeys,
    runner: R,
}

impl<R: GameRunner> Shell<R> {
    pub fn new(runner: R) -> Self {
        Self {
            keys: PressedKeys::new(),
            runner,
        }
    }

    /// Key-down event entry point.
    pub fn key_down(&mut self, code: &str) {
        self.keys.press(code);
    }

    /// Key-up event entry point.
    pub fn key_up(&mut self, code: &str) {
        self.keys.release(code);
    }

    /// Run one tick: forward held keys, advance the engine, check the stop
    /// flag.
    ///
    /// While the engine is awaiting free text, one-shot keys (space,
    /// letters, backspace) are released from the held set as they are
    /// forwarded, so holding them produces a single command per key-down.
    /// Text mode is re-queried per key: a forwarded Enter may switch the
    /// engine out of text mode mid-tick.
    pub fn tick(&mut self) -> TickOutcome {
        for code in self.keys.snapshot() {
            if self.runner.is_expecting_text() && keymap::is_one_shot(&code) {
                self.keys.release(&code);
            }

            // A key released above is still forwarded this tick.
            if let Some(cmd) = keymap::command_for_code(&code) {
                self.runner.handle_key(cmd);
            }
        }

        self.runner.update();

        if self.runner.has_stopped() {
            TickOutcome::Stopped
        } else {
            TickOutcome::Running
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn held_keys(&self) -> &PressedKeys {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records everything the shell forwards; scriptable text mode and stop
    /// flag.
    #[derive(Default)]
    struct RecordingRunner {
        handled: Vec<char>,
        updates: u32,
        expecting_text: bool,
        stopped: bool,
    }

    impl GameRunner for RecordingRunner {
        fn is_expecting_text(&self) -> bool {
            self.expecting_text
        }

        fn handle_key(&mut self, key: char) {
            self.handled.push(key);
        }

        fn update(&mut self) {
            self.updates += 1;
        }

        fn has_stopped(&self) -> bool {
            self.stopped
        }
    }

    #[test]
    fn test_held_movement_key_repeats_every_tick() {
        let mut shell = Shell::new(RecordingRunner::default());
        shell.key_down("ArrowRight");

        for _ in 0..3 {
            assert_eq!(shell.tick(), TickOutcome::Running);
        }
        assert_eq!(shell.runner().handled, vec!['d', 'd', 'd']);
        assert_eq!(shell.runner().updates, 3);
    }

    #[test]
    fn test_update_runs_even_with_no_keys() {
        let mut shell = Shell::new(RecordingRunner::default());
        shell.tick();
        shell.tick();
        assert!(shell.runner().handled.is_empty());
        assert_eq!(shell.runner().updates, 2);
    }

    #[test]
    fn test_one_shot_letter_in_text_mode() {
        let mut shell = Shell::new(RecordingRunner {
            expecting_text: true,
            ..Default::default()
        });
        shell.key_down("KeyH");

        // Held across several ticks, forwarded exactly once.
        shell.tick();
        shell.tick();
        shell.tick();
        assert_eq!(shell.runner().handled, vec!['h']);
        assert!(!shell.held_keys().is_held("KeyH"));

        // A fresh key-down fires again.
        shell.key_down("KeyH");
        shell.tick();
        assert_eq!(shell.runner().handled, vec!['h', 'h']);
    }

    #[test]
    fn test_space_and_backspace_one_shot_in_text_mode() {
        let mut shell = Shell::new(RecordingRunner {
            expecting_text: true,
            ..Default::default()
        });
        shell.key_down("Space");
        shell.key_down("Backspace");

        shell.tick();
        shell.tick();
        assert_eq!(shell.runner().handled, vec![' ', '`']);
    }

    #[test]
    fn test_letters_repeat_outside_text_mode() {
        let mut shell = Shell::new(RecordingRunner::default());
        shell.key_down("KeyW");

        shell.tick();
        shell.tick();
        assert_eq!(shell.runner().handled, vec!['w', 'w']);
        assert!(shell.held_keys().is_held("KeyW"));
    }

    #[test]
    fn test_enter_repeats_in_text_mode() {
        let mut shell = Shell::new(RecordingRunner {
            expecting_text: true,
            ..Default::default()
        });
        shell.key_down("Enter");

        shell.tick();
        shell.tick();
        assert_eq!(shell.runner().handled, vec!['\n', '\n']);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut shell = Shell::new(RecordingRunner::default());
        shell.key_down("Escape");
        shell.key_down("ShiftLeft");
        shell.tick();
        assert!(shell.runner().handled.is_empty());
        assert_eq!(shell.runner().updates, 1);
    }

    #[test]
    fn test_key_up_for_unpressed_key_is_noop() {
        let mut shell = Shell::new(RecordingRunner::default());
        shell.key_up("KeyZ");
        shell.tick();
        assert!(shell.runner().handled.is_empty());
    }

    #[test]
    fn test_stop_flag_reported() {
        let mut shell = Shell::new(RecordingRunner::default());
        assert_eq!(shell.tick(), TickOutcome::Running);

        // Engine stops; the same tick that observes it reports Stopped and
        // still ran update.
        struct StopAfter(u32, u32);
        impl GameRunner for StopAfter {
            fn is_expecting_text(&self) -> bool {
                false
            }
            fn handle_key(&mut self, _key: char) {}
            fn update(&mut self) {
                self.1 += 1;
            }
            fn has_stopped(&self) -> bool {
                self.1 >= self.0
            }
        }

        let mut shell = Shell::new(StopAfter(2, 0));
        assert_eq!(shell.tick(), TickOutcome::Running);
        assert_eq!(shell.tick(), TickOutcome::Stopped);
        // Outcome stays Stopped if the platform layer ticks again anyway.
        assert_eq!(shell.tick(), TickOutcome::Stopped);
    }
}
