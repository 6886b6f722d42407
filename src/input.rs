//! Pressed-key tracking.
//!
//! A passive accumulator: key-down events add a code, key-up events remove
//! it. The ticker also removes one-shot keys after forwarding them once, so
//! iteration works on a snapshot while removal hits the live set.

use std::collections::BTreeSet;

/// Set of keyboard event codes currently held down.
///
/// Mutated only from the browser event loop (key handlers and the tick
/// callback), never concurrently. Iteration order is lexicographic; the
/// engine does not depend on ordering.
#[derive(Debug, Default, Clone)]
pub struct PressedKeys {
    held: BTreeSet<String>,
}

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Idempotent while the key stays held.
    pub fn press(&mut self, code: &str) {
        self.held.insert(code.to_owned());
    }

    /// Record a key-up. Releasing a key that was never pressed is a no-op.
    pub fn release(&mut self, code: &str) {
        self.held.remove(code);
    }

    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// Snapshot of the held codes, for iteration that mutates the set.
    pub fn snapshot(&self) -> Vec<String> {
        self.held.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_idempotent() {
        let mut keys = PressedKeys::new();
        keys.press("KeyW");
        keys.press("KeyW");
        assert_eq!(keys.len(), 1);
        assert!(keys.is_held("KeyW"));
    }

    #[test]
    fn test_release_unpressed_is_noop() {
        let mut keys = PressedKeys::new();
        keys.release("KeyQ");
        assert!(keys.is_empty());

        keys.press("ArrowUp");
        keys.release("ArrowDown");
        assert!(keys.is_held("ArrowUp"));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_snapshot_survives_removal() {
        let mut keys = PressedKeys::new();
        keys.press("KeyA");
        keys.press("Space");
        let snapshot = keys.snapshot();
        for code in &snapshot {
            keys.release(code);
        }
        assert_eq!(snapshot.len(), 2);
        assert!(keys.is_empty());
    }
}
