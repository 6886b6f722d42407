//! Interface to the precompiled game engine module.
//!
//! The engine is an external collaborator: this crate never sees its game
//! state, entities, or text buffers, only the four operations below. On
//! wasm32 the concrete implementation is a `wasm-bindgen` extern binding to
//! the engine's exported class (see `main.rs`); tests drive scripted
//! implementations.

/// The four operations the engine module exposes to the shell.
///
/// Commands are single characters: `w`/`a`/`s`/`d` for movement, lowercase
/// letters for text entry, `'\n'` for Enter, `' '` for Space, and `` '`' ``
/// as the engine's Backspace token.
pub trait GameRunner {
    /// Whether the engine is currently awaiting free-text input.
    ///
    /// While this is true, held letter/space/backspace keys must fire at
    /// most once per physical key-down.
    fn is_expecting_text(&self) -> bool;

    /// Forward one command character to the engine.
    fn handle_key(&mut self, key: char);

    /// Advance the engine by one frame.
    fn update(&mut self);

    /// Whether the engine has signaled termination.
    fn has_stopped(&self) -> bool;
}
