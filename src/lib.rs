//! Arcade Shell - browser bootstrap for a precompiled game engine
//!
//! Core modules:
//! - `runner`: The four-call interface the engine module exposes
//! - `keymap`: Fixed translation from keyboard event codes to engine commands
//! - `input`: Set of currently-held keys, fed by key-down/key-up events
//! - `shell`: The per-tick pump that forwards commands and advances the engine
//! - `audio`: Load-time music playback (browser only)
//!
//! The engine itself is opaque: this crate only loads it, feeds it keys, and
//! ticks it until it reports it has stopped.

pub mod audio;
pub mod input;
pub mod keymap;
pub mod runner;
pub mod settings;
pub mod shell;

pub use runner::GameRunner;
pub use settings::Settings;
pub use shell::{Shell, TickOutcome};

/// Shell configuration constants
pub mod consts {
    /// Fixed update interval in milliseconds (~33 Hz)
    pub const TICK_INTERVAL_MS: u32 = 30;

    /// Music asset played once at load time
    pub const MUSIC_ASSET: &str = "./assets/music.mp3";
}
