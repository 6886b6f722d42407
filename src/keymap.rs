//! Fixed translation from `KeyboardEvent.code` strings to engine commands.
//!
//! The engine consumes single-character commands; arrow keys alias the WASD
//! movement set so both work without the engine knowing the difference.

/// Command token the engine interprets as Backspace.
pub const BACKSPACE_TOKEN: char = '`';

/// Map a keyboard event code to the engine command it produces.
///
/// Returns `None` for codes the shell ignores (modifiers, function keys,
/// digits, everything unlisted).
pub fn command_for_code(code: &str) -> Option<char> {
    match code {
        "ArrowRight" => Some('d'),
        "ArrowLeft" => Some('a'),
        "ArrowUp" => Some('w'),
        "ArrowDown" => Some('s'),
        "Backspace" => Some(BACKSPACE_TOKEN),
        "Enter" => Some('\n'),
        "Space" => Some(' '),
        _ => letter_for_code(code),
    }
}

/// Whether a held key must fire only once per key-down while the engine is
/// in text-input mode. Movement keys (arrows) and Enter auto-repeat freely.
pub fn is_one_shot(code: &str) -> bool {
    code == "Space" || code == "Backspace" || letter_for_code(code).is_some()
}

/// `KeyA`..`KeyZ` -> `'a'`..`'z'`; anything else -> `None`.
fn letter_for_code(code: &str) -> Option<char> {
    let letter = code.strip_prefix("Key")?;
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
