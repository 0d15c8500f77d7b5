use crate::app::Command;
use crate::presets::Pattern;
use crate::variant::Variant;

/// Map a logical key (as reported by `KeyboardEvent.key` or winit's
/// `Key::Character`) to a command. Unbound keys return `None`.
pub fn command_for_key(key: &str, variant: Variant) -> Option<Command> {
    match key {
        "r" | "R" => Some(Command::Reset),
        "x" | "X" => Some(Command::Randomize),
        "p" | "P" => Some(Command::NextPreset),
        _ => {
            let digit = key.parse::<usize>().ok().filter(|d| (1..=9).contains(d))?;
            if variant.has_patterns() {
                Pattern::from_index(digit - 1).map(Command::Pattern)
            } else {
                variant.presets().get(digit - 1).copied().map(Command::Preset)
            }
        }
    }
}
