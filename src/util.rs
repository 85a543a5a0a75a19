// Utility helpers shared across components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Single-key shortcuts accepted on keydown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Theme,
    Format,
    Help,
}

pub const HELP_TEXT: &str = "Keyboard Shortcuts:\n\
    \u{2022} T - Toggle theme\n\
    \u{2022} F - Toggle time format\n\
    \u{2022} H - Show this help";

/// Maps a `KeyboardEvent::key()` value to a shortcut. Case-insensitive;
/// multi-character key names ("Shift", "Enter", ...) never match.
pub fn shortcut_for(key: &str) -> Option<Shortcut> {
    match key {
        "t" | "T" => Some(Shortcut::Theme),
        "f" | "F" => Some(Shortcut::Format),
        "h" | "H" => Some(Shortcut::Help),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_keys_are_case_insensitive() {
        assert_eq!(shortcut_for("t"), Some(Shortcut::Theme));
        assert_eq!(shortcut_for("T"), Some(Shortcut::Theme));
        assert_eq!(shortcut_for("f"), Some(Shortcut::Format));
        assert_eq!(shortcut_for("F"), Some(Shortcut::Format));
        assert_eq!(shortcut_for("h"), Some(Shortcut::Help));
        assert_eq!(shortcut_for("H"), Some(Shortcut::Help));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(shortcut_for("x"), None);
        assert_eq!(shortcut_for(" "), None);
        assert_eq!(shortcut_for("Shift"), None);
        assert_eq!(shortcut_for("Tab"), None);
        assert_eq!(shortcut_for(""), None);
    }
}
