use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};

use crate::action::Action;

/// Flat mapping from a key to the action it triggers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        let mut modifiers = key.modifiers;
        // Terminals report back-tab together with shift
        if key.code == KeyCode::BackTab {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        self.get(&KeyEvent::new(key.code, modifiers)).copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parse key notation such as `<ctrl-c>`, `<backtab>` or `q`.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(raw);
    let lowercased = inner.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&lowercased);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.remove(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.len() > 1 && f.starts_with('f') => {
            let n = f[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{raw}`"))?;
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse `{raw}`"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };

    Ok(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::ctrl("<ctrl-c>", KeyCode::Char('c'), KeyModifiers::CONTROL)]
    #[case::plain_char("q", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case::esc("<esc>", KeyCode::Esc, KeyModifiers::NONE)]
    #[case::enter("<Enter>", KeyCode::Enter, KeyModifiers::NONE)]
    #[case::backtab("<backtab>", KeyCode::BackTab, KeyModifiers::NONE)]
    #[case::shift_backtab("<shift-backtab>", KeyCode::BackTab, KeyModifiers::NONE)]
    #[case::shift_char("<shift-r>", KeyCode::Char('R'), KeyModifiers::SHIFT)]
    #[case::combined(
        "<ctrl-alt-d>",
        KeyCode::Char('d'),
        KeyModifiers::CONTROL.union(KeyModifiers::ALT)
    )]
    #[case::function("<f5>", KeyCode::F(5), KeyModifiers::NONE)]
    #[case::space("<space>", KeyCode::Char(' '), KeyModifiers::NONE)]
    fn test_parse_key_event(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(parse_key_event(raw), Ok(KeyEvent::new(code, modifiers)));
    }

    #[rstest]
    #[case::unknown("<nope>")]
    #[case::bad_function("<fx>")]
    #[case::empty("<>")]
    fn test_parse_key_event_invalid(#[case] raw: &str) {
        assert!(parse_key_event(raw).is_err());
    }

    #[test]
    fn test_deserialize_keybindings() -> serde_json::Result<()> {
        let keybindings: KeyBindings =
            serde_json::from_str(r#"{"<ctrl-c>": "Quit", "<tab>": "FocusNext"}"#)?;
        assert_eq!(keybindings.len(), 2);
        assert_eq!(
            keybindings.action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_keybindings_unknown_action() {
        let result = serde_json::from_str::<KeyBindings>(r#"{"<ctrl-c>": "Explode"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_action_for_backtab_ignores_shift() {
        let mut keybindings = KeyBindings::default();
        keybindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            Action::FocusPrev,
        );

        let pressed = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(keybindings.action_for(&pressed), Some(Action::FocusPrev));
    }
}
