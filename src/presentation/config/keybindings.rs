use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-facing actions that keys can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    FocusNext,
    FocusPrevious,
    Activate,
    ToggleMenu,
    Escape,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// Action bound to a single key press
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.0.get(&vec![key]).copied()
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
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
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
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => {
            let mut chars = c.chars();
            let Some(mut c) = chars.next() else {
                return Err(format!("Unable to parse {raw}"));
            };
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(code, modifiers))
}

/// Parse a key sequence such as `<ctrl-c>` or `<g><g>`
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    raw.split("><")
        .map(|seq| {
            seq.strip_prefix('<')
                .or_else(|| seq.strip_suffix('>'))
                .unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<q>", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))]
    #[case("<Left>", KeyEvent::new(KeyCode::Left, KeyModifiers::NONE))]
    #[case("<Ctrl-c>", KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    #[case("<space>", KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE))]
    #[case("<backtab>", KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))]
    #[case("<shift-a>", KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT))]
    fn test_parse_single_key(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_sequence(raw), Ok(vec![expected]));
    }

    #[test]
    fn test_parse_multiple_keys() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ])
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_key_sequence("<ctrl-c").is_err());
        assert!(parse_key_sequence("<nope>").is_err());
    }

    #[test]
    fn test_deserialize_keybindings() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<Right>": "MoveRight", "<ctrl-c>": "Quit" }"#).unwrap();
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(Action::MoveRight)
        );
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            None
        );
    }
}
