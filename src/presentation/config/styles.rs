use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"indicator_active": "bold magenta"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `key`, or the default style
    pub fn get_or_default(&self, key: &str) -> Style {
        self.0.get(key).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, raw)| {
                parse_style(&raw)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parse `"[modifiers] [fg] [on bg]"`, e.g. `"bold italic cyan on black"`
pub fn parse_style(raw: &str) -> Result<Style, String> {
    let raw = raw.to_lowercase();
    let (foreground, background) = match raw.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None if raw.starts_with("on ") => ("", raw.strip_prefix("on ")),
        None => (raw.as_str(), None),
    };

    let mut style = Style::default();
    for token in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(token) {
            style = style.add_modifier(modifier);
        } else {
            let color = Color::from_str(token).map_err(|_| format!("Unknown color `{token}`"))?;
            style = style.fg(color);
        }
    }
    if let Some(background) = background {
        let background = background.trim();
        let color =
            Color::from_str(background).map_err(|_| format!("Unknown color `{background}`"))?;
        style = style.bg(color);
    }

    Ok(style)
}

fn parse_modifier(token: &str) -> Option<Modifier> {
    match token {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underlined" | "underline" => Some(Modifier::UNDERLINED),
        "reversed" => Some(Modifier::REVERSED),
        _ => None,
    }
}
