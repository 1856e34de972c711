use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Styles keyed by element name, e.g. `label` or `thumb`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style for `element`, or the terminal default when it is not configured.
    pub fn style(&self, element: &str) -> Style {
        self.get(element).copied().unwrap_or_default()
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
            .map(|(element, line)| {
                parse_style(&line)
                    .map(|style| (element, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parse a style line such as `bold yellow on black`.
///
/// Words before `on` are modifiers or the foreground color; the word after it
/// is the background color.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let padded = format!(" {} ", line.to_lowercase());
    let (foreground, background) = match padded.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg.trim())),
        None => (padded.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        style = match parse_modifier(word) {
            Some(modifier) => style.add_modifier(modifier),
            None => style.fg(parse_color(word)?),
        };
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background)?);
    }

    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    Color::from_str(word).map_err(|_| format!("Unknown color `{word}`"))
}
