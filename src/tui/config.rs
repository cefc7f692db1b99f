use ratatui::crossterm::event::KeyCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::tui::bindings::{self, Action, Binding};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub normal: HashMap<String, KeyList>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeyList {
    Single(String),
    Multiple(Vec<String>),
}

impl KeyList {
    pub fn keys(&self) -> Vec<&str> {
        match self {
            KeyList::Single(s) => vec![s.as_str()],
            KeyList::Multiple(v) => v.iter().map(|s| s.as_str()).collect(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs_path().map(|p| p.join("bindings.toml"))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config").join("chordscope"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to parse {}: {}", path.display(), e);
                Config::default()
            }
        },
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s.to_lowercase().as_str() {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" | "ret" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "space" => Some(KeyCode::Char(' ')),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        _ => {
            let chars: Vec<char> = s.chars().collect();
            if chars.len() == 1 {
                Some(KeyCode::Char(chars[0]))
            } else {
                None
            }
        }
    }
}

pub fn parse_action(s: &str) -> Option<Action> {
    match s {
        "quit" => Some(Action::Quit),
        "up" => Some(Action::Up),
        "down" => Some(Action::Down),
        "up_fast" => Some(Action::UpFast),
        "down_fast" => Some(Action::DownFast),
        "home" => Some(Action::Home),
        "end" => Some(Action::End),
        "goto" => Some(Action::Goto),
        "random" => Some(Action::Random),
        _ => None,
    }
}

pub fn apply_overrides(bindings: &mut Vec<Binding>, overrides: &HashMap<String, KeyList>) {
    for (action_str, keys) in overrides {
        let Some(action) = parse_action(action_str) else {
            continue;
        };
        let hint = bindings
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.hint)
            .unwrap_or("");
        bindings.retain(|b| b.action != action);
        for key_str in keys.keys() {
            if let Some(key) = parse_key(key_str) {
                bindings.push(Binding { key, action, hint });
            }
        }
    }
}

/// Binding tables after user overrides. The goto prompt's Enter/Esc are not
/// remappable; everything in the normal table is.
pub struct Bindings {
    pub normal: Vec<Binding>,
    pub goto: Vec<Binding>,
}

impl Bindings {
    pub fn load() -> Self {
        let config = load_config();
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Self {
        let mut normal: Vec<Binding> = bindings::normal_bindings().to_vec();
        apply_overrides(&mut normal, &config.normal);
        Self {
            normal,
            goto: bindings::goto_bindings().to_vec(),
        }
    }
}
