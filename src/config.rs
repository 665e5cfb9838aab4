use anyhow::Result;
use evdev::KeyCode;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::{env, fs};

pub fn config() -> Result<Config> {
    let config_path = match env::args().nth(1) {
        Some(arg_path) => PathBuf::from(arg_path),
        None => dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("~/.config"))
            .join("keywatch")
            .join("config.yml"),
    };

    let config = if !config_path.exists() {
        let config = Config::default();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_yaml::to_string(&config)?;
        fs::write(&config_path, serialized)?;
        info!("Default config written to {}", config_path.display());
        config
    } else {
        let config_content = fs::read_to_string(&config_path)?;
        serde_yaml::from_str(&config_content)?
    };

    debug!("Config: {:#?}", config);

    Ok(config)
}

pub type Aliases = HashMap<u16, KeyCode>;

fn default_show_raw() -> bool {
    false
}

/// Device names to watch; empty means every keyboard found.
fn default_keyboards() -> Vec<String> {
    vec!["AT Translated Set 2 keyboard".to_owned()]
}

/// Fold the right-hand modifiers into their left-hand symbols so a combo
/// matches whichever side was pressed.
fn default_aliases() -> Aliases {
    HashMap::from([
        (KeyCode::KEY_RIGHTSHIFT.0, KeyCode::KEY_LEFTSHIFT),
        (KeyCode::KEY_RIGHTCTRL.0, KeyCode::KEY_LEFTCTRL),
        (KeyCode::KEY_RIGHTALT.0, KeyCode::KEY_LEFTALT),
        (KeyCode::KEY_RIGHTMETA.0, KeyCode::KEY_LEFTMETA),
    ])
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub globals: Globals,
    #[serde(default = "default_keyboards")]
    pub keyboards: Vec<String>,
    #[serde(default = "default_aliases")]
    pub aliases: Aliases,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Globals {
    /// Also log non-key and autorepeat events.
    #[serde(default = "default_show_raw")]
    pub show_raw: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            globals: Globals {
                show_raw: default_show_raw(),
            },
            keyboards: default_keyboards(),
            aliases: default_aliases(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_yaml() {
        let config = Config::default();
        let serialized = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(parsed.keyboards, config.keyboards);
        assert_eq!(parsed.aliases, config.aliases);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = serde_yaml::from_str("globals:\n  show_raw: true\n").unwrap();
        assert!(parsed.globals.show_raw);
        assert_eq!(parsed.keyboards, default_keyboards());
        assert_eq!(parsed.aliases, default_aliases());
    }
}
