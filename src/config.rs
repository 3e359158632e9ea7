use std::env;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::history::state_dir;
use crate::modal::ModalProps;

const CONFIG_FILE: &str = "config.toml";

/// Optional appearance defaults read from a TOML file. Every field is
/// optional; present fields override the built-in defaults and are in turn
/// overridden by command-line flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub label: Option<String>,
    pub uppercase: Option<bool>,
    pub cancel_label: Option<String>,
    pub confirm_label: Option<String>,
    pub animation: Option<String>,
    pub use_24_hour_clock: Option<bool>,
    pub locale: Option<String>,
    pub keyboard_icon: Option<String>,
    pub clock_icon: Option<String>,
}

impl FileConfig {
    pub fn apply_to(self, mut props: ModalProps) -> Result<ModalProps, ConfigError> {
        if let Some(label) = self.label {
            props.label = Some(label);
        }
        if let Some(uppercase) = self.uppercase {
            props.uppercase = uppercase;
        }
        if let Some(cancel_label) = self.cancel_label {
            props.cancel_label = cancel_label;
        }
        if let Some(confirm_label) = self.confirm_label {
            props.confirm_label = confirm_label;
        }
        if let Some(animation) = self.animation {
            props.animation = animation.parse().map_err(ConfigError::InvalidAnimation)?;
        }
        if let Some(use_24_hour_clock) = self.use_24_hour_clock {
            props.use_24_hour_clock = Some(use_24_hour_clock);
        }
        if let Some(locale) = self.locale {
            props.locale = Some(locale);
        }
        if let Some(keyboard_icon) = self.keyboard_icon {
            props.keyboard_icon = keyboard_icon;
        }
        if let Some(clock_icon) = self.clock_icon {
            props.clock_icon = clock_icon;
        }

        Ok(props)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    TomlDecode(toml::de::Error),
    InvalidAnimation(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {err}"),
            ConfigError::TomlDecode(err) => write!(f, "failed to parse config: {err}"),
            ConfigError::InvalidAnimation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn resolve_config_path(cli_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_path {
        return path;
    }

    if let Some(path) = env::var_os("TIMEDIAL_CONFIG") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    state_dir().join(CONFIG_FILE)
}

/// A missing file is not an error: the picker works with built-in defaults.
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(err) => return Err(ConfigError::Io(err)),
    };

    toml::from_str(&raw).map_err(ConfigError::TomlDecode)
}

#[cfg(test)]
mod tests {
    use crate::modal::{Animation, ModalProps};

    use super::{ConfigError, FileConfig};

    #[test]
    fn parses_and_applies_overrides() {
        let config: FileConfig = toml::from_str(
            r#"
            label = "Departure"
            uppercase = false
            cancel_label = "Back"
            confirm_label = "Set"
            animation = "fade"
            use_24_hour_clock = true
            locale = "fi-FI"
            clock_icon = "clock"
            "#,
        )
        .expect("config should parse");

        let props = config
            .apply_to(ModalProps::default())
            .expect("apply should succeed");
        assert_eq!(props.label.as_deref(), Some("Departure"));
        assert!(!props.uppercase);
        assert_eq!(props.cancel_label, "Back");
        assert_eq!(props.confirm_label, "Set");
        assert_eq!(props.animation, Animation::Fade);
        assert_eq!(props.use_24_hour_clock, Some(true));
        assert_eq!(props.locale.as_deref(), Some("fi-FI"));
        assert_eq!(props.keyboard_icon, "keyboard-outline");
        assert_eq!(props.clock_icon, "clock");
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let config = FileConfig::default();
        let props = config
            .apply_to(ModalProps::default())
            .expect("apply should succeed");
        assert_eq!(props.label, None);
        assert!(props.uppercase);
        assert_eq!(props.cancel_label, "Cancel");
        assert_eq!(props.confirm_label, "Ok");
        assert_eq!(props.animation, Animation::None);
    }

    #[test]
    fn rejects_unknown_animation() {
        let config: FileConfig =
            toml::from_str(r#"animation = "bounce""#).expect("config should parse");
        let result = config.apply_to(ModalProps::default());
        assert!(matches!(result, Err(ConfigError::InvalidAnimation(_))));
    }
}
