//! Persisted display preferences

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    render::Font,
};

pub const DEFAULT_COMPLETION_MESSAGE: &str = "Time is up!";
const MAX_MESSAGE_CHARS: usize = 240;

/// Contents of `~/.cli-timer/config.json`.
///
/// Every field is optional on disk and read on its own, so one bad value
/// falls back to its default without discarding the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub font: String,
    pub display_scale: u32,
    pub show_controls: bool,
    pub completion_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font: Font::DEFAULT.name().to_string(),
            display_scale: 1,
            show_controls: true,
            completion_message: DEFAULT_COMPLETION_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// `$HOME/.cli-timer/config.json`, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".cli-timer").join("config.json"))
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read settings file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(object)) => Self::from_object(&object, path),
            Ok(_) => {
                warn!("Ignoring settings file {}: not a JSON object", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Pick known fields out of a JSON object, keeping defaults for bad ones
    fn from_object(object: &Map<String, Value>, path: &Path) -> Self {
        let mut settings = Self::default();

        if let Some(font) = field(object, "font", path, Value::as_str) {
            settings.font = font.to_string();
        }
        if let Some(scale) = field(object, "displayScale", path, |value| {
            value.as_u64().and_then(|scale| u32::try_from(scale).ok())
        }) {
            settings.display_scale = scale;
        }
        if let Some(show) = field(object, "showControls", path, Value::as_bool) {
            settings.show_controls = show;
        }
        if let Some(message) = field(object, "completionMessage", path, Value::as_str) {
            settings.completion_message = message.to_string();
        }

        settings.normalized()
    }

    /// Write these settings into the file as pretty JSON.
    ///
    /// Keys this program does not know are left as they were; the parent
    /// directory is created when missing.
    pub fn save(&self, path: &Path) -> Result<()> {
        let settings_error = |action, source| Error::Settings {
            action,
            path: path.display().to_string(),
            source,
        };
        let invalid = |e: serde_json::Error| io::Error::new(io::ErrorKind::InvalidData, e);

        let mut object = match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(object)) => object,
                _ => {
                    warn!("Replacing unreadable settings file {}", path.display());
                    Map::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(e) => return Err(settings_error("read", e)),
        };

        if let Value::Object(ours) =
            serde_json::to_value(self).map_err(|e| settings_error("serialize", invalid(e)))?
        {
            object.extend(ours);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| settings_error("create directory for", e))?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(object))
            .map_err(|e| settings_error("serialize", invalid(e)))?;
        fs::write(path, json + "\n").map_err(|e| settings_error("write", e))?;

        debug!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp and clean values read from disk
    pub fn normalized(mut self) -> Self {
        self.display_scale = self.display_scale.max(1);
        self.completion_message = self
            .completion_message
            .replace('\r', "")
            .replace('\n', " ")
            .chars()
            .take(MAX_MESSAGE_CHARS)
            .collect();
        self
    }

    /// The configured font, or the default one if the name is unknown
    pub fn font(&self) -> Font {
        self.font.parse().unwrap_or_else(|_| {
            warn!("Unknown font {:?} in settings, using {}", self.font, Font::DEFAULT);
            Font::DEFAULT
        })
    }
}

/// `key` from `object` when present and of the expected shape
fn field<'a, T>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &Path,
    pick: impl FnOnce(&'a Value) -> Option<T>,
) -> Option<T> {
    let value = object.get(key)?;
    let picked = pick(value);
    if picked.is_none() {
        warn!("Ignoring invalid {} {} in {}", key, value, path.display());
    }
    picked
}
