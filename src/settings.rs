use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used when no settings path is given on the command line.
pub const SETTINGS_FILE: &str = "smart_display_config.json";

/// Credentials for the external data providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    /// OpenWeatherMap `appid`.
    pub openweather: String,
    /// NewsAPI key, sent as the `X-Api-Key` header.
    pub newsapi: String,
}

impl Default for ApiKeys {
    fn default() -> Self {
        Self {
            openweather: "Your_OPENWEATHER_API_KEY".into(),
            newsapi: "YOUR_NEWSAPI_KEY".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub greeting_emoji: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Master Prince".into(),
            greeting_emoji: "😊".into(),
        }
    }
}

impl UserProfile {
    pub fn greeting(&self) -> String {
        format!("Hi {} {}", self.name, self.greeting_emoji)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_keys: ApiKeys,
    /// Free-text place name passed to the weather provider.
    pub location: String,
    pub user: UserProfile,
    /// Ordered to-do entries. May be empty.
    pub todo_items: Vec<String>,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives a copy of the log output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_keys: ApiKeys::default(),
            location: "Guwahati".into(),
            user: UserProfile::default(),
            todo_items: vec![
                "Complete IoT Internship Assignments".into(),
                "Revise Microprocessors".into(),
                "Work on Smart Mirror Project".into(),
                "Upload progress to LinkedIn".into(),
            ],
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file is replaced by the default document, which is written
    /// back to disk before returning. A file that exists but cannot be read or
    /// parsed is an error; no attempt is made to repair it.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::load_or_create(path.as_ref()).map(|(settings, _)| settings)
    }

    /// Like [`Settings::load`], also reporting whether the default document
    /// had to be created.
    fn load_or_create(path: &Path) -> anyhow::Result<(Self, bool)> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let settings = serde_json::from_str(&content).with_context(|| {
                    format!(
                        "settings file {} is malformed; fix or remove it to restore defaults",
                        path.display()
                    )
                })?;
                Ok((settings, false))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let settings = Self::default();
                settings.save(path).with_context(|| {
                    format!("failed to create default settings {}", path.display())
                })?;
                Ok((settings, true))
            }
            Err(e) => {
                Err(e).with_context(|| format!("failed to read settings file {}", path.display()))
            }
        }
    }

    /// Rewrite the whole document. The new content is written to a sibling
    /// temporary file first and then renamed over `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = to_json_indented(self)?;
        let tmp = temp_path(path);
        std::fs::write(&tmp, json)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e).with_context(|| format!("failed to replace {}", path.display()));
        }
        Ok(())
    }
}

fn to_json_indented(settings: &Settings) -> anyhow::Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    settings.serialize(&mut ser)?;
    Ok(out)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| SETTINGS_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Owns the live [`Settings`] value together with the file backing it.
///
/// Every mutation goes through [`ConfigStore::update`], which persists the
/// new document before it becomes visible to readers.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    settings: Settings,
    created: bool,
}

impl ConfigStore {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let (settings, created) = Settings::load_or_create(&path)?;
        Ok(Self {
            path,
            settings,
            created,
        })
    }

    /// True when the file did not exist and the default document was written.
    pub fn created_defaults(&self) -> bool {
        self.created
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `edit` to a copy of the settings and persist it. The in-memory
    /// value is replaced only if the save succeeded.
    pub fn update(&mut self, edit: impl FnOnce(&mut Settings)) -> anyhow::Result<()> {
        let mut next = self.settings.clone();
        edit(&mut next);
        next.save(&self.path)?;
        self.settings = next;
        Ok(())
    }
}
