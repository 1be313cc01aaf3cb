use crate::core::controller::LoadErrorPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::window::Window;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite file backing the store.
    pub database: String,
    /// Window the list opens with: "today" | "week" | "all".
    #[serde(default = "default_window")]
    pub default_window: String,
    /// What a failed reload does to the view: "clear" | "keep" | "fail".
    #[serde(default = "default_on_load_error")]
    pub on_load_error: String,
}

fn default_window() -> String {
    "today".to_string()
}

fn default_on_load_error() -> String {
    "clear".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_window: default_window(),
            on_load_error: default_on_load_error(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("brewlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".brewlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("brewlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("brewlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// The configured start window. Unrecognized names fall back to `all`.
    pub fn window(&self) -> Window {
        Window::from_name(&self.default_window)
    }

    /// The configured reload-failure policy. Unrecognized names fall back
    /// to clearing the view, the historical behavior.
    pub fn load_error_policy(&self) -> LoadErrorPolicy {
        LoadErrorPolicy::from_name(&self.on_load_error).unwrap_or(LoadErrorPolicy::ClearToEmpty)
    }

    /// Initialize configuration and database files. Returns the resolved
    /// database path so the caller does not have to re-derive it.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Tests pass their own --db and must not clobber the user config.
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(db_path)
    }
}
