use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub min_work_duration: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_legend")]
    pub show_legend: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

fn default_show_legend() -> String {
    "Yes".to_string()
}

/// Fallback daily threshold: 9 hours.
pub const DEFAULT_MIN_WORK_SECONDS: i64 = 9 * 60 * 60;

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            min_work_duration: "9h".to_string(),
            separator_char: default_separator_char(),
            show_legend: default_show_legend(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    /// or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }

    /// The daily attendance threshold in seconds, parsed from
    /// `min_work_duration`. Unparsable values fall back to 9 hours.
    pub fn min_work_seconds(&self) -> i64 {
        crate::utils::time::parse_work_duration(&self.min_work_duration)
            .unwrap_or(DEFAULT_MIN_WORK_SECONDS)
    }

    pub fn legend_enabled(&self) -> bool {
        !self.show_legend.eq_ignore_ascii_case("no")
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
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
            dir.join("punchlog.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
