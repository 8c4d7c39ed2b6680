use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "CONF_CONTENT_CONFIG";

#[derive(Debug, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub speakers_file: String,
    pub partners_file: String,
    pub locale: String,
    pub logging_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: ".".into(),
            output_dir: ".".into(),
            speakers_file: "speakers.csv".into(),
            partners_file: "partners.csv".into(),
            locale: "ja".into(),
            logging_config: "info".into(),
        }
    }
}

impl Config {
    pub fn speakers_path(&self) -> PathBuf {
        self.input_dir.join(&self.speakers_file)
    }

    pub fn partners_path(&self) -> PathBuf {
        self.input_dir.join(&self.partners_file)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Config, anyhow::Error> {
        let config = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str::<Config>(&config)?;
        Ok(config)
    }
}

/// Loads the config from `explicit` or, failing that, the path in `CONF_CONTENT_CONFIG`.
///
/// An explicit path that cannot be read is an error. A path taken from the
/// environment only warns and falls back to defaults.
pub fn read_config(explicit: Option<&Path>) -> Result<Config, anyhow::Error> {
    load_config(explicit, std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

fn load_config(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Result<Config, anyhow::Error> {
    if let Some(path) = explicit {
        return Config::from_yaml_file(path)
            .map_err(|e| e.context(format!("Failed to read config {}", path.display())));
    }

    let Some(path) = from_env else {
        return Ok(Config::default());
    };

    match Config::from_yaml_file(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            //Print to stderr, since logging is set up in the config
            eprintln!(
                "Warning: Failed to read config {}: {}",
                path.display(),
                e
            );
            Ok(Config::default())
        }
    }
}
