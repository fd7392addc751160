use log::{trace, warn};
use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// The path the config file was loaded from
    #[serde(skip)]
    #[schemars(skip)]
    pub config_path: Option<PathBuf>,

    /// Background color of the mask layer (any CSS color value)
    pub mask_color: String,
    /// Accent color shared by the spinner and the progress line
    pub accent_color: String,
    /// Spinner diameter in pixels
    pub spinner_size: u32,
    /// Progress line thickness in pixels
    pub bar_height: u32,
    /// Label font size in pixels
    pub font_size: u32,
    /// Stacking order of the mask layer
    pub z_index: u32,
    /// Milliseconds an idle overlay stays mounted before it is torn down
    pub teardown_delay_ms: u64,
    /// Duration of progress width transitions in milliseconds
    pub bar_transition_ms: u64,
    /// The number of frames per second for the overlay manager loop
    pub frame_rate: u32,
    /// Viewports at least this many pixels wide classify as tablet
    pub tablet_breakpoint: u32,
    /// Viewports at least this many pixels wide classify as desktop
    pub desktop_breakpoint: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            mask_color: "rgba(17, 17, 17, 0.6)".to_owned(),
            accent_color: "#4f9cf9".to_owned(),
            spinner_size: 36,
            bar_height: 3,
            font_size: 14,
            z_index: 9999,
            teardown_delay_ms: 300,
            bar_transition_ms: 200,
            frame_rate: 60,
            tablet_breakpoint: 768,
            desktop_breakpoint: 1200,
        }
    }
}

static CURRENT_CONFIG: Lazy<Arc<RwLock<Config>>> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

impl Config {
    pub fn default_config_path() -> Option<PathBuf> {
        crate::paths::default_config_path()
    }

    pub fn load(config_path: Option<&str>, save: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let path = match config_path {
            Some(p) => PathBuf::from(p),
            None => {
                Self::default_config_path().ok_or("Could not determine default config directory")?
            }
        };

        if !path.exists() {
            Self::create_default_config_file(&path)?;
            trace!("Created default config file at: {}", path.display());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let mut config: Config = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        config.config_path = Some(path.clone());

        // Resave so files from older versions gain any newly added fields.
        if save {
            if let Err(e) = config.save_to_file(&path) {
                warn!("Failed to update config file with missing fields: {e}");
            }
        }

        trace!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn create_default_config_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Config::default().save_to_file(path)?;
        Ok(())
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        super::config_serializer::serialize_config(self, path)
    }

    pub fn current() -> Config {
        CURRENT_CONFIG.read().unwrap().clone()
    }

    pub fn set_config(config: Config) {
        *CURRENT_CONFIG.write().unwrap() = config;
    }
}
