use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILENAME: &str = "roadmap_config.json";

/// How the frame loop keeps joystick state current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Classify discrete button/axis events
    #[default]
    Events,
    /// Re-sample every connected joystick each frame
    Polling,
    Both,
}

impl InputMode {
    pub fn uses_events(self) -> bool {
        matches!(self, Self::Events | Self::Both)
    }

    pub fn uses_polling(self) -> bool {
        matches!(self, Self::Polling | Self::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// UI zoom, applied to every widget and font
    pub scale_factor: f32,
    pub frame_rate_limit: u32,
    pub input_mode: InputMode,
    /// Indices of ticked road-map steps
    pub completed_steps: Vec<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Joystick Road-map".to_string(),
            window_width: 1024.0,
            window_height: 760.0,
            scale_factor: 2.0,
            frame_rate_limit: 60,
            input_mode: InputMode::default(),
            completed_steps: Vec::new(),
        }
    }
}

impl DemoConfig {
    /// Load the config next to the executable, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::from_json(&contents) {
                    Ok(config) => {
                        log::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        log::error!("Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    log::error!("Failed to read config file: {}", e);
                }
            }
        }
        Self::default()
    }

    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        log::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILENAME)
    }

    /// Time between repaints for the configured frame-rate limit
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.frame_rate_limit.max(1)))
    }
}
