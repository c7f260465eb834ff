use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct FieldConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_frame")]
    pub frame: bool,
}

#[derive(Debug, Deserialize)]
pub struct RobotConfig {
    #[serde(default)]
    pub start_x: i32,
    #[serde(default)]
    pub start_y: i32,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_enable_command_log")]
    pub enable_command_log: bool,
    #[serde(default = "default_command_log_path")]
    pub command_log_path: String,
}

// Default values
fn default_width() -> i32 { 5 }
fn default_height() -> i32 { 3 }
fn default_frame() -> bool { true }
fn default_delay_ms() -> u64 { 0 }
fn default_map_path() -> String { "field.map.json".to_string() }
fn default_enable_command_log() -> bool { false }
fn default_command_log_path() -> String { "command_log.json".to_string() }

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            frame: default_frame(),
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            start_x: 0,
            start_y: 0,
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_command_log: default_enable_command_log(),
            command_log_path: default_command_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            robot: RobotConfig::default(),
            map: MapConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
