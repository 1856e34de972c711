use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::Path;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::range::{ChannelSizeBound, ChannelSizeOptions},
    infrastructure::cli::Cli,
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

/// Owner-side channel size settings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChannelSizeConfig {
    /// Value the owner starts with, `None` lets the picker pick its default.
    #[serde(default)]
    pub initial: Option<u64>,
    #[serde(default)]
    pub options: ChannelSizeOptions,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub channel_size: ChannelSizeConfig,
}

impl Config {
    /// Load the configuration from the user's config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir())
    }

    /// Load user config files from `config_dir` on top of the embedded defaults.
    ///
    /// Missing files are fine. Keybindings and styles the user does not set
    /// fall back to the defaults one key at a time.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder();

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            found_config |= path.exists();
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(*key).or_insert(*action);
        }
        for (element, style) in default_config.styles.iter() {
            cfg.styles.entry(element.clone()).or_insert(*style);
        }

        Ok(cfg)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Apply command line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        let channel_size = &mut self.channel_size;
        if let Some(initial) = cli.channel_size {
            channel_size.initial = Some(initial);
        }
        if let Some(min) = &cli.min_channel_size {
            channel_size.options.min_channel_size = Some(ChannelSizeBound::from(min.as_str()));
        }
        if let Some(max) = &cli.max_channel_size {
            channel_size.options.max_channel_size = Some(ChannelSizeBound::from(max.as_str()));
        }
        if cli.disabled {
            channel_size.disabled = true;
        }
        self
    }
}
