use anyhow::{Context, Result, bail};
use image_histogram::DEFAULT_LEVELS;
use log::debug;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

const APP_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(default)]
    pub histogram: Histogram,

    #[serde(default)]
    pub viewer: Viewer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Histogram {
    #[derivative(Default(value = "DEFAULT_LEVELS"))]
    pub num_levels: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Viewer {
    // columns of the text histogram
    #[derivative(Default(value = "60"))]
    pub bar_width: usize,

    #[derivative(Default(value = "16"))]
    pub rows: usize,
}

impl Config {
    /// Loads `<config dir>/histoview/histoview.toml`, writing the defaults on first run.
    pub fn init() -> Result<Self> {
        let app_dirs = AppDirs::new(Some(APP_NAME), true)
            .with_context(|| "no config directory on this platform")?;
        fs::create_dir_all(&app_dirs.config_dir)?;

        let config = Self::load_from(app_dirs.config_dir.join(format!("{APP_NAME}.toml")))
            .with_context(|| "load config file failed")?;
        debug!("{:?}", config);

        Ok(config)
    }

    /// Reads `path`. A missing or unparsable file is backed up to `<path>.bak`
    /// and replaced with the defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = path.into();

        if let Ok(text) = fs::read_to_string(&config_path) {
            match toml::from_str::<Config>(&text) {
                Ok(mut c) => {
                    c.config_path = config_path;
                    return Ok(c);
                }
                Err(e) => log::warn!("invalid config {}: {e}", config_path.display()),
            }
        }

        let mut bak_file = config_path.as_os_str().to_os_string();
        bak_file.push(".bak");
        _ = fs::copy(&config_path, bak_file);

        let config = Config {
            config_path,
            is_first_run: true,
            ..Default::default()
        };
        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config to toml format failed. {e:?}")),
        }
    }
}
