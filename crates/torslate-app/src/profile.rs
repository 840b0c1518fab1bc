use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use torslate_config::Config;

const MAIN_PROFILE: &str = "main";

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOrigin {
    Named(String),
    /// Requested profile was missing, main was used
    MainFallback { requested: String },
    Defaults,
}

/// Directory of `<name>.json` profile files
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// `<config_dir>/torslate/profiles`
    pub fn user() -> anyhow::Result<Self> {
        let root = dirs::config_dir().context("No config directory on this platform")?;
        Ok(Self::at(root.join("torslate").join("profiles")))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Profile names are plain file stems inside the profiles folder
    fn path(&self, name: &str) -> anyhow::Result<PathBuf> {
        anyhow::ensure!(
            !name.is_empty()
                && name != "."
                && name != ".."
                && !name.contains(['/', '\\', ':']),
            "Invalid profile name {:?}",
            name
        );
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Create the folder and a main profile from the built-in defaults if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let main_profile = self.path(MAIN_PROFILE)?;
        if !main_profile.exists() {
            self.write(MAIN_PROFILE, Config::default())?;
        }
        Ok(())
    }

    /// Load a profile by name, falling back to main, then to the defaults
    pub fn load(&self, name: &str) -> anyhow::Result<(Config, ProfileOrigin)> {
        let profile_file = self.path(name)?;
        if profile_file.exists() {
            return Ok((read_profile(&profile_file)?, ProfileOrigin::Named(name.to_string())));
        }

        let main_file = self.path(MAIN_PROFILE)?;
        if main_file.exists() {
            let origin = ProfileOrigin::MainFallback {
                requested: name.to_string(),
            };
            return Ok((read_profile(&main_file)?, origin));
        }

        Ok((Config::default(), ProfileOrigin::Defaults))
    }

    /// Add a new profile cloned from main (or the defaults if main is missing)
    pub fn add_from_main(&self, new_name: &str) -> anyhow::Result<PathBuf> {
        self.path(new_name)?;
        let (config, _) = self.load(MAIN_PROFILE)?;
        fs::create_dir_all(&self.dir)?;
        self.write(new_name, config)
    }

    fn write(&self, name: &str, value: Config) -> anyhow::Result<PathBuf> {
        let profile = Profile {
            name: name.to_string(),
            value,
        };
        let file = self.path(name)?;
        fs::write(&file, serde_json::to_string_pretty(&profile)?)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        Ok(file)
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}
