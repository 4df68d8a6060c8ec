use super::{input::InputConfig, interpreter::InterpreterConfig, traits::ConfigSection};
use crate::error::DeoxyriboseError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Environment overrides look like `DEOXYRIBOSE__INTERPRETER__STEP_LIMIT=500`.
pub const ENV_PREFIX: &str = "DEOXYRIBOSE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub interpreter: InterpreterConfig,
    pub input: InputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), DeoxyriboseError> {
        self.interpreter.validate().map_err(section_error::<InterpreterConfig>)?;
        self.input.validate().map_err(section_error::<InputConfig>)?;
        Ok(())
    }
}

fn section_error<S: ConfigSection>(error: DeoxyriboseError) -> DeoxyriboseError {
    DeoxyriboseError::Configuration(format!("[{}] {}", S::section_name(), error))
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, layered under environment overrides.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DeoxyriboseError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DeoxyriboseError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        self.load(Config::builder().add_source(File::from(path).format(FileFormat::Toml)))
    }

    /// Load TOML text, layered under environment overrides.
    pub fn load_from_str(&self, contents: &str) -> Result<(), DeoxyriboseError> {
        self.load(Config::builder().add_source(File::from_str(contents, FileFormat::Toml)))
    }

    /// Defaults plus environment overrides only.
    pub fn load_from_env(&self) -> Result<(), DeoxyriboseError> {
        self.load(Config::builder())
    }

    fn load(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<(), DeoxyriboseError> {
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!("Loaded configuration: {:?}", config);
        *self.write() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DeoxyriboseError> {
        let config = self.read();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| DeoxyriboseError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| DeoxyriboseError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.read().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), DeoxyriboseError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.write() = candidate;
        Ok(())
    }

    // Writes replace the whole value, so a poisoned lock still holds a valid config.
    fn read(&self) -> RwLockReadGuard<'_, AppConfig> {
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppConfig> {
        self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let manager = ConfigManager::new();
        let config = manager.get();
        assert!(config.validate().is_ok());
        assert_eq!(config.interpreter.step_limit, None);
        assert!(config.input.reread_stdin);
    }

    #[test]
    fn test_load_from_str_overrides_sections() {
        let manager = ConfigManager::new();
        manager
            .load_from_str("[interpreter]\nverbose = true\nstep_limit = 250\n")
            .unwrap();
        let config = manager.get();
        assert!(config.interpreter.verbose);
        assert_eq!(config.interpreter.step_limit, Some(250));
        assert_eq!(config.input, InputConfig::default());
    }

    #[test]
    fn test_zero_step_limit_is_rejected() {
        let manager = ConfigManager::new();
        let err = manager
            .load_from_str("[interpreter]\nstep_limit = 0\n")
            .unwrap_err();
        assert!(matches!(err, DeoxyriboseError::Configuration(_)));
        assert_eq!(manager.get(), AppConfig::default());
    }

    #[test]
    fn test_update_validates_before_applying() {
        let manager = ConfigManager::new();
        assert!(manager.update(|c| c.interpreter.step_limit = Some(0)).is_err());
        assert_eq!(manager.get().interpreter.step_limit, None);

        manager.update(|c| c.interpreter.step_limit = Some(10)).unwrap();
        assert_eq!(manager.get().interpreter.step_limit, Some(10));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deoxyribose.toml");

        let manager = ConfigManager::new();
        manager
            .update(|c| {
                c.interpreter.verbose = true;
                c.input.echo_chromosome = true;
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let reloaded = ConfigManager::new();
        reloaded.load_from_file(&path).unwrap();
        assert_eq!(reloaded.get(), manager.get());
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let manager = ConfigManager::new();
        let err = manager.load_from_file("/nonexistent/deoxyribose.toml").unwrap_err();
        assert!(matches!(err, DeoxyriboseError::Configuration(_)));
    }
}
