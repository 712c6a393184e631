use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns the stored config, or the default one if nothing is stored.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Like [`Self::get_config`], but stores the default config when nothing
    /// was stored yet, so there is a file to edit afterwards.
    pub fn get_or_create_config(&self) -> Result<TConfig, ConfigError> {
        match self.load()? {
            Some(config) => Ok(config),
            None => {
                let config = TConfig::default();
                self.set_config(&config)?;
                Ok(config)
            }
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<TConfig>, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(Some(config.clone()));
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(None);
        };

        let config: TConfig = self.config_serializer.deserialize(&config_data)?;
        config.validate()?;

        *current = Some(config.clone());
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
    struct TestConfig {
        board_size: usize,
        name: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                board_size: 3,
                name: "default".to_string(),
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), ConfigError> {
            if self.board_size == 0 {
                return Err(ConfigError::Validation("board_size must be positive".to_string()));
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_common_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_returns_default_without_creating_it() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(&file_path);

        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_get_or_create_writes_default() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(&file_path);

        assert_eq!(manager.get_or_create_config().unwrap(), TestConfig::default());
        assert!(file_path.exists());

        let reloaded: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), TestConfig::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_set_then_get_round_trips_through_file() {
        let file_path = get_temp_file_path();
        let config = TestConfig {
            board_size: 5,
            name: "custom".to_string(),
        };

        let manager: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(&file_path);
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_read_and_write() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(&file_path);
        provider
            .set_config_content("board_size: 0\nname: broken\n")
            .unwrap();

        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));

        let invalid = TestConfig {
            board_size: 0,
            name: "broken".to_string(),
        };
        assert!(matches!(manager.set_config(&invalid), Err(ConfigError::Validation(_))));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_malformed_yaml_is_a_deserialize_error() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "board_size: [not a number").unwrap();

        let manager: ConfigManager<_, TestConfig> = ConfigManager::from_yaml_file(&file_path);
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
        let _ = std::fs::remove_file(file_path);
    }
}
