use engine::config::{ConfigManager, Validate};
use engine::game::{FieldSize, GameSettings};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_remake_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<Config> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub field_width: u32,
    pub field_height: u32,
    pub logic_updates_per_second: f32,
    pub bad_fruit_min: u32,
    pub bad_fruit_max: u32,
}

impl Config {
    pub fn to_game_settings(&self) -> GameSettings {
        GameSettings {
            field_size: FieldSize::new(self.field_width as usize, self.field_height as usize),
            bad_fruit_min: self.bad_fruit_min,
            bad_fruit_max: self.bad_fruit_max,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.to_game_settings().validate()?;
        if !(1.0..=30.0).contains(&self.logic_updates_per_second) {
            return Err("logic_updates_per_second must be between 1 and 30".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: 25,
            field_height: 25,
            logic_updates_per_second: 9.0,
            bad_fruit_min: 1,
            bad_fruit_max: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_remake_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_round_trips_through_manager() {
        let config = Config {
            field_width: 30,
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<Config> = ConfigManager::from_yaml_file(&file_path);

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();
        std::fs::remove_file(&file_path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_config_file_returns_default() {
        let manager: ConfigManager<Config> =
            ConfigManager::from_yaml_file("this_file_does_not_exist.yaml");
        let loaded = manager.get_config().unwrap();
        assert_eq!(Config::default(), loaded);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            field_width: 5
            field_height: 25
            logic_updates_per_second: 9.0
            bad_fruit_min: 1
            bad_fruit_max: 8
        "#;

        let file_path = get_temp_file_path();
        std::fs::write(&file_path, invalid_config_content).unwrap();

        let manager: ConfigManager<Config> = ConfigManager::from_yaml_file(&file_path);
        let result = manager.get_config();
        std::fs::remove_file(&file_path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let frozen = Config {
            logic_updates_per_second: 0.0,
            ..Config::default()
        };
        assert!(frozen.validate().is_err());

        let inverted = Config {
            bad_fruit_min: 9,
            bad_fruit_max: 8,
            ..Config::default()
        };
        assert!(inverted.validate().is_err());
    }
}
