pub(crate) use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use tictactoe_engine::tictactoe::BotType;

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub display: DisplayConfig,
    pub self_play: SelfPlayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        self.self_play.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub human_symbol: char,
    pub engine_symbol: char,
    pub show_evaluation: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            human_symbol: 'X',
            engine_symbol: 'O',
            show_evaluation: false,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        for symbol in [self.human_symbol, self.engine_symbol] {
            if symbol.is_whitespace() || symbol.is_control() || symbol == '.' {
                return Err(format!("symbol {:?} is not a visible mark", symbol));
            }
        }
        if self.human_symbol == self.engine_symbol {
            return Err("human_symbol and engine_symbol must differ".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SelfPlayConfig {
    pub opponent_bot: BotType,
    pub engine_moves_first: bool,
    pub seed: Option<u64>,
    pub games: u32,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            opponent_bot: BotType::Random,
            engine_moves_first: false,
            seed: None,
            games: 1,
        }
    }
}

impl Validate for SelfPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 {
            return Err("games must be greater than 0".to_string());
        }
        if self.games > 10_000 {
            return Err("games must not exceed 10000".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
        assert!(serialized.contains("opponent_bot: random"));
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let file_path = get_temp_file_path();
        let config = Config {
            display: DisplayConfig {
                show_evaluation: true,
                ..DisplayConfig::default()
            },
            self_play: SelfPlayConfig {
                opponent_bot: BotType::Minimax,
                seed: Some(99),
                ..SelfPlayConfig::default()
            },
        };

        let manager = get_config_manager(&file_path);
        manager.set_config(&config).unwrap();

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_gives_default_config() {
        let manager = get_config_manager(&get_temp_file_path());

        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_file_content_is_reported() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        let mut config = Config::default();
        config.display.engine_symbol = 'X';
        let content = YamlConfigSerializer::new().serialize(&config).unwrap();
        provider.set_config_content(&content).unwrap();

        let result = get_config_manager(&file_path).get_config();

        assert!(result.unwrap_err().contains("must differ"));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invisible_symbols_are_rejected() {
        let display = DisplayConfig {
            human_symbol: ' ',
            ..DisplayConfig::default()
        };
        assert!(display.validate().is_err());

        let display = DisplayConfig {
            engine_symbol: '.',
            ..DisplayConfig::default()
        };
        assert!(display.validate().is_err());
    }

    #[test]
    fn test_zero_games_is_rejected() {
        let self_play = SelfPlayConfig {
            games: 0,
            ..SelfPlayConfig::default()
        };

        assert!(self_play.validate().is_err());
    }
}
