use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "shell_config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Where the command history is persisted.
    pub history_file: PathBuf,
    /// Print the welcome banner at startup.
    pub show_banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from("command_history.csv"),
            show_banner: true,
        }
    }
}

impl ShellConfig {
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => println!("Error parsing config file: {}. Using defaults.", e),
                },
                Err(e) => println!("Error reading config file: {}. Using defaults.", e),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = fs::File::create(CONFIG_FILE)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}
