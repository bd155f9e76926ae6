use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = ".cookbook.toml";

/// Default config file location in the user's home directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(CONFIG_FILE_NAME))
}

/// Split comma separated values, dropping blanks.
pub fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
