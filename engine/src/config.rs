use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn load_yaml_config<TConfig>(file_path: &str) -> Result<TConfig, String>
where
    TConfig: DeserializeOwned + Validate + Default,
{
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(TConfig::default()),
        Err(e) => return Err(format!("Failed to read config file {}: {}", file_path, e)),
    };

    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_yaml_config<TConfig>(file_path: &str, config: &TConfig) -> Result<(), String>
where
    TConfig: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write config file {}: {}", file_path, e))
}
