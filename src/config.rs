use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::PwgenResult;
use crate::password::GenerationConfig;

/// Parses a JSON config and checks the length range
pub fn from_json(json: &str) -> PwgenResult<GenerationConfig> {
    let config: GenerationConfig = serde_json::from_str(json)?;
    config.validate()?;

    Ok(config)
}

/// Loads the initial config, falling back to the defaults when the file
/// does not exist
pub fn load<P: AsRef<Path>>(path: P) -> PwgenResult<GenerationConfig> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(json) => {
            debug!(path = %path.display(), "loading config");
            from_json(&json)
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(GenerationConfig::default())
        }
        Err(error) => Err(error.into()),
    }
}
