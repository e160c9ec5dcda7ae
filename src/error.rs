use std::path::PathBuf;

use tdsp_color::ColorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid color {input:?}: {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ColorError,
    },

    #[error("Alias {alias:?} resolves to invalid color {value:?}: {source}")]
    InvalidAlias {
        alias: String,
        value: String,
        #[source]
        source: ColorError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_message() {
        let err = CommandError::InvalidColor {
            input: "blurple".to_string(),
            source: ColorError::UnknownColorName("blurple".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid color \"blurple\": unknown color name: \"blurple\""
        );
    }
}
