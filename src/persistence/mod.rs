use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::AbhyasError;

const APP_NAME: &str = "abhyas";

/// File holding the serialized deck. The `v1` marker is part of the
/// on-disk contract; bump it if the card schema ever changes.
pub const DECK_FILE: &str = "cards-v1.json";

pub fn app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn data_file_path(filename: &str) -> PathBuf {
    app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> Result<(), AbhyasError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Explicit decode: absence and parse failures both come back as errors
/// so the caller decides what the fallback is.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, AbhyasError> {
    if !path.exists() {
        return Err(AbhyasError::FailedToLoadFile(path.display().to_string()));
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_json_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let result: Result<Vec<String>, _> = load_json(&path);
        assert!(matches!(result, Err(AbhyasError::FailedToLoadFile(_))));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let values = vec!["a".to_string(), "b".to_string()];
        save_json(&values, &path).unwrap();

        let loaded: Vec<String> = load_json(&path).unwrap();
        assert_eq!(loaded, values);
    }

    #[test]
    fn load_json_reports_malformed_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "{not json").unwrap();

        let result: Result<Vec<String>, _> = load_json(&path);
        assert!(matches!(result, Err(AbhyasError::Json(_))));
    }
}
