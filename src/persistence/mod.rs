use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::WorksheetError;

const APP_NAME: &str = "framework-worksheet";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            tracing::warn!(path = %app_dir.display(), error = %e, "Could not create data directory");
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json_at<T: Serialize>(data: &T, file_path: &Path) -> Result<(), WorksheetError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    tracing::debug!(path = %file_path.display(), "Data saved");
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, WorksheetError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    tracing::debug!(path = %file_path.display(), "Data loaded");
    Ok(data)
}

pub fn load_json_at_or_default<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> T {
    match load_json::<T>(file_path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(path = %file_path.display(), error = %e, "Failed to load, using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_round_trip_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");

        let missing: Sample = load_json_at_or_default(&path);
        assert_eq!(missing, Sample::default());

        let sample = Sample { name: "x".to_string(), count: 3 };
        save_json_at(&sample, &path).unwrap();
        assert_eq!(load_json::<Sample>(&path).unwrap(), sample);

        fs::write(&path, "{ broken").unwrap();
        let broken: Sample = load_json_at_or_default(&path);
        assert_eq!(broken, Sample::default());
    }
}
