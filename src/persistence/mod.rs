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
use tracing::{
    debug,
    warn,
};

use crate::core::TasteMapError;

const APP_NAME: &str = "tastemap";

/// Per-user data directory, or the working directory when the platform has none.
pub fn get_app_data_dir() -> PathBuf {
    let Some(app_dir) = dirs::data_local_dir().map(|dir| dir.join(APP_NAME)) else {
        return PathBuf::from(".");
    };
    if let Err(e) = fs::create_dir_all(&app_dir) {
        warn!("Cannot create {}: {e}", app_dir.display());
    }
    app_dir
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TasteMapError> {
    write_json_file(data, &get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match read_json_file::<T>(&get_data_file_path(filename)) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {filename}: {e}. Using defaults.");
            T::default()
        }
    }
}

pub fn write_json_file<T: Serialize>(data: &T, path: &Path) -> Result<(), TasteMapError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    debug!("Data saved to: {}", path.display());
    Ok(())
}

/// Missing files are not an error; they yield `T::default()`.
pub fn read_json_file<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, TasteMapError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    debug!("Data loaded from: {}", path.display());
    Ok(data)
}
