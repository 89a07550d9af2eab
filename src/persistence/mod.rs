use std::{
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

const APP_NAME: &str = "kapian";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return T::default();
    }

    let load = || -> Result<T, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(&file_path)?;
        Ok(serde_json::from_str(&json)?)
    };

    match load() {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Serialize, Deserialize, PartialEq, Debug)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn missing_file_loads_as_default() {
        let loaded = load_json_or_default::<Sample>("does_not_exist_kapian_test.json");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let filename = "kapian_persistence_test.json";
        let data = Sample { value: 7 };

        save_json(&data, filename).unwrap();
        let loaded = load_json_or_default::<Sample>(filename);
        let _ = fs::remove_file(get_data_file_path(filename));

        assert_eq!(loaded, data);
    }
}
