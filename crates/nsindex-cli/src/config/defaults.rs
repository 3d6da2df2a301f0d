use std::path::PathBuf;

pub fn default_input() -> PathBuf {
    PathBuf::from("build").join("info.json")
}

pub fn default_output() -> PathBuf {
    PathBuf::from("build").join("index.js")
}

pub fn default_global() -> String {
    "window".to_string()
}
