use std::{collections::HashMap, fs};

#[derive(Debug)]
pub struct Settings {
    pub engine_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine_url: "http://127.0.0.1:7317".into(),
        }
    }
}

/// Defaults, then `porter.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("porter.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("ENGINE_URL") {
        settings.engine_url = v;
    }
    if let Ok(v) = std::env::var("APP__ENGINE_URL") {
        settings.engine_url = v;
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("engine_url") {
            settings.engine_url = v.clone();
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
