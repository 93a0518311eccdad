use common::{DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
use log::Level;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Production API that serves `/tinh` and `/xa/{mahc}`.
pub const DEFAULT_API_URL: &str = "https://web-sn-hcvn-production.up.railway.app";

const API_URL_KEY: &str = "hcvn_api_url";
const LOG_LEVEL_KEY: &str = "hcvn_log_level";
const ROWS_PER_PAGE_KEY: &str = "hcvn_rows_per_page";

/// A setting that can be overridden through localStorage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    ApiUrl,
    LogLevel,
    RowsPerPage,
}

impl SettingKey {
    pub fn storage_key(self) -> &'static str {
        match self {
            SettingKey::ApiUrl => API_URL_KEY,
            SettingKey::LogLevel => LOG_LEVEL_KEY,
            SettingKey::RowsPerPage => ROWS_PER_PAGE_KEY,
        }
    }
}

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the administrative-division API, without trailing slash
    pub api_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Initial page size of the commune table
    pub rows_per_page: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: Level::Info,
            debug_mode: false,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_url)) = storage.get_item(API_URL_KEY) {
                settings.api_url = normalize_api_url(&api_url);
            }

            if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = log_level.parse::<Level>().unwrap_or(settings.log_level);
            }

            if let Ok(Some(rows)) = storage.get_item(ROWS_PER_PAGE_KEY) {
                if let Ok(rows) = rows.parse::<usize>() {
                    if ROWS_PER_PAGE_OPTIONS.contains(&rows) {
                        settings.rows_per_page = rows;
                    }
                }
            }
        }

        settings
    }

    /// Storage key and value for each of `keys`.
    pub fn storage_entries(&self, keys: &[SettingKey]) -> Vec<(&'static str, String)> {
        keys.iter()
            .map(|&key| {
                let value = match key {
                    SettingKey::ApiUrl => self.api_url.clone(),
                    SettingKey::LogLevel => self.log_level.as_str().to_lowercase(),
                    SettingKey::RowsPerPage => self.rows_per_page.to_string(),
                };
                (key.storage_key(), value)
            })
            .collect()
    }

    /// Save the given settings to localStorage.
    ///
    /// Only `keys` are written: values derived at startup (debug log level on
    /// localhost, the default API URL) must not become sticky overrides.
    pub fn save_to_storage(&self, keys: &[SettingKey]) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                for (key, value) in self.storage_entries(keys) {
                    storage.set_item(key, &value)?;
                }
            }
        }
        Ok(())
    }

    /// Full URL for an endpoint path such as `/tinh`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }
}

fn normalize_api_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings and persist the ones named in `keys`
pub fn update_settings<F>(keys: &[SettingKey], f: F) -> Result<(), JsValue>
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
        settings.save_to_storage(keys)
    })
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
