//! Загрузка `settings.toml`, лежащего рядом с `index.html`.

use contracts::shared::config::{load_settings, OrderSettings};
use gloo_net::http::Request;

const SETTINGS_URL: &str = "settings.toml";

/// Настройки приложения и ошибка, если файл был, но не подошёл.
///
/// Отсутствующий файл ошибкой не считается: берутся встроенные значения.
pub async fn fetch_settings() -> (OrderSettings, Option<String>) {
    let contents = match Request::get(SETTINGS_URL).send().await {
        Ok(response) if response.ok() => match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("settings.toml: failed to read body: {}", e);
                None
            }
        },
        Ok(response) => {
            log::info!("settings.toml: HTTP {}, using defaults", response.status());
            None
        }
        Err(e) => {
            log::warn!("settings.toml: request failed: {}", e);
            None
        }
    };

    let (settings, error) = load_settings(contents.as_deref());
    if let Some(ref e) = error {
        log::error!("settings.toml ignored: {}", e);
    }
    log::debug!("settings loaded: {:?}", settings);

    (settings, error.map(|e| e.to_string()))
}
