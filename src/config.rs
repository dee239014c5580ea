use serde::{Deserialize, Serialize};
use crate::models::locale::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub locale: LocaleConfig,
    pub navigation: NavConfig,
    pub form: FormConfig,
    pub assets: AssetConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            locale: LocaleConfig::default(),
            navigation: NavConfig::default(),
            form: FormConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub default_locale: String,
    /// Clave de localStorage (compatible con el sitio anterior)
    pub storage_key: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            storage_key: "i18nextLng".to_string(),
        }
    }
}

impl LocaleConfig {
    /// Idioma por defecto; también es el idioma de fallback de las traducciones
    pub fn default_locale(&self) -> Locale {
        Locale::from_code(&self.default_locale).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    pub scroll_threshold_px: f64,
    pub scroll_throttle_ms: u32,
    pub anchor_margin_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            scroll_throttle_ms: 10,
            anchor_margin_px: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub form_name: String,
    pub action: String,
    pub honeypot_field: String,
    pub submit_timeout_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_name: "quote".to_string(),
            action: "/success.html".to_string(),
            honeypot_field: "bot-field".to_string(),
            submit_timeout_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    pub logo_horizontal: String,
    pub footer_logo: String,
    pub catalog_pdf: String,
    pub globe_icon: String,
    pub woodgrain: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            logo_horizontal: "/assets/logo_horizontal.png".to_string(),
            footer_logo: "/assets/f7f2f3ce-37be-476a-92ea-2bcd40b00008.png".to_string(),
            catalog_pdf: "/assets/Amazin-Timber-2025-Catalog.pdf".to_string(),
            globe_icon: "/assets/globe-language-svgrepo-com.svg".to_string(),
            woodgrain: "/assets/woodgrain.jpg".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            locale: LocaleConfig {
                default_locale: option_env!("DEFAULT_LOCALE")
                    .unwrap_or("en").to_string(),
                storage_key: option_env!("LOCALE_STORAGE_KEY")
                    .unwrap_or("i18nextLng").to_string(),
            },
            navigation: NavConfig {
                scroll_threshold_px: option_env!("SCROLL_THRESHOLD_PX")
                    .unwrap_or("50").parse().unwrap_or(50.0),
                scroll_throttle_ms: option_env!("SCROLL_THROTTLE_MS")
                    .unwrap_or("10").parse().unwrap_or(10),
                anchor_margin_px: option_env!("ANCHOR_MARGIN_PX")
                    .unwrap_or("20").parse().unwrap_or(20.0),
            },
            form: FormConfig {
                action: option_env!("FORM_ACTION")
                    .unwrap_or("/success.html").to_string(),
                submit_timeout_ms: option_env!("SUBMIT_TIMEOUT_MS")
                    .unwrap_or("5000").parse().unwrap_or(5000),
                ..defaults.form
            },
            assets: AssetConfig {
                catalog_pdf: option_env!("CATALOG_PDF_URL")
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| defaults.assets.catalog_pdf.clone()),
                ..defaults.assets.clone()
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        match (self.enable_logging, self.is_production()) {
            (false, _) => log::Level::Warn,
            (true, true) => log::Level::Info,
            (true, false) => log::Level::Debug,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_contract() {
        let config = AppConfig::default();
        assert_eq!(config.locale.storage_key, "i18nextLng");
        assert_eq!(config.locale.default_locale(), Locale::En);
        assert_eq!(config.form.submit_timeout_ms, 5000);
        assert_eq!(config.form.honeypot_field, "bot-field");
        assert_eq!(config.navigation.scroll_threshold_px, 50.0);
        assert_eq!(config.navigation.scroll_throttle_ms, 10);
    }

    #[test]
    fn unknown_default_locale_falls_back_to_english() {
        let locale = LocaleConfig {
            default_locale: "de".to_string(),
            ..LocaleConfig::default()
        };
        assert_eq!(locale.default_locale(), Locale::En);
    }

    #[test]
    fn logging_disabled_keeps_warnings() {
        let config = AppConfig { enable_logging: false, ..AppConfig::default() };
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
