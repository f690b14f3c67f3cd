use serde::Deserialize;

use crate::error::ConfigError;

pub const BRAND_NAME: &str = "Tommy Box";
pub const LOGO_SRC: &str = "https://placehold.co/36x36/0000FF/FFFFFF?text=TB";
pub const CONTACT_LINK: &str = "https://wa.me/56912345678";

pub const SCHEDULING_HOST: &str = "cal.com";
pub const SCHEDULING_ACCOUNT: &str = "tommybox";

#[cfg(debug_assertions)]
pub fn get_identity_toolkit_url() -> &'static str {
    option_env!("IDENTITY_TOOLKIT_URL").unwrap_or("https://identitytoolkit.googleapis.com/v1")
}

#[cfg(not(debug_assertions))]
pub fn get_identity_toolkit_url() -> &'static str {
    "https://identitytoolkit.googleapis.com/v1"
}

/// Web app configuration for the hosted identity service, as found in the
/// provider console. Only the fields the client actually needs are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub firebase: FirebaseConfig,
    pub initial_auth_token: Option<String>,
}

impl AppConfig {
    /// Reads the values baked in at build time through `FIREBASE_CONFIG`
    /// and `INITIAL_AUTH_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(option_env!("FIREBASE_CONFIG"), option_env!("INITIAL_AUTH_TOKEN"))
    }

    pub fn parse(raw_config: Option<&str>, token: Option<&str>) -> Result<Self, ConfigError> {
        let firebase = match raw_config.map(str::trim) {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw)?,
            _ => FirebaseConfig::default(),
        };

        let initial_auth_token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(AppConfig {
            firebase,
            initial_auth_token,
        })
    }
}
