use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid FIREBASE_CONFIG: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Firebase: Error (auth/network-request-failed). {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Firebase: Error (auth/{}).", auth_code_slug(.code))]
    Service { status: u16, code: String },

    #[error("Firebase: Error (auth/invalid-api-key).")]
    MissingApiKey,

    #[error("Firebase: Error (auth/timeout).")]
    Timeout,

    #[error("Firebase: Error (auth/internal-error). {0}")]
    MalformedResponse(String),
}

impl AuthError {
    /// Builds a service error from the REST envelope message, which looks
    /// like `INVALID_CUSTOM_TOKEN : some detail`.
    pub fn from_service_message(status: u16, message: &str) -> Self {
        let code = message
            .split(" : ")
            .next()
            .unwrap_or(message)
            .trim()
            .to_string();
        AuthError::Service { status, code }
    }
}

/// Maps identity toolkit REST codes to the slugs the JS SDK reports.
fn auth_code_slug(code: &str) -> String {
    let known = match code {
        "ADMIN_ONLY_OPERATION" => Some("admin-restricted-operation"),
        "OPERATION_NOT_ALLOWED" => Some("operation-not-allowed"),
        "INVALID_CUSTOM_TOKEN" => Some("invalid-custom-token"),
        "CREDENTIAL_MISMATCH" => Some("custom-token-mismatch"),
        "USER_DISABLED" => Some("user-disabled"),
        "USER_NOT_FOUND" => Some("user-not-found"),
        "INVALID_ID_TOKEN" => Some("invalid-user-token"),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => Some("too-many-requests"),
        "QUOTA_EXCEEDED" => Some("quota-exceeded"),
        _ => None,
    };

    if let Some(slug) = known {
        return slug.to_string();
    }
    if code.starts_with("API key not valid") {
        return "invalid-api-key".to_string();
    }

    code.trim()
        .to_lowercase()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
