use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::config;
use crate::error::AuthError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest {
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomTokenRequest<'a> {
    token: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    id_token: String,
    refresh_token: String,
    #[serde(default)]
    local_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AccountInfo {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize, Debug)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn endpoint_url(method: &str, api_key: &str) -> String {
    format!(
        "{}/accounts:{}?key={}",
        config::get_identity_toolkit_url(),
        method,
        urlencoding::encode(api_key)
    )
}

async fn call<B, R>(method: &str, api_key: &str, body: &B) -> Result<R, AuthError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    if api_key.is_empty() {
        return Err(AuthError::MissingApiKey);
    }

    let response = Request::post(&endpoint_url(method, api_key))
        .json(body)?
        .send()
        .await?;

    if response.ok() {
        return response
            .json::<R>()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()));
    }

    let status = response.status();
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => Err(AuthError::from_service_message(
            envelope.error.code,
            &envelope.error.message,
        )),
        Err(_) => Err(AuthError::Service {
            status,
            code: format!("HTTP_{}", status),
        }),
    }
}

pub async fn sign_in_anonymously(api_key: &str) -> Result<Session, AuthError> {
    let tokens: TokenResponse = call(
        "signUp",
        api_key,
        &SignUpRequest {
            return_secure_token: true,
        },
    )
    .await?;

    let uid = tokens
        .local_id
        .clone()
        .ok_or_else(|| AuthError::MalformedResponse("missing localId".to_string()))?;

    Ok(Session {
        uid,
        email: None,
        id_token: tokens.id_token,
        refresh_token: tokens.refresh_token,
    })
}

pub async fn sign_in_with_custom_token(api_key: &str, token: &str) -> Result<Session, AuthError> {
    let tokens: TokenResponse = call(
        "signInWithCustomToken",
        api_key,
        &CustomTokenRequest {
            token,
            return_secure_token: true,
        },
    )
    .await?;

    // The custom token exchange does not say who we are.
    let lookup: LookupResponse = call(
        "lookup",
        api_key,
        &LookupRequest {
            id_token: &tokens.id_token,
        },
    )
    .await?;

    session_from_lookup(tokens, lookup)
}

fn session_from_lookup(tokens: TokenResponse, lookup: LookupResponse) -> Result<Session, AuthError> {
    let account = lookup
        .users
        .into_iter()
        .next()
        .ok_or_else(|| AuthError::MalformedResponse("lookup returned no users".to_string()))?;

    Ok(Session {
        uid: account.local_id,
        email: account.email,
        id_token: tokens.id_token,
        refresh_token: tokens.refresh_token,
    })
}
