use serde::{Deserialize, Serialize};
use web_sys::window;

use super::identity::Identity;

/// What the identity service hands back on a successful sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn identity(&self) -> Identity {
        Identity {
            uid: self.uid.clone(),
            email: self.email.clone(),
        }
    }
}

/// Same key layout the hosted SDK uses for its persisted user.
pub fn storage_key(api_key: &str) -> String {
    format!("firebase:authUser:{}:[DEFAULT]", api_key)
}

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn load(key: &str) -> Option<Session> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding unreadable stored session: {}", e);
            clear(key);
            None
        }
    }
}

pub fn save(key: &str, session: &Session) {
    let Some(storage) = local_storage() else {
        log::warn!("Local storage unavailable, session will not survive a reload");
        return;
    };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(key, &raw).is_err() {
                log::warn!("Failed to persist session");
            }
        }
        Err(e) => log::warn!("Failed to serialize session: {}", e),
    }
}

pub fn clear(key: &str) {
    if let Some(storage) = local_storage() {
        removal_outcome(key, storage.remove_item(key));
    }
}

/// A leftover entry would sign the user back in on the next reload.
fn removal_outcome<E: std::fmt::Debug>(key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to remove stored session {}: {:?}", key, e);
            false
        }
    }
}
