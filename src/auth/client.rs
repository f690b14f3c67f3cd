use std::future::Future;
use std::rc::Rc;

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use yew::Callback;

use super::identity::{Identity, IdentityStore, Subscription};
use super::identity_toolkit;
use super::session::{self, Session};
use crate::config::AppConfig;
use crate::error::AuthError;

pub const SIGN_IN_TIMEOUT_MS: u32 = 15_000;

/// Which sign-in flow a request goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    CustomToken,
    Anonymous,
}

impl SignInMethod {
    /// A pre-issued token always wins; otherwise fall back to an anonymous account.
    pub fn select(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => SignInMethod::CustomToken,
            _ => SignInMethod::Anonymous,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            SignInMethod::CustomToken => "¡Sesión iniciada correctamente!",
            SignInMethod::Anonymous => "Sesión iniciada de forma anónima.",
        }
    }
}

struct Inner {
    config: AppConfig,
    storage_key: String,
    store: Rc<IdentityStore>,
}

/// Handle to the hosted identity service. Cheap to clone; every clone
/// shares the same identity state.
#[derive(Clone)]
pub struct AuthClient {
    inner: Rc<Inner>,
}

impl PartialEq for AuthClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AuthClient {
    /// Builds the client and restores a previously persisted session, if any.
    pub fn new(config: AppConfig) -> Self {
        let storage_key = session::storage_key(&config.firebase.api_key);
        let restored = session::load(&storage_key).map(|s| s.identity());
        Self::with_identity(config, restored)
    }

    fn with_identity(config: AppConfig, identity: Option<Identity>) -> Self {
        let storage_key = session::storage_key(&config.firebase.api_key);
        AuthClient {
            inner: Rc::new(Inner {
                config,
                storage_key,
                store: IdentityStore::new(identity),
            }),
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.inner.store.current()
    }

    pub fn sign_in_method(&self) -> SignInMethod {
        SignInMethod::select(self.inner.config.initial_auth_token.as_deref())
    }

    pub fn on_identity_changed(&self, listener: Callback<Option<Identity>>) -> Subscription {
        self.inner.store.subscribe(listener)
    }

    /// Signs in with the configured token, or anonymously when there is none.
    pub async fn sign_in(&self) -> Result<SignInMethod, AuthError> {
        let method = self.sign_in_method();
        let api_key = self.inner.config.firebase.api_key.as_str();

        let session = match method {
            SignInMethod::CustomToken => {
                let token = self.inner.config.initial_auth_token.as_deref().unwrap_or_default();
                with_timeout(identity_toolkit::sign_in_with_custom_token(api_key, token)).await?
            }
            SignInMethod::Anonymous => {
                with_timeout(identity_toolkit::sign_in_anonymously(api_key)).await?
            }
        };

        info!("Signed in as {} via {:?}", session.uid, method);
        self.establish(session);
        Ok(method)
    }

    pub fn sign_out(&self) {
        info!("Signing out");
        session::clear(&self.inner.storage_key);
        self.inner.store.replace(None);
    }

    fn establish(&self, session: Session) {
        session::save(&self.inner.storage_key, &session);
        self.inner.store.replace(Some(session.identity()));
    }
}

async fn with_timeout<T>(
    request: impl Future<Output = Result<T, AuthError>>,
) -> Result<T, AuthError> {
    let request = Box::pin(request);
    let timeout = TimeoutFuture::new(SIGN_IN_TIMEOUT_MS);
    match future::select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            warn!("Sign-in did not complete within {} ms", SIGN_IN_TIMEOUT_MS);
            Err(AuthError::Timeout)
        }
    }
}
