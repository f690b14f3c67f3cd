use yew::prelude::*;
use log::{error, info, Level};

mod config;
mod error;
mod auth {
    pub mod client;
    pub mod identity;
    pub mod identity_toolkit;
    pub mod session;
}
mod components {
    pub mod ui;
    pub mod auth_modal;
    pub mod booking_modal;
}
mod pages {
    pub mod landing;
    pub mod plans;
}

use auth::client::AuthClient;
use config::AppConfig;
use pages::landing::Landing;


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub auth: AuthClient,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AuthClient> context={props.auth.clone()}>
            <Landing />
        </ContextProvider<AuthClient>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        error!("{}; continuing without identity service configuration", e);
        AppConfig::default()
    });
    if config.firebase.api_key.is_empty() {
        info!("No identity service API key configured, sign-in will fail until FIREBASE_CONFIG is set");
    }

    if let Some(project) = &config.firebase.project_id {
        info!("Using identity project {}", project);
    }

    let auth = AuthClient::new(config);
    if let Some(identity) = auth.current_identity() {
        info!("Restored session for {}", identity.uid);
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { auth }).render();
}
