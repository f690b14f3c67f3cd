use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::auth::client::{AuthClient, SignInMethod};
use crate::components::ui::Button;
use crate::error::AuthError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInState {
    pub message: String,
    pub loading: bool,
}

pub enum SignInAction {
    Started,
    Succeeded(SignInMethod),
    Failed(String),
    /// Back to a blank dialog, on dismissal and whenever it is reopened.
    Reset,
}

impl Reducible for SignInState {
    type Action = SignInAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SignInAction::Started => SignInState {
                message: String::new(),
                loading: true,
            },
            SignInAction::Succeeded(method) => SignInState {
                message: method.success_message().to_string(),
                loading: false,
            },
            SignInAction::Failed(message) => SignInState {
                message,
                loading: false,
            },
            SignInAction::Reset => SignInState::default(),
        };
        Rc::new(next)
    }
}

/// Identifies one sign-in attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt(u64);

/// Generation counter: only the latest attempt may touch the dialog, and
/// dismissing the dialog retires whatever is in flight.
#[derive(Clone, Default)]
pub struct AttemptGuard {
    generation: Rc<Cell<u64>>,
}

impl AttemptGuard {
    pub fn begin(&self) -> Attempt {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        Attempt(next)
    }

    pub fn invalidate(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    pub fn is_current(&self, attempt: Attempt) -> bool {
        self.generation.get() == attempt.0
    }
}

/// Applies a finished sign-in to the dialog. Returns false when the result
/// belonged to a superseded attempt and was dropped.
pub fn settle_attempt(
    guard: &AttemptGuard,
    attempt: Attempt,
    result: Result<SignInMethod, AuthError>,
    dispatch: impl Fn(SignInAction),
    on_close: impl Fn(),
) -> bool {
    if !guard.is_current(attempt) {
        warn!("Ignoring result of a superseded sign-in attempt");
        return false;
    }

    match result {
        Ok(method) => {
            dispatch(SignInAction::Succeeded(method));
            on_close();
        }
        Err(e) => {
            if let AuthError::Service { status, code } = &e {
                warn!("Identity service rejected sign-in: {} {}", status, code);
            }
            dispatch(SignInAction::Failed(format!("Error: {}", e)));
        }
    }
    true
}

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let auth = use_context::<AuthClient>();
    let state = use_reducer(SignInState::default);
    let guard = use_memo(|_| AttemptGuard::default(), ());

    let handle_auth = {
        let state = state.clone();
        let guard = guard.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(auth) = auth.clone() else {
                state.dispatch(SignInAction::Failed("Error: servicio de autenticación no disponible".to_string()));
                return;
            };

            let attempt = guard.begin();
            state.dispatch(SignInAction::Started);

            let state = state.clone();
            let guard = guard.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let result = auth.sign_in().await;
                if let Err(e) = &result {
                    gloo_console::error!("Error de autenticación de Firebase:", e.to_string());
                }
                settle_attempt(
                    &guard,
                    attempt,
                    result,
                    |action| state.dispatch(action),
                    || on_close.emit(()),
                );
            });
        })
    };

    let dismiss = {
        let state = state.clone();
        let guard = guard.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            guard.invalidate();
            state.dispatch(SignInAction::Reset);
            on_close.emit(());
        })
    };

    // A reopened dialog must not show the outcome of an earlier attempt.
    {
        let state = state.clone();
        let guard = guard.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    guard.invalidate();
                    state.dispatch(SignInAction::Reset);
                }
                || ()
            },
            props.open,
        );
    }

    {
        let dismiss = dismiss.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                dismiss.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 z-50 grid place-items-center bg-black/50 p-4" role="dialog" aria-modal="true">
            <div class="w-full max-w-md rounded-2xl bg-white p-6 shadow-xl">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-xl font-semibold">{"Inicia sesión"}</h3>
                    <button class="text-sm opacity-70 hover:opacity-100" onclick={dismiss.reform(|_: MouseEvent| ())}>
                        {"Cerrar"}
                    </button>
                </div>
                if !state.message.is_empty() {
                    <p class="text-sm mb-4">{ state.message.clone() }</p>
                }
                <p class="text-sm mb-4">
                    {"Puedes iniciar sesión de forma anónima para explorar la aplicación."}
                </p>
                <Button onclick={handle_auth} disabled={state.loading}>
                    { if state.loading { "Iniciando sesión..." } else { "Iniciar sesión / Continuar" } }
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn reduce(state: SignInState, action: SignInAction) -> SignInState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_start_clears_message_and_sets_loading() {
        let state = SignInState {
            message: "Error: previo".to_string(),
            loading: false,
        };
        let state = reduce(state, SignInAction::Started);
        assert!(state.loading);
        assert!(state.message.is_empty());
    }

    #[test]
    fn test_failure_keeps_text_and_stops_loading() {
        let state = reduce(SignInState::default(), SignInAction::Started);
        let state = reduce(state, SignInAction::Failed("Error: boom".to_string()));
        assert!(!state.loading);
        assert_eq!(state.message, "Error: boom");
    }

    #[test]
    fn test_dismiss_resets() {
        let state = reduce(SignInState::default(), SignInAction::Started);
        assert_eq!(reduce(state, SignInAction::Reset), SignInState::default());
    }

    #[test]
    fn test_reopen_after_success_shows_blank_dialog() {
        let state = reduce(SignInState::default(), SignInAction::Started);
        let state = reduce(state, SignInAction::Succeeded(SignInMethod::CustomToken));
        assert_eq!(state.message, "¡Sesión iniciada correctamente!");

        let state = reduce(state, SignInAction::Reset);
        assert!(state.message.is_empty());
        assert!(!state.loading);
    }

    fn render(open: bool) -> String {
        let props = AuthModalProps {
            open,
            on_close: Callback::from(|_| ()),
        };
        futures::executor::block_on(
            yew::LocalServerRenderer::<AuthModal>::with_props(props)
                .hydratable(false)
                .render(),
        )
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        assert_eq!(render(false), "");
    }

    #[test]
    fn test_open_modal_renders_dialog() {
        let html = render(true);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Cerrar"));
        assert!(html.contains("Iniciar sesión / Continuar"));
    }

    #[test]
    fn test_guard_tracks_latest_attempt() {
        let guard = AttemptGuard::default();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));

        guard.invalidate();
        assert!(!guard.is_current(second));
    }

    struct Probe {
        state: RefCell<SignInState>,
        closes: Cell<u32>,
    }

    impl Probe {
        fn new() -> Self {
            Probe {
                state: RefCell::new(reduce(SignInState::default(), SignInAction::Started)),
                closes: Cell::new(0),
            }
        }

        fn settle(&self, guard: &AttemptGuard, attempt: Attempt, result: Result<SignInMethod, AuthError>) -> bool {
            settle_attempt(
                guard,
                attempt,
                result,
                |action| {
                    let current = self.state.borrow().clone();
                    *self.state.borrow_mut() = reduce(current, action);
                },
                || self.closes.set(self.closes.get() + 1),
            )
        }
    }

    #[test]
    fn test_success_sets_message_and_closes_once() {
        let guard = AttemptGuard::default();
        let probe = Probe::new();
        let attempt = guard.begin();

        assert!(probe.settle(&guard, attempt, Ok(SignInMethod::Anonymous)));
        assert_eq!(probe.closes.get(), 1);
        assert_eq!(probe.state.borrow().message, "Sesión iniciada de forma anónima.");
        assert!(!probe.state.borrow().loading);
    }

    #[test]
    fn test_failure_keeps_dialog_open() {
        let guard = AttemptGuard::default();
        let probe = Probe::new();
        let attempt = guard.begin();

        probe.settle(&guard, attempt, Err(AuthError::Timeout));
        assert_eq!(probe.closes.get(), 0);
        assert!(!probe.state.borrow().loading);
        assert_eq!(probe.state.borrow().message, "Error: Firebase: Error (auth/timeout).");
    }

    #[test]
    fn test_late_result_after_dismiss_is_dropped() {
        let guard = AttemptGuard::default();
        let probe = Probe::new();
        let attempt = guard.begin();
        guard.invalidate();

        assert!(!probe.settle(&guard, attempt, Ok(SignInMethod::CustomToken)));
        assert_eq!(probe.closes.get(), 0);
        assert!(probe.state.borrow().message.is_empty());
    }

    #[test]
    fn test_superseded_attempt_is_dropped() {
        let guard = AttemptGuard::default();
        let probe = Probe::new();
        let stale = guard.begin();
        let fresh = guard.begin();

        assert!(!probe.settle(&guard, stale, Err(AuthError::MissingApiKey)));
        assert!(probe.state.borrow().message.is_empty());

        assert!(probe.settle(&guard, fresh, Ok(SignInMethod::CustomToken)));
        assert_eq!(probe.state.borrow().message, "¡Sesión iniciada correctamente!");
        assert_eq!(probe.closes.get(), 1);
    }
}
