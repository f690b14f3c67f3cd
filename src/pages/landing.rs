use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::auth::client::AuthClient;
use crate::auth::identity::Identity;
use crate::components::auth_modal::AuthModal;
use crate::components::booking_modal::BookingModal;
use crate::components::ui::{
    Badge, Button, ButtonVariant, Card, Container, SectionTitle, PRIMARY_BADGE, PRIMARY_BORDER,
    PRIMARY_TEXT,
};
use crate::config::{BRAND_NAME, CONTACT_LINK, LOGO_SRC};
use crate::pages::plans::{HIGHLIGHTS, PLANS};

/// Which button group the header shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderActions {
    /// Ingresar + Agendar
    SignedOut,
    /// Badge + Salir + Agendar
    SignedIn { badge: String },
}

impl HeaderActions {
    pub fn for_identity(identity: Option<&Identity>) -> Self {
        match identity {
            Some(identity) => HeaderActions::SignedIn {
                badge: identity.display_label().to_string(),
            },
            None => HeaderActions::SignedOut,
        }
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    actions: HeaderActions,
    on_sign_in: Callback<MouseEvent>,
    on_sign_out: Callback<MouseEvent>,
    on_book: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class={classes!("sticky", "top-0", "z-40", "border-b", PRIMARY_BORDER, "bg-white/90", "backdrop-blur")}>
            <Container>
                <div class="flex h-16 items-center justify-between">
                    <a href="#" class="flex items-center gap-3">
                        <img src={LOGO_SRC} alt={BRAND_NAME} class="h-9 w-9 rounded-sm" />
                        <span class={classes!("font-semibold", PRIMARY_TEXT)}>{BRAND_NAME}</span>
                    </a>
                    <div class="flex items-center gap-2">
                        {
                            match &props.actions {
                                HeaderActions::SignedIn { badge } => html! {
                                    <>
                                        <Badge>{ badge.clone() }</Badge>
                                        <Button variant={ButtonVariant::Ghost} onclick={props.on_sign_out.clone()}>{"Salir"}</Button>
                                        <Button onclick={props.on_book.clone()}>{"Agendar"}</Button>
                                    </>
                                },
                                HeaderActions::SignedOut => html! {
                                    <>
                                        <Button variant={ButtonVariant::Ghost} onclick={props.on_sign_in.clone()}>{"Ingresar"}</Button>
                                        <Button onclick={props.on_book.clone()}>{"Agendar"}</Button>
                                    </>
                                },
                            }
                        }
                    </div>
                </div>
            </Container>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct BookProps {
    on_book: Callback<MouseEvent>,
}

#[function_component(Hero)]
fn hero(props: &BookProps) -> Html {
    html! {
        <section class="py-16 md:py-24">
            <Container>
                <div class="grid items-center gap-10 md:grid-cols-2">
                    <div>
                        <span class={classes!("inline-block", "rounded-full", "px-3", "py-1", "text-xs", "font-medium", PRIMARY_BADGE)}>
                            {"Entrenamiento Personal en Puerto Montt"}
                        </span>
                        <h1 class="mt-4 text-4xl md:text-5xl font-extrabold leading-tight">
                            {"Método Tommybox: Entrena para la vida"}
                        </h1>
                        <p class="mt-4 text-slate-600 text-lg">
                            {"Sistema de entrenamiento funcional y consciente adaptable a cualquier edad y objetivo. \
                              Basado en evaluación inicial, seguimiento digital y progresión dinámica, tu plan se ajusta \
                              en cada sesión para priorizar técnica y seguridad."}
                        </p>
                        <ul class="mt-4 list-disc list-inside text-slate-600">
                            { for HIGHLIGHTS.iter().map(|item| html! { <li>{ *item }</li> }) }
                        </ul>
                        <div class="mt-6 flex flex-wrap gap-3">
                            <Button onclick={props.on_book.clone()}>{"Agendar primera sesión"}</Button>
                            <Button variant={ButtonVariant::Ghost} href={CONTACT_LINK}>{"WhatsApp"}</Button>
                        </div>
                        <p class="mt-3 text-xs text-slate-500">
                            {"Cupos limitados. Cancelación/reagendo hasta 12 h antes."}
                        </p>
                    </div>
                    <div>
                        <div class={classes!("aspect-video", "w-full", "overflow-hidden", "rounded-2xl", "border", PRIMARY_BORDER, "bg-white", "shadow")}>
                            <div class="flex h-full w-full items-center justify-center">
                                <div class="text-center p-6">
                                    <p class={classes!("text-sm", PRIMARY_TEXT)}>{"[Video de entrenamientos reales]"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[function_component(Plans)]
fn plans(props: &BookProps) -> Html {
    html! {
        <section class="py-12 md:py-16 bg-slate-50">
            <Container>
                <SectionTitle title="Planes" subtitle="Elige tu nivel de compromiso" />
                <div class="grid gap-6 md:grid-cols-3">
                    {
                        for PLANS.iter().map(|plan| html! {
                            <Card key={plan.name}>
                                <div class="flex items-baseline justify-between">
                                    <h3 class="text-lg font-semibold">{ plan.name }</h3>
                                    <span class={classes!("text-xl", "font-bold", PRIMARY_TEXT)}>{ plan.price }</span>
                                </div>
                                <p class="mt-2 text-sm text-slate-600">{ plan.description }</p>
                                <div class="mt-4">
                                    <Button onclick={props.on_book.clone()}>{ plan.cta }</Button>
                                </div>
                            </Card>
                        })
                    }
                </div>
                <p class="mt-8 text-center text-sm text-slate-600">
                    {"El valor de la evaluación inicial se descuenta del plan mensual elegido."}
                </p>
            </Container>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="mt-4 bg-blue-600 text-white">
            <Container>
                <div class="py-8 text-center text-sm">
                    <div class="flex items-center justify-center gap-2">
                        <span>{ format!("© {} {}", year, BRAND_NAME) }</span>
                        <span>{"·"}</span>
                        <a class="underline" href={CONTACT_LINK} target="_blank" rel="noreferrer">
                            {"Contacto"}
                        </a>
                    </div>
                    <p class="mt-2 opacity-90">{"Hecho con dedicación en Puerto Montt"}</p>
                </div>
            </Container>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let auth = use_context::<AuthClient>();
    let auth_open = use_state(|| false);
    let booking_open = use_state(|| false);
    let identity = use_state(|| None::<Identity>);

    // Mirror the identity service into local state for as long as the page is mounted.
    {
        let identity = identity.clone();
        let auth = auth.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = auth.map(|auth| {
                    auth.on_identity_changed(Callback::from(move |current: Option<Identity>| {
                        identity.set(current);
                    }))
                });
                move || drop(subscription)
            },
            (),
        );
    }

    let open_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_: MouseEvent| auth_open.set(true))
    };

    let close_auth = {
        let auth_open = auth_open.clone();
        Callback::from(move |_: ()| auth_open.set(false))
    };

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: MouseEvent| booking_open.set(true))
    };

    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| booking_open.set(false))
    };

    // The header flips once the identity service reports the change.
    let sign_out = Callback::from(move |_: MouseEvent| {
        if let Some(auth) = &auth {
            info!("Sign-out requested");
            auth.sign_out();
        }
    });

    html! {
        <div class="min-h-screen bg-white text-slate-900">
            <Header
                actions={HeaderActions::for_identity((*identity).as_ref())}
                on_sign_in={open_auth}
                on_sign_out={sign_out}
                on_book={open_booking.clone()}
            />
            <Hero on_book={open_booking.clone()} />
            <Plans on_book={open_booking} />
            <Footer />
            <AuthModal open={*auth_open} on_close={close_auth} />
            <BookingModal open={*booking_open} on_close={close_booking} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_identity_shows_sign_in_group() {
        assert_eq!(HeaderActions::for_identity(None), HeaderActions::SignedOut);
    }

    #[test]
    fn test_uid_only_identity_shows_uid_badge() {
        let identity = Identity::anonymous("abc123");
        assert_eq!(
            HeaderActions::for_identity(Some(&identity)),
            HeaderActions::SignedIn {
                badge: "abc123".to_string()
            }
        );
    }

    #[test]
    fn test_email_wins_over_uid() {
        let identity = Identity {
            uid: "abc123".to_string(),
            email: Some("a@b.com".to_string()),
        };
        assert_eq!(
            HeaderActions::for_identity(Some(&identity)),
            HeaderActions::SignedIn {
                badge: "a@b.com".to_string()
            }
        );
    }

    #[test]
    fn test_stream_sequence_drives_header() {
        use crate::auth::identity::IdentityStore;
        use std::cell::RefCell;
        use std::rc::Rc;

        let store = IdentityStore::new(None);
        let header = Rc::new(RefCell::new(Vec::new()));
        let sink = header.clone();
        let _sub = store.subscribe(Callback::from(move |current: Option<Identity>| {
            sink.borrow_mut().push(HeaderActions::for_identity(current.as_ref()));
        }));

        store.replace(Some(Identity::anonymous("abc123")));
        store.replace(None);

        assert_eq!(
            *header.borrow(),
            vec![
                HeaderActions::SignedOut,
                HeaderActions::SignedIn {
                    badge: "abc123".to_string()
                },
                HeaderActions::SignedOut,
            ]
        );
    }
}
