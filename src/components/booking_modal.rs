use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::ui::PRIMARY_BORDER;
use crate::config::{SCHEDULING_ACCOUNT, SCHEDULING_HOST};

/// Embed URL for the scheduling page, with the event details panel and
/// cookie banner switched off.
pub fn booking_url(host: &str, account: &str) -> String {
    format!(
        "https://{}/{}?hide_event_type_details=1&hide_gdpr_banner=1",
        host,
        urlencoding::encode(account)
    )
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let open = props.open;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 z-50 grid place-items-center bg-black/50 p-2 md:p-6" role="dialog" aria-modal="true">
            <div class="w-full max-w-4xl rounded-2xl bg-white p-2 md:p-4 shadow-xl">
                <div class="flex items-center justify-between mb-2 md:mb-4">
                    <h3 class="text-lg md:text-xl font-semibold">{"Agenda tu sesión"}</h3>
                    <button class="text-sm opacity-70 hover:opacity-100" onclick={close}>
                        {"Cerrar"}
                    </button>
                </div>
                <div class={classes!("aspect-video", "w-full", "overflow-hidden", "rounded-xl", "border", PRIMARY_BORDER)}>
                    <iframe
                        src={booking_url(SCHEDULING_HOST, SCHEDULING_ACCOUNT)}
                        class="h-full w-full"
                        frameborder="0"
                        title="Agenda"
                    />
                </div>
            </div>
        </div>
    }
}
