use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use alhuda_shared::draft::{whatsapp_url, ContactDraft, ROLE_OPTIONS};

use crate::{
    components::notification::{Notice, NotificationBanner},
    config::WHATSAPP_RECIPIENT,
};

/// Attempts the asynchronous clipboard write, reporting whether it resolved.
///
/// `navigator.clipboard` is reached through `Reflect` so pages served from
/// insecure contexts (where the API is absent) degrade to a failure report
/// instead of a missing-feature panic.
async fn write_clipboard_text(text: String) -> bool {
    let Some(win) = window() else { return false };
    let navigator = win.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Ok(write_text) = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText")) else {
        return false;
    };
    let Some(write_fn) = write_text.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    let Ok(promise_value) = write_fn.call1(&clipboard, &JsValue::from_str(&text)) else {
        return false;
    };
    let Ok(promise) = promise_value.dyn_into::<js_sys::Promise>() else {
        return false;
    };
    wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let notice = use_state(|| None::<(u32, Notice)>);
    let notice_seq = use_mut_ref(|| 0u32);

    let show_notice = {
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |next: Notice| {
            // A fresh epoch re-keys the banner, evicting any banner already
            // on screen together with its timers.
            let mut seq = notice_seq.borrow_mut();
            *seq += 1;
            notice.set(Some((*seq, next)));
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.name = input.value();
                draft.set(next);
            }
        })
    };

    let on_message_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let raw = area.value();
                let mut next = (*draft).clone();
                next.set_message(&raw);
                // Push the clamped text back so the field never holds more
                // than the limit.
                if next.message != raw {
                    area.set_value(&next.message);
                }
                draft.set(next);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match draft.validate() {
                Ok(()) => {
                    let url = whatsapp_url(WHATSAPP_RECIPIENT, &draft.compose());
                    if let Some(win) = window() {
                        let _ = win.location().set_href(&url);
                    }
                }
                Err(message) => show_notice.emit(Notice::error(message)),
            }
        })
    };

    let on_copy = {
        let draft = draft.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |_: MouseEvent| {
            let text = draft.preview();
            if text.is_empty() {
                return;
            }
            let show_notice = show_notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if write_clipboard_text(text).await {
                    show_notice.emit(Notice::success("Message copied to clipboard!"));
                } else {
                    log::warn!("clipboard write rejected");
                    show_notice.emit(Notice::error("Failed to copy message"));
                }
            });
        })
    };

    html! {
        <form id="whatsapp-form" class="contact-form" onsubmit={on_submit}>
            <div class="form-field">
                <label for="name">{ "Name" }</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    value={draft.name.clone()}
                    oninput={on_name_input}
                />
            </div>

            <div class="role-options" role="group" aria-label="I am contacting as">
                { for ROLE_OPTIONS.iter().map(|&role| {
                    let onclick = {
                        let draft = draft.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*draft).clone();
                            next.role = role.to_string();
                            draft.set(next);
                        })
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!(
                                "role-option",
                                (draft.role == role).then_some("active")
                            )}
                            data-role={role}
                            {onclick}
                        >
                            { role }
                        </button>
                    }
                }) }
            </div>
            // Hidden field carrying the active role downstream.
            <input id="role" name="role" type="hidden" value={draft.role.clone()} />

            <div class="form-field">
                <label for="message">{ "Message" }</label>
                <textarea
                    id="message"
                    name="message"
                    value={draft.message.clone()}
                    oninput={on_message_input}
                ></textarea>
                <span id="char-counter" class="char-counter">{ draft.counter_label() }</span>
            </div>

            <p id="preview-text" class="preview-text">{ draft.preview() }</p>

            <div class="form-actions">
                <button type="button" id="copy-message" class="copy-message" onclick={on_copy}>
                    <i class="far fa-copy" aria-hidden="true"></i>
                    { "Copy" }
                </button>
                <button type="submit" class="send-message">
                    <i class="fab fa-whatsapp" aria-hidden="true"></i>
                    { "Send via WhatsApp" }
                </button>
            </div>

            {
                notice
                    .as_ref()
                    .map(|(epoch, current)| html! {
                        <NotificationBanner
                            key={*epoch}
                            notice={current.clone()}
                            on_dismissed={dismiss_notice.clone()}
                        />
                    })
                    .unwrap_or_default()
            }
        </form>
    }
}
