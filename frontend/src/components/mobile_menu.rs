use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Node};
use yew::prelude::*;

use crate::config::NAV_TABS;

#[function_component(MobileMenu)]
pub fn mobile_menu() -> Html {
    let open = use_state_eq(|| false);
    let button_ref = use_node_ref();
    let drawer_ref = use_node_ref();

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    // Collapse on any click landing outside both the drawer and the toggle
    // button. Clicks inside either bubble up here too, so containment is
    // checked before collapsing.
    {
        let open = open.clone();
        let button_ref = button_ref.clone();
        let drawer_ref = drawer_ref.clone();
        use_effect_with((), move |_| {
            let document = window()
                .expect("no global `window` exists")
                .document()
                .expect("window has no document");

            let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                    return;
                };
                let inside = [button_ref.get(), drawer_ref.get()]
                    .iter()
                    .any(|node| node.as_ref().is_some_and(|node| node.contains(Some(&target))));
                if !inside {
                    open.set(false);
                }
            }) as Box<dyn Fn(web_sys::MouseEvent)>);

            document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .expect("attach document click listener");

            let cleanup = move || {
                let _ = document.remove_event_listener_with_callback(
                    "click",
                    closure.as_ref().unchecked_ref(),
                );
                drop(closure);
            };

            move || cleanup()
        });
    }

    let icon = if *open { "fa-times" } else { "fa-bars" };

    html! {
        <>
            <button
                type="button"
                class="mobile-menu-btn"
                aria-label="Toggle navigation menu"
                aria-expanded={(*open).to_string()}
                onclick={toggle}
                ref={button_ref}
            >
                <i class={classes!("fas", icon)} aria-hidden="true"></i>
            </button>
            <nav
                class="mobile-nav"
                style={if *open { "display:block" } else { "display:none" }}
                ref={drawer_ref}
            >
                { for NAV_TABS.iter().map(|&(label, target)| html! {
                    <a class="mobile-nav-link" href={target} onclick={close.clone()}>
                        { label }
                    </a>
                }) }
            </nav>
        </>
    }
}
