use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::{DEFAULT_PAGE, NAV_TABS, TAB_NAVIGATE_DELAY_MS};

/// Last path segment of the current location, `index.html` when the path
/// ends in a slash.
fn current_page() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .and_then(|path| path.rsplit('/').next().map(str::to_owned))
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| DEFAULT_PAGE.to_string())
}

/// Tab matching the current page, or the first tab when none matches.
fn initial_tab() -> usize {
    let page = current_page();
    NAV_TABS
        .iter()
        .position(|(_, target)| *target == page)
        .unwrap_or(0)
}

/// Slider geometry for `tab` relative to its container: width and x-offset.
fn measure_slider(container: &NodeRef, tab: &NodeRef) -> Option<(f64, f64)> {
    let container = container.cast::<Element>()?;
    let tab = tab.cast::<Element>()?;
    let container_rect = container.get_bounding_client_rect();
    let tab_rect = tab.get_bounding_client_rect();
    Some((tab_rect.width(), tab_rect.left() - container_rect.left()))
}

#[function_component(NavTabs)]
pub fn nav_tabs() -> Html {
    let active = use_state_eq(initial_tab);
    // Mirror for the resize listener, which outlives any single render.
    let active_idx = use_mut_ref(initial_tab);
    let container_ref = use_node_ref();
    let tab_refs = use_mut_ref(|| {
        (0..NAV_TABS.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<NodeRef>>()
    });
    let slider = use_state_eq(|| None::<(f64, f64)>);

    // Position the slider once layout has settled, and again whenever the
    // active tab changes.
    {
        let container_ref = container_ref.clone();
        let tab_refs = tab_refs.clone();
        let slider = slider.clone();
        use_effect_with(*active, move |index| {
            let tab = tab_refs.borrow()[*index].clone();
            slider.set(measure_slider(&container_ref, &tab));
            || ()
        });
    }

    // Bounding-box geometry moves with layout, so re-measure on resize.
    {
        let container_ref = container_ref.clone();
        let tab_refs = tab_refs.clone();
        let active_idx = active_idx.clone();
        let slider = slider.clone();
        use_effect_with((), move |_| {
            let window = window().expect("no global `window` exists");

            let closure = Closure::wrap(Box::new(move || {
                let index = *active_idx.borrow();
                let tab = tab_refs.borrow()[index].clone();
                slider.set(measure_slider(&container_ref, &tab));
            }) as Box<dyn Fn()>);

            window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .expect("attach resize listener");

            let cleanup = move || {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    closure.as_ref().unchecked_ref(),
                );
                drop(closure);
            };

            move || cleanup()
        });
    }

    html! {
        <div class="nav-tabs" ref={container_ref}>
            { for NAV_TABS.iter().enumerate().map(|(index, &(label, target))| {
                let node_ref = tab_refs.borrow()[index].clone();
                let onclick = {
                    let active = active.clone();
                    let active_idx = active_idx.clone();
                    Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        if *active == index {
                            return;
                        }
                        active.set(index);
                        *active_idx.borrow_mut() = index;
                        // Let the slider transition play before leaving.
                        Timeout::new(TAB_NAVIGATE_DELAY_MS, move || {
                            if let Some(win) = window() {
                                let _ = win.location().set_href(target);
                            }
                        })
                        .forget();
                    })
                };
                html! {
                    <a
                        href={target}
                        class={classes!("nav-tab", (*active == index).then_some("active"))}
                        ref={node_ref}
                        {onclick}
                    >
                        { label }
                    </a>
                }
            }) }
            {
                match *slider {
                    Some((width, offset)) => html! {
                        <span
                            class="nav-slider"
                            style={format!(
                                "width:{width}px;transform:translateX({offset}px);transition:all 0.25s ease;"
                            )}
                        ></span>
                    },
                    None => html! { <span class="nav-slider"></span> },
                }
            }
        </div>
    }
}
