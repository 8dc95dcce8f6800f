//! Page-wide DOM enhancements applied outside any mounted component: scroll
//! reveal, navigation-bar chrome, smooth same-page anchors, lazy images and
//! the footer year. Each enhancement checks for the elements it needs and
//! backs off quietly when a page lacks them.

use alhuda_shared::scroll::ScrollTracker;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

/// Installs every page-wide enhancement.
pub fn install() {
    let Some(win) = window() else { return };
    let Some(document) = win.document() else { return };

    reveal_on_scroll(&document);
    nav_scroll_chrome(&win, &document);
    smooth_anchor_scroll(&win, &document);
    lazy_images(&document);
    current_year(&document);
}

/// All elements matching `selector`, as a plain vector.
fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Marks `.animate-on-scroll` elements `visible` the first time at least 10%
/// of them enters the viewport, keeping the bottom 100px inert for
/// triggering. The transition is one-way: revealed elements are unobserved.
fn reveal_on_scroll(document: &Document) {
    let targets = query_all(document, ".animate-on-scroll");
    if targets.is_empty() {
        log::debug!("no scroll-reveal targets on this page");
        return;
    }

    let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let element = entry.target();
                    let _ = element.class_list().add_1("visible");
                    observer.unobserve(&element);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -100px 0px");

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for element in &targets {
        observer.observe(element);
    }
}

/// Toggles `is-elevated` / `is-hidden` on `.main-nav` as the page scrolls;
/// the thresholds and direction handling live in [`ScrollTracker`].
fn nav_scroll_chrome(win: &Window, document: &Document) {
    let Ok(Some(nav)) = document.query_selector(".main-nav") else {
        return;
    };

    let mut tracker = ScrollTracker::default();
    let closure = {
        let win = win.clone();
        Closure::<dyn FnMut()>::new(move || {
            let offset = win.scroll_y().unwrap_or(0.0);
            let chrome = tracker.observe(offset);
            let _ = nav.class_list().toggle_with_force("is-elevated", chrome.elevated);
            let _ = nav.class_list().toggle_with_force("is-hidden", chrome.hidden);
        })
    };
    if win
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        // Page-lifetime listener.
        closure.forget();
    }
}

/// Intercepts clicks on same-page fragment links and smooth-scrolls to the
/// target, offset by the navigation bar's height. One delegated listener
/// covers anchors rendered after startup as well.
fn smooth_anchor_scroll(win: &Window, document: &Document) {
    let closure = {
        let win = win.clone();
        let document = document.clone();
        Closure::<dyn Fn(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
            let Some(origin) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(anchor)) = origin.closest("a[href^='#']") else {
                return;
            };
            let Some(fragment) = anchor.get_attribute("href") else {
                return;
            };
            let id = fragment.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            event.prevent_default();

            let nav_height = document
                .query_selector(".main-nav")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |el| f64::from(el.offset_height()));
            let top = target.get_bounding_client_rect().top() + win.scroll_y().unwrap_or(0.0)
                - nav_height;

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })
    };
    if document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Deferred-source images get their real `src` on first intersection; images
/// already present reflect their load state as `loading`/`loaded` classes,
/// or a failure alt text.
fn lazy_images(document: &Document) {
    let deferred = query_all(document, "img[data-src]");
    if !deferred.is_empty() {
        let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let image: HtmlImageElement = entry.target().unchecked_into();
                    if let Some(src) = image.get_attribute("data-src") {
                        image.set_src(&src);
                    }
                    let _ = image.class_list().add_1("loaded");
                    observer.unobserve(&image);
                }
            },
        );
        if let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            callback.forget();
            for image in &deferred {
                observer.observe(image);
            }
        }
    }

    for element in query_all(document, "img:not([src=''])") {
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        if image.complete() {
            continue;
        }
        let _ = image.class_list().add_1("loading");

        let on_load = {
            let image = image.clone();
            Closure::<dyn Fn()>::new(move || {
                let _ = image.class_list().remove_1("loading");
                let _ = image.class_list().add_1("loaded");
            })
        };
        let on_error = {
            let image = image.clone();
            Closure::<dyn Fn()>::new(move || {
                let _ = image.class_list().remove_1("loading");
                image.set_alt("Image failed to load");
            })
        };

        if image
            .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
            .is_ok()
        {
            on_load.forget();
        }
        if image
            .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .is_ok()
        {
            on_error.forget();
        }
    }
}

/// Writes the current calendar year into `#current-year`.
fn current_year(document: &Document) {
    let Some(element) = document.get_element_by_id("current-year") else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
}
