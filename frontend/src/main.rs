//! Enhancement layer for the Al-Huda static site.
//!
//! This binary does not render pages. `main()` mounts each widget component
//! onto a host-page mount point when that element exists, then installs the
//! page-wide DOM enhancements. Pages that omit a mount point simply never
//! activate the matching widget.

mod components;
mod config;
mod enhance;

use yew::html::BaseComponent;

use crate::components::{
    contact_form::ContactForm, daily_quotes::DailyQuotes, mobile_menu::MobileMenu,
    nav_tabs::NavTabs,
};

/// Mounts `C` into the element with id `id`, if the page has one.
fn mount_widget<C>(id: &str)
where
    C: BaseComponent,
    C::Properties: Default,
{
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id));
    match root {
        Some(root) => {
            yew::Renderer::<C>::with_root(root).render();
        }
        None => log::debug!("no #{id} on this page, widget skipped"),
    }
}

fn main() {
    let _ = console_log::init_with_level(log::Level::Info);

    mount_widget::<NavTabs>(config::NAV_MOUNT_ID);
    mount_widget::<DailyQuotes>(config::QUOTES_MOUNT_ID);
    mount_widget::<ContactForm>(config::CONTACT_MOUNT_ID);
    mount_widget::<MobileMenu>(config::MOBILE_MENU_MOUNT_ID);

    enhance::install();
}
