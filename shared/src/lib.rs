//! Domain state for the Al-Huda site enhancement layer.
//!
//! Everything in this crate is plain data and string composition: the quote
//! carousel cursor, the contact-form draft (template, clamping, validation,
//! WhatsApp deep link) and the navigation-bar scroll chrome state. No DOM
//! types live here, so the whole crate runs under native `cargo test`; the
//! `alhuda-frontend` crate wires these into the page.

pub mod draft;
pub mod quotes;
pub mod scroll;
