//! Per-platform URL recognizers and deep link builders.
//!
//! Every platform module has the same two-function shape:
//!
//! - `recognize(url) -> Option<Match>` never panics and returns `None` for
//!   anything outside the platform's URL shapes.
//! - `build(web_url, &Match) -> DeepLinkResult` is total over every match its
//!   own `recognize` can produce.
//!
//! Pairing the two is the job of [`crate::Handler`].

pub mod discord;
pub mod facebook;
pub mod instagram;
pub mod linkedin;
pub mod reddit;
pub mod spotify;
pub mod threads;
pub mod unknown;
pub mod whatsapp;
pub mod youtube;
