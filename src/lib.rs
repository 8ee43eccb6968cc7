//! Rotating showcases for a services marketing site.
//!
//! The core is [`selector::RotatingSelector`], a paged selector with timed
//! auto-advance. The service slider and the testimonial carousel are two
//! configurations of it; the rest of the crate provides the small effects
//! that surround them on the page.

pub mod constants;
pub mod content;
pub mod counter;
pub mod driver;
pub mod engine;
pub mod error;
pub mod particles;
pub mod selector;
pub mod service;
pub mod slide;
pub mod state;
pub mod testimonial;
pub mod timer;
pub mod visibility;

#[cfg(feature = "window")]
pub mod window;
