//! Testimonial carousel: one quote per page, advancing every five seconds.

pub mod engine;
pub mod slide;

pub use engine::showcase;
pub use slide::Testimonial;
