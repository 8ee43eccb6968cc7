//! Service slider: two service cards per page, advancing every four seconds.

pub mod engine;
pub mod slide;

pub use engine::showcase;
pub use slide::Service;
