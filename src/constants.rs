use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Width of the showcase window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the showcase window
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const SERVICE_PAGE_SIZE: usize = 2;       // Service cards shown side by side
pub const SERVICE_INTERVAL: Duration = Duration::from_millis(4000);
pub const SERVICE_TRANSITION: f32 = 0.5;      // Slide-in duration for a service page (seconds)

pub const TESTIMONIAL_PAGE_SIZE: usize = 1;
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_millis(5000);
pub const TESTIMONIAL_TRANSITION: f32 = 0.6;

pub const TRANSITION_OFFSET: f32 = 300.0;     // Horizontal distance a new page slides in from (pixels)

pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
pub const RING_DURATION: f32 = 2.0;           // Stat ring fill time (seconds)
pub const RING_STAGGER: f32 = 0.2;            // Extra delay per stat index (seconds)
pub const RING_TARGET: f32 = 0.8;             // Fraction of the ring that ends up drawn

pub const IN_VIEW_THRESHOLD: f32 = 0.3;       // Visible ratio that counts as "in view"
pub const SCROLL_THRESHOLD: f32 = 300.0;      // Scroll offset past which floating buttons appear

pub const PARTICLE_COUNT: usize = 9;
pub const PARTICLE_SPEED: std::ops::Range<f32> = 0.02..0.08; // Upward drift (screen heights per second)
