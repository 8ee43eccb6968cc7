use crate::constants::*;
use crate::engine::Carousel;
use crate::error::SelectorError;
use crate::selector::RotatingSelector;
use crate::testimonial::slide::Testimonial;

pub const NAME: &str = "testimonials";

pub fn selector(testimonials: Vec<Testimonial>) -> Result<RotatingSelector<Testimonial>, SelectorError> {
    RotatingSelector::new(testimonials, TESTIMONIAL_PAGE_SIZE, TESTIMONIAL_INTERVAL)
}

pub fn showcase(testimonials: Vec<Testimonial>) -> Result<Carousel<Testimonial>, SelectorError> {
    Ok(Carousel::new(NAME, selector(testimonials)?, TESTIMONIAL_TRANSITION))
}
