use crate::constants::*;
use crate::engine::Carousel;
use crate::error::SelectorError;
use crate::selector::RotatingSelector;
use crate::service::slide::Service;

pub const NAME: &str = "services";

pub fn selector(services: Vec<Service>) -> Result<RotatingSelector<Service>, SelectorError> {
    RotatingSelector::new(services, SERVICE_PAGE_SIZE, SERVICE_INTERVAL)
}

pub fn showcase(services: Vec<Service>) -> Result<Carousel<Service>, SelectorError> {
    Ok(Carousel::new(NAME, selector(services)?, SERVICE_TRANSITION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::engine::Showcase;

    #[test]
    fn built_in_services_fill_four_pages_of_two() {
        let showcase = showcase(Content::default().services).unwrap();
        let selector = showcase.selector();
        assert_eq!(selector.page_count(), 4);
        assert_eq!(selector.interval(), SERVICE_INTERVAL);
        assert_eq!(showcase.view().cards.len(), 2);
    }
}
