use std::time::Duration;

use showcase::constants::*;
use showcase::content::Content;
use showcase::driver;
use showcase::engine::{Control, Showcase};
use showcase::error::{DriverError, SelectorError};
use showcase::selector::RotatingSelector;
use showcase::{service, testimonial};
use tokio::time::{Instant, sleep};

#[test]
fn service_slider_walks_all_pages_and_wraps() {
    let content = Content::default();
    let mut slider = service::showcase(content.services.clone()).unwrap();

    let mut seen = Vec::new();
    for _ in 0..4 {
        let view = slider.view();
        seen.extend(view.cards.iter().filter_map(|c| c.title().map(str::to_string)));
        slider.control(Control::Next).unwrap();
    }
    let expected: Vec<String> = content.services.iter().map(|s| s.title.clone()).collect();
    assert_eq!(seen, expected);
    assert_eq!(slider.current_page(), 0);
}

#[test]
fn five_items_in_pages_of_two() {
    let selector = RotatingSelector::new(vec!['a', 'b', 'c', 'd', 'e'], 2, SERVICE_INTERVAL).unwrap();
    assert_eq!(selector.page_count(), 3);
    assert_eq!(selector.page(0), Some(&['a', 'b'][..]));
    assert_eq!(selector.page(1), Some(&['c', 'd'][..]));
    assert_eq!(selector.page(2), Some(&['e'][..]));
}

#[test]
fn empty_testimonials_render_nothing() {
    let mut carousel = testimonial::showcase(Vec::new()).unwrap();
    carousel.control(Control::Next).unwrap();
    carousel.control(Control::Previous).unwrap();
    assert!(!carousel.update(60.0));

    let view = carousel.view();
    assert!(view.cards.is_empty());
    assert!(view.indicators.is_empty());
    assert_eq!(
        carousel.control(Control::Indicator(0)),
        Err(SelectorError::InvalidIndex { index: 0, page_count: 0 })
    );
}

#[test]
fn paused_carousel_only_moves_on_request() {
    let mut carousel = testimonial::showcase(Content::default().testimonials).unwrap();
    carousel.control(Control::TogglePlay).unwrap();
    for _ in 0..(60 * 30) {
        assert!(!carousel.update(FRAME_TIME));
    }
    carousel.control(Control::Indicator(3)).unwrap();
    assert_eq!(carousel.current_page(), 3);
}

#[tokio::test(start_paused = true)]
async fn hosted_testimonials_rotate_every_five_seconds() {
    let selector = testimonial::engine::selector(Content::default().testimonials).unwrap();
    let handle = driver::spawn(testimonial::engine::NAME, selector);
    let mut pages = handle.subscribe();
    let start = Instant::now();

    for expected in [1, 2, 3, 4, 0] {
        pages.changed().await.unwrap();
        assert_eq!(pages.borrow_and_update().current_page, expected);
    }
    assert_eq!(start.elapsed(), TESTIMONIAL_INTERVAL * 5);

    handle.unmount().await;
}

#[tokio::test(start_paused = true)]
async fn hosted_pause_cancels_pending_advance() {
    let selector = service::engine::selector(Content::default().services).unwrap();
    let handle = driver::spawn(service::engine::NAME, selector);

    sleep(Duration::from_millis(3999)).await;
    let state = handle.pause().await.unwrap();
    assert_eq!(state.current_page, 0);
    assert!(!state.auto_advancing);

    sleep(Duration::from_secs(30)).await;
    assert_eq!(handle.snapshot().current_page, 0);

    assert_eq!(
        handle.jump_to(9).await,
        Err(DriverError::Selector(SelectorError::InvalidIndex { index: 9, page_count: 4 }))
    );
}
