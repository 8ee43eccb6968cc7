use std::time::Duration;

use tracing::debug;

use crate::error::SelectorError;
use crate::selector::RotatingSelector;
use crate::slide::PageTransition;

/// One line of a rendered card.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Icon(String),
    Title(String),
    Body(String),
    Bullet(String),
    Quote(String),
    Author(String),
    Caption(String),
    Rating(u8),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub lines: Vec<Line>,
}

impl Card {
    pub fn title(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Title(title) | Line::Author(title) => Some(title.as_str()),
            _ => None,
        })
    }
}

/// Maps one item of a page to a card.
pub trait Render {
    fn card(&self) -> Card;
}

/// Navigation affordances shown around a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    Indicator(usize),
    TogglePlay,
}

/// Everything a renderer needs to draw one frame of a showcase.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub cards: Vec<Card>,
    pub indicators: Vec<bool>,
    pub auto_advancing: bool,
    pub offset_x: f32,
    pub opacity: f32,
}

pub trait Showcase {
    fn name(&self) -> &'static str;

    /// Advances timers and animations by `dt` seconds. Returns true when the page changed.
    fn update(&mut self, dt: f32) -> bool;

    fn control(&mut self, control: Control) -> Result<(), SelectorError>;

    fn current_page(&self) -> usize;

    fn view(&self) -> View;
}

/// A [`RotatingSelector`] wired to a card renderer and a page transition.
pub struct Carousel<T> {
    name: &'static str,
    selector: RotatingSelector<T>,
    transition: PageTransition,
}

impl<T: Render> Carousel<T> {
    pub fn new(name: &'static str, selector: RotatingSelector<T>, transition_duration: f32) -> Self {
        Self {
            name,
            selector,
            transition: PageTransition::new(transition_duration),
        }
    }

    pub fn selector(&self) -> &RotatingSelector<T> {
        &self.selector
    }

    fn page_changed(&mut self, previous: usize, direction: f32) -> bool {
        let current = self.selector.current_page();
        if current == previous {
            return false;
        }
        debug!(showcase = self.name, from = previous, to = current, "page changed");
        self.transition.start(direction);
        true
    }
}

impl<T: Render> Showcase for Carousel<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn update(&mut self, dt: f32) -> bool {
        let previous = self.selector.current_page();
        self.selector.tick(Duration::from_secs_f32(dt.max(0.0)));
        let changed = self.page_changed(previous, 1.0);
        self.transition.update(dt);
        changed
    }

    fn control(&mut self, control: Control) -> Result<(), SelectorError> {
        let previous = self.selector.current_page();
        let direction = match control {
            Control::Previous => {
                self.selector.retreat();
                -1.0
            }
            Control::Next => {
                self.selector.advance();
                1.0
            }
            Control::Indicator(index) => {
                self.selector.jump_to(index)?;
                if index < previous { -1.0 } else { 1.0 }
            }
            Control::TogglePlay => {
                self.selector.toggle_auto_advance();
                return Ok(());
            }
        };
        self.page_changed(previous, direction);
        Ok(())
    }

    fn current_page(&self) -> usize {
        self.selector.current_page()
    }

    fn view(&self) -> View {
        View {
            cards: self.selector.visible().iter().map(Render::card).collect(),
            indicators: self.selector.indicators().map(|(_, current)| current).collect(),
            auto_advancing: self.selector.is_auto_advancing(),
            offset_x: self.transition.offset_x(),
            opacity: self.transition.opacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Word(&'static str);

    impl Render for Word {
        fn card(&self) -> Card {
            Card { lines: vec![Line::Title(self.0.to_string())] }
        }
    }

    fn carousel() -> Carousel<Word> {
        let words = vec![Word("a"), Word("b"), Word("c")];
        let selector = RotatingSelector::new(words, 1, Duration::from_secs(5)).unwrap();
        Carousel::new("words", selector, 0.6)
    }

    fn titles(view: &View) -> Vec<&str> {
        view.cards.iter().filter_map(Card::title).collect()
    }

    #[test]
    fn view_shows_current_page_and_indicators() {
        let c = carousel();
        let view = c.view();
        assert_eq!(titles(&view), vec!["a"]);
        assert_eq!(view.indicators, vec![true, false, false]);
        assert!(view.auto_advancing);
    }

    #[test]
    fn controls_map_to_selector_operations() {
        let mut c = carousel();
        c.control(Control::Previous).unwrap();
        assert_eq!(c.current_page(), 2);
        c.control(Control::Next).unwrap();
        assert_eq!(c.current_page(), 0);
        c.control(Control::Indicator(1)).unwrap();
        assert_eq!(c.current_page(), 1);
        c.control(Control::TogglePlay).unwrap();
        assert!(!c.view().auto_advancing);
        assert!(c.control(Control::Indicator(3)).is_err());
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn update_changes_page_after_interval_and_starts_transition() {
        let mut c = carousel();
        let mut changed = false;
        for _ in 0..(5 * 60) {
            changed |= c.update(1.0 / 60.0);
        }
        // Float frame time may land the fire on the last frame or the one after
        changed |= c.update(1.0 / 60.0);
        assert!(changed);
        assert_eq!(c.current_page(), 1);
        assert!(c.view().opacity < 1.0);
    }

    #[test]
    fn manual_change_starts_transition() {
        let mut c = carousel();
        c.control(Control::Next).unwrap();
        let view = c.view();
        assert_eq!(view.opacity, 0.0);
        assert!(view.offset_x > 0.0);
    }
}
