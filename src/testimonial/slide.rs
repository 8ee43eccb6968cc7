use serde::Deserialize;

use crate::engine::{Card, Line, Render};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub company: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    MAX_RATING
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, company: &str, rating: u8) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            company: company.to_string(),
            rating,
        }
    }
}

impl Render for Testimonial {
    fn card(&self) -> Card {
        Card {
            lines: vec![
                Line::Rating(self.rating.min(MAX_RATING)),
                Line::Quote(self.quote.clone()),
                Line::Author(self.author.clone()),
                Line::Caption(self.company.clone()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_puts_stars_before_the_quote() {
        let testimonial = Testimonial::new("Top-notch.", "Michael Chen", "Real Estate Investor", 4);
        let card = testimonial.card();
        assert_eq!(card.lines[0], Line::Rating(4));
        assert_eq!(card.lines[1], Line::Quote("Top-notch.".to_string()));
        assert_eq!(card.title(), Some("Michael Chen"));
    }
}
