use serde::Deserialize;

use crate::engine::{Card, Line, Render};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Service {
    pub fn new(icon: &str, title: &str, description: &str, features: &[&str]) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Render for Service {
    fn card(&self) -> Card {
        let mut lines = vec![
            Line::Icon(self.icon.clone()),
            Line::Title(self.title.clone()),
            Line::Body(self.description.clone()),
        ];
        lines.extend(self.features.iter().cloned().map(Line::Bullet));
        lines.push(Line::Caption("Learn More".to_string()));
        Card { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_lists_every_feature_after_the_description() {
        let service = Service::new(
            "calculator",
            "Accounting & Bookkeeping",
            "Complete financial management",
            &["Payroll Management", "Financial Reporting"],
        );
        let card = service.card();
        assert_eq!(card.title(), Some("Accounting & Bookkeeping"));
        assert_eq!(
            &card.lines[2..5],
            &[
                Line::Body("Complete financial management".to_string()),
                Line::Bullet("Payroll Management".to_string()),
                Line::Bullet("Financial Reporting".to_string()),
            ]
        );
    }
}
