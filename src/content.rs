//! Site content shown by the showcases.
//!
//! The built-in content can be replaced by a TOML file:
//!
//! ```toml
//! [[services]]
//! icon = "headphones"
//! title = "Virtual Assistance"
//! description = "Administrative support"
//! features = ["24/7 Call Answering"]
//!
//! [[testimonials]]
//! quote = "Professional and efficient."
//! author = "Sarah Johnson"
//! company = "Tech Startup CEO"
//! rating = 5
//!
//! [[stats]]
//! number = "500+"
//! label = "Happy Clients"
//! ```
//!
//! Sections missing from the file keep their built-in values.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ContentError;
use crate::service::Service;
use crate::testimonial::Testimonial;
use crate::testimonial::slide::MAX_RATING;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentFile {
    services: Option<Vec<Service>>,
    testimonials: Option<Vec<Testimonial>>,
    stats: Option<Vec<Stat>>,
}

impl Content {
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::parse(&text)?;
        info!(
            ?path,
            services = content.services.len(),
            testimonials = content.testimonials.len(),
            stats = content.stats.len(),
            "loaded content file"
        );
        Ok(content)
    }

    pub fn parse(text: &str) -> Result<Self, ContentError> {
        let file: ContentFile = toml::from_str(text)?;
        let defaults = Self::default();
        let content = Self {
            services: file.services.unwrap_or(defaults.services),
            testimonials: file.testimonials.unwrap_or(defaults.testimonials),
            stats: file.stats.unwrap_or(defaults.stats),
        };

        if let Some(bad) = content
            .testimonials
            .iter()
            .find(|t| t.rating == 0 || t.rating > MAX_RATING)
        {
            return Err(ContentError::InvalidRating {
                author: bad.author.clone(),
                rating: bad.rating,
            });
        }
        Ok(content)
    }
}

impl Default for Content {
    fn default() -> Self {
        let services = vec![
            Service::new(
                "headphones",
                "Virtual Assistance",
                "Professional administrative support, call handling, scheduling, and CRM management",
                &["24/7 Call Answering", "Email & Calendar Management", "Lead Qualification", "Multi-language Support"],
            ),
            Service::new(
                "calculator",
                "Accounting & Bookkeeping",
                "Complete financial management from basic bookkeeping to advanced reporting",
                &["UAE & USA Compliance", "Multi-entity Consolidation", "Payroll Management", "Financial Reporting"],
            ),
            Service::new(
                "palette",
                "Digital Marketing & Creative",
                "Full-service marketing from strategy to execution and creative content",
                &["Social Media Management", "Paid Advertising", "Graphic Design", "Video Production"],
            ),
            Service::new(
                "code",
                "Technology Development",
                "Custom software development, mobile apps, and IT infrastructure support",
                &["MERN Stack Development", "Mobile Apps", "API Integrations", "Cloud Hosting"],
            ),
            Service::new(
                "building",
                "Real Estate Support",
                "End-to-end property management and investor services",
                &["MLS Management", "Property Valuation", "Investor Leads", "Market Analytics"],
            ),
            Service::new(
                "truck",
                "Delivery Services",
                "Complete operations management for delivery businesses",
                &["Rider Recruitment", "Fleet Management", "24/7 Support", "Performance Analytics"],
            ),
            Service::new(
                "heart",
                "Healthcare Support",
                "HIPAA-compliant medical billing and patient data management",
                &["Claims Processing", "Insurance Verification", "Patient Data Entry", "AR Follow-up"],
            ),
            Service::new(
                "user-check",
                "HR & Recruitment",
                "Global talent acquisition and HR process outsourcing",
                &["Technical Recruitment", "Pre-screening Tests", "Onboarding Support", "HR Compliance"],
            ),
        ];

        let testimonials = vec![
            Testimonial::new(
                "Our back office runs smoothly now. The virtual assistants are professional and efficient, handling everything from customer calls to complex data management.",
                "Sarah Johnson",
                "Tech Startup CEO",
                5,
            ),
            Testimonial::new(
                "The accounting services are top-notch. They handle our multi-entity books with precision and provide reporting that helps us make informed decisions.",
                "Michael Chen",
                "Real Estate Investor",
                5,
            ),
            Testimonial::new(
                "Their real estate support helped us scale our property management business. The team understands our industry and delivers consistent results.",
                "Emma Rodriguez",
                "Property Management Firm",
                5,
            ),
            Testimonial::new(
                "Outstanding digital marketing support! Our online presence and lead generation grew beyond our expectations.",
                "David Thompson",
                "Healthcare Practice Owner",
                5,
            ),
            Testimonial::new(
                "The development team delivered our custom CRM on time and within budget.",
                "Lisa Wang",
                "E-commerce Business",
                5,
            ),
        ];

        let stats = [
            ("500+", "Happy Clients"),
            ("24/7", "Support Available"),
            ("99%", "Client Satisfaction"),
            ("50+", "Countries Served"),
        ]
        .into_iter()
        .map(|(number, label)| Stat { number: number.to_string(), label: label.to_string() })
        .collect();

        Self { services, testimonials, stats }
    }
}
