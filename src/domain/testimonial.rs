use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

/// One customer quote shown by the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub company_size: String,
    pub industry: String,
    pub text: String,
    pub author_name: String,
    pub author_title: String,
    pub author_image: String,
}

impl Testimonial {
    /// Load an ordered testimonial list from a JSON file
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Testimonial>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read testimonials from {}", path.display()))?;
        let testimonials: Vec<Testimonial> = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("failed to parse testimonials in {}", path.display()))?;
        log::info!(
            "Loaded {} testimonials from {}",
            testimonials.len(),
            path.display()
        );
        Ok(testimonials)
    }
}

/// Image slot: source path plus alternative text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorImage {
    pub src: String,
    pub alt: String,
}

/// The six content slots the carousel card renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplaySlots {
    pub company_size: String,
    pub industry: String,
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    pub author_image: AuthorImage,
}

impl From<&Testimonial> for DisplaySlots {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            company_size: testimonial.company_size.clone(),
            industry: testimonial.industry.clone(),
            quote: testimonial.text.clone(),
            author_name: testimonial.author_name.clone(),
            author_title: testimonial.author_title.clone(),
            author_image: AuthorImage {
                src: testimonial.author_image.clone(),
                alt: testimonial.author_name.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Testimonial {
        Testimonial {
            company_size: "Enterprise".to_string(),
            industry: "Automotive".to_string(),
            text: "Great product".to_string(),
            author_name: "Sarah Johnson".to_string(),
            author_title: "General Manager".to_string(),
            author_image: "images/people/sarah.webp".to_string(),
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "companySize": "Enterprise",
            "industry": "Automotive",
            "text": "Great product",
            "authorName": "Sarah Johnson",
            "authorTitle": "General Manager",
            "authorImage": "images/people/sarah.webp"
        }"#;
        let testimonial: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(testimonial, sample());
    }

    #[test]
    fn test_display_slots_use_author_name_as_alt() {
        let slots = DisplaySlots::from(&sample());
        assert_eq!(slots.company_size, "Enterprise");
        assert_eq!(slots.quote, "Great product");
        assert_eq!(slots.author_image.src, "images/people/sarah.webp");
        assert_eq!(slots.author_image.alt, "Sarah Johnson");
    }

    #[test]
    fn test_load_all_missing_file() {
        let err = Testimonial::load_all("/nonexistent/testimonials.json").unwrap_err();
        assert!(format!("{err:?}").contains("failed to read testimonials"));
    }

    #[test]
    fn test_load_all_from_file() {
        let path = std::env::temp_dir()
            .join(format!("pamui-testimonials-{}.json", std::process::id()));
        let json = serde_json::to_string(&vec![sample(), sample()]).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Testimonial::load_all(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], sample());
    }
}
