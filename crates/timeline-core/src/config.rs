//! Page content configuration.

use serde::{Deserialize, Serialize};

use crate::{
    content::{Letter, Slide},
    error::{Result, TimelineError},
};

/// Everything the timeline page renders, as read from `timeline.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Letter overlay content.
    #[serde(default)]
    pub letter: Letter,

    /// Slides in display order.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Document title.
    pub title: String,

    /// Description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Label of the button that opens the letter.
    #[serde(default = "default_letter_button")]
    pub letter_button: String,
}

fn default_letter_button() -> String {
    "Open letter".to_string()
}

impl TimelineConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        log::debug!(
            "config: loaded {} slides, letter with {} paragraphs",
            config.slides.len(),
            config.letter.paragraphs.len()
        );
        Ok(config)
    }

    /// Check required text fields.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(TimelineError::EmptyField("site.title"));
        }
        if self.slides.iter().any(|slide| slide.title.trim().is_empty()) {
            return Err(TimelineError::EmptyField("slides.title"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[site]
title = "Our Timeline"
"#;

    #[test]
    fn test_minimal_config_defaults() {
        let config = TimelineConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.site.title, "Our Timeline");
        assert_eq!(config.site.letter_button, "Open letter");
        assert!(config.site.description.is_none());
        assert!(config.slides.is_empty());
        assert!(config.letter.paragraphs.is_empty());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
[site]
title = "Us"
description = "A timeline"
letter_button = "Read me"

[letter]
heading = "To you"
date = "Today"
salutation = "Hey,"
paragraphs = ["First.", "Second."]
signature_lines = ["Yours,", "Me"]

[[slides]]
title = "Met"
date = "2023"

[[slides]]
title = "Moved in"
image = "/img/home.jpg"
"#;
        let config = TimelineConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.site.letter_button, "Read me");
        assert_eq!(config.letter.signature_lines, vec!["Yours,", "Me"]);
        assert_eq!(config.slides.len(), 2);
        assert_eq!(config.slides[0].date.as_deref(), Some("2023"));
        assert_eq!(config.slides[1].image.as_deref(), Some("/img/home.jpg"));
    }

    #[test]
    fn test_blank_site_title_rejected() {
        let toml = r#"
[site]
title = "  "
"#;
        let err = TimelineConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, TimelineError::EmptyField("site.title")));
    }

    #[test]
    fn test_blank_slide_title_rejected() {
        let toml = r#"
[site]
title = "Us"

[[slides]]
title = ""
"#;
        let err = TimelineConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, TimelineError::EmptyField("slides.title")));
    }

    #[test]
    fn test_letter_fields_are_all_optional() {
        let toml = r#"
[site]
title = "Us"

[letter]
paragraphs = ["Just this."]
"#;
        let config = TimelineConfig::from_toml_str(toml).unwrap();
        assert!(config.letter.heading.is_empty());
        assert_eq!(config.letter.body(), vec!["Just this."]);
    }

    #[test]
    fn test_missing_site_is_parse_error() {
        let err = TimelineConfig::from_toml_str("[letter]\nheading = \"x\"").unwrap_err();
        assert!(matches!(err, TimelineError::Config(_)));
    }
}
