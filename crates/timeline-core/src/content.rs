//! Page content: slides and the letter.

use serde::{Deserialize, Serialize};

/// One slide of the timeline slideshow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    /// Headline shown on the slide.
    pub title: String,

    /// Free-form date text, e.g. "June 2024".
    #[serde(default)]
    pub date: Option<String>,

    /// Caption below the title.
    #[serde(default)]
    pub caption: Option<String>,

    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Slide {
    /// Create a slide with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: None,
            caption: None,
            image: None,
        }
    }

    /// Set the date text.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Static content of the letter overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Letter {
    /// Heading at the top of the paper.
    #[serde(default)]
    pub heading: String,

    /// Date line under the heading.
    #[serde(default)]
    pub date: String,

    /// Opening line, rendered as the first paragraph.
    #[serde(default)]
    pub salutation: String,

    /// Body paragraphs.
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Closing lines, rendered with line breaks between them.
    #[serde(default)]
    pub signature_lines: Vec<String>,
}

impl Letter {
    /// Salutation followed by the body, skipping a blank salutation.
    pub fn body(&self) -> Vec<String> {
        let salutation = (!self.salutation.trim().is_empty()).then(|| self.salutation.clone());
        salutation
            .into_iter()
            .chain(self.paragraphs.iter().cloned())
            .collect()
    }
}
