//! Timeline Core Library
//!
//! Framework-free state and content types for the timeline page.
//!
//! - [`SlideNavigator`] - cyclic position over a fixed slide sequence
//! - [`Slide`], [`Letter`] - page content
//! - [`TimelineConfig`] - content loaded from `timeline.toml`

pub mod config;
pub mod content;
pub mod error;
pub mod navigator;

pub use config::{SiteConfig, TimelineConfig};
pub use content::{Letter, Slide};
pub use error::{Result, TimelineError};
pub use navigator::{Indicator, NavEvent, SlideNavigator, SlideState};
