//! Timeline UI Components
//!
//! Leptos components for the timeline page.
//!
//! # Components
//!
//! - [`Slideshow`] - Cycles through slides with arrows and indicator dots
//! - [`LetterOverlay`] - Modal letter shown while `is_open` is true
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use timeline_core::{Letter, Slide};
//! use timeline_ui::{LetterOverlay, Slideshow};
//!
//! #[component]
//! fn Page() -> impl IntoView {
//!     let open = RwSignal::new(false);
//!     let slides = vec![Slide::new("We met"), Slide::new("First trip")];
//!
//!     view! {
//!         <Slideshow slides=slides />
//!         <button on:click=move |_| open.set(true)>"Open letter"</button>
//!         <LetterOverlay
//!             is_open=open
//!             on_close=Callback::new(move |_| open.set(false))
//!             letter=Letter::default()
//!         />
//!     }
//! }
//! ```

pub mod letter;
pub mod slideshow;

pub use letter::LetterOverlay;
pub use slideshow::Slideshow;
