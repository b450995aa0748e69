//! Slideshow component.
//!
//! Shows one slide at a time with previous/next arrows and a row of
//! indicator dots. Position is held in a [`SlideNavigator`] signal.

use leptos::prelude::*;
use timeline_core::{Indicator, NavEvent, Slide, SlideNavigator};

/// Apply `event`, logging and dropping rejected jumps.
///
/// Returns whether the event was accepted.
fn step(navigator: &mut SlideNavigator, event: NavEvent) -> bool {
    match navigator.apply(event) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("slideshow: ignoring {event:?}: {err}");
            false
        }
    }
}

/// Reactive slideshow position shared by the slides, arrows and dots.
#[derive(Clone, Copy)]
struct SlideshowState {
    navigator: RwSignal<SlideNavigator>,
}

impl SlideshowState {
    fn new(len: usize) -> Self {
        Self {
            navigator: RwSignal::new(SlideNavigator::new(len)),
        }
    }

    /// Handle a control press.
    fn dispatch(self, event: NavEvent) {
        self.navigator.update(|nav| {
            step(nav, event);
        });
    }

    /// Tracked read of whether the slide or dot at `index` is active.
    fn is_active(self, index: usize) -> bool {
        self.navigator.with(|nav| nav.is_active(index))
    }

    fn indicators(self) -> Vec<Indicator> {
        self.navigator.with_untracked(SlideNavigator::indicators)
    }
}

/// Slideshow over a fixed list of slides.
#[component]
pub fn Slideshow(
    /// Slides in display order.
    slides: Vec<Slide>,
) -> impl IntoView {
    let state = SlideshowState::new(slides.len());

    let slide_views = slides
        .into_iter()
        .enumerate()
        .map(move |(index, slide)| {
            let is_active = Memo::new(move |_| state.is_active(index));
            view! {
              <div class="slide" class:active=move || is_active.get()>
                <SlideContent slide=slide />
              </div>
            }
        })
        .collect_view();

    let dots = state
        .indicators()
        .into_iter()
        .map(move |dot| {
            let index = dot.index;
            let is_active = Memo::new(move |_| state.is_active(index));
            view! {
              <div
                class="timeline-dot"
                class:active=move || is_active.get()
                on:click=move |_| state.dispatch(NavEvent::JumpTo(index))
              >
                <span>{dot.label}</span>
              </div>
            }
        })
        .collect_view();

    view! {
      <div class="slideshow-container">
        {slide_views}
        <button class="nav-arrow prev" on:click=move |_| state.dispatch(NavEvent::Retreat)>
          "‹"
        </button>
        <button class="nav-arrow next" on:click=move |_| state.dispatch(NavEvent::Advance)>
          "›"
        </button>
        <div class="timeline-slider">{dots}</div>
      </div>
    }
}

/// Body of a single slide.
#[component]
fn SlideContent(
    /// The slide to display.
    slide: Slide,
) -> impl IntoView {
    let Slide {
        title,
        date,
        caption,
        image,
    } = slide;

    view! {
      {image.map(|src| view! { <img class="slide-image" src=src alt=title.clone() /> })}
      <h3 class="slide-title">{title.clone()}</h3>
      {date.map(|date| view! { <p class="slide-date">{date}</p> })}
      {caption.map(|caption| view! { <p class="slide-caption">{caption}</p> })}
    }
}
