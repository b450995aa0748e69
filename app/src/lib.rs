use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use timeline_core::{Result, TimelineConfig};
use timeline_ui::{LetterOverlay, Slideshow};

/// Page content, compiled into the binary.
const TIMELINE_TOML: &str = include_str!("../../timeline.toml");

/// Parse the bundled page content.
pub fn load_timeline() -> Result<TimelineConfig> {
    TimelineConfig::from_toml_str(TIMELINE_TOML)
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Router>
        <main>
          <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage />
          </Routes>
        </main>
      </Router>
    }
}

/// Loads the timeline content and renders it, or an error notice.
#[component]
fn HomePage() -> impl IntoView {
    match load_timeline() {
        Ok(config) => view! { <TimelinePage config=config /> }.into_any(),
        Err(err) => {
            log::error!("timeline: failed to load content: {err}");
            view! {
              <Title text="Our Timeline" />
              <p class="timeline-error">"This page could not be loaded: " {err.to_string()}</p>
            }
            .into_any()
        }
    }
}

/// The timeline page. Owns whether the letter is open.
#[component]
fn TimelinePage(config: TimelineConfig) -> impl IntoView {
    let TimelineConfig {
        site,
        letter,
        slides,
    } = config;

    let letter_open = RwSignal::new(false);
    let open_letter = move |_| {
        log::debug!("letter: open");
        letter_open.set(true);
    };
    let close_letter = Callback::new(move |_| {
        log::debug!("letter: close");
        letter_open.set(false);
    });

    view! {
      <Title text=site.title.clone() />
      {site.description.map(|description| view! { <Meta name="description" content=description /> })}

      <header class="timeline-header">
        <h1>{site.title}</h1>
        <button class="open-letter" on:click=open_letter>
          {site.letter_button}
        </button>
      </header>

      <Slideshow slides=slides />
      <LetterOverlay is_open=letter_open on_close=close_letter letter=letter />
    }
}
