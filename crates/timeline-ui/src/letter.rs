//! Letter overlay component.

use leptos::prelude::*;
use timeline_core::Letter;

/// Close button action: hand dismissal back to the owner of `is_open`.
fn dismiss(on_close: &Callback<()>) {
    log::debug!("letter: dismiss requested");
    on_close.run(());
}

/// Modal overlay showing a static letter.
///
/// Visibility and dismissal are owned by the parent: the overlay carries the
/// `active` class while `is_open` is true and calls `on_close` when the close
/// button is pressed.
#[component]
pub fn LetterOverlay(
    /// Whether the letter is shown.
    #[prop(into)]
    is_open: Signal<bool>,
    /// Called when the close button is pressed.
    on_close: Callback<()>,
    /// The letter to display.
    letter: Letter,
) -> impl IntoView {
    let paragraphs = letter
        .body()
        .into_iter()
        .map(|paragraph| view! { <p>{paragraph}</p> })
        .collect_view();

    let signature = letter
        .signature_lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| view! { {(i > 0).then(|| view! { <br /> })} {line} })
        .collect_view();

    view! {
      <div class="letter-overlay" class:active=move || is_open.get()>
        <div class="letter-paper">
          <button
            class="close-letter-x"
            on:click=move |_| dismiss(&on_close)
            aria-label="Close letter"
          >
            "✕"
          </button>
          <h2>{letter.heading}</h2>
          <p class="letter-date">{letter.date}</p>
          <div class="letter-content">{paragraphs}</div>
          <p class="letter-signature">{signature}</p>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_runs_on_close() {
        let owner = Owner::new();
        owner.set();

        let is_open = RwSignal::new(true);
        let on_close = Callback::new(move |_| is_open.set(false));

        dismiss(&on_close);
        assert!(!is_open.get_untracked());
    }

    #[test]
    fn test_dismiss_each_press_calls_back() {
        let owner = Owner::new();
        owner.set();

        let presses = RwSignal::new(0);
        let on_close = Callback::new(move |_| presses.update(|n| *n += 1));

        dismiss(&on_close);
        dismiss(&on_close);
        assert_eq!(presses.get_untracked(), 2);
    }
}
