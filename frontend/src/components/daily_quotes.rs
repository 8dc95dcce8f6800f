use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use alhuda_shared::quotes::{QuoteCursor, QUOTES};

use crate::config::{QUOTE_FADE_MS, QUOTE_ROTATE_MS};

fn random_start() -> usize {
    (js_sys::Math::random() * QUOTES.len() as f64).floor() as usize
}

/// Direction of a manual or automatic move through the quote list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Forward,
}

#[function_component(DailyQuotes)]
pub fn daily_quotes() -> Html {
    // The cursor is shared by the buttons and the rotation interval; the
    // displayed quote lags it by one crossfade.
    let cursor = use_mut_ref(|| QuoteCursor::new(random_start()));
    let shown = use_state(|| cursor.borrow().current());
    let faded = use_state_eq(|| false);

    let step = {
        let cursor = cursor.clone();
        let shown = shown.clone();
        let faded = faded.clone();
        Callback::from(move |step: Step| {
            let quote = match step {
                Step::Forward => cursor.borrow_mut().next(),
                Step::Back => cursor.borrow_mut().prev(),
            };
            // Crossfade: fade out, swap after the delay, fade back in.
            faded.set(true);
            let shown = shown.clone();
            let faded = faded.clone();
            Timeout::new(QUOTE_FADE_MS, move || {
                shown.set(quote);
                faded.set(false);
            })
            .forget();
        })
    };

    // Auto-advance for the page lifetime. Deliberately never cancelled, and
    // manual navigation does not reset it; the two interleave.
    {
        let step = step.clone();
        use_effect_with((), move |_| {
            Interval::new(QUOTE_ROTATE_MS, move || step.emit(Step::Forward)).forget();
            || ()
        });
    }

    let on_prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(Step::Back))
    };
    let on_next = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(Step::Forward))
    };

    let opacity = if *faded { "opacity:0" } else { "opacity:1" };

    html! {
        <div class="daily-quote-widget">
            <blockquote id="daily-quote" class="daily-quote" style={opacity}>
                { format!("\"{}\"", shown.text) }
            </blockquote>
            <p id="quote-ref" class="quote-ref" style={opacity}>
                { format!("\u{2014} {}", shown.reference) }
            </p>
            <div class="quote-nav">
                <button
                    type="button"
                    id="prev-quote"
                    aria-label="Previous quote"
                    onclick={on_prev}
                >
                    <i class="fas fa-chevron-left" aria-hidden="true"></i>
                </button>
                <button
                    type="button"
                    id="next-quote"
                    aria-label="Next quote"
                    onclick={on_next}
                >
                    <i class="fas fa-chevron-right" aria-hidden="true"></i>
                </button>
            </div>
        </div>
    }
}
