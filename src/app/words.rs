use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{use_debounce_fn_with_arg, use_element_visibility, use_event_listener, use_window};

use crate::reveal::{split_words, Alignment, RevealController, Word, RESIZE_SETTLE_MS};

const WORD_CLASS: &str =
    "text-xl text-center sm:text-4xl font-bold tracking-normal md:text-6xl md:leading-[4rem] pr-2";

fn window_width() -> Option<f64> {
    window().inner_width().ok()?.as_f64()
}

/// Reveals `text` one word at a time once it scrolls into view, and replays
/// the reveal when a resize moves the layout to a different breakpoint.
#[component]
pub fn WordsPullUp(
    #[prop(into)] text: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] align: Alignment,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let state = RwSignal::new(RevealController::new());
    let words = split_words(&text);

    let visible = use_element_visibility(container);
    Effect::new(move |_| {
        let visible = visible.get();
        state.maybe_update(|s| s.on_visibility(visible));
    });

    // effects only run in the browser, so this is the width at mount
    Effect::new(move |_| {
        if let Some(width) = window_width() {
            state.update_untracked(|s| s.record_width(width));
        }
    });

    let settle = use_debounce_fn_with_arg(
        move |width: f64| {
            state.maybe_update(|s| {
                let replayed = s.on_settled_width(width);
                if replayed {
                    log::debug!("replaying reveal at {width}px (generation {})", s.generation());
                }
                replayed
            });
        },
        RESIZE_SETTLE_MS,
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        if let Some(width) = window_width() {
            settle(width);
        }
    });

    let revealed = Memo::new(move |_| state.with(|s| s.is_revealed()));
    let keyed_words = move || {
        let generation = state.with(|s| s.generation());
        words
            .iter()
            .map(|w| (w.key(generation), w.clone()))
            .collect::<Vec<_>>()
    };

    view! {
        <div node_ref=container class=format!("flex flex-wrap {}", align.class())>
            <For
                each=keyed_words
                key=|(key, _)| key.clone()
                children=move |(_, word)| {
                    view! { <PullUpWord word revealed class=class.clone() /> }
                }
            />
        </div>
    }
}

#[component]
fn PullUpWord(word: Word, revealed: Memo<bool>, class: String) -> impl IntoView {
    let style = format!("animation-delay: {}s", word.delay_secs());
    view! {
        <div
            class=move || {
                let motion = if revealed.get() { "pull-up" } else { "opacity-0" };
                format!("{WORD_CLASS} {motion} {class}")
            }
            style=style
        >
            {match word.text {
                Some(text) => Either::Left(text),
                None => Either::Right(view! { <span>"\u{a0}"</span> }),
            }}
        </div>
    }
}
