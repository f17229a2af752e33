use leptos::{ev, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions,
};
use wasm_bindgen::JsCast;

use super::{theme_toggle::ThemeToggle, use_theme, ThemeContext};
use crate::{
    site::{NavItem, NAV_ITEMS},
    tracker::{SectionTracker, OBSERVER_ROOT_MARGIN, VISIBILITY_THRESHOLD},
};

const NAV_BASE: &str = "nav-slide-in fixed top-0 z-50 w-full transition-all duration-300";
const NAV_SCROLLED: &str =
    "bg-background/80 backdrop-blur-md shadow-sm border-b border-foreground/20";

/// Observes every `section[id]` on the page and feeds intersection entries
/// into `tracker`. Observers are disconnected when the owning scope is
/// disposed.
fn observe_sections(tracker: RwSignal<SectionTracker>) {
    let sections = match document().query_selector_all("section[id]") {
        Ok(sections) => sections,
        Err(_) => {
            log::warn!("could not query page sections");
            return;
        }
    };
    for i in 0..sections.length() {
        let Some(section) = sections
            .get(i)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        use_intersection_observer_with_options(
            section,
            move |entries, _| {
                for entry in entries {
                    let id = entry.target().id();
                    let hit = entry.is_intersecting();
                    tracker.maybe_update(|t| match t.observe(&id, hit) {
                        Ok(changed) => changed,
                        Err(err) => {
                            log::debug!("skipping intersection entry: {err}");
                            false
                        }
                    });
                }
            },
            UseIntersectionObserverOptions::default()
                .root_margin(OBSERVER_ROOT_MARGIN.to_string())
                .thresholds(vec![VISIBILITY_THRESHOLD]),
        );
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let tracker = RwSignal::new(SectionTracker::default());
    let (menu_open, set_menu_open) = signal(false);
    let ThemeContext { theme, .. } = use_theme();

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        tracker.maybe_update(|t| t.on_scroll(y));
    });
    // sections are in the DOM once the effect runs
    Effect::new(move |_| observe_sections(tracker));

    let scrolled = Memo::new(move |_| tracker.with(|t| t.is_scrolled()));
    let active = Memo::new(move |_| tracker.with(|t| t.active().to_string()));
    let is_active = move |item: NavItem| active.with(|a| a == item.anchor);

    view! {
        <nav class=move || {
            if scrolled.get() {
                format!("{NAV_BASE} {NAV_SCROLLED}")
            } else {
                format!("{NAV_BASE} bg-transparent")
            }
        }>
            <div class="w-full px-6 lg:px-8 pt-2 pb-2">
                <div class="flex h-20 items-center">
                    <a href=NAV_ITEMS[0].href() class="hover:opacity-80 transition-opacity mr-16">
                        <img
                            src=move || theme.get().logo()
                            alt="Earn Logo"
                            width="120"
                            height="30"
                        />
                    </a>

                    <div class="hidden md:flex items-center space-x-12 flex-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let item = *item;
                                view! {
                                    <a
                                        href=item.href()
                                        class=move || {
                                            let state = if is_active(item) {
                                                "text-foreground font-bold"
                                            } else {
                                                "text-foreground/70"
                                            };
                                            format!(
                                                "relative text-sm font-medium transition-colors hover:text-foreground font-body uppercase tracking-wider {state}",
                                            )
                                        }
                                    >
                                        {item.name}
                                        <Show when=move || is_active(item)>
                                            <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-purple-400"></div>
                                        </Show>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-4 ml-auto">
                        <ThemeToggle />
                        <button
                            aria-label="Toggle menu"
                            class="md:hidden p-2 rounded-md text-foreground hover:bg-foreground/10"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <svg
                                class="h-5 w-5"
                                xmlns="http://www.w3.org/2000/svg"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            >
                                <line x1="4" x2="20" y1="12" y2="12" />
                                <line x1="4" x2="20" y1="6" y2="6" />
                                <line x1="4" x2="20" y1="18" y2="18" />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>

            <div class=move || {
                let base = "absolute top-24 left-0 right-0 bg-background/95 backdrop-blur-md shadow-lg md:hidden border-b border-foreground/20";
                if menu_open.get() { format!("{base} menu-drop-in") } else { format!("{base} hidden") }
            }>
                <div class="container mx-auto px-4 py-4">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let item = *item;
                            view! {
                                <a
                                    href=item.href()
                                    class=move || {
                                        let state = if is_active(item) {
                                            "text-foreground font-bold"
                                        } else {
                                            "text-foreground/70"
                                        };
                                        format!(
                                            "block py-2 text-sm font-medium transition-colors hover:text-foreground font-body {state}",
                                        )
                                    }
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
