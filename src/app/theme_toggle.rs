use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::theme::{Theme, THEME_STORAGE_KEY};

/// Theme preference shared through context. `theme` reads the default until
/// the app has hydrated, so the first client render matches the server's.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

pub fn provide_theme() -> ThemeContext {
    // Unparseable stored values fall back to `Theme::default()`.
    let (stored, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>(THEME_STORAGE_KEY);
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let theme = Signal::derive(move || {
        if mounted.get() {
            stored.get()
        } else {
            Theme::default()
        }
    });
    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn icon_class(shown: bool, hidden_rotation: &str) -> String {
    let state = if shown {
        "opacity-100 rotate-0".to_string()
    } else {
        format!("opacity-0 {hidden_rotation}")
    };
    format!("absolute inset-0 w-6 h-6 transition-all duration-500 {state}")
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, set_theme } = use_theme();

    view! {
        <button
            aria-label="Toggle theme"
            class="relative p-2 rounded-md text-foreground hover:bg-foreground/10 transition-all duration-300"
            on:click=move |_| {
                let next = theme.get_untracked().toggled();
                log::debug!("switching theme to {next}");
                set_theme.set(next);
            }
        >
            <div class="relative w-6 h-6">
                <svg
                    class=move || icon_class(theme.get().is_dark(), "rotate-180")
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 50 50"
                    fill="currentColor"
                >
                    <path d="M41.18,25.7c-.61-.27-1.32-.11-1.75.4-1.41,1.65-3.27,2.74-5.38,3.15-5.15,1.01-10.15-2.35-11.16-7.49-.89-4.52,1.58-9.01,5.88-10.68.62-.24,1.01-.86.95-1.52-.06-.66-.54-1.21-1.19-1.34-2.23-.46-4.5-.47-6.75-.03-9.27,1.82-15.34,10.85-13.51,20.12.88,4.49,3.46,8.37,7.26,10.92,2.86,1.92,6.15,2.92,9.52,2.92,1.11,0,2.23-.11,3.34-.33,7.21-1.41,12.7-7.26,13.67-14.55.09-.66-.27-1.3-.87-1.57Z" />
                </svg>
                <svg
                    class=move || icon_class(!theme.get().is_dark(), "-rotate-180")
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 50 50"
                    fill="currentColor"
                >
                    <circle cx="25" cy="25" r="14.39" />
                    <path d="M25,7.07c1.1,0,2-.9,2-2v-2.77c0-1.1-.9-2-2-2s-2,.9-2,2v2.77c0,1.1.9,2,2,2Z" />
                    <path d="M9.49,12.32c.39.39.9.59,1.41.59s1.02-.2,1.41-.59c.78-.78.78-2.05,0-2.83l-1.96-1.96c-.78-.78-2.05-.78-2.83,0-.78.78-.78,2.05,0,2.83l1.96,1.96Z" />
                    <path d="M5.07,23h-2.77c-1.1,0-2,.9-2,2s.9,2,2,2h2.77c1.1,0,2-.9,2-2s-.9-2-2-2Z" />
                    <path d="M9.49,37.68l-1.96,1.96c-.78.78-.78,2.05,0,2.83.39.39.9.59,1.41.59s1.02-.2,1.41-.59l1.96-1.96c.78-.78.78-2.05,0-2.83-.78-.78-2.05-.78-2.83,0Z" />
                    <path d="M25,42.93c-1.1,0-2,.9-2,2v2.77c0,1.1.9,2,2,2s2-.9,2-2v-2.77c0-1.1-.9-2-2-2Z" />
                    <path d="M40.51,37.68c-.78-.78-2.05-.78-2.83,0-.78.78-.78,2.05,0,2.83l1.96,1.96c.39.39.9.59,1.41.59s1.02-.2,1.41-.59c.78-.78.78-2.05,0-2.83l-1.96-1.96Z" />
                    <path d="M47.7,23h-2.77c-1.1,0-2,.9-2,2s.9,2,2,2h2.77c1.1,0,2-.9,2-2s-.9-2-2-2Z" />
                    <path d="M39.09,12.91c.51,0,1.02-.2,1.41-.59l1.96-1.96c.78-.78.78-2.05,0-2.83-.78-.78-2.05-.78-2.83,0l-1.96,1.96c-.78.78-.78,2.05,0,2.83.39.39.9.59,1.41.59Z" />
                </svg>
            </div>
        </button>
    }
}
