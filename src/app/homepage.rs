use leptos::prelude::*;

use super::{navbar::Navbar, use_theme, words::WordsPullUp, ThemeContext};
use crate::{
    reveal::Alignment,
    site::{ABOUT, HOME, INTRO, PLAY, WORK},
};

const SECTION_CLASS: &str =
    "min-h-screen flex items-center justify-center px-6 lg:px-12 xl:px-16 py-24";

#[component]
pub fn HomePage() -> impl IntoView {
    let ThemeContext { theme, .. } = use_theme();

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <Navbar />

            <section id=HOME class="min-h-screen flex items-center">
                <main class="flex flex-col lg:flex-row items-center justify-between px-6 lg:px-12 xl:px-16 py-12 lg:py-24 w-full max-w-7xl mx-auto">
                    <div class="lg:w-1/2 mb-12 lg:mb-0 lg:pl-12 order-2 lg:order-1 text-center lg:text-left">
                        <div class="font-bold mb-8 leading-tight font-heading">
                            <WordsPullUp
                                text="WELCOME TO THE"
                                class="text-4xl sm:text-5xl md:text-5xl lg:text-5xl xl:text-6xl mb-2 whitespace-nowrap"
                                align=Alignment::Responsive
                            />
                            <WordsPullUp
                                text="PORTFOLIO"
                                class="text-7xl sm:text-8xl md:text-8xl lg:text-8xl xl:text-[8rem] 2xl:text-[10rem] whitespace-nowrap"
                                align=Alignment::Responsive
                            />
                        </div>
                        <p class="text-lg sm:text-xl text-foreground/80 max-w-md mx-auto lg:mx-0 leading-relaxed font-body">
                            {INTRO}
                        </p>
                    </div>

                    <div class="lg:w-1/2 flex justify-center lg:justify-end mb-8 lg:mb-0 order-1 lg:order-2">
                        <img
                            src=move || theme.get().illustration()
                            alt="Computer workstation illustration showing modern development setup"
                            width="500"
                            height="400"
                            class="w-full max-w-lg h-auto mt-16 lg:mt-20 transition-opacity duration-300"
                        />
                    </div>
                </main>
            </section>

            <section id=ABOUT class=SECTION_CLASS>
                <div class="max-w-4xl mx-auto text-center">
                    <WordsPullUp
                        text="ABOUT ME"
                        class="text-5xl md:text-6xl lg:text-7xl font-bold mb-8 font-heading whitespace-nowrap"
                    />
                </div>
            </section>

            <section id=WORK class=SECTION_CLASS>
                <div class="max-w-6xl mx-auto">
                    <WordsPullUp
                        text="MY WORK"
                        class="text-5xl md:text-6xl lg:text-7xl font-bold mb-16 text-center font-heading whitespace-nowrap"
                    />
                </div>
            </section>

            <section id=PLAY class=SECTION_CLASS>
                <div class="max-w-4xl mx-auto text-center">
                    <WordsPullUp
                        text="LET'S PLAY"
                        class="text-5xl md:text-6xl lg:text-7xl font-bold mb-16 font-heading whitespace-nowrap"
                    />
                </div>
            </section>
        </div>
    }
}
