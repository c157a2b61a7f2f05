use leptos::{either::EitherOf4, ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_timeout_fn, use_window};

use crate::{
    boot::BootLog,
    motion::{
        fade_style, rise_style, Pointer, ENTRANCE_DELAY, SECTIONS_FADE_DELAY_MS,
        TAGLINE_FADE_DELAY_MS,
    },
    profile,
    section::{Section, SectionSelector},
};

use super::{
    backdrop::{CornerAccent, CursorGlow, GridBackdrop, Monogram, StatusIndicator},
    footer::Footer,
    header::Header,
    resume::{StackPanel, WorkPanel},
    terminal::TerminalPanel,
};

/// The whole page. Owns every piece of interaction state; nothing outlives it.
#[component]
pub fn HomePage() -> impl IntoView {
    let (selector, set_selector) = signal(SectionSelector::default());
    let (pointer, set_pointer) = signal(Pointer::default());
    let (loaded, set_loaded) = signal(false);
    // filled in by the terminal panel, kept across tab switches
    let boot = RwSignal::new(BootLog::default());

    // both are released by leptos-use when the page is disposed
    use_event_listener(use_window(), ev::mousemove, move |event| {
        set_pointer.set(Pointer::new(event.client_x(), event.client_y()));
    });
    let entrance = use_timeout_fn(
        move |_: ()| set_loaded.set(true),
        ENTRANCE_DELAY.as_millis() as f64,
    );
    let start_entrance = entrance.start;
    // Effects only run in the browser, so the page renders not-loaded on the server
    Effect::new(move |_| start_entrance(()));

    view! {
        <Title text="index" />
        <div class="min-h-screen bg-black text-white overflow-hidden relative">
            <CursorGlow pointer />
            <GridBackdrop />
            <div class="relative z-10 min-h-screen flex flex-col">
                <Header />
                <main class="flex-1 flex flex-col justify-center px-6 md:px-16 lg:px-24 py-32">
                    <Hero loaded />
                    <div
                        class="mt-24 md:mt-32 transition-opacity duration-1000 ease-out"
                        style=move || fade_style(loaded.get(), SECTIONS_FADE_DELAY_MS)
                    >
                        <SectionTabs selector set_selector />
                        {move || match selector.get().active() {
                            Some(Section::Work) => EitherOf4::A(view! { <WorkPanel /> }),
                            Some(Section::Terminal) => EitherOf4::B(view! { <TerminalPanel boot /> }),
                            Some(Section::Stack) => EitherOf4::C(view! { <StackPanel /> }),
                            None => EitherOf4::D(()),
                        }}
                    </div>
                </main>
                <Footer />
            </div>
            <Monogram />
            <CornerAccent />
            <StatusIndicator />
        </div>
    }
}

#[component]
fn Hero(loaded: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="max-w-5xl">
            <div class="overflow-hidden mb-2">
                <h1
                    class="text-[12vw] md:text-[8vw] font-bold leading-[0.85] tracking-tighter text-white transition-transform duration-1000 ease-out"
                    style=move || rise_style(loaded.get())
                >
                    {profile::FIRST_NAME}
                </h1>
            </div>
            <div class="overflow-hidden">
                <h1
                    class="text-[12vw] md:text-[8vw] font-bold leading-[0.85] tracking-tighter text-emerald-400 transition-transform duration-1000 ease-out delay-100"
                    style=move || rise_style(loaded.get())
                >
                    {profile::LAST_NAME}
                </h1>
            </div>
            <div
                class="mt-12 flex flex-col md:flex-row md:items-end gap-8 md:gap-16 transition-opacity duration-1000 ease-out"
                style=move || fade_style(loaded.get(), TAGLINE_FADE_DELAY_MS)
            >
                <p class="text-zinc-500 max-w-xs text-sm leading-relaxed">{profile::TAGLINE}</p>
                <div class="flex gap-4 text-sm">
                    {profile::WHEREABOUTS
                        .iter()
                        .enumerate()
                        .map(|(i, place)| {
                            view! {
                                {(i > 0).then(|| view! { <span class="text-zinc-700">"/"</span> })}
                                <span class="text-zinc-600">{*place}</span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

const TAB_ACTIVE: &str = "px-4 py-2 text-sm border transition-all duration-200 bg-white text-black border-white";
const TAB_INACTIVE: &str = "px-4 py-2 text-sm border transition-all duration-200 border-zinc-800 text-zinc-500 hover:border-zinc-600 hover:text-zinc-300";

#[component]
fn SectionTabs(
    selector: ReadSignal<SectionSelector>,
    set_selector: WriteSignal<SectionSelector>,
) -> impl IntoView {
    view! {
        <div class="flex gap-1 mb-8">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class=move || {
                                if selector.get().is_active(section) { TAB_ACTIVE } else { TAB_INACTIVE }
                            }
                            on:click=move |_| set_selector.update(|s| s.select(section))
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
