//! Decorations that sit behind or around the content and never take input.

use leptos::prelude::*;

use crate::{motion::Pointer, profile};

const GRID_STYLE: &str = "background-image: linear-gradient(rgba(255,255,255,0.5) 1px, transparent 1px), linear-gradient(90deg, rgba(255,255,255,0.5) 1px, transparent 1px); background-size: 60px 60px;";

/// Soft emerald glow trailing the pointer.
#[component]
pub fn CursorGlow(pointer: ReadSignal<Pointer>) -> impl IntoView {
    view! {
        <div
            class="fixed w-96 h-96 rounded-full pointer-events-none transition-all duration-300 ease-out opacity-15 blur-3xl -translate-x-1/2 -translate-y-1/2"
            style=move || pointer.get().glow_style()
        />
    }
}

#[component]
pub fn GridBackdrop() -> impl IntoView {
    view! { <div class="fixed inset-0 opacity-[0.03]" style=GRID_STYLE /> }
}

#[component]
pub fn Monogram() -> impl IntoView {
    view! {
        <div class="fixed bottom-0 right-0 text-[30vw] font-bold leading-none text-zinc-900/50 pointer-events-none select-none tracking-tighter">
            {profile::MONOGRAM}
        </div>
    }
}

#[component]
pub fn CornerAccent() -> impl IntoView {
    view! {
        <div class="fixed top-0 right-0 w-32 h-32 pointer-events-none">
            <div class="absolute top-8 right-8 w-px h-16 bg-gradient-to-b from-emerald-400/50 to-transparent" />
            <div class="absolute top-8 right-8 w-16 h-px bg-gradient-to-l from-emerald-400/50 to-transparent" />
        </div>
    }
}

#[component]
pub fn StatusIndicator() -> impl IntoView {
    view! {
        <div class="fixed bottom-8 left-8 flex items-center gap-3 text-xs text-zinc-600">
            <span class="font-mono">"01"</span>
            <div class="w-8 h-px bg-zinc-800" />
            <span>"index"</span>
        </div>
    }
}
