use leptos::prelude::*;

use crate::profile::{FOOTER_NOTES, PAGE_SPEED_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="px-6 md:px-16 lg:px-24 py-8 flex flex-col md:flex-row justify-end items-start md:items-center gap-4 text-xs text-zinc-700">
            <div class="flex gap-6">
                <div class="flex items-center gap-4">
                    <div class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse" />
                    <a
                        href=PAGE_SPEED_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-emerald-400 transition-colors"
                    >
                        "page speed"
                    </a>
                </div>
                {FOOTER_NOTES.iter().map(|note| view! { <span>{*note}</span> }).collect_view()}
            </div>
        </footer>
    }
}
