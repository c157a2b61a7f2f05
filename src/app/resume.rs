use leptos::prelude::*;

use crate::profile::{Experience, EXPERIENCE, STACK};

#[component]
pub fn WorkPanel() -> impl IntoView {
    view! {
        <div class="space-y-4 py-4 animate-fadeIn">
            {EXPERIENCE.iter().map(|exp| view! { <ExperienceRow exp=*exp /> }).collect_view()}
        </div>
    }
}

#[component]
fn ExperienceRow(exp: Experience) -> impl IntoView {
    view! {
        <div class="group flex items-baseline gap-4 md:gap-8 text-sm">
            <span class="text-zinc-700 tabular-nums">{exp.year}</span>
            <span class="text-zinc-400 group-hover:text-white transition-colors">{exp.role}</span>
            <span class="text-emerald-400/70 group-hover:text-emerald-400 transition-colors">
                "@"{exp.place}
            </span>
            // dotted leader between the role and the note
            <span class="hidden md:block text-zinc-700 flex-1 border-b border-dotted border-zinc-800 mx-4" />
            <span class="hidden md:block text-zinc-600 text-xs">{exp.note}</span>
        </div>
    }
}

#[component]
pub fn StackPanel() -> impl IntoView {
    view! {
        <div class="py-4 flex flex-wrap gap-2 animate-fadeIn">
            {STACK
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 text-xs border border-zinc-800 text-zinc-500 hover:border-emerald-400/50 hover:text-emerald-400 transition-colors cursor-default">
                            {*tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
