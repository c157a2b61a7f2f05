use leptos::prelude::*;

use crate::profile::{self, Link};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 px-6 py-4 flex justify-between items-center">
            <span class="text-sm tracking-widest text-zinc-400">{profile::MONOGRAM}</span>
            <nav class="flex gap-6 text-sm">
                {profile::LINKS.iter().map(|link| view! { <ProfileLink link=*link /> }).collect_view()}
            </nav>
        </header>
    }
}

#[component]
fn ProfileLink(link: Link) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="text-zinc-500 hover:text-emerald-400 transition-colors duration-200"
        >
            {link.label}
        </a>
    }
}
