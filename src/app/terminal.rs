use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn_with_options, UseIntervalFnOptions};

use crate::boot::{is_prompt_line, reveal_step, visible_text, BootLog, TICK_PERIOD};

/// The fake terminal. `boot` belongs to the page, so whatever was typed out
/// survives this panel being closed and reopened.
#[component]
pub fn TerminalPanel(boot: RwSignal<BootLog>) -> impl IntoView {
    let terminal_ref = NodeRef::<html::Div>::new();
    let (finished, set_finished) = signal(false);

    // cleared by leptos-use when the panel is closed or the page goes away
    let reveal = use_interval_fn_with_options(
        move || {
            if reveal_step(boot.try_update(BootLog::tick)).is_break() {
                set_finished.set(true);
            }
        },
        TICK_PERIOD.as_millis() as u64,
        UseIntervalFnOptions::default().immediate(false),
    );
    let (pause, resume) = (reveal.pause, reveal.resume);

    // Effects only run in the browser, so the reveal never starts on the server
    Effect::new(move |_| {
        // reopening a typed-out terminal shouldn't notify the lines below
        if !boot.with_untracked(BootLog::can_activate) {
            return;
        }
        if boot.try_update(BootLog::activate).unwrap_or(false) {
            log::debug!("boot sequence started");
            resume();
        }
    });

    Effect::new(move |_| {
        if finished.get() {
            pause();
            log::debug!("boot sequence finished");
        }
    });

    on_cleanup(move || {
        if boot.try_update(BootLog::interrupt).unwrap_or(false) {
            log::debug!("boot sequence interrupted");
        }
    });

    // keep the newest line in view
    Effect::new(move |_| {
        boot.track();
        if let Some(el) = terminal_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div
            node_ref=terminal_ref
            class="bg-zinc-950 border border-zinc-800 p-4 font-mono text-sm h-64 overflow-y-auto animate-fadeIn"
        >
            {move || {
                boot.with(|b| {
                    b.revealed()
                        .iter()
                        .copied()
                        .map(|line| {
                            let class = if is_prompt_line(line) {
                                "text-emerald-400/70"
                            } else {
                                "text-zinc-500"
                            };
                            view! { <div class=class>{visible_text(line)}</div> }
                        })
                        .collect_view()
                })
            }}
            <div class="flex items-center gap-2 text-zinc-400 mt-2">
                <span class="text-emerald-400">"❯"</span>
                <span class="animate-pulse">"_"</span>
            </div>
        </div>
    }
}
