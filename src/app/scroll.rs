use leptos::{ev, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{use_debounce_fn, use_event_listener, use_window, use_window_scroll};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::{
    config::{SCROLL_DEBOUNCE_MS, SECTIONS},
    ui::scroll::{active_section, reference_point, show_scroll_top, SectionExtent},
};

/// Tracks which home page section is in view.
///
/// Recomputed on the trailing edge of scroll/resize bursts, once on startup
/// and after every navigation. Must be called inside the router.
pub fn use_active_section() -> ReadSignal<Option<&'static str>> {
    let (active, set_active) = signal(None::<&'static str>);

    let recompute = move || {
        let next = measure_active_section();
        if active.get_untracked() != next {
            set_active.set(next);
        }
    };

    let debounced = use_debounce_fn(recompute, SCROLL_DEBOUNCE_MS);
    let _ = use_event_listener(use_window(), ev::scroll, {
        let debounced = debounced.clone();
        move |_| {
            debounced();
        }
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        debounced();
    });

    let location = use_location();
    Effect::watch(
        move || location.pathname.get(),
        move |_, _, _| recompute(),
        true,
    );

    active
}

fn measure_active_section() -> Option<&'static str> {
    let win = window();
    let scroll_y = win.scroll_y().unwrap_or_default();
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let doc = document();
    let extents = SECTIONS
        .iter()
        .filter_map(|&(id, _)| {
            let rect = doc.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionExtent {
                id,
                top: rect.top() + scroll_y,
                height: rect.height(),
            })
        })
        .collect::<Vec<_>>();
    active_section(&extents, reference_point(scroll_y, viewport))
}

/// Smoothly scrolls the section `id` into view. Returns `false` when the
/// section isn't on the current page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = document().get_element_by_id(id) else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[component]
pub fn ScrollTop() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let visible = move || show_scroll_top(y.get());

    view! {
        <button
            type="button"
            class="scroll-top"
            class:visible=visible
            aria-label="Back to top"
            aria-hidden=move || (!visible()).to_string()
            tabindex=move || if visible() { "0" } else { "-1" }
            on:click=move |_| {
                let opts = ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(ScrollBehavior::Smooth);
                window().scroll_to_with_scroll_to_options(&opts);
            }
        >
            "↑"
        </button>
    }
}
