use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{
    config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD},
    ui::reveal::{RevealKind, RevealState},
};

/// Wraps `children` in an element that fades in the first time it is
/// scrolled into view. The observer is disconnected once that happens.
#[component]
pub fn Reveal(
    kind: RevealKind,
    #[prop(optional, into)] class_name: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (state, set_state) = signal(RevealState::default());

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let mut next = state.get_untracked();
            let crossed = entries.iter().any(|entry| next.observe(entry.is_intersecting()));
            if crossed {
                set_state.set(next);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN.to_string()),
    );

    view! {
        <div node_ref=target class=move || format!("{} {class_name}", state.get().classes(kind))>
            {children()}
        </div>
    }
}
