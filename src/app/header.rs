use leptos::{ev, html, prelude::*};
use leptos_router::{components::*, hooks::use_location};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, Node};

use super::{
    dialog::Dialogs,
    scroll::{scroll_to_section, use_active_section},
    theme::ThemeToggle,
};
use crate::{
    config::{SECTIONS, SITE_OWNER},
    ui::{menu::MenuState, scroll::link_targets_section},
};

#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let nav_ref = NodeRef::<html::Nav>::new();
    let toggle_ref = NodeRef::<html::Button>::new();
    let active = use_active_section();
    let pathname = use_location().pathname;
    let dialogs = expect_context::<Dialogs>();

    let close_menu = move || {
        if menu.get_untracked().is_open() {
            menu.update(|m| {
                m.close();
            });
        }
    };

    let _ = use_event_listener(use_document(), ev::click, move |ev: MouseEvent| {
        if !menu.get_untracked().is_open() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let in_nav = nav_ref
            .get_untracked()
            .is_some_and(|el| el.contains(Some(&target)));
        let in_toggle = toggle_ref
            .get_untracked()
            .is_some_and(|el| el.contains(Some(&target)));
        if !in_nav && !in_toggle {
            close_menu();
        }
    });

    // route changes (e.g. the resume link) also close the menu
    Effect::watch(move || pathname.get(), move |_, _, _| close_menu(), false);

    // the dialog's handler prevents the default, so either listener order works
    let _ = use_event_listener(use_document(), ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() != "Escape" || !menu.get_untracked().is_open() {
            return;
        }
        let dialog_open = dialogs.is_open() || ev.default_prevented();
        menu.update(|m| {
            m.dismiss_on_escape(dialog_open);
        });
    });

    let nav_links = SECTIONS
        .iter()
        .map(|&(id, label)| {
            let href = format!("/#{id}");
            let is_active = {
                let href = href.clone();
                move || active.get().is_some_and(|a| link_targets_section(&href, a))
            };
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        class:active=is_active.clone()
                        aria-current=move || is_active().then_some("true")
                        on:click=move |ev: MouseEvent| {
                            if pathname.get_untracked() == "/" && scroll_to_section(id) {
                                ev.prevent_default();
                            }
                            close_menu();
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-between gap-4">
                <A href="/" attr:class="brand">
                    <span class="brand-mark">"<"</span>
                    {SITE_OWNER}
                    <span class="brand-mark">" />"</span>
                </A>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        node_ref=toggle_ref
                        type="button"
                        class="icon-button menu-toggle"
                        aria-controls="site-nav"
                        aria-expanded=move || menu.get().aria_expanded()
                        aria-label=move || menu.get().toggle_label()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        <span aria-hidden="true">{move || menu.get().icon()}</span>
                    </button>
                </div>
                <nav
                    node_ref=nav_ref
                    id="site-nav"
                    class="site-nav"
                    class:open=move || menu.get().is_open()
                    aria-label="Main"
                >
                    <ul>
                        {nav_links}
                        <li>
                            <A href="/resume" attr:class="nav-link">
                                "Resume"
                            </A>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
