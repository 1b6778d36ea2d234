use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use super::projects::ProjectDetails;
use crate::{
    projects::Project,
    ui::{
        catalog::{certificate, certificate_asset},
        dialog::{trap_focus, DialogController, TabDirection, FOCUSABLE_SELECTOR},
    },
};

const SCROLL_LOCK_CLASS: &str = "modal-open";

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Project(Project),
    /// Certificate id, resolved through the catalog when rendered.
    Certificate(&'static str),
}

impl Panel {
    fn label(&self) -> &str {
        match self {
            Panel::Project(p) => &p.meta.title,
            Panel::Certificate(id) => certificate(id).map_or(*id, |c| c.title),
        }
    }
}

/// Handle to the single modal dialog, provided by the app root.
#[derive(Clone, Copy)]
pub struct Dialogs {
    active: RwSignal<Option<Panel>>,
    controller: StoredValue<DialogController<Panel, HtmlElement>, LocalStorage>,
}

impl Dialogs {
    /// Opens `panel`, closing any open one first. Focus returns to the
    /// currently focused element when the dialog closes.
    pub fn open(&self, panel: Panel) {
        let trigger = document()
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let displaced = self
            .controller
            .try_update_value(|c| c.open(panel.clone(), trigger))
            .flatten();
        if let Some(prev) = displaced {
            log::debug!("closing dialog {:?} to open another", prev.panel.label());
        }
        log::debug!("opening dialog {:?}", panel.label());
        self.active.set(Some(panel));
    }

    /// Closes the open dialog and restores focus. No-op when none is open.
    pub fn close(&self) {
        let Some(closed) = self.controller.try_update_value(|c| c.close()).flatten() else {
            return;
        };
        log::debug!("closing dialog {:?}", closed.panel.label());
        self.active.set(None);
        if let Some(el) = closed.restore_focus {
            if let Err(e) = el.focus() {
                log::warn!("couldn't restore focus: {e:?}");
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.active.with_untracked(Option::is_some)
    }
}

pub fn provide_dialogs() {
    provide_context(Dialogs {
        active: RwSignal::new(None),
        controller: StoredValue::new_local(DialogController::new()),
    });
}

fn set_scroll_lock(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let res = if locked {
        classes.add_1(SCROLL_LOCK_CLASS)
    } else {
        classes.remove_1(SCROLL_LOCK_CLASS)
    };
    if let Err(e) = res {
        log::warn!("couldn't toggle scroll lock: {e:?}");
    }
}

fn collect_focusables(panel: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Renders whichever panel is open and owns the keyboard handling for it:
/// Escape closes, Tab and Shift+Tab cycle within the panel.
#[component]
pub fn DialogHost() -> impl IntoView {
    let dialogs = expect_context::<Dialogs>();
    let panel_ref = NodeRef::<html::Div>::new();
    let close_ref = NodeRef::<html::Button>::new();
    let focusables = StoredValue::new_local(Vec::<HtmlElement>::new());
    let is_open = move || dialogs.active.with(Option::is_some);

    // the lock is derived from the open state so no exit path can leak it
    Effect::new(move |_| set_scroll_lock(is_open()));

    Effect::new(move |_| {
        if !is_open() {
            focusables.set_value(Vec::new());
            return;
        }
        request_animation_frame(move || {
            let Some(panel) = panel_ref.get_untracked() else {
                log::debug!("dialog panel not mounted, focus trap skipped");
                return;
            };
            focusables.set_value(collect_focusables(&panel));
            if let Some(close) = close_ref.get_untracked() {
                if let Err(e) = close.focus() {
                    log::warn!("couldn't focus dialog close button: {e:?}");
                }
            }
        });
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |ev: KeyboardEvent| {
        if !dialogs.is_open() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => {
                ev.prevent_default();
                dialogs.close();
            }
            "Tab" => {
                let direction = if ev.shift_key() {
                    TabDirection::Backward
                } else {
                    TabDirection::Forward
                };
                focusables.with_value(|items| {
                    let current = document().active_element().and_then(|active| {
                        items
                            .iter()
                            .position(|el| AsRef::<Element>::as_ref(el) == &active)
                    });
                    if let Some(i) = trap_focus(items.len(), current, direction) {
                        ev.prevent_default();
                        if let Err(e) = items[i].focus() {
                            log::warn!("couldn't move focus: {e:?}");
                        }
                    }
                });
            }
            _ => {}
        }
    });

    view! {
        <div
            class="modal-backdrop"
            class:open=is_open
            aria-hidden=move || (!is_open()).to_string()
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    dialogs.close();
                }
            }
        >
            <div
                node_ref=panel_ref
                class="modal-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
            >
                <button
                    node_ref=close_ref
                    type="button"
                    class="icon-button modal-close"
                    aria-label="Close dialog"
                    on:click=move |_| dialogs.close()
                >
                    "✕"
                </button>
                {move || {
                    dialogs
                        .active
                        .get()
                        .map(|panel| match panel {
                            Panel::Project(project) => {
                                Either::Left(view! { <ProjectDetails project title_id="modal-title" /> })
                            }
                            Panel::Certificate(id) => {
                                Either::Right(view! { <CertificateDetails cert_id=id /> })
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn CertificateDetails(cert_id: &'static str) -> impl IntoView {
    let (Some(cert), Some(image)) = (certificate(cert_id), certificate_asset(cert_id)) else {
        log::warn!("unknown certificate {cert_id:?}");
        return Either::Right(view! {
            <h2 id="modal-title" class="modal-title">"Certificate not found"</h2>
        });
    };
    Either::Left(view! {
        <h2 id="modal-title" class="modal-title">{cert.title}</h2>
        <p class="modal-subtitle">{format!("{} · {}", cert.issuer, cert.year)}</p>
        <img class="certificate-image" src=image alt=format!("{} certificate", cert.title) />
    })
}
