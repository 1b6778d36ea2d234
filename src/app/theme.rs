use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::{config::THEME_STORAGE_KEY, ui::theme::Theme};

const THEME_ATTRIBUTE: &str = "data-theme";

/// Persisted light/dark preference, provided once by the app root.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    write: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Persists `theme`. Setting the current theme again does nothing.
    pub fn set_theme(&self, theme: Theme) {
        if self.theme.get_untracked() != theme {
            log::debug!("switching theme to {theme}");
            self.write.set(theme);
        }
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Value the server renders with; the stored preference is only read once
/// hydration has finished so the hydrated markup matches it.
pub const SERVER_THEME: Theme = Theme::Dark;

pub fn provide_theme() {
    let (theme, write, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default()
            .initial_value(SERVER_THEME)
            .delay_during_hydration(true),
    );
    Effect::new(move |_| apply_theme(theme.get()));
    provide_context(ThemeContext { theme, write });
}

fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        log::debug!("no document element, skipping theme");
        return;
    };
    if root.get_attribute(THEME_ATTRIBUTE).as_deref() == Some(theme.as_str()) {
        return;
    }
    if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
        log::warn!("couldn't apply theme: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            class="icon-button theme-toggle"
            aria-label=move || ctx.get_theme().toggle_label()
            title=move || ctx.get_theme().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            <span aria-hidden="true">{move || ctx.get_theme().toggle_icon()}</span>
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn server_render_uses_shell_theme() {
        let owner = Owner::new();
        owner.with(|| {
            provide_theme();
            let ctx = expect_context::<ThemeContext>();
            assert_eq!(ctx.theme.get_untracked(), SERVER_THEME);
        });
    }

    #[test]
    fn server_theme_is_the_default() {
        assert_eq!(SERVER_THEME, Theme::default());
    }
}
