use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    config::{CONTACT_EMAIL, NOTICE_DISMISS_MS},
    ui::{
        contact::{ContactField, ContactForm},
        notice::Notice,
    },
};

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let invalid = RwSignal::new(None::<ContactField>);
    let notice = RwSignal::new(None::<Notice>);

    let is_invalid = move |field: ContactField| (invalid.get() == Some(field)).to_string();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let msg = match form.validate() {
            Ok(msg) => msg,
            Err(err) => {
                log::debug!("contact form rejected: {err}");
                invalid.set(Some(err.field()));
                notice.set(Some(Notice::error(err.to_string())));
                return;
            }
        };
        invalid.set(None);
        if let Err(e) = window().location().set_href(&msg.mailto(CONTACT_EMAIL)) {
            log::warn!("couldn't open mail client: {e:?}");
            notice.set(Some(Notice::error(format!(
                "Couldn't open your mail client. You can write to {CONTACT_EMAIL} directly."
            ))));
            return;
        }
        notice.set(Some(Notice::success(
            "Your mail client should open with the message ready to send. Thanks!",
        )));
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    view! {
        <form class="contact-form" novalidate="" on:submit=on_submit>
            <div class="form-field">
                <label for="contact-name">"Name"</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    autocomplete="name"
                    required=""
                    aria-invalid=move || is_invalid(ContactField::Name)
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="contact-email">"Email"</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    required=""
                    aria-invalid=move || is_invalid(ContactField::Email)
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-field">
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    required=""
                    aria-invalid=move || is_invalid(ContactField::Message)
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-neon">
                "Send message"
            </button>
        </form>
        <Toast notice />
    }
}

/// Assertive live region showing the latest notice until it times out.
#[component]
fn Toast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| notice.set(None), NOTICE_DISMISS_MS);

    Effect::watch(
        move || notice.get(),
        move |current, _, _| {
            stop();
            if current.is_some() {
                start(());
            }
        },
        false,
    );

    view! {
        <div class="toast-region" aria-live="assertive" aria-atomic="true">
            {move || {
                notice
                    .get()
                    .map(|n| {
                        view! {
                            <div class=n.class()>
                                <span aria-hidden="true">{n.icon()}</span>
                                " "
                                {n.text}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn notice_is_announced_by_a_single_live_region() {
        let html = Owner::new().with(|| {
            let notice = RwSignal::new(Some(Notice::success("Message ready")));
            view! { <Toast notice /> }.to_html()
        });
        assert!(html.contains("Message ready"));
        assert_eq!(html.matches("aria-live=\"assertive\"").count(), 1);
        assert!(html.contains("aria-atomic=\"true\""));
        assert!(!html.contains("role=\"alert\""));
    }
}
