use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use super::{
    contact::ContactSection,
    dialog::{Dialogs, Panel},
    projects::ProjectsSection,
    reveal::Reveal,
};
use crate::{
    config::{CONTACT_EMAIL, SITE_OWNER, SITE_TAGLINE},
    ui::{catalog::CERTIFICATES, reveal::RevealKind},
};

const SKILL_GROUPS: &[(&str, &[&str])] = &[
    ("Languages", &["Rust", "Go", "Python", "TypeScript"]),
    ("Infrastructure", &["Kubernetes", "Terraform", "AWS", "Cloudflare"]),
    ("Reliability", &["Prometheus", "Grafana", "OpenTelemetry", "Chaos testing"]),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="page-content">
            <Hero />
            <About />
            <section id="projects" class="page-section">
                <Reveal kind=RevealKind::SectionTitle>
                    <h2 class="section-heading">"Projects"</h2>
                </Reveal>
                <ProjectsSection />
            </section>
            <Certificates />
            <section id="contact" class="page-section">
                <Reveal kind=RevealKind::SectionTitle>
                    <h2 class="section-heading">"Contact"</h2>
                </Reveal>
                <Reveal kind=RevealKind::ContactCard class_name="card">
                    <p class="mb-4">
                        "Have a project, a role or a question? Send a note and your mail client will open with it ready to go, or write to "
                        <a class="neon-link" href=format!("mailto:{CONTACT_EMAIL}")>
                            {CONTACT_EMAIL}
                        </a>
                        "."
                    </p>
                    <ContactSection />
                </Reveal>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="page-section hero">
            <p class="hero-kicker">"Hi, I'm"</p>
            <h1 class="hero-title neon-text">{SITE_OWNER}</h1>
            <p class="hero-subtitle">{SITE_TAGLINE}</p>
            <p class="hero-lede">
                "I design and run the platforms that let product teams ship safely: fast pipelines, self-healing clusters and dashboards people actually read."
            </p>
            <div class="hero-actions">
                <a href="#projects" class="btn btn-neon">
                    "See my work"
                </a>
                <A href="/resume" attr:class="btn btn-ghost">
                    "Resume"
                </A>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="page-section">
            <Reveal kind=RevealKind::SectionTitle>
                <h2 class="section-heading">"About"</h2>
            </Reveal>
            <div class="about-grid">
                <Reveal kind=RevealKind::AboutText>
                    <p class="mb-4 leading-relaxed">
                        "I started out racking servers for a small agency and never stopped caring about what happens after "
                        <code>"git push"</code>
                        ". Today I build internal platforms that make the safe path the easy one."
                    </p>
                    <p class="leading-relaxed">
                        "Outside of work I tinker with my homelab, contribute to open-source tooling and run far too many cron jobs for a household of two."
                    </p>
                </Reveal>
                <div class="skill-grid">
                    {SKILL_GROUPS
                        .iter()
                        .map(|(group, skills)| {
                            view! {
                                <Reveal kind=RevealKind::SkillGroup class_name="card">
                                    <h3 class="card-title">{*group}</h3>
                                    <ul class="tag-list">
                                        {skills
                                            .iter()
                                            .map(|s| view! { <li class="tag">{*s}</li> })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Certificates() -> impl IntoView {
    let dialogs = expect_context::<Dialogs>();
    view! {
        <section id="certificates" class="page-section">
            <Reveal kind=RevealKind::SectionTitle>
                <h2 class="section-heading">"Certificates"</h2>
            </Reveal>
            <div class="cert-grid">
                {CERTIFICATES
                    .iter()
                    .map(|cert| {
                        view! {
                            <Reveal kind=RevealKind::CertificateCard class_name="card">
                                <h3 class="card-title">{cert.title}</h3>
                                <p class="card-text">{format!("{} · {}", cert.issuer, cert.year)}</p>
                                <button
                                    type="button"
                                    class="btn btn-neon"
                                    on:click=move |_| dialogs.open(Panel::Certificate(cert.id))
                                >
                                    "View certificate"
                                </button>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
