use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::{CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, SITE_OWNER};

struct Role {
    title: &'static str,
    dates: &'static str,
    notes: &'static [&'static str],
}

struct Employer {
    name: &'static str,
    roles: &'static [Role],
}

const SKILLS: &[(&str, &str)] = &[
    ("Languages", "Rust, Go, Python, TypeScript, Bash, SQL"),
    ("Cloud", "AWS, GCP, Cloudflare, Terraform, Pulumi"),
    ("Platform", "Kubernetes, Flux, Helm, Docker, Linux, Nginx"),
    ("Observability", "Prometheus, Grafana, OpenTelemetry, Loki"),
];

const EDUCATION: &[(&str, &str, &str)] = &[
    ("University of Lagos", "Computer Engineering (B.Eng.)", "2012-2017"),
];

const EXPERIENCE: &[Employer] = &[
    Employer {
        name: "Northwind Logistics",
        roles: &[
            Role {
                title: "Senior Platform Engineer",
                dates: "Feb 2022 - Present",
                notes: &[
                    "Own the internal developer platform serving 40+ product teams across three regions.",
                    "Cut median deploy time from 22 to 6 minutes by moving builds to cached remote executors.",
                    "Led the migration of 120 services from hand-managed VMs to Kubernetes with zero customer-facing downtime.",
                ],
            },
            Role {
                title: "Site Reliability Engineer",
                dates: "Jun 2019 - Feb 2022",
                notes: &[
                    "Introduced SLOs and error budgets for the shipment tracking API.",
                    "Wrote the on-call runbooks and incident review process still in use today.",
                ],
            },
        ],
    },
    Employer {
        name: "Brightline Studio",
        roles: &[Role {
            title: "Backend Developer",
            dates: "Aug 2017 - Jun 2019",
            notes: &[
                "Built REST and webhook integrations for e-commerce clients in Python and Go.",
                "Maintained the agency's shared hosting fleet and automated its backups.",
            ],
        }],
    },
];

#[component]
pub fn CVPage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <div class="grid mx-auto page-content">
            <h1 class="font-bold text-2xl text-center mb-8">
                "Resume"
                <button
                    type="button"
                    class="relative top-1 ml-4 neon-link"
                    aria-label="Print or save as PDF"
                    on:click=move |_| {
                        if let Err(e) = window().print() {
                            log::warn!("couldn't open print dialog: {e:?}");
                        }
                    }
                >
                    "⤓"
                </button>
            </h1>
            <div
                id="resume"
                class="grid max-w-4xl grid-cols-1 md:grid-cols-3 p-8 leading-snug rounded-lg resume-sheet"
            >
                <Sidebar />
                <Experience />
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");
    view! {
        <div class="space-y-4 p-2">
            <div class="text-center">
                <h2 class="text-2xl font-bold">{SITE_OWNER}</h2>
            </div>
            <ul class="flex flex-col gap-y-1.5 text-sm rounded-sm border px-3 py-4">
                <li>"Remote · Lisbon, PT"</li>
                <li>
                    <a href=mailto>{CONTACT_EMAIL}</a>
                </li>
                <li>
                    <a href=GITHUB_URL target="_blank" rel="noreferrer">
                        "GitHub"
                    </a>
                </li>
                <li>
                    <a href=LINKEDIN_URL target="_blank" rel="noreferrer">
                        "LinkedIn"
                    </a>
                </li>
            </ul>
            <section id="skills" class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Skills"</h3>
                {SKILLS
                    .iter()
                    .map(|(group, items)| {
                        view! {
                            <div class="space-y-1 mb-3">
                                <h4>{*group}</h4>
                                <p class="text-sm">{*items}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section id="education" class="grid">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Education"</h3>
                {EDUCATION
                    .iter()
                    .map(|(school, degree, years)| {
                        view! {
                            <div class="text-left">
                                <strong>{*school}</strong>
                                <div>{*degree}</div>
                                <div class="font-bold">{*years}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <div class="col-span-2 space-y-4 p-2">
            <section id="summary">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Summary"</h3>
                <p>
                    <strong>"Platform engineer with 7+ years keeping busy systems fast and boring."</strong>
                    " I build the paved roads other teams ship on: CI/CD, Kubernetes platforms, observability and the automation that ties them together."
                </p>
            </section>
            <section id="experience" class="grid gap-y-3">
                <h3 class="mb-2 border-b pb-0.5 font-bold">"Experience"</h3>
                {EXPERIENCE
                    .iter()
                    .map(|employer| {
                        view! {
                            <div class="space-y-2">
                                <h4 class="text-left font-bold">{employer.name}</h4>
                                {employer
                                    .roles
                                    .iter()
                                    .map(|role| {
                                        view! {
                                            <div class="flex items-start justify-between">
                                                <strong>{role.title}</strong>
                                                <div class="shrink-0 text-right font-bold">
                                                    {role.dates}
                                                </div>
                                            </div>
                                            <ul class="list-disc ml-5">
                                                {role
                                                    .notes
                                                    .iter()
                                                    .map(|note| view! { <li>{*note}</li> })
                                                    .collect_view()}
                                            </ul>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
