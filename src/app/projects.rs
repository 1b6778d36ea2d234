use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};
use leptos::server_fn::codec::GetUrl;

use super::{
    dialog::{Dialogs, Panel},
    reveal::Reveal,
};
#[cfg(feature = "ssr")]
use crate::projects::{get_project, get_project_list};
use crate::{
    projects::{Project, GLOBAL_LIST_CACHE, GLOBAL_PROJECT_CACHE},
    ui::reveal::RevealKind,
};

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    get_project_list().map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(input = GetUrl)]
pub async fn get_project_server(name: String) -> Result<Project, ServerFnError> {
    get_project(&name).map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = Resource::new(
        || (),
        |_| async move {
            let cache = &*GLOBAL_LIST_CACHE;
            if let Some(list) = cache.get("") {
                return (*list).clone();
            }
            let list = match get_projects_server().await {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("couldn't load projects: {e}");
                    Vec::new()
                }
            };
            #[cfg(feature = "hydrate")]
            cache.insert(String::new(), list.clone());
            list
        },
    );

    view! {
        <Transition fallback=move || {
            view! {
                <div class="project-grid">
                    <div class="loading-skeleton h-48 rounded"></div>
                    <div class="loading-skeleton h-48 rounded"></div>
                    <div class="loading-skeleton h-48 rounded"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let projects = projects.await;
                view! {
                    <div class="project-grid">
                        {projects
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()}
                    </div>
                }
            })}
        </Transition>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let dialogs = expect_context::<Dialogs>();
    let meta = project.meta.clone();
    let href = format!("/projects/{}", meta.name);
    view! {
        <Reveal kind=RevealKind::ProjectCard class_name="card">
            <h3 class="card-title">{meta.title}</h3>
            <p class="card-text">{meta.summary}</p>
            <TagList tags=meta.tags />
            <div class="card-actions">
                <button
                    type="button"
                    class="btn btn-neon"
                    on:click=move |_| dialogs.open(Panel::Project(project.clone()))
                >
                    "Details"
                </button>
                <A href=href attr:class="btn btn-ghost">
                    "Permalink"
                </A>
            </div>
        </Reveal>
    }
}

#[component]
fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <ul class="tag-list" aria-label="Technologies">
            {tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
        </ul>
    }
}

/// Full write-up of a project, shared by the dialog and the permalink page.
#[component]
pub fn ProjectDetails(project: Project, #[prop(optional)] title_id: Option<&'static str>) -> impl IntoView {
    let Project { meta, content } = project;
    view! {
        <h2 id=title_id class="modal-title">{meta.title}</h2>
        <p class="modal-subtitle">{meta.date.format("%B %Y").to_string()}</p>
        <TagList tags=meta.tags />
        <article class="prose max-w-none" inner_html=content></article>
        <div class="card-actions">
            {meta
                .repo
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-neon">
                            "Source"
                        </a>
                    }
                })}
            {meta
                .live
                .map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="btn btn-ghost">
                            "Live site"
                        </a>
                    }
                })}
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_name = move || params.get().get("name").unwrap_or_default();
    let project = Resource::new(project_name, move |name| async move {
        let cache = &*GLOBAL_PROJECT_CACHE;
        if let Some(p) = cache.get(&name) {
            return Ok((*p).clone());
        }
        let project = get_project_server(name.clone()).await;
        // the server caches inside get_project; misses are never stored
        #[cfg(feature = "hydrate")]
        if let Ok(p) = &project {
            cache.insert(name, p.clone());
        }
        project
    });

    view! {
        <Title text="Project" />
        <div class="page-content max-w-3xl mx-auto">
            <A href="/#projects" attr:class="neon-link">
                "← All projects"
            </A>
            <Suspense fallback=move || {
                view! { <div class="loading-skeleton h-64 rounded mt-6"></div> }
            }>
                {move || Suspend::new(async move {
                    match project.await {
                        Ok(p) => {
                            Either::Left(
                                view! {
                                    <Title text=p.meta.title.clone() />
                                    <div class="mt-6">
                                        <ProjectDetails project=p />
                                    </div>
                                },
                            )
                        }
                        Err(_) => {
                            Either::Right(
                                view! { <p class="mt-6">"Project not found."</p> },
                            )
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}
