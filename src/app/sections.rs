use leptos::prelude::*;

use crate::profile::{About, Contact, Heading, Project, Role, SkillGroup};

use super::{
    nav::Section,
    reveal::{Reveal, RevealEffect},
};

/// Stagger between consecutive cards in a grid.
const STAGGER_MS: u32 = 100;

#[component]
pub fn SectionHeading(heading: Heading) -> impl IntoView {
    view! {
        <div class="mb-10 text-center">
            <Reveal>
                <h2 class="section-title">{heading.title}</h2>
            </Reveal>
            <Reveal delay_ms=STAGGER_MS>
                <p class="section-subtitle">{heading.subtitle}</p>
            </Reveal>
        </div>
    }
}

#[component]
pub fn AboutSection(heading: Heading, about: About, contact: Contact) -> impl IntoView {
    let linkedin = contact.linkedin_short();
    view! {
        <section id=Section::About.id() class="luxury-section">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading heading />
                <div class="grid gap-6 lg:grid-cols-2 mb-6">
                    <Reveal effect=RevealEffect::FadeRight class="luxury-card">
                        <div class="card-icon">
                            <i class="bi bi-person-check"></i>
                        </div>
                        <h3 class="card-title">"Professional Summary"</h3>
                        <p class="card-text">{about.summary}</p>
                    </Reveal>
                    <Reveal effect=RevealEffect::FadeLeft class="luxury-card">
                        <div class="card-icon">
                            <i class="bi bi-award"></i>
                        </div>
                        <h3 class="card-title">"Key Achievements"</h3>
                        <p class="card-text">{about.achievements}</p>
                    </Reveal>
                </div>
                <Reveal class="luxury-card">
                    <div class="grid gap-6 md:grid-cols-2">
                        <div>
                            <h4 class="card-title">"Education"</h4>
                            {about
                                .education
                                .into_iter()
                                .map(|ed| {
                                    view! {
                                        <div class="mb-3">
                                            <h5 class="text-warning">{ed.degree}</h5>
                                            <p class="card-text">{ed.school}</p>
                                            <p class="card-text">{ed.details}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div>
                            <h4 class="card-title">"Contact Information"</h4>
                            <div class="contact-details">
                                <p class="card-text">
                                    <i class="bi bi-geo-alt text-warning mr-2"></i>
                                    {contact.location}
                                </p>
                                <p class="card-text">
                                    <i class="bi bi-envelope text-warning mr-2"></i>
                                    {contact.email}
                                </p>
                                <p class="card-text">
                                    <i class="bi bi-phone text-warning mr-2"></i>
                                    {contact.phone}
                                </p>
                                <p class="card-text">
                                    <i class="bi bi-linkedin text-warning mr-2"></i>
                                    {linkedin}
                                </p>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(heading: Heading, roles: Vec<Role>) -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="luxury-section">
            <div class="mx-auto max-w-5xl px-4">
                <SectionHeading heading />
                <div class="timeline">
                    {roles
                        .into_iter()
                        .enumerate()
                        .map(|(i, role)| {
                            view! {
                                <Reveal effect=RevealEffect::alternating(i) class="timeline-item">
                                    <div class="timeline-marker"></div>
                                    <div class="timeline-content">
                                        <div class="timeline-date">{role.period}</div>
                                        <h3 class="timeline-title">{role.title}</h3>
                                        <div class="timeline-company">
                                            {format!("{} • {}", role.company, role.location)}
                                        </div>
                                        <p class="timeline-description">{role.description}</p>
                                    </div>
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
pub fn SkillsSection(heading: Heading, groups: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="luxury-section">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading heading />
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    {groups
                        .into_iter()
                        .enumerate()
                        .map(|(i, group)| {
                            let delay_ms = i as u32 * STAGGER_MS;
                            view! {
                                <Reveal effect=RevealEffect::ZoomIn delay_ms class="skill-item">
                                    <div class="skill-icon">
                                        <i class=format!("bi {}", group.icon)></i>
                                    </div>
                                    <div class="skill-name">{group.name}</div>
                                    <p class="card-text mt-2">{group.items.join(", ")}</p>
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
pub fn ProjectsSection(heading: Heading, projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="luxury-section">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading heading />
                <div class="grid gap-6 lg:grid-cols-2">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            let delay_ms = (i as u32).saturating_sub(1) * STAGGER_MS;
                            view! {
                                <Reveal delay_ms class="luxury-card">
                                    <div class="card-icon">
                                        <i class=format!("bi {}", project.icon)></i>
                                    </div>
                                    <h3 class="card-title">{project.title}</h3>
                                    <p class="card-text">
                                        <strong>"Duration: "</strong>
                                        {project.period}
                                        <br />
                                        {project.description}
                                    </p>
                                    <div class="mt-3 flex flex-wrap gap-2">
                                        {project
                                            .tags
                                            .into_iter()
                                            .map(|tag| view! { <span class="badge">{tag}</span> })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
