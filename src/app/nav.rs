use leptos::{ev::MouseEvent, prelude::*};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::profile::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Smooth-scroll to a section. Does nothing if it isn't on the page.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no element with id {}", section.id());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Navbar(#[prop(into)] brand: String, resume: Resume) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (download_open, set_download_open) = signal(false);

    let go_to = move |section: Section| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            set_menu_open.set(false);
            scroll_to_section(section);
        }
    };

    view! {
        <nav class="luxury-navbar fixed top-0 inset-x-0 z-50">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-3 flex flex-wrap items-center justify-between">
                <a class="navbar-brand luxury-title text-2xl" href="#home" on:click=go_to(Section::Home)>
                    {brand}
                </a>
                <button
                    class="lg:hidden text-2xl"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class="bi bi-list"></i>
                </button>
                <ul
                    class="w-full lg:w-auto lg:flex items-center gap-6"
                    class:hidden=move || !menu_open.get()
                >
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        class="nav-link block py-2"
                                        href=section.href()
                                        on:click=go_to(section)
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="relative">
                        <button
                            class="nav-link py-2"
                            type="button"
                            on:click=move |_| set_download_open.update(|open| *open = !*open)
                        >
                            "Download"
                        </button>
                        <Show when=move || download_open.get()>
                            <ul class="dropdown-menu absolute right-0 mt-2 rounded-md p-2">
                                <li>
                                    <a
                                        class="dropdown-item whitespace-nowrap"
                                        href=resume.path.clone()
                                        download=resume.filename.clone()
                                        on:click=move |_| set_download_open.set(false)
                                    >
                                        <i class="bi bi-file-earmark-pdf mr-2"></i>
                                        "Download Resume"
                                    </a>
                                </li>
                            </ul>
                        </Show>
                    </li>
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_unique() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_section_links() {
        assert_eq!(Section::Home.href(), "#home");
        assert_eq!(Section::Contact.href(), "#contact");
        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
            assert!(!section.label().is_empty());
        }
    }
}
