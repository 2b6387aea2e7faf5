mod backdrop;
mod contact;
mod hero;
mod nav;
mod reveal;
mod sections;

use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_params_map, path};

use crate::profile::{get_profile, Profile, DEFAULT_PROFILE};

use backdrop::{use_background_media, VideoBackground};
use contact::{ContactSection, Footer};
use hero::Hero;
use nav::Navbar;
use sections::{AboutSection, ExperienceSection, ProjectsSection, SkillsSection};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/v/:profile") view=VariantPage />
            </Routes>
        </Router>
    }
}

/// Axum router for the pages, with static files under the site root as the
/// fallback.
#[cfg(feature = "ssr")]
pub fn router(leptos_options: LeptosOptions) -> axum::Router {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    axum::Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

#[component]
fn HomePage() -> impl IntoView {
    view! { <ProfileView name=DEFAULT_PROFILE.to_string() /> }
}

#[component]
fn VariantPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let name = params
            .read()
            .get("profile")
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
        view! { <ProfileView name /> }
    }
}

#[component]
fn ProfileView(name: String) -> impl IntoView {
    match get_profile(&name) {
        Ok(profile) => Either::Left(view! { <Portfolio profile /> }),
        Err(e) => {
            log::warn!("couldn't render profile {name}: {e}");
            Either::Right(view! { <NotFound /> })
        }
    }
}

/// The whole page for one profile.
#[component]
fn Portfolio(profile: Arc<Profile>) -> impl IntoView {
    let media = use_background_media();
    provide_context(media);

    let Profile {
        name,
        headline,
        summary,
        about,
        contact,
        experience,
        skills,
        projects,
        headings,
        media: assets,
        footer,
    } = profile.as_ref().clone();
    let brand = profile.initials();

    view! {
        <Title text=name.clone() />
        <div class="portfolio-container">
            <VideoBackground src=assets.video />
            <Navbar brand resume=assets.resume />
            <main>
                <Hero name=name.clone() headline summary />
                <AboutSection heading=headings.about about contact=contact.clone() />
                <ExperienceSection heading=headings.experience roles=experience />
                <SkillsSection heading=headings.skills groups=skills />
                <ProjectsSection heading=headings.projects projects />
                <ContactSection heading=headings.contact contact />
            </main>
            <Footer name tagline=footer />
        </div>
    }
}

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    set_not_found_status();

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="luxury-title text-3xl">"Page not found."</h1>
            <a class="btn btn-outline-luxury" href="/">
                "Back to the portfolio"
            </a>
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    async fn get(path: &str) -> (StatusCode, String) {
        let options = LeptosOptions::builder()
            .output_name("portfolio-site")
            .site_root(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
            .build();
        let res = router(options)
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_root_renders_default_profile() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Kamalnath Murugan"));
        assert!(body.contains("Software Developer"));
        assert!(!body.contains("Page not found."));
    }

    #[tokio::test]
    async fn test_variant_route_renders_named_profile() {
        let (status, body) = get("/v/automation").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Kamalnath Murugan"));
        assert!(body.contains("Automation Test Engineer"));
    }

    #[tokio::test]
    async fn test_unknown_profile_is_not_found() {
        let (status, body) = get("/v/nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found."));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        for path in ["/automation", "/v/automation/extra", "/missing.txt"] {
            let (status, body) = get(path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert!(body.contains("Page not found."), "{path}");
        }
    }

    #[tokio::test]
    async fn test_static_assets_are_served() {
        let (status, body) = get("/resume.pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("%PDF"));

        let (status, _) = get("/favicon.ico").await;
        assert_eq!(status, StatusCode::OK);
    }
}
