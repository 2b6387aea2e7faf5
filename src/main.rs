#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use leptos::prelude::*;
    use portfolio_site::{app::router, profile};

    pretty_env_logger::init();

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;

    // parse every profile up front so a broken content file fails the deploy
    for name in profile::list_profiles() {
        if let Err(e) = profile::get_profile(&name) {
            panic!("profile {name} is unusable: {e}");
        }
    }

    let app = router(conf.leptos_options);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
