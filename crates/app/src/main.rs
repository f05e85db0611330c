//! Headless smoke shell: restore the session and report where each
//! route would land. Useful for checking a deployment's configuration
//! and a saved session without a UI.

use trimdesk_app::{App, Resolution, Route};

#[tokio::main]
async fn main() {
    trimdesk_observability::init();

    let app = match App::from_env() {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("could not set up session storage: {err}");
            std::process::exit(1);
        }
    };

    let state = app.session.restore().await;
    match state.identity() {
        Some(identity) => {
            tracing::info!(name = %identity.name, role = %identity.role, "session restored")
        }
        None => tracing::info!("no saved session"),
    }

    for route in [
        Route::Home,
        Route::Gallery,
        Route::Team,
        Route::Delivery,
        Route::Login,
        Route::Register,
        Route::Booking,
        Route::Admin,
        Route::SuperAdmin,
    ] {
        let resolution = app.router.navigate(route.path()).await;
        match resolution {
            Resolution::Render(route) => tracing::info!(path = route.path(), "renders"),
            Resolution::Loading => tracing::info!(path = route.path(), "still loading"),
            Resolution::Redirected { from, to } => {
                tracing::info!(path = from.path(), to = to.path(), "redirects")
            }
        }
    }
}
