//! Client-side route surface.

use trimdesk_auth::RouteRequirement;

/// Every navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Gallery,
    Team,
    Delivery,
    Login,
    Register,
    Booking,
    Admin,
    SuperAdmin,
    NotFound,
}

impl Route {
    /// Resolve a path to a route; anything unmatched is `NotFound`.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        match path {
            "/" => Route::Home,
            "/gallery" => Route::Gallery,
            "/team" => Route::Team,
            "/delivery" => Route::Delivery,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/booking" => Route::Booking,
            "/admin" => Route::Admin,
            "/super-admin" => Route::SuperAdmin,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Gallery => "/gallery",
            Route::Team => "/team",
            Route::Delivery => "/delivery",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Booking => "/booking",
            Route::Admin => "/admin",
            Route::SuperAdmin => "/super-admin",
            Route::NotFound => "/404",
        }
    }

    /// Access requirement the gate evaluates for this route.
    pub fn requirement(self) -> RouteRequirement {
        match self {
            Route::Booking => RouteRequirement::RequiresAuth,
            Route::Admin => RouteRequirement::RequiresAdmin,
            Route::SuperAdmin => RouteRequirement::RequiresSuperadmin,
            _ => RouteRequirement::Public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/super-admin"), Route::SuperAdmin);
        assert_eq!(Route::parse("/booking/"), Route::Booking);
    }

    #[test]
    fn unmatched_paths_are_not_found() {
        assert_eq!(Route::parse("/pricing"), Route::NotFound);
        assert_eq!(Route::parse("/admin/settings"), Route::NotFound);
    }

    #[test]
    fn not_found_is_public() {
        assert_eq!(Route::NotFound.requirement(), RouteRequirement::Public);
    }

    #[test]
    fn gated_routes_declare_their_requirement() {
        assert_eq!(Route::Booking.requirement(), RouteRequirement::RequiresAuth);
        assert_eq!(Route::Admin.requirement(), RouteRequirement::RequiresAdmin);
        assert_eq!(
            Route::SuperAdmin.requirement(),
            RouteRequirement::RequiresSuperadmin
        );
    }

    #[test]
    fn parse_and_path_agree_for_real_routes() {
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
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
