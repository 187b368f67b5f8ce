use url::Url;

use crate::Skill;

/// Client-side screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Skill(Skill),
    Root,
}

impl Route {
    /// Parses a path such as `/image?x=1`. Unknown paths map to `Root`.
    pub fn parse(path: &str) -> Route {
        let Ok(base) = Url::parse("app://playground/") else {
            return Route::Root;
        };
        let Ok(joined) = base.join(path.trim()) else {
            return Route::Root;
        };
        let normalized = joined.path().trim_end_matches('/');
        match normalized {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            other => Skill::ALL
                .into_iter()
                .find(|skill| skill.route_path() == other)
                .map(Route::Skill)
                .unwrap_or(Route::Root),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Skill(skill) => skill.route_path(),
            Route::Root => "/",
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, Route::Dashboard | Route::Skill(_))
    }

    /// Applies the auth redirects. The result is never `Root`.
    pub fn resolve(self, authenticated: bool) -> Route {
        match self {
            Route::Login | Route::Register if authenticated => Route::Dashboard,
            Route::Root if authenticated => Route::Dashboard,
            Route::Root => Route::Login,
            route if route.is_protected() && !authenticated => Route::Login,
            route => route,
        }
    }
}
