// Route path constants - single source of truth for all paths.
//
// Application routes are relative to the configured base path and are joined
// with it at registration time via `under_base`. HEALTHZ is the one route
// registered outside the base path (liveness probe for the hosting runner).

pub const GREETING: &str = "/";
pub const INFO: &str = "/info";
pub const STATIC_ASSETS: &str = "/static";
pub const DOCS: &str = "/docs";
pub const OPENAPI_JSON: &str = "/api-doc/openapi.json";
pub const HEALTHZ: &str = "/healthz";

/// Join a route with the base path, e.g. `under_base("/demo", "/info")`
/// is `/demo/info` and `under_base("/demo", "/")` is `/demo`.
pub fn under_base(base: &str, route: &str) -> String {
    if route == GREETING {
        base.to_string()
    } else {
        format!("{base}{route}")
    }
}
