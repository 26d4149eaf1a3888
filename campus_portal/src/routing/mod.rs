mod guard;
mod types;

pub use guard::{before_navigation, resolve_root};
pub use types::{
    ADMIN_DASHBOARD, LOGIN_ROUTE, NavigationOutcome, RouteDescriptor, RouteMeta,
    STUDENT_DASHBOARD, TEACHER_DASHBOARD, default_routes,
};
