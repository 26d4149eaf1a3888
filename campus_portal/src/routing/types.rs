use crate::session::Role;

pub const LOGIN_ROUTE: &str = "/login";
pub const STUDENT_DASHBOARD: &str = "/student";
pub const TEACHER_DASHBOARD: &str = "/teacher";
pub const ADMIN_DASHBOARD: &str = "/admin";

/// Static per-route configuration describing authentication and role
/// requirements. Immutable at runtime.
#[derive(Debug, Clone)]
pub struct RouteMeta {
    pub requires_auth: bool,
    /// Roles allowed to visit the route. `None` means unrestricted.
    pub roles: Option<&'static [Role]>,
}

#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

/// Outcome of a navigation check. The guard never fails; unmet conditions
/// always resolve to a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Navigation may proceed unmodified.
    Proceed,
    /// Navigation is replaced with a redirect to the given path.
    Redirect(&'static str),
}

/// The portal's route table: one dashboard per role plus the login page.
/// Alumni share the student dashboard.
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor {
            path: LOGIN_ROUTE,
            name: "Login",
            meta: RouteMeta {
                requires_auth: false,
                roles: None,
            },
        },
        RouteDescriptor {
            path: STUDENT_DASHBOARD,
            name: "StudentDashboard",
            meta: RouteMeta {
                requires_auth: true,
                roles: Some(&[Role::Student, Role::Alumni]),
            },
        },
        RouteDescriptor {
            path: TEACHER_DASHBOARD,
            name: "TeacherDashboard",
            meta: RouteMeta {
                requires_auth: true,
                roles: Some(&[Role::Teacher]),
            },
        },
        RouteDescriptor {
            path: ADMIN_DASHBOARD,
            name: "AdminDashboard",
            meta: RouteMeta {
                requires_auth: true,
                roles: Some(&[Role::Administrator]),
            },
        },
    ]
}
