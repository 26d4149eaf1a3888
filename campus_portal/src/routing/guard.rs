use crate::session::SessionStore;

use super::types::{
    ADMIN_DASHBOARD, LOGIN_ROUTE, NavigationOutcome, RouteDescriptor, STUDENT_DASHBOARD,
    TEACHER_DASHBOARD,
};

/// Gate a navigation to `route` against the current session.
///
/// Runs before every navigation. A held token with no loaded profile is
/// hydrated first; if that fails the session ends up logged out and the
/// checks below take over, so the guard itself never errors.
pub async fn before_navigation(
    session: &mut SessionStore,
    route: &RouteDescriptor,
) -> NavigationOutcome {
    if session.token().is_some() && session.user().is_none() {
        if let Err(e) = session.fetch_user().await {
            tracing::warn!("Session hydration failed: {}", e);
        }
    }

    if route.meta.requires_auth && !session.is_authenticated() {
        tracing::debug!("Unauthenticated navigation to {}, redirecting", route.path);
        return NavigationOutcome::Redirect(LOGIN_ROUTE);
    }

    if let Some(allowed) = route.meta.roles {
        let permitted = session
            .current_role()
            .is_some_and(|role| allowed.contains(&role));
        if !permitted {
            let target = dashboard_for(session);
            tracing::debug!(
                "Role not permitted on {}, redirecting to {}",
                route.path,
                target
            );
            return NavigationOutcome::Redirect(target);
        }
    }

    NavigationOutcome::Proceed
}

/// Resolve the root path eagerly by role precedence instead of rendering a
/// page. Alumni are mapped to the student view; an unauthenticated session
/// falls back to login.
pub fn resolve_root(session: &SessionStore) -> &'static str {
    if !session.is_authenticated() {
        return LOGIN_ROUTE;
    }
    if session.is_student() {
        STUDENT_DASHBOARD
    } else if session.is_teacher() {
        TEACHER_DASHBOARD
    } else if session.is_admin() {
        ADMIN_DASHBOARD
    } else if session.is_alumni() {
        STUDENT_DASHBOARD
    } else {
        LOGIN_ROUTE
    }
}

/// Dashboard for the active role on a role-mismatch redirect, checked in
/// fixed precedence: student, then teacher, then administrator. No match
/// falls back to login.
fn dashboard_for(session: &SessionStore) -> &'static str {
    if session.is_student() {
        STUDENT_DASHBOARD
    } else if session.is_teacher() {
        TEACHER_DASHBOARD
    } else if session.is_admin() {
        ADMIN_DASHBOARD
    } else {
        LOGIN_ROUTE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::types::default_routes;
    use crate::session::{Role, RoleEntry, UserProfile};
    use crate::storage::MemoryTokenStore;
    use std::sync::Arc;

    fn route(path: &str) -> RouteDescriptor {
        default_routes()
            .into_iter()
            .find(|r| r.path == path)
            .expect("route must exist in the default table")
    }

    fn logged_out() -> SessionStore {
        SessionStore::new(Arc::new(MemoryTokenStore::default()))
    }

    fn logged_in_as(role: Role) -> SessionStore {
        let mut session = logged_out();
        session.token = Some("tok".to_string());
        session.user = Some(UserProfile {
            id: "u1".to_string(),
            name: "Test User".to_string(),
            gender: None,
            address: None,
            phone_number: None,
            email: None,
            is_active: Some(true),
            roles: vec![RoleEntry {
                role: role.as_str().to_string(),
            }],
        });
        session.roles = vec![role];
        session.current_role = Some(role);
        session
    }

    /// Test that an unauthenticated session is redirected to login from
    /// any route requiring authentication
    #[tokio::test]
    async fn test_unauthenticated_redirects_to_login() {
        let mut session = logged_out();
        for path in [STUDENT_DASHBOARD, TEACHER_DASHBOARD, ADMIN_DASHBOARD] {
            let outcome = before_navigation(&mut session, &route(path)).await;
            assert_eq!(outcome, NavigationOutcome::Redirect(LOGIN_ROUTE));
        }
    }

    /// Test that the login route is always reachable
    #[tokio::test]
    async fn test_login_route_open() {
        let mut session = logged_out();
        let outcome = before_navigation(&mut session, &route(LOGIN_ROUTE)).await;
        assert_eq!(outcome, NavigationOutcome::Proceed);
    }

    /// Test that a permitted role proceeds unmodified
    #[tokio::test]
    async fn test_matching_role_proceeds() {
        let mut session = logged_in_as(Role::Teacher);
        let outcome = before_navigation(&mut session, &route(TEACHER_DASHBOARD)).await;
        assert_eq!(outcome, NavigationOutcome::Proceed);
    }

    /// Test that a student hitting a teacher-only route is sent to the
    /// student dashboard, not the teacher one
    #[tokio::test]
    async fn test_role_mismatch_redirects_to_own_dashboard() {
        let mut session = logged_in_as(Role::Student);
        let outcome = before_navigation(&mut session, &route(TEACHER_DASHBOARD)).await;
        assert_eq!(outcome, NavigationOutcome::Redirect(STUDENT_DASHBOARD));
    }

    /// Test that an administrator hitting the student dashboard is sent to
    /// the admin dashboard
    #[tokio::test]
    async fn test_admin_redirected_from_student_route() {
        let mut session = logged_in_as(Role::Administrator);
        let outcome = before_navigation(&mut session, &route(STUDENT_DASHBOARD)).await;
        assert_eq!(outcome, NavigationOutcome::Redirect(ADMIN_DASHBOARD));
    }

    /// Test that alumni may visit the student dashboard
    #[tokio::test]
    async fn test_alumni_allowed_on_student_dashboard() {
        let mut session = logged_in_as(Role::Alumni);
        let outcome = before_navigation(&mut session, &route(STUDENT_DASHBOARD)).await;
        assert_eq!(outcome, NavigationOutcome::Proceed);
    }

    /// Test that alumni hitting a restricted route fall back to login on
    /// the mismatch path (the precedence list has no alumni entry)
    #[tokio::test]
    async fn test_alumni_mismatch_falls_back_to_login() {
        let mut session = logged_in_as(Role::Alumni);
        let outcome = before_navigation(&mut session, &route(ADMIN_DASHBOARD)).await;
        assert_eq!(outcome, NavigationOutcome::Redirect(LOGIN_ROUTE));
    }

    /// Test root resolution for each role and for a logged-out session
    #[test]
    fn test_resolve_root() {
        assert_eq!(resolve_root(&logged_out()), LOGIN_ROUTE);
        assert_eq!(resolve_root(&logged_in_as(Role::Student)), STUDENT_DASHBOARD);
        assert_eq!(resolve_root(&logged_in_as(Role::Teacher)), TEACHER_DASHBOARD);
        assert_eq!(
            resolve_root(&logged_in_as(Role::Administrator)),
            ADMIN_DASHBOARD
        );
        // Alumni see the student view
        assert_eq!(resolve_root(&logged_in_as(Role::Alumni)), STUDENT_DASHBOARD);
    }

    /// Test that a token with no loaded profile counts as authenticated
    /// for an unrestricted route even before hydration
    #[tokio::test]
    async fn test_unrestricted_route_with_profile_loaded() {
        let mut session = logged_in_as(Role::Student);
        let unrestricted = RouteDescriptor {
            path: "/about",
            name: "About",
            meta: crate::routing::types::RouteMeta {
                requires_auth: true,
                roles: None,
            },
        };
        let outcome = before_navigation(&mut session, &unrestricted).await;
        assert_eq!(outcome, NavigationOutcome::Proceed);
    }
}
