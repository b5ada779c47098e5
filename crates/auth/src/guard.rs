//! Route guard decisions.
//!
//! A pure decision function consumed by the routing layer on every
//! navigation: given the session snapshot and a route's requirements, it
//! decides whether to render, wait, or redirect. There is no hidden state;
//! the same inputs always produce the same decision.

use docdesk_users::{Role, User};

/// Login entry point, offered when authentication is required but absent.
pub const LOGIN_ROUTE: &str = "/login";
/// Default landing page for authenticated users.
pub const DASHBOARD_ROUTE: &str = "/dashboard";
/// Page shown when the session's role is not allowed on a route.
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Snapshot of the session as seen by the routing layer.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// The session is still being restored; no decision can be made yet.
    pub loading: bool,
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl AuthState {
    /// A settled, unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session still restoring from durable storage.
    pub fn restoring() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// A settled session for `user`.
    pub fn authenticated(user: User) -> Self {
        Self {
            loading: false,
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// Whether the session's user holds one of `roles`.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.user
            .as_ref()
            .map(|user| roles.contains(&user.role))
            .unwrap_or(false)
    }
}

/// A route's access requirements.
#[derive(Debug, Clone)]
pub struct RouteRules {
    /// The route needs a session. When false the route is public-only and
    /// authenticated visitors are sent to the dashboard instead.
    pub require_auth: bool,
    /// When set and non-empty, only these roles may enter.
    pub allowed_roles: Option<Vec<Role>>,
}

impl RouteRules {
    /// A route requiring any authenticated session.
    pub fn authenticated() -> Self {
        Self {
            require_auth: true,
            allowed_roles: None,
        }
    }

    /// A route only meaningful to unauthenticated visitors (login,
    /// registration).
    pub fn public_only() -> Self {
        Self {
            require_auth: false,
            allowed_roles: None,
        }
    }

    /// An authenticated route restricted to `roles`.
    pub fn restricted_to(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            require_auth: true,
            allowed_roles: Some(roles.into_iter().collect()),
        }
    }
}

/// The outcome computed for a navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    /// Session restore in flight: render a neutral waiting state.
    Wait,
    /// Send to [`LOGIN_ROUTE`], preserving the requested location so the
    /// login flow can return there.
    RedirectToLogin { from: String },
    /// Send to [`DASHBOARD_ROUTE`].
    RedirectToDashboard,
    /// Send to [`UNAUTHORIZED_ROUTE`].
    RedirectToUnauthorized,
    /// Render the requested route.
    Allow,
}

/// Decide what to do with a navigation to `requested`.
///
/// The rules are evaluated strictly in order: a loading session defers
/// everything, a missing required session beats any role check, and the
/// role check only applies when a role list is present and non-empty.
pub fn decide(state: &AuthState, rules: &RouteRules, requested: &str) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }

    if rules.require_auth && !state.is_authenticated {
        return GuardDecision::RedirectToLogin {
            from: requested.to_string(),
        };
    }

    if !rules.require_auth && state.is_authenticated {
        return GuardDecision::RedirectToDashboard;
    }

    if rules.require_auth {
        if let Some(allowed) = rules.allowed_roles.as_deref() {
            if !allowed.is_empty() && state.user.is_some() && !state.has_role(allowed) {
                return GuardDecision::RedirectToUnauthorized;
            }
        }
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            role,
            avatar: None,
        }
    }

    #[test]
    fn loading_always_waits() {
        let state = AuthState::restoring();

        assert_eq!(
            decide(&state, &RouteRules::authenticated(), "/documents"),
            GuardDecision::Wait
        );
        assert_eq!(
            decide(&state, &RouteRules::public_only(), "/login"),
            GuardDecision::Wait
        );
        assert_eq!(
            decide(&state, &RouteRules::restricted_to([Role::Admin]), "/admin"),
            GuardDecision::Wait
        );
    }

    #[test]
    fn unauthenticated_visitor_is_sent_to_login() {
        let decision = decide(
            &AuthState::anonymous(),
            &RouteRules::authenticated(),
            "/documents/42",
        );

        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                from: "/documents/42".to_string()
            }
        );
    }

    #[test]
    fn missing_session_beats_role_check() {
        let decision = decide(
            &AuthState::anonymous(),
            &RouteRules::restricted_to([Role::Admin]),
            "/admin",
        );

        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                from: "/admin".to_string()
            }
        );
    }

    #[test]
    fn authenticated_visitor_leaves_public_only_pages() {
        let decision = decide(
            &AuthState::authenticated(user(Role::Viewer)),
            &RouteRules::public_only(),
            "/login",
        );

        assert_eq!(decision, GuardDecision::RedirectToDashboard);
    }

    #[test]
    fn disallowed_role_is_sent_to_unauthorized() {
        let decision = decide(
            &AuthState::authenticated(user(Role::Viewer)),
            &RouteRules::restricted_to([Role::Admin]),
            "/admin",
        );

        assert_eq!(decision, GuardDecision::RedirectToUnauthorized);
    }

    #[test]
    fn allowed_role_passes() {
        let decision = decide(
            &AuthState::authenticated(user(Role::Admin)),
            &RouteRules::restricted_to([Role::Admin, Role::Editor]),
            "/admin",
        );

        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn empty_role_list_does_not_restrict() {
        let decision = decide(
            &AuthState::authenticated(user(Role::Viewer)),
            &RouteRules::restricted_to([]),
            "/documents",
        );

        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn plain_authenticated_route_passes_any_role() {
        for role in [Role::Admin, Role::Editor, Role::Viewer] {
            let decision = decide(
                &AuthState::authenticated(user(role)),
                &RouteRules::authenticated(),
                "/dashboard",
            );
            assert_eq!(decision, GuardDecision::Allow);
        }
    }

    #[test]
    fn anonymous_visitor_may_view_public_pages() {
        let decision = decide(&AuthState::anonymous(), &RouteRules::public_only(), "/login");
        assert_eq!(decision, GuardDecision::Allow);
    }

    #[test]
    fn same_inputs_produce_same_decision() {
        let state = AuthState::authenticated(user(Role::Editor));
        let rules = RouteRules::restricted_to([Role::Admin]);

        let first = decide(&state, &rules, "/admin");
        let second = decide(&state, &rules, "/admin");

        assert_eq!(first, second);
    }

    #[test]
    fn state_has_role_matches_membership() {
        let state = AuthState::authenticated(user(Role::Editor));

        assert!(state.has_role(&[Role::Editor]));
        assert!(state.has_role(&[Role::Admin, Role::Editor]));
        assert!(!state.has_role(&[Role::Admin]));
        assert!(!state.has_role(&[]));
        assert!(!AuthState::anonymous().has_role(&[Role::Viewer]));
    }
}
