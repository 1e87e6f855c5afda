use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::auth::model::AuthenticatedUser;

/// Every page of the web client. The server owns this enumeration so the
/// login response and the view-resolution endpoint can name navigation
/// targets the client understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    // Public views
    PublicDashboard,
    Register,
    PublicWarga,
    PublicIuran,

    // Auth view
    Login,

    // Admin views
    Warga,
    Keluarga,
    Iuran,
    Pengurus,
}

impl View {
    /// The view shown before any navigation happens.
    pub fn initial() -> Self {
        View::PublicDashboard
    }

    pub fn is_admin(self) -> bool {
        matches!(self, View::Warga | View::Keluarga | View::Iuran | View::Pengurus)
    }
}

/// Outcome of resolving a requested view against the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewResolution {
    pub view: View,
    pub notice: Option<String>,
}

impl ViewResolution {
    fn to(view: View) -> Self {
        Self { view, notice: None }
    }
}

/// Corrective navigation rules, applied whenever the session state is
/// known:
/// 1. a logged-in admin on the login page lands on warga management;
/// 2. without a session every admin view falls back to the login page;
/// 3. pengurus management is ketua-only - other roles land on warga
///    management with a permission notice.
/// Any other request passes through unchanged.
pub fn resolve_view(requested: View, session: Option<&AuthenticatedUser>) -> ViewResolution {
    match session {
        Some(user) => {
            if requested == View::Login {
                return ViewResolution::to(View::Warga);
            }
            if requested == View::Pengurus && !user.is_ketua() {
                return ViewResolution {
                    view: View::Warga,
                    notice: Some(
                        "Hanya ketua yang dapat mengelola data pengurus.".to_string(),
                    ),
                };
            }
            ViewResolution::to(requested)
        }
        None => {
            if requested.is_admin() {
                return ViewResolution::to(View::Login);
            }
            ViewResolution::to(requested)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_ketua_user, create_pengurus_user};

    #[test]
    fn test_initial_view_is_public_dashboard() {
        assert_eq!(View::initial(), View::PublicDashboard);
    }

    #[test]
    fn test_admin_partition() {
        assert!(View::Warga.is_admin());
        assert!(View::Keluarga.is_admin());
        assert!(View::Iuran.is_admin());
        assert!(View::Pengurus.is_admin());
        assert!(!View::PublicDashboard.is_admin());
        assert!(!View::Register.is_admin());
        assert!(!View::PublicWarga.is_admin());
        assert!(!View::PublicIuran.is_admin());
        assert!(!View::Login.is_admin());
    }

    #[test]
    fn test_logged_in_user_on_login_page_lands_on_warga() {
        let user = create_pengurus_user();
        let res = resolve_view(View::Login, Some(&user));
        assert_eq!(res.view, View::Warga);
        assert!(res.notice.is_none());
    }

    #[test]
    fn test_no_session_admin_views_fall_back_to_login() {
        for view in [View::Warga, View::Keluarga, View::Iuran, View::Pengurus] {
            let res = resolve_view(view, None);
            assert_eq!(res.view, View::Login);
        }
    }

    #[test]
    fn test_no_session_public_views_pass_through() {
        for view in [
            View::PublicDashboard,
            View::Register,
            View::PublicWarga,
            View::PublicIuran,
            View::Login,
        ] {
            let res = resolve_view(view, None);
            assert_eq!(res.view, view);
        }
    }

    #[test]
    fn test_pengurus_is_redirected_from_staff_view_with_notice() {
        let user = create_pengurus_user();
        let res = resolve_view(View::Pengurus, Some(&user));
        assert_eq!(res.view, View::Warga);
        assert!(res.notice.is_some());
    }

    #[test]
    fn test_ketua_is_not_redirected_from_staff_view() {
        let user = create_ketua_user();
        let res = resolve_view(View::Pengurus, Some(&user));
        assert_eq!(res.view, View::Pengurus);
        assert!(res.notice.is_none());
    }

    #[test]
    fn test_logged_in_user_keeps_other_admin_views() {
        let user = create_pengurus_user();
        for view in [View::Warga, View::Keluarga, View::Iuran] {
            let res = resolve_view(view, Some(&user));
            assert_eq!(res.view, view);
            assert!(res.notice.is_none());
        }
    }

    #[test]
    fn test_view_serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(View::PublicDashboard).unwrap(),
            "PUBLIC_DASHBOARD"
        );
        assert_eq!(serde_json::to_value(View::Warga).unwrap(), "WARGA");
        assert_eq!(serde_json::to_value(View::Pengurus).unwrap(), "PENGURUS");
    }
}
