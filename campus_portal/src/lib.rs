//! campus-portal - Session and navigation client for the campus portal backend
//!
//! This crate is the non-visual core of the school-management portal front
//! end: a session store over the identity API, a role-aware route guard
//! composed on top of it, and a CSV export helper for the portal's tabular
//! views.

mod config;
mod export;
mod routing;
mod session;
mod storage;
#[cfg(test)]
mod test_utils;
mod utils;

// Re-export the configuration knobs
pub use config::{PORTAL_API_BASE_URL, PORTAL_DOWNLOAD_DIR, PORTAL_TOKEN_FILE};

pub use session::{
    Claims, Role, RoleEntry, SessionError, SessionStore, UserProfile, decode_claims,
};

pub use routing::{
    ADMIN_DASHBOARD, LOGIN_ROUTE, NavigationOutcome, RouteDescriptor, RouteMeta,
    STUDENT_DASHBOARD, TEACHER_DASHBOARD, before_navigation, default_routes, resolve_root,
};

pub use export::{
    ACTIONS_COLUMN_KEY, ColumnDescriptor, ExportError, export_file_name, render_csv, write_csv,
    write_csv_to,
};

pub use storage::{FileTokenStore, MemoryTokenStore, StorageError, TokenStore};
