mod errors;
mod main;
mod types;

pub use errors::SessionError;
pub use main::{Claims, SessionStore, decode_claims};
pub use types::{Role, RoleEntry, UserProfile};
