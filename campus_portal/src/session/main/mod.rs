mod claims;
mod client;
mod store;

pub use claims::{Claims, decode_claims};
pub use store::SessionStore;
