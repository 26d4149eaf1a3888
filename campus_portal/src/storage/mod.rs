mod errors;
mod file;
mod memory;
mod types;

pub use errors::StorageError;
pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
pub use types::TokenStore;
