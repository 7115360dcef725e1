pub mod commands;
pub mod error;
pub mod inspect;
pub mod session;
pub mod traversal;

pub use error::FsError;
pub use session::Session;
