pub mod search;
pub mod session;

pub use search::Span;
pub use session::{Session, SessionError};
