pub mod error;
pub mod locator;
pub mod lookup;
pub mod session;

pub use error::{LoadFailure, SessionError};
pub use locator::find_next_pending;
pub use session::{Session, SessionEvent};
