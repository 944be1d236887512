pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;

pub use config::Config;
pub use console::Console;
pub use error::SessionError;
pub use menu::MenuChoice;
pub use session::{ExitReason, Flow, Session, SessionState, Step};
