#![allow(missing_docs)]

//! Drafting session: configuration, pools, hands and the command protocol.

mod command;
mod hand;
pub mod manager;
mod pool;
mod settings;

pub use command::{is_exit_token, Command, Flow, EXIT_TOKENS, MENU};
pub use hand::Hand;
pub use manager::{SessionManager, SESSION_CATEGORIES};
pub use pool::CardPool;
pub use settings::SessionConfig;
