#![warn(clippy::all, missing_docs)]

//! Core drafting logic for the Mysterium card organiser.
//!
//! This crate hosts the card catalog, set-up rules, session
//! configuration, card pools and hands, and the filesystem sink
//! used by the command-line frontend.

pub mod catalog;
pub mod config;
pub mod error;
pub mod materialize;
pub mod rng;
pub mod rules;
pub mod session;

pub use catalog::{Catalog, Category, Expansion};
pub use self::config::AppConfig;
pub use error::{ConfigError, HandError, PoolError};
pub use materialize::{CardSink, FsCardSink};
pub use rng::DrawRng;
pub use rules::{Difficulty, QuotaTable};
pub use session::{CardPool, Command, Flow, Hand, SessionConfig, SessionManager};
