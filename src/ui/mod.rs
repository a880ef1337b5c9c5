pub mod auth;
pub mod board;
pub mod common;
pub mod guard;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod session;

pub use guard::Guarded;
pub use icon::{Icon, icons};
pub use session::{AppSession, SessionContext, provide_session_context, use_session};
