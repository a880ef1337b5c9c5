//! Application pages module
//!
//! - Landing page (home)
//! - Auth page (sign in, register, password recovery)
//! - Dashboard (project list)
//! - Project detail (task board)

mod auth;
mod dashboard;
mod landing;
mod project;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use project::ProjectPage;
