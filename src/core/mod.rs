//! Platform-independent client logic: gateway, session, route guard and the
//! board controllers. Nothing here touches the DOM.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;
pub mod storage;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod test_support;

pub use api::Api;
pub use board::{
    Board, Collection, Dashboard, FormMode, ProjectCollection, ProjectDetail, TaskBoard,
    TaskCollection, TaskColumns, partition_tasks,
};
pub use error::{ApiError, TransportError};
pub use guard::{AuthTab, GuardDecision, Route, decide};
pub use models::{Profile, Project, ProjectDraft, ProjectId, Task, TaskDraft, TaskId, TaskStatus};
pub use session::{Authorized, Resolution, Session, SessionStatus, SessionStore};
pub use storage::{MemoryTokenStore, TokenStore};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use validation::ValidationError;
