//! Common reusable UI components
//!
//! Shared by the auth forms, the dashboard and the project board.

pub mod button;
pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;
pub mod tabs;

pub use button::{IconButton, SubmitCancelButtons};
pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::{InlineSpinner, LoadingScreen, LoadingSpinner, Spinner, SpinnerSize};
pub use tabs::{TabItem, Tabs};
