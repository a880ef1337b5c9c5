//! Authentication UI module
//!
//! Forms for the `/auth` page: sign in, register, forgot password and reset
//! password, plus the banner state they share.

mod feedback;
mod login_form;
mod password;
mod recovery_forms;
mod register_form;

pub use feedback::{AuthFeedback, provide_auth_feedback, use_auth_feedback};
pub use login_form::LoginForm;
pub use password::{PasswordChecklist, PasswordInput};
pub use recovery_forms::{ForgotPasswordForm, ResetPasswordForm};
pub use register_form::RegisterForm;
