//! UI screens.

mod app;
mod form;
mod login_screen;
mod register_screen;
mod success_screen;
/// Layout helpers.
pub mod utils;

pub use app::App;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use success_screen::SuccessScreen;
