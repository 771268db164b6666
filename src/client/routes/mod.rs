pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod role_home;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use role_home::{MentorHome, StudentHome, UniversityHome};
