pub mod area;
pub mod login_form;
pub mod navbar;
pub mod page;
pub mod protected;

pub use area::{MemberArea, MentorArea, StudentArea, UniversityArea};
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use page::Page;
pub use protected::Protected;
