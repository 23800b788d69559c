mod activity_list;
mod signup_form;
mod status_banner;

pub use activity_list::ActivityList;
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
