pub mod about;
pub mod blog;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod portfolio;
pub mod project_modal;
pub mod services;
pub mod testimonials;
