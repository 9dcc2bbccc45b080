pub mod about;
pub mod admin;
pub mod careers;
pub mod contact;
pub mod employee;
pub mod home;
pub mod login;
pub mod services;
pub mod why_choose_us;
