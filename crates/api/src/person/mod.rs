pub mod my_profile;
pub mod notifications;
pub mod tip;
