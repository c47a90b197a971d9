pub mod bookmark;
pub mod comment;
pub mod group;
pub mod notification;
pub mod person;
pub mod post;
pub mod site;
pub mod tip;
pub mod vote;
