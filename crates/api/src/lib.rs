pub mod group;
pub mod person;
pub mod post;
pub mod site;
pub mod vote;
