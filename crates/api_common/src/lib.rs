pub mod build_response;
pub mod comment;
pub mod context;
pub mod group;
pub mod person;
pub mod post;
pub mod site;
pub mod utils;
pub mod vote;

pub extern crate kgotla_db_schema;
pub extern crate kgotla_utils;
