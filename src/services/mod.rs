pub mod admin;
pub mod session;
pub mod site;
pub mod text_utils;
