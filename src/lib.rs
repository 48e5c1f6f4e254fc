//! Generate language templates into a project's `.gitignore` and append
//! single paths to it, without duplicating what is already there.

pub mod builders;
pub mod core;
pub mod utils;
