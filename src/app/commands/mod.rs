pub mod build;
pub mod catalog;
pub mod check;
pub mod compose;
