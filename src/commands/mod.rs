pub mod apply;
pub mod diff;
pub mod list;
