pub mod airports;
pub mod flights;
