pub mod airports;
pub mod analysis;
pub mod flights;
