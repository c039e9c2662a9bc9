pub mod image;
pub mod mvi;
pub mod store;
