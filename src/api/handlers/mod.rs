//! HTTP request handlers.

pub mod owner_handler;
pub mod pet_handler;

pub use owner_handler::owner_routes;
pub use pet_handler::pet_routes;
