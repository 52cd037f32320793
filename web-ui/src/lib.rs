pub mod api;
pub mod components;
pub mod interop;
pub mod markdown;

pub use api::*;
pub use components::*;
