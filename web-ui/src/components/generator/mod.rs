pub mod logic;
pub mod session;
pub mod styles;
pub mod types;
pub mod view;

pub use view::GeneratorView;
