pub mod resources;
pub mod view;

pub use resources::*;
pub use view::*;
