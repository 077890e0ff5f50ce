pub mod derive;
pub mod entity;
pub mod error;
pub mod evolution;
pub mod lookup;

#[cfg(test)]
mod tests;

pub use entity::Pokemon;
pub use error::{LookupError, Resource};
pub use lookup::{fetch_all, lookup};
