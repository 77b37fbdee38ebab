pub mod bundle;
pub mod resource;

pub use bundle::Bundle;
pub use resource::{OutputKind, Resource};
