/// Component module - updatable capabilities, hidden implementations and the registry

pub mod updatable;
pub mod internal_component;
pub mod registry;

pub use updatable::*;
pub use internal_component::{InternalComponent, create_internal_component, run_internal_self_test};
pub use registry::*;
