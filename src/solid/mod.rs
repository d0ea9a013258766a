mod generic_trap;
mod registry;

pub use generic_trap::GenericTrap;
pub use registry::{Registry, SolidId};
