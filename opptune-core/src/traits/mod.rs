//! Collaborator traits
//!
//! These traits define the interface between the table editor and the
//! host it runs inside: who owns the tables, and who owns the virtual
//! files they are exposed through.

pub mod platform;
pub mod vfs;

pub use platform::{Domain, OppPlatform};
pub use vfs::{DirId, FileMode, VfsError, VirtualFs};
