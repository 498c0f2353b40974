//! Virtual-file host trait
//!
//! Models the part of the host device model that publishes attribute
//! files: a grouping directory with named files beneath it. Read and
//! write calls come back in through the module's dispatch functions.

/// Opaque handle for a directory created by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirId(pub u32);

/// Unix permission bits of an attribute file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FileMode(pub u16);

impl FileMode {
    /// World-readable, owner-writable
    pub const READ_WRITE: Self = Self(0o644);
    /// World-readable
    pub const READ_ONLY: Self = Self(0o444);

    /// Check if the owner write bit is set
    pub const fn is_writable(&self) -> bool {
        self.0 & 0o200 != 0
    }
}

/// Host errors while publishing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VfsError {
    /// Name already taken
    AlreadyExists,
    /// Directory handle is not live
    NotFound,
    /// Host out of memory
    NoMemory,
}

/// Host that publishes attribute files
pub trait VirtualFs {
    /// Create a named grouping directory
    fn create_dir(&mut self, name: &str) -> Result<DirId, VfsError>;

    /// Attach a file beneath a directory
    fn create_file(&mut self, dir: DirId, name: &str, mode: FileMode) -> Result<(), VfsError>;

    /// Detach a file
    fn remove_file(&mut self, dir: DirId, name: &str);

    /// Release a directory
    ///
    /// Called after all of its files are removed.
    fn release_dir(&mut self, dir: DirId);
}
