//! In-memory virtual-file host for tests

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use opptune_core::traits::{DirId, FileMode, VfsError, VirtualFs};

/// Recorded host call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsEvent {
    CreateDir(DirId, String),
    CreateFile(DirId, String, FileMode),
    RemoveFile(DirId, String),
    ReleaseDir(DirId),
}

/// Host that keeps directories and files in vectors
#[derive(Debug, Default)]
pub struct FakeVfs {
    next_id: u32,
    dirs: Vec<(DirId, String)>,
    files: Vec<(DirId, String, FileMode)>,
    events: Vec<VfsEvent>,
    fail_dir: Option<VfsError>,
    fail_file: Option<(usize, VfsError)>,
}

impl FakeVfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `create_dir` fail
    pub fn fail_dir(&mut self, err: VfsError) {
        self.fail_dir = Some(err);
    }

    /// Let `n` file creations succeed, then fail
    pub fn fail_file_after(&mut self, n: usize, err: VfsError) {
        self.fail_file = Some((n, err));
    }

    pub fn events(&self) -> &[VfsEvent] {
        &self.events
    }

    pub fn dir_name(&self, dir: DirId) -> Option<&str> {
        self.dirs
            .iter()
            .find(|(id, _)| *id == dir)
            .map(|(_, name)| name.as_str())
    }

    pub fn files(&self, dir: DirId) -> Vec<(&str, FileMode)> {
        self.files
            .iter()
            .filter(|(d, _, _)| *d == dir)
            .map(|(_, name, mode)| (name.as_str(), *mode))
            .collect()
    }

    /// No directories or files remain published
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

impl VirtualFs for FakeVfs {
    fn create_dir(&mut self, name: &str) -> Result<DirId, VfsError> {
        if let Some(err) = self.fail_dir.take() {
            return Err(err);
        }
        if self.dirs.iter().any(|(_, n)| n == name) {
            return Err(VfsError::AlreadyExists);
        }

        let id = DirId(self.next_id);
        self.next_id += 1;
        self.dirs.push((id, name.to_string()));
        self.events.push(VfsEvent::CreateDir(id, name.to_string()));
        Ok(id)
    }

    fn create_file(&mut self, dir: DirId, name: &str, mode: FileMode) -> Result<(), VfsError> {
        if let Some((remaining, err)) = self.fail_file {
            if remaining == 0 {
                self.fail_file = None;
                return Err(err);
            }
            self.fail_file = Some((remaining - 1, err));
        }
        if !self.dirs.iter().any(|(id, _)| *id == dir) {
            return Err(VfsError::NotFound);
        }
        if self.files.iter().any(|(d, n, _)| *d == dir && n == name) {
            return Err(VfsError::AlreadyExists);
        }

        self.files.push((dir, name.to_string(), mode));
        self.events
            .push(VfsEvent::CreateFile(dir, name.to_string(), mode));
        Ok(())
    }

    fn remove_file(&mut self, dir: DirId, name: &str) {
        self.files.retain(|(d, n, _)| !(*d == dir && n == name));
        self.events.push(VfsEvent::RemoveFile(dir, name.to_string()));
    }

    fn release_dir(&mut self, dir: DirId) {
        self.dirs.retain(|(id, _)| *id != dir);
        self.events.push(VfsEvent::ReleaseDir(dir));
    }
}
