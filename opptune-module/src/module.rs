//! Module lifecycle and attribute dispatch

use heapless::Vec;

use opptune_core::config::{ModuleConfig, MAX_DOMAINS};
use opptune_core::editor;
use opptune_core::traits::{DirId, OppPlatform, VfsError, VirtualFs};
use opptune_core::voltage::VoltageLimits;

use crate::attr::{AttrError, TableAttribute};
use crate::config::{validate, ConfigError};
use crate::page::PageWriter;

/// Module load errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// Configuration rejected
    Config(ConfigError),
    /// Host refused to publish the directory or a file
    Vfs(VfsError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Config(e)
    }
}

impl From<VfsError> for LoadError {
    fn from(e: VfsError) -> Self {
        LoadError::Vfs(e)
    }
}

/// A loaded module: the published directory and its table attributes
///
/// Exists from load to unload. Reads and writes take `&self` and may run
/// concurrently; the only shared mutation is the voltage store inside
/// the platform's table.
pub struct DvfsModule<P> {
    platform: P,
    dir: DirId,
    limits: VoltageLimits,
    attrs: Vec<TableAttribute, MAX_DOMAINS>,
}

impl<P: OppPlatform> DvfsModule<P> {
    /// Publish the grouping directory and one file per configured domain
    ///
    /// On failure everything already published is torn down again.
    pub fn load<H: VirtualFs>(
        host: &mut H,
        platform: P,
        config: &ModuleConfig,
    ) -> Result<Self, LoadError> {
        let limits = validate(config)?;

        info!("Creating '{}' attribute group", config.group.as_str());
        let dir = host.create_dir(&config.group)?;

        let mut attrs: Vec<TableAttribute, MAX_DOMAINS> = Vec::new();
        for domain in config.domains.iter() {
            let attr = TableAttribute::new(domain);

            if let Err(e) = host.create_file(dir, attr.name(), attr.mode) {
                warn!("Failed to create {}: {:?}", attr.name(), e);
                detach_all(host, dir, &attrs);
                host.release_dir(dir);
                return Err(e.into());
            }

            debug!("  {} (mode {=u16:o})", attr.name(), attr.mode.0);
            // Same capacity as config.domains
            let _ = attrs.push(attr);
        }

        info!(
            "Published {} table attributes, limits {}..={} mV",
            attrs.len(),
            limits.min_mv,
            limits.max_mv
        );

        Ok(Self {
            platform,
            dir,
            limits,
            attrs,
        })
    }

    /// Detach every file, release the directory, and hand back the platform
    pub fn unload<H: VirtualFs>(self, host: &mut H) -> P {
        detach_all(host, self.dir, &self.attrs);
        host.release_dir(self.dir);
        info!("Attribute group released");
        self.platform
    }

    /// Read handler: render the attribute's table into `page`
    ///
    /// Returns the number of bytes written. Output longer than `page` is
    /// truncated; a domain the platform has no table for reads empty.
    pub fn show(&self, name: &str, page: &mut [u8]) -> Result<usize, AttrError> {
        let attr = self.find(name)?;
        let mut out = PageWriter::new(page);

        // PageWriter never reports an error
        let _ = editor::render(self.platform.lookup(attr.domain), &mut out);

        Ok(out.len())
    }

    /// Write handler: apply an update command to the attribute's table
    ///
    /// Returns the number of bytes consumed (the whole buffer).
    pub fn store(&self, name: &str, buf: &[u8]) -> Result<usize, AttrError> {
        let attr = self.find(name)?;
        if !attr.is_writable() {
            warn!("{}: write to read-only attribute", attr.domain);
            return Err(AttrError::ReadOnly);
        }

        match editor::update(self.platform.lookup(attr.domain), &self.limits, buf) {
            Ok(update) => {
                info!(
                    "{}: {} MHz set to {} mV (requested {} mV)",
                    attr.domain,
                    update.command.freq_mhz,
                    update.stored_mv,
                    update.command.volt_mv
                );
                Ok(update.consumed)
            }
            Err(e) => {
                warn!("{}: write rejected: {}", attr.domain, e);
                Err(e.into())
            }
        }
    }

    /// Published attributes, in creation order
    pub fn attributes(&self) -> &[TableAttribute] {
        &self.attrs
    }

    /// Directory the attributes live in
    pub fn dir(&self) -> DirId {
        self.dir
    }

    /// Active voltage limits
    pub fn limits(&self) -> VoltageLimits {
        self.limits
    }

    /// Table platform
    pub fn platform(&self) -> &P {
        &self.platform
    }

    fn find(&self, name: &str) -> Result<&TableAttribute, AttrError> {
        self.attrs
            .iter()
            .find(|attr| attr.name() == name)
            .ok_or(AttrError::UnknownAttribute)
    }
}

/// Convert a handler result to the host's `ssize_t` convention
///
/// Byte counts beyond `isize::MAX` saturate.
pub fn to_status(result: Result<usize, AttrError>) -> isize {
    match result {
        Ok(n) => isize::try_from(n).unwrap_or(isize::MAX),
        Err(e) => e.errno() as isize,
    }
}

/// Remove files in reverse creation order
fn detach_all<H: VirtualFs>(host: &mut H, dir: DirId, attrs: &[TableAttribute]) {
    for attr in attrs.iter().rev() {
        host.remove_file(dir, attr.name());
    }
}
