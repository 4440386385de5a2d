use std::collections::BTreeMap;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::streaming::adler32::{self, Adler32Hasher};
use crate::streaming::md5::{self, Md5Hasher};
use crate::streaming::StreamingHash;

pub type Constructor = fn() -> Box<dyn StreamingHash>;

/// Algorithm name -> constructor of a fresh hasher. Passed around explicitly, there is no global one
#[derive(Debug, Clone, Default)]
pub struct Registry {
    constructors: BTreeMap<String, Constructor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that already knows the algorithms a host would ship with
    pub fn with_host_algorithms() -> Self {
        let mut registry = Self::new();
        registry.register_if_absent(md5::NAME, || Box::new(Md5Hasher::new()));
        registry
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in ascending order
    pub fn names(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    ///
    /// Registers `constructor` under `name` unless something is registered there already
    ///
    /// Returns whether the constructor was installed. An existing entry is never replaced.
    pub fn register_if_absent(&mut self, name: &str, constructor: Constructor) -> bool {
        if self.contains(name) {
            debug!("{} already registered, keeping the existing implementation", name);
            return false;
        }
        self.constructors.insert(name.to_string(), constructor);
        true
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn StreamingHash>> {
        match self.constructors.get(name) {
            Some(constructor) => Ok(constructor()),
            None => Err(Error::NotFound {
                algorithm: name.to_string(),
            }),
        }
    }
}

///
/// Makes `adler32` available in `registry` if it isn't there yet
///
/// ```
/// use rolling_adler32::registry::{install_adler32, Registry};
///
/// let mut registry = Registry::with_host_algorithms();
/// assert!(install_adler32(&mut registry));
/// assert!(!install_adler32(&mut registry));
/// assert_eq!(registry.names(), vec!["adler32", "md5"]);
/// ```
pub fn install_adler32(registry: &mut Registry) -> bool {
    let installed = registry.register_if_absent(adler32::NAME, || Box::new(Adler32Hasher::new()));
    if installed {
        info!("registered {}", adler32::NAME);
    }
    installed
}
