use thiserror::Error;

/// Lookup failure against the geography hierarchy.
///
/// Internally all keys are hierarchy-derived, so these are expected to be
/// unreachable; they are still checked rather than assumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The country is not part of the configured hierarchy.
    #[error("unknown country '{0}'")]
    UnknownCountry(String),
    /// The state is not listed under any configured country.
    #[error("unknown state '{0}'")]
    UnknownState(String),
}

/// Identifier pool sizing misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pool '{prefix}' needs {count} ids but {width} digits allow at most {max}")]
pub struct ConfigError {
    pub prefix: String,
    pub count: u64,
    pub width: u32,
    pub max: u64,
}
