//! CPU client and its configuration

use crate::dtype::{DType, DefaultDTypes};

/// Default row threshold above which scans fan out across threads
pub const DEFAULT_PARALLEL_MIN_ROWS: usize = 64;

/// Configuration carried by a [`CpuClient`]
///
/// # Example
///
/// ```
/// use scanr::dtype::{DType, DefaultDTypes};
/// use scanr::runtime::cpu::{ClientConfig, CpuClient};
///
/// let config = ClientConfig::default()
///     .with_defaults(DefaultDTypes { float: DType::F64, ..DefaultDTypes::default() })
///     .with_parallel_min_rows(1024);
/// let client = CpuClient::with_config(config);
/// assert_eq!(client.defaults().float, DType::F64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Default dtypes used by dtype inference (accumulation, NaN results)
    pub defaults: DefaultDTypes,
    /// Minimum number of independent rows before kernels run in parallel
    pub parallel_min_rows: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            defaults: DefaultDTypes::default(),
            parallel_min_rows: DEFAULT_PARALLEL_MIN_ROWS,
        }
    }
}

impl ClientConfig {
    /// Replace the default dtypes
    pub fn with_defaults(mut self, defaults: DefaultDTypes) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the parallel row threshold (clamped to at least 1)
    pub fn with_parallel_min_rows(mut self, rows: usize) -> Self {
        self.parallel_min_rows = rows.max(1);
        self
    }
}

/// CPU client for operation dispatch
///
/// Stateless apart from its configuration; cheap to clone and safe to share
/// between threads.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    config: ClientConfig,
}

impl CpuClient {
    /// Create a client with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// The client configuration
    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The runtime default dtypes
    #[inline]
    pub fn defaults(&self) -> &DefaultDTypes {
        &self.config.defaults
    }

    /// The default floating point dtype
    #[inline]
    pub fn default_float(&self) -> DType {
        self.config.defaults.float
    }

    /// Whether `rows` independent rows are worth splitting across threads
    #[inline]
    pub(crate) fn use_parallel(&self, rows: usize) -> bool {
        cfg!(feature = "rayon") && rows >= self.config.parallel_min_rows.max(2)
    }
}
