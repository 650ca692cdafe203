//! Runtime backends for tensor computation
//!
//! Only a CPU backend exists. It owns the client, the per-category helper
//! functions that validate arguments and resolve dtypes, and the typed
//! kernels those helpers dispatch to.
//!
//! # Architecture
//!
//! ```text
//! CpuClient (configuration: default dtypes, parallel threshold)
//! ├── helpers   validation, dtype resolution, axis reorientation
//! └── kernels   typed row loops over contiguous slices
//! ```

pub mod cpu;
