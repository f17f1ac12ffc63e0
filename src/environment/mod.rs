//! Build environment inputs.
//!
//! Everything the resolver needs from the process environment is read
//! once into an [`EnvSnapshot`]:
//!
//! 1. `NODE_ENV` - build mode (`development` or anything else)
//! 2. `CDN` - whether assets are served from a CDN (`"true"` only)
//! 3. `DISTRIBUTION` - deployment target (required)
//! 4. `PLATFORM` - rendering target within the distribution (required)
//! 5. `CONFIG` - configuration variant (optional)

pub mod distribution;
pub mod snapshot;

pub use distribution::Distribution;
pub use snapshot::{BuildMode, EnvSnapshot};
