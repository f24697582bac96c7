//! Compute resource addressing
//!
//! This module turns compute API resource URLs into typed identifiers and
//! back, and adapts records between version-specific shapes.
//!
//! # Module Structure
//!
//! - [`key`] - Resource keys (global, regional, zonal)
//! - [`resource_id`] - Parsing URLs and paths into [`ResourceId`]
//! - [`link`] - Rendering self-links for an API [`Version`]
//! - [`copy`] - Field-name based copies through `serde_json`
//!
//! # Example
//!
//! ```
//! use gcelink::gcp::{Key, ResourceId, Version};
//!
//! let id = ResourceId::parse(
//!     "https://www.googleapis.com/compute/v1/projects/p/zones/us-central1-c/instances/vm-1",
//! )?;
//! assert_eq!(id.key(), Some(&Key::zonal("vm-1", "us-central1-c")));
//! assert_eq!(
//!     id.self_link(Version::Beta),
//!     "https://www.googleapis.com/compute/beta/projects/p/zones/us-central1-c/instances/vm-1",
//! );
//! # Ok::<(), gcelink::gcp::ParseError>(())
//! ```

pub mod copy;
pub mod error;
pub mod key;
pub mod link;
pub mod resource_id;
pub mod version;

pub use copy::{copy_via_json, merge_json};
pub use error::{CopyError, KeyError, ParseError};
pub use key::{Key, KeyType};
pub use link::self_link;
pub use resource_id::{parse_resource_url, ResourceId};
pub use version::Version;
