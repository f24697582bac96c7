//! gcelink - compute resource links
//!
//! Parse compute API resource URLs into typed identifiers, render them back
//! as self-links for any API version, and copy records between
//! version-specific shapes.
//!
//! The library lives in [`gcp`]; [`config`] and [`output`] back the `gcelink`
//! command-line tool.

pub mod config;
pub mod gcp;
pub mod output;

pub use gcp::{
    copy_via_json, parse_resource_url, self_link, CopyError, Key, KeyType, ParseError,
    ResourceId, Version,
};
