//! Resource identifiers
//!
//! Parses compute resource URLs (or bare `projects/...` paths) into a
//! structured [`ResourceId`]. Accepted shapes:
//!
//! ```text
//! [https://<host>/compute/<version>/]projects/<project>
//! [https://<host>/compute/<version>/]projects/<project>/global/<resource>/<name>
//! [https://<host>/compute/<version>/]projects/<project>/regions/<region>[/<resource>/<name>]
//! [https://<host>/compute/<version>/]projects/<project>/zones/<zone>[/<resource>/<name>]
//! ```
//!
//! The version segment is required when a scheme is present but its value is
//! not checked, so links from unreleased API versions still parse. Segments
//! are taken literally: no percent-decoding, and `.`/`..` are rejected.

use super::error::{ParseError, ParseResult};
use super::key::Key;
use super::link;
use super::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource collection name used for project-level identifiers
pub const PROJECTS: &str = "projects";

/// A project, a resource collection and the key of one resource in it.
///
/// `key` is `None` only for the project itself (`resource == "projects"`).
/// A region or zone referenced on its own (`projects/p/zones/z`) is the
/// resource `zones` with the global key `z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    project: String,
    resource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<Key>,
}

impl ResourceId {
    pub fn new(project: impl Into<String>, resource: impl Into<String>, key: Option<Key>) -> Self {
        Self {
            project: project.into(),
            resource: resource.into(),
            key,
        }
    }

    /// Identifier of the project itself
    pub fn project_level(project: impl Into<String>) -> Self {
        Self::new(project, PROJECTS, None)
    }

    /// Parse a full compute URL or a path starting at `projects/`
    pub fn parse(input: &str) -> ParseResult<Self> {
        parse_resource_url(input)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// Canonical URL for this resource under the given API version
    pub fn self_link(&self, ver: Version) -> String {
        link::self_link(ver, &self.project, &self.resource, self.key.as_ref())
    }

    /// Path below the project, empty for project-level identifiers
    pub fn resource_path(&self) -> String {
        link::resource_path(&self.resource, self.key.as_ref())
    }

    /// Path starting at `projects/<project>`
    pub fn relative_resource_name(&self) -> String {
        link::relative_resource_name(&self.project, &self.resource, self.key.as_ref())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.relative_resource_name())
    }
}

impl FromStr for ResourceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resource_url(s)
    }
}

/// Parse a compute resource URL or `projects/...` path.
///
/// Fails with [`ParseError::MalformedUrl`] carrying the whole input; no
/// partial identifier is ever returned.
pub fn parse_resource_url(input: &str) -> ParseResult<ResourceId> {
    tracing::trace!("Parsing resource URL {:?}", input);

    let malformed = || ParseError::MalformedUrl(input.to_string());

    // Query strings and fragments are not part of a resource path.
    if input.contains(['?', '#']) {
        return Err(malformed());
    }

    let path = strip_api_prefix(input).ok_or_else(malformed)?;
    let parts: Vec<&str> = path.split('/').collect();

    if parts.iter().any(|p| p.is_empty() || *p == "." || *p == "..") {
        return Err(malformed());
    }

    let id = match parts[..] {
        ["projects", project] => ResourceId::project_level(project),
        ["projects", project, scope @ ("regions" | "zones"), name] => {
            ResourceId::new(project, scope, Some(Key::global(name)))
        }
        ["projects", project, "global", resource, name] => {
            ResourceId::new(project, resource, Some(Key::global(name)))
        }
        ["projects", project, "regions", region, resource, name] => {
            ResourceId::new(project, resource, Some(Key::regional(name, region)))
        }
        ["projects", project, "zones", zone, resource, name] => {
            ResourceId::new(project, resource, Some(Key::zonal(name, zone)))
        }
        _ => return Err(malformed()),
    };

    Ok(id)
}

/// Reduce the input to its `projects/...` path.
///
/// Inputs without a scheme are returned unchanged. URLs must carry a host and
/// a `compute/<version>/` prefix; both are dropped without any normalization,
/// so a URL and the bare path it ends with yield the same segments.
fn strip_api_prefix(input: &str) -> Option<&str> {
    let Some((scheme, rest)) = input.split_once("://") else {
        return Some(input);
    };
    if scheme.is_empty() {
        return None;
    }

    let (host, path) = rest.split_once('/')?;
    if host.is_empty() {
        return None;
    }

    let (version, path) = path.strip_prefix("compute/")?.split_once('/')?;
    if version.is_empty() {
        return None;
    }
    if version.parse::<Version>().is_err() {
        tracing::debug!("Unrecognized compute API version {:?} in {}", version, input);
    }

    Some(path)
}
