//! Self-link rendering
//!
//! Builds canonical compute API URLs from a project, a resource collection
//! and an optional [`Key`]. The output is always accepted by
//! [`ResourceId::parse`](super::resource_id::ResourceId::parse).

use super::key::Key;
use super::version::Version;

/// Host and service prefix shared by every compute self-link
pub const COMPUTE_API_ROOT: &str = "https://www.googleapis.com/compute";

/// Base URL for a given API version, e.g. `https://www.googleapis.com/compute/beta`
pub fn api_prefix(ver: Version) -> String {
    format!("{}/{}", COMPUTE_API_ROOT, ver.token())
}

/// Path of a resource below its project: `global/urlMaps/m`,
/// `regions/us-central1/addresses/a`, `zones/us-central1-b/disks/d`.
///
/// Empty when there is no key (the project itself). A region or zone named
/// by a global key renders as the container itself, e.g. `zones/us-central1-b`.
pub fn resource_path(resource: &str, key: Option<&Key>) -> String {
    match key {
        None => String::new(),
        Some(Key::Global { name }) if matches!(resource, "regions" | "zones") => {
            format!("{}/{}", resource, name)
        }
        Some(Key::Global { name }) => format!("global/{}/{}", resource, name),
        Some(Key::Regional { name, region }) => {
            format!("regions/{}/{}/{}", region, resource, name)
        }
        Some(Key::Zonal { name, zone }) => format!("zones/{}/{}/{}", zone, resource, name),
    }
}

/// Path starting at `projects/`, without host or version
pub fn relative_resource_name(project: &str, resource: &str, key: Option<&Key>) -> String {
    let path = resource_path(resource, key);
    if path.is_empty() {
        format!("projects/{}", project)
    } else {
        format!("projects/{}/{}", project, path)
    }
}

/// Canonical URL of a resource for the given API version.
///
/// Never fails; inputs are assumed to be well formed.
pub fn self_link(ver: Version, project: &str, resource: &str, key: Option<&Key>) -> String {
    format!("{}/{}", api_prefix(ver), relative_resource_name(project, resource, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_link() {
        let cases = [
            (
                Version::Alpha,
                "proj1",
                "addresses",
                Key::regional("key1", "us-central1"),
                "https://www.googleapis.com/compute/alpha/projects/proj1/regions/us-central1/addresses/key1",
            ),
            (
                Version::Beta,
                "proj3",
                "disks",
                Key::zonal("key2", "us-central1-b"),
                "https://www.googleapis.com/compute/beta/projects/proj3/zones/us-central1-b/disks/key2",
            ),
            (
                Version::Ga,
                "proj4",
                "urlMaps",
                Key::global("key3"),
                "https://www.googleapis.com/compute/v1/projects/proj4/global/urlMaps/key3",
            ),
        ];

        for (ver, project, resource, key, want) in cases {
            assert_eq!(
                self_link(ver, project, resource, Some(&key)),
                want,
                "self_link({ver}, {project}, {resource}, {key})"
            );
        }
    }

    #[test]
    fn test_self_link_project_level() {
        assert_eq!(
            self_link(Version::Ga, "p", "projects", None),
            "https://www.googleapis.com/compute/v1/projects/p"
        );
    }

    #[test]
    fn test_relative_resource_name() {
        assert_eq!(relative_resource_name("p", "projects", None), "projects/p");
        assert_eq!(
            relative_resource_name("p", "instances", Some(&Key::zonal("i", "z"))),
            "projects/p/zones/z/instances/i"
        );
    }

    #[test]
    fn test_container_self_link() {
        assert_eq!(
            self_link(Version::Ga, "p", "regions", Some(&Key::global("us-central1"))),
            "https://www.googleapis.com/compute/v1/projects/p/regions/us-central1"
        );
        assert_eq!(
            self_link(Version::Beta, "p", "zones", Some(&Key::global("us-central1-b"))),
            "https://www.googleapis.com/compute/beta/projects/p/zones/us-central1-b"
        );
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path("projects", None), "");
        assert_eq!(
            resource_path("urlMaps", Some(&Key::global("m"))),
            "global/urlMaps/m"
        );
        assert_eq!(
            resource_path("addresses", Some(&Key::regional("a", "r"))),
            "regions/r/addresses/a"
        );
    }
}
