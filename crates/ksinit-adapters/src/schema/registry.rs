//! Built-in schema registry.
//!
//! Maps the Kubernetes release tags accepted by `--api-spec version:TAG` to
//! the upstream OpenAPI document published in the Kubernetes repository.
//! Only tags listed in [`KNOWN_VERSIONS`] resolve; anything else is reported
//! as a fetch failure so a typo never silently hits the network.

/// Release tags with a published `swagger.json`.
pub const KNOWN_VERSIONS: &[&str] = &[
    "v1.7.0", "v1.7.1", "v1.7.2", "v1.7.3", "v1.7.4", "v1.7.5", "v1.7.6", "v1.8.0", "v1.8.1",
    "v1.8.2", "v1.9.0", "v1.10.0", "v1.11.0",
];

const UPSTREAM_BASE: &str = "https://raw.githubusercontent.com/kubernetes/kubernetes";
const UPSTREAM_PATH: &str = "api/openapi-spec/swagger.json";

/// Upstream URL for a known release tag.
pub fn url_for(tag: &str) -> Option<String> {
    KNOWN_VERSIONS
        .contains(&tag)
        .then(|| format!("{UPSTREAM_BASE}/{tag}/{UPSTREAM_PATH}"))
}

/// Comma separated list used in error messages.
pub fn known_versions() -> String {
    KNOWN_VERSIONS.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tag_is_known() {
        assert_eq!(
            url_for("v1.7.0").as_deref(),
            Some(
                "https://raw.githubusercontent.com/kubernetes/kubernetes/v1.7.0/api/openapi-spec/swagger.json"
            )
        );
    }

    #[test]
    fn unknown_tag_has_no_url() {
        assert_eq!(url_for("v0.0.1"), None);
        assert_eq!(url_for("1.7.0"), None);
        assert!(known_versions().starts_with("v1.7.0, "));
    }
}
