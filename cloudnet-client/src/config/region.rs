//! Region identifiers and endpoint templating.
use std::{fmt, str::FromStr};

use crate::error::ConfigError;

/// Placeholder substituted with the region identifier in endpoint templates.
const REGION_PLACEHOLDER: &str = "{region}";
/// Placeholder substituted with the realm's second-level domain.
const SECOND_LEVEL_DOMAIN_PLACEHOLDER: &str = "{secondLevelDomain}";

/// Second-level domain of the commercial realm.
const DEFAULT_SECOND_LEVEL_DOMAIN: &str = "oraclecloud.com";
/// Second-level domain of the government realms.
const GOV_SECOND_LEVEL_DOMAIN: &str = "oraclegovcloud.com";

// Regions homed in a government realm. Everything else resolves to the
// commercial second-level domain.
const GOV_REGIONS: &[&str] = &[
    "us-langley-1",
    "us-luke-1",
    "us-gov-ashburn-1",
    "us-gov-chicago-1",
    "us-gov-phoenix-1",
];

/// A validated region identifier, e.g. `us-phoenix-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    id: String,
}

impl Region {
    /// Validate and wrap a region identifier.
    ///
    /// Identifiers are lowercased; empty strings and strings containing
    /// anything but ascii alphanumerics and `-` are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_ascii_lowercase();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ConfigError::InvalidRegion(id));
        }
        Ok(Self { id })
    }

    /// The region identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The second-level domain of the realm this region is homed in.
    pub fn second_level_domain(&self) -> &'static str {
        if GOV_REGIONS.contains(&self.id.as_str()) {
            GOV_SECOND_LEVEL_DOMAIN
        } else {
            DEFAULT_SECOND_LEVEL_DOMAIN
        }
    }

    /// Derive a service endpoint by substituting this region into `template`.
    ///
    /// Templates use `{region}` and `{secondLevelDomain}` placeholders, e.g.
    /// `https://iaas.{region}.{secondLevelDomain}`.
    pub fn endpoint(&self, template: &str) -> Result<http::Uri, ConfigError> {
        let endpoint = template
            .replace(REGION_PLACEHOLDER, &self.id)
            .replace(SECOND_LEVEL_DOMAIN_PLACEHOLDER, self.second_level_domain());
        endpoint
            .parse::<http::Uri>()
            .map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod test {
    use super::Region;
    use crate::error::ConfigError;

    const TEMPLATE: &str = "https://iaas.{region}.{secondLevelDomain}";

    #[test]
    fn endpoint_substitution() {
        let region = Region::new("us-phoenix-1").unwrap();
        let uri = region.endpoint(TEMPLATE).unwrap();
        assert_eq!(uri.to_string(), "https://iaas.us-phoenix-1.oraclecloud.com/");
    }

    #[test]
    fn gov_regions_use_gov_domain() {
        let region = Region::new("us-langley-1").unwrap();
        assert_eq!(region.second_level_domain(), "oraclegovcloud.com");
        let uri = region.endpoint(TEMPLATE).unwrap();
        assert_eq!(uri.to_string(), "https://iaas.us-langley-1.oraclegovcloud.com/");
    }

    #[test]
    fn empty_region_rejected() {
        assert!(matches!(Region::new(""), Err(ConfigError::InvalidRegion(_))));
        assert!(matches!(Region::new("   "), Err(ConfigError::InvalidRegion(_))));
    }

    #[test]
    fn malformed_region_rejected() {
        assert!(matches!(
            Region::new("us phoenix 1"),
            Err(ConfigError::InvalidRegion(_))
        ));
        assert!(matches!(
            Region::new("us.phoenix.1"),
            Err(ConfigError::InvalidRegion(_))
        ));
    }

    #[test]
    fn region_identifiers_are_lowercased() {
        let region = Region::new("US-ASHBURN-1").unwrap();
        assert_eq!(region.id(), "us-ashburn-1");
    }
}
