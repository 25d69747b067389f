use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// A set of ingress and egress rules applied to subnets.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityList {
    /// Identifier of the security list.
    pub id: String,
    /// Compartment containing the security list.
    pub compartment_id: String,
    /// The VCN the security list belongs to.
    pub vcn_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Rules for inbound traffic.
    #[serde(default)]
    pub ingress_security_rules: Vec<IngressSecurityRule>,
    /// Rules for outbound traffic.
    #[serde(default)]
    pub egress_security_rules: Vec<EgressSecurityRule>,
    /// Current state of the security list.
    pub lifecycle_state: SecurityListLifecycleState,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}

/// An inbound traffic rule.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngressSecurityRule {
    /// IP protocol number, or `"all"`.
    pub protocol: String,
    /// CIDR or service source the rule matches.
    pub source: String,
    /// How `source` should be interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Whether the rule is stateless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateless: Option<bool>,
    /// Optional free-text description of the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An outbound traffic rule.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EgressSecurityRule {
    /// IP protocol number, or `"all"`.
    pub protocol: String,
    /// CIDR or service destination the rule matches.
    pub destination: String,
    /// How `destination` should be interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<String>,
    /// Whether the rule is stateless.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateless: Option<bool>,
    /// Optional free-text description of the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// States a [`SecurityList`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum SecurityListLifecycleState {
    Provisioning,
    Available,
    Terminating,
    Terminated,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateSecurityList`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSecurityListDetails {
    /// Compartment to create the security list in.
    pub compartment_id: String,
    /// The VCN to create the security list in.
    pub vcn_id: String,
    /// Rules for inbound traffic.
    #[serde(default)]
    pub ingress_security_rules: Vec<IngressSecurityRule>,
    /// Rules for outbound traffic.
    #[serde(default)]
    pub egress_security_rules: Vec<EgressSecurityRule>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}

/// Body for `UpdateSecurityList`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSecurityListDetails {
    /// Replacement ingress rules; the whole list is replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_security_rules: Option<Vec<IngressSecurityRule>>,
    /// Replacement egress rules; the whole list is replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egress_security_rules: Option<Vec<EgressSecurityRule>>,
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}
