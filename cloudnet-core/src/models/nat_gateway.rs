use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// A gateway giving private subnets outbound internet access.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NatGateway {
    /// Identifier of the gateway.
    pub id: String,
    /// Compartment containing the gateway.
    pub compartment_id: String,
    /// The VCN the gateway belongs to.
    pub vcn_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The public IP address NATed traffic egresses from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nat_ip: Option<String>,
    /// Whether the gateway currently blocks traffic.
    #[serde(default)]
    pub block_traffic: bool,
    /// Current state of the gateway.
    pub lifecycle_state: NatGatewayLifecycleState,
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

/// States a [`NatGateway`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum NatGatewayLifecycleState {
    Provisioning,
    Available,
    Terminating,
    Terminated,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateNatGateway`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateNatGatewayDetails {
    /// Compartment to create the gateway in.
    pub compartment_id: String,
    /// The VCN to create the gateway in.
    pub vcn_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether to create the gateway with traffic blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_traffic: Option<bool>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}

/// Body for `UpdateNatGateway`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNatGatewayDetails {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Block or unblock traffic through the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_traffic: Option<bool>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}
