use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// A subnet within a VCN.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    /// Identifier of the subnet.
    pub id: String,
    /// Compartment containing the subnet.
    pub compartment_id: String,
    /// The VCN the subnet belongs to.
    pub vcn_id: String,
    /// The subnet's IPv4 CIDR block.
    #[serde(default)]
    pub cidr_block: String,
    /// Availability domain, absent for regional subnets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label for the subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Route table used by the subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// Security lists applied to the subnet.
    #[serde(default)]
    pub security_list_ids: Vec<String>,
    /// Whether VNICs in this subnet may not have public IPs.
    #[serde(default)]
    pub prohibit_public_ip_on_vnic: bool,
    /// Current state of the subnet.
    pub lifecycle_state: SubnetLifecycleState,
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

/// States a [`Subnet`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum SubnetLifecycleState {
    Provisioning,
    Available,
    Terminating,
    Terminated,
    Updating,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateSubnet`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubnetDetails {
    /// Compartment to create the subnet in.
    pub compartment_id: String,
    /// The VCN to create the subnet in.
    pub vcn_id: String,
    /// The subnet's IPv4 CIDR block.
    pub cidr_block: String,
    /// Availability domain; omit for a regional subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label. Immutable after creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Route table to associate; the VCN default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// Security lists to associate; the VCN default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_list_ids: Option<Vec<String>>,
    /// Whether to forbid public IPs on VNICs in the subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prohibit_public_ip_on_vnic: Option<bool>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}

/// Body for `UpdateSubnet`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubnetDetails {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New route table association.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// New security list associations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_list_ids: Option<Vec<String>>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}
