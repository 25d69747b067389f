use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// An isolated layer-2/layer-3 connection over a cross-connect.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCircuit {
    /// Identifier of the virtual circuit.
    pub id: String,
    /// Compartment containing the virtual circuit.
    pub compartment_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Provisioned bandwidth shape, e.g. `10 Gbps`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_shape_name: Option<String>,
    /// The dynamic routing gateway the circuit attaches to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Whether the circuit carries public or private peering.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub circuit_type: Option<String>,
    /// BGP autonomous system number of the customer side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_asn: Option<u64>,
    /// Current state of the virtual circuit.
    pub lifecycle_state: VirtualCircuitLifecycleState,
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

/// States a [`VirtualCircuit`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum VirtualCircuitLifecycleState {
    PendingProvider,
    Verifying,
    Provisioning,
    Provisioned,
    Failed,
    Inactive,
    Terminating,
    Terminated,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateVirtualCircuit`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVirtualCircuitDetails {
    /// Compartment to create the virtual circuit in.
    pub compartment_id: String,
    /// Whether the circuit carries public or private peering.
    #[serde(rename = "type")]
    pub circuit_type: String,
    /// Bandwidth shape to provision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_shape_name: Option<String>,
    /// Dynamic routing gateway to attach to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// BGP autonomous system number of the customer side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_asn: Option<u64>,
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

/// Body for `UpdateVirtualCircuit`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVirtualCircuitDetails {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New bandwidth shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_shape_name: Option<String>,
    /// New dynamic routing gateway attachment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}
