use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// A peering between dynamic routing gateways in different regions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemotePeeringConnection {
    /// Identifier of the remote peering connection.
    pub id: String,
    /// Compartment containing the connection.
    pub compartment_id: String,
    /// The dynamic routing gateway the connection belongs to.
    pub drg_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Identifier of the connection at the other side, once peered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<String>,
    /// Region of the peer, once peered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_region_name: Option<String>,
    /// Whether this connection crosses tenancies.
    #[serde(default)]
    pub is_cross_tenancy_peering: bool,
    /// Status of the peering handshake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peering_status: Option<PeeringStatus>,
    /// Current state of the connection.
    pub lifecycle_state: RemotePeeringConnectionLifecycleState,
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

/// Status of the peering handshake on a [`RemotePeeringConnection`].
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum PeeringStatus {
    Invalid,
    New,
    Pending,
    Peered,
    Revoked,
    /// Forward compatibility for statuses this client does not know about.
    #[serde(other)]
    Unknown,
}

/// States a [`RemotePeeringConnection`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum RemotePeeringConnectionLifecycleState {
    Provisioning,
    Available,
    Terminating,
    Terminated,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateRemotePeeringConnection`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRemotePeeringConnectionDetails {
    /// Compartment to create the connection in.
    pub compartment_id: String,
    /// The dynamic routing gateway to attach the connection to.
    pub drg_id: String,
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

/// Body for the `ConnectRemotePeeringConnections` action.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRemotePeeringConnectionsDetails {
    /// The connection at the other side to peer with.
    pub peer_id: String,
    /// Region of the peer connection.
    pub peer_region_name: String,
}
