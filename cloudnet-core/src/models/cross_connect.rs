use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// A physical cross-connect into the provider's network fabric.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrossConnect {
    /// Identifier of the cross-connect.
    pub id: String,
    /// Compartment containing the cross-connect.
    pub compartment_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Data-center location of the physical port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    /// Port speed shape, e.g. `10 Gbps`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_speed_shape_name: Option<String>,
    /// The cross-connect group this connect belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_connect_group_id: Option<String>,
    /// Current state of the cross-connect.
    pub lifecycle_state: CrossConnectLifecycleState,
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

/// States a [`CrossConnect`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum CrossConnectLifecycleState {
    PendingCustomer,
    PendingProvider,
    Provisioning,
    Provisioned,
    Inactive,
    Terminating,
    Terminated,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateCrossConnect`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCrossConnectDetails {
    /// Compartment to create the cross-connect in.
    pub compartment_id: String,
    /// Data-center location for the physical port.
    pub location_name: String,
    /// Port speed shape.
    pub port_speed_shape_name: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Cross-connect group to place the connect in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_connect_group_id: Option<String>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}

/// Body for `UpdateCrossConnect`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCrossConnectDetails {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Marks the cross-connect active once physical cabling is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}
