use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// Customer-premises equipment: the on-premises end of an IPSec VPN.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cpe {
    /// Identifier of the CPE.
    pub id: String,
    /// Compartment containing the CPE.
    pub compartment_id: String,
    /// Public IP address of the on-premises router.
    pub ip_address: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Device shape describing the vendor/platform of the router.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpe_device_shape_id: Option<String>,
    /// Current state of the CPE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<CpeLifecycleState>,
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

/// States a [`Cpe`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum CpeLifecycleState {
    Available,
    Terminating,
    Terminated,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateCpe`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCpeDetails {
    /// Compartment to create the CPE in.
    pub compartment_id: String,
    /// Public IP address of the on-premises router.
    pub ip_address: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Device shape describing the vendor/platform of the router.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpe_device_shape_id: Option<String>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}

/// Body for `UpdateCpe`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCpeDetails {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New device shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpe_device_shape_id: Option<String>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}
