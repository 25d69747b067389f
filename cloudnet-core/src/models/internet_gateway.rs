use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// A gateway giving a VCN direct internet access.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternetGateway {
    /// Identifier of the gateway.
    pub id: String,
    /// Compartment containing the gateway.
    pub compartment_id: String,
    /// The VCN the gateway belongs to.
    pub vcn_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the gateway passes traffic.
    #[serde(default)]
    pub is_enabled: bool,
    /// Current state of the gateway.
    pub lifecycle_state: InternetGatewayLifecycleState,
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

/// States an [`InternetGateway`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum InternetGatewayLifecycleState {
    Provisioning,
    Available,
    Terminating,
    Terminated,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateInternetGateway`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternetGatewayDetails {
    /// Compartment to create the gateway in.
    pub compartment_id: String,
    /// The VCN to create the gateway in.
    pub vcn_id: String,
    /// Whether the gateway should pass traffic immediately.
    pub is_enabled: bool,
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

/// Body for `UpdateInternetGateway`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInternetGatewayDetails {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Enable or disable traffic through the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}
