use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DefinedTags, FreeformTags};

/// A virtual cloud network.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vcn {
    /// Identifier of the VCN.
    pub id: String,
    /// Compartment containing the VCN.
    pub compartment_id: String,
    /// The first IPv4 CIDR block of the VCN.
    #[serde(default)]
    pub cidr_block: String,
    /// All IPv4 CIDR blocks assigned to the VCN.
    #[serde(default)]
    pub cidr_blocks: Vec<String>,
    /// Display name, changeable and non-unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label used to form the VCN's internal domain name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Route table assigned to new subnets by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_route_table_id: Option<String>,
    /// Security list assigned to new subnets by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_security_list_id: Option<String>,
    /// Current state of the VCN.
    pub lifecycle_state: VcnLifecycleState,
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

/// States a [`Vcn`] moves through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum VcnLifecycleState {
    Provisioning,
    Available,
    Terminating,
    Terminated,
    Updating,
    /// Forward compatibility for states this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Body for `CreateVcn`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVcnDetails {
    /// Compartment to create the VCN in.
    pub compartment_id: String,
    /// The first IPv4 CIDR block. Mutually exclusive with `cidr_blocks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// IPv4 CIDR blocks for the VCN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_blocks: Option<Vec<String>>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label. Immutable after creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Freeform tags.
    #[serde(default, skip_serializing_if = "FreeformTags::is_empty")]
    pub freeform_tags: FreeformTags,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "DefinedTags::is_empty")]
    pub defined_tags: DefinedTags,
}

/// Body for `UpdateVcn`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVcnDetails {
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

/// Body for the `ChangeVcnCompartment` action.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeVcnCompartmentDetails {
    /// Compartment to move the VCN into.
    pub compartment_id: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vcn_deserializes_from_wire_shape() {
        let body = r#"{
            "id": "ocid1.vcn.oc1..aaaa",
            "compartmentId": "ocid1.compartment.oc1..bbbb",
            "cidrBlock": "10.0.0.0/16",
            "cidrBlocks": ["10.0.0.0/16"],
            "displayName": "prod-vcn",
            "lifecycleState": "AVAILABLE",
            "timeCreated": "2024-05-01T12:00:00Z"
        }"#;
        let vcn: Vcn = serde_json::from_str(body).unwrap();
        assert_eq!(vcn.lifecycle_state, VcnLifecycleState::Available);
        assert_eq!(vcn.cidr_block, "10.0.0.0/16");
        assert_eq!(vcn.display_name.as_deref(), Some("prod-vcn"));
    }

    #[test]
    fn unknown_lifecycle_state_is_tolerated() {
        let body = r#"{
            "id": "ocid1.vcn.oc1..aaaa",
            "compartmentId": "ocid1.compartment.oc1..bbbb",
            "lifecycleState": "SOMETHING_NEW"
        }"#;
        let vcn: Vcn = serde_json::from_str(body).unwrap();
        assert_eq!(vcn.lifecycle_state, VcnLifecycleState::Unknown);
    }

    #[test]
    fn create_details_skip_absent_fields() {
        let details = CreateVcnDetails {
            compartment_id: "ocid1.compartment.oc1..bbbb".into(),
            cidr_block: Some("10.0.0.0/16".into()),
            ..CreateVcnDetails::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "compartmentId": "ocid1.compartment.oc1..bbbb",
                "cidrBlock": "10.0.0.0/16"
            })
        );
    }
}
