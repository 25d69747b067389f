//! Typed resources for the virtual-networking service.
//!
//! Wire names are camelCase; lifecycle states are SCREAMING_SNAKE_CASE with a
//! catch-all variant so new server-side states never break deserialization.

use std::collections::BTreeMap;

/// Simple string key/value tags applied to a resource.
pub type FreeformTags = BTreeMap<String, String>;

/// Namespaced, schema-governed tags applied to a resource.
pub type DefinedTags = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

mod cpe;
mod cross_connect;
mod internet_gateway;
mod nat_gateway;
mod remote_peering_connection;
mod route_table;
mod security_list;
mod subnet;
mod vcn;
mod virtual_circuit;

pub use cpe::{Cpe, CpeLifecycleState, CreateCpeDetails, UpdateCpeDetails};
pub use cross_connect::{
    CreateCrossConnectDetails, CrossConnect, CrossConnectLifecycleState, UpdateCrossConnectDetails,
};
pub use internet_gateway::{
    CreateInternetGatewayDetails, InternetGateway, InternetGatewayLifecycleState,
    UpdateInternetGatewayDetails,
};
pub use nat_gateway::{CreateNatGatewayDetails, NatGateway, NatGatewayLifecycleState, UpdateNatGatewayDetails};
pub use remote_peering_connection::{
    ConnectRemotePeeringConnectionsDetails, CreateRemotePeeringConnectionDetails, PeeringStatus,
    RemotePeeringConnection, RemotePeeringConnectionLifecycleState,
};
pub use route_table::{
    CreateRouteTableDetails, RouteRule, RouteTable, RouteTableLifecycleState, UpdateRouteTableDetails,
};
pub use security_list::{
    CreateSecurityListDetails, EgressSecurityRule, IngressSecurityRule, SecurityList,
    SecurityListLifecycleState, UpdateSecurityListDetails,
};
pub use subnet::{CreateSubnetDetails, Subnet, SubnetLifecycleState, UpdateSubnetDetails};
pub use vcn::{ChangeVcnCompartmentDetails, CreateVcnDetails, UpdateVcnDetails, Vcn, VcnLifecycleState};
pub use virtual_circuit::{
    CreateVirtualCircuitDetails, UpdateVirtualCircuitDetails, VirtualCircuit,
    VirtualCircuitLifecycleState,
};
