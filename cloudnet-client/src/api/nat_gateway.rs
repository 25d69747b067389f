//! NAT gateway operations.
use cloudnet_core::{
    headers,
    models::{CreateNatGatewayDetails, NatGateway, UpdateNatGatewayDetails},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "natGateways";

/// Request object for `CreateNatGateway`.
#[derive(Debug, Clone, Default)]
pub struct CreateNatGatewayRequest {
    /// Details for the new NAT gateway.
    pub details: CreateNatGatewayDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetNatGateway`.
#[derive(Debug, Clone, Default)]
pub struct GetNatGatewayRequest {
    /// Identifier of the NAT gateway.
    pub nat_gateway_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListNatGateways`.
#[derive(Debug, Clone, Default)]
pub struct ListNatGatewaysRequest {
    /// Compartment to list in.
    pub compartment_id: String,
    /// Restrict to gateways of this VCN.
    pub vcn_id: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response's `opc-next-page`.
    pub page: Option<String>,
    /// Filter to resources with exactly this display name.
    pub display_name: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `UpdateNatGateway`.
#[derive(Debug, Clone, Default)]
pub struct UpdateNatGatewayRequest {
    /// Identifier of the NAT gateway.
    pub nat_gateway_id: String,
    /// Fields to update.
    pub details: UpdateNatGatewayDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteNatGateway`.
#[derive(Debug, Clone, Default)]
pub struct DeleteNatGatewayRequest {
    /// Identifier of the NAT gateway.
    pub nat_gateway_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Create a new NAT gateway in a VCN.
    pub async fn create_nat_gateway(
        &self,
        req: CreateNatGatewayRequest,
    ) -> Result<ApiResponse<NatGateway>> {
        const OP: Operation = Operation {
            name: "CreateNatGateway",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/NatGateway/CreateNatGateway",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .create(to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        insert_header(&mut request, headers::RETRY_TOKEN, &retry_token(req.opc_retry_token))?;
        self.execute(OP, request, &policy).await
    }

    /// Get a NAT gateway by id.
    pub async fn get_nat_gateway(&self, req: GetNatGatewayRequest) -> Result<ApiResponse<NatGateway>> {
        const OP: Operation = Operation {
            name: "GetNatGateway",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/NatGateway/GetNatGateway",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.nat_gateway_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the NAT gateways in a compartment.
    pub async fn list_nat_gateways(
        &self,
        req: ListNatGatewaysRequest,
    ) -> Result<ApiResponse<Vec<NatGateway>>> {
        const OP: Operation = Operation {
            name: "ListNatGateways",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/NatGateway/ListNatGateways",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut params = vec![("compartmentId", req.compartment_id)];
        if let Some(vcn_id) = req.vcn_id {
            params.push(("vcnId", vcn_id));
        }
        if let Some(limit) = req.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(page) = req.page {
            params.push(("page", page));
        }
        if let Some(display_name) = req.display_name {
            params.push(("displayName", display_name));
        }
        let request = self
            .collection(COLLECTION)
            .list(&params)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// Update a NAT gateway.
    pub async fn update_nat_gateway(
        &self,
        req: UpdateNatGatewayRequest,
    ) -> Result<ApiResponse<NatGateway>> {
        const OP: Operation = Operation {
            name: "UpdateNatGateway",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/NatGateway/UpdateNatGateway",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.nat_gateway_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a NAT gateway.
    pub async fn delete_nat_gateway(&self, req: DeleteNatGatewayRequest) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteNatGateway",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/NatGateway/DeleteNatGateway",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.nat_gateway_id)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        if let Some(token) = &req.opc_retry_token {
            insert_header(&mut request, headers::RETRY_TOKEN, token)?;
        }
        self.execute_unit(OP, request, &policy).await
    }
}
