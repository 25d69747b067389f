//! Subnet operations.
use cloudnet_core::{
    headers,
    models::{CreateSubnetDetails, Subnet, UpdateSubnetDetails},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "subnets";

/// Request object for `CreateSubnet`.
#[derive(Debug, Clone, Default)]
pub struct CreateSubnetRequest {
    /// Details for the new subnet.
    pub details: CreateSubnetDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetSubnet`.
#[derive(Debug, Clone, Default)]
pub struct GetSubnetRequest {
    /// Identifier of the subnet.
    pub subnet_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListSubnets`.
#[derive(Debug, Clone, Default)]
pub struct ListSubnetsRequest {
    /// Compartment to list in.
    pub compartment_id: String,
    /// Restrict to subnets of this VCN.
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

/// Request object for `UpdateSubnet`.
#[derive(Debug, Clone, Default)]
pub struct UpdateSubnetRequest {
    /// Identifier of the subnet.
    pub subnet_id: String,
    /// Fields to update.
    pub details: UpdateSubnetDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteSubnet`.
#[derive(Debug, Clone, Default)]
pub struct DeleteSubnetRequest {
    /// Identifier of the subnet.
    pub subnet_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Create a new subnet in a VCN.
    pub async fn create_subnet(&self, req: CreateSubnetRequest) -> Result<ApiResponse<Subnet>> {
        const OP: Operation = Operation {
            name: "CreateSubnet",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Subnet/CreateSubnet",
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

    /// Get a subnet by id.
    pub async fn get_subnet(&self, req: GetSubnetRequest) -> Result<ApiResponse<Subnet>> {
        const OP: Operation = Operation {
            name: "GetSubnet",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Subnet/GetSubnet",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.subnet_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the subnets in a compartment.
    pub async fn list_subnets(&self, req: ListSubnetsRequest) -> Result<ApiResponse<Vec<Subnet>>> {
        const OP: Operation = Operation {
            name: "ListSubnets",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Subnet/ListSubnets",
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

    /// Update a subnet.
    pub async fn update_subnet(&self, req: UpdateSubnetRequest) -> Result<ApiResponse<Subnet>> {
        const OP: Operation = Operation {
            name: "UpdateSubnet",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Subnet/UpdateSubnet",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.subnet_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a subnet. The subnet must contain no instances.
    pub async fn delete_subnet(&self, req: DeleteSubnetRequest) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteSubnet",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Subnet/DeleteSubnet",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.subnet_id)
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
