//! VCN operations.
use cloudnet_core::{
    headers,
    models::{ChangeVcnCompartmentDetails, CreateVcnDetails, UpdateVcnDetails, Vcn},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "vcns";

/// Request object for `CreateVcn`.
#[derive(Debug, Clone, Default)]
pub struct CreateVcnRequest {
    /// Details for the new VCN.
    pub details: CreateVcnDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy, overriding the client-level and default
    /// policies.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetVcn`.
#[derive(Debug, Clone, Default)]
pub struct GetVcnRequest {
    /// Identifier of the VCN.
    pub vcn_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListVcns`.
#[derive(Debug, Clone, Default)]
pub struct ListVcnsRequest {
    /// Compartment to list in.
    pub compartment_id: String,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response's `opc-next-page`.
    pub page: Option<String>,
    /// Filter to resources with exactly this display name.
    pub display_name: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `UpdateVcn`.
#[derive(Debug, Clone, Default)]
pub struct UpdateVcnRequest {
    /// Identifier of the VCN.
    pub vcn_id: String,
    /// Fields to update.
    pub details: UpdateVcnDetails,
    /// Entity tag the update must match, for optimistic concurrency.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteVcn`.
#[derive(Debug, Clone, Default)]
pub struct DeleteVcnRequest {
    /// Identifier of the VCN.
    pub vcn_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ChangeVcnCompartment`.
#[derive(Debug, Clone, Default)]
pub struct ChangeVcnCompartmentRequest {
    /// Identifier of the VCN.
    pub vcn_id: String,
    /// The destination compartment.
    pub details: ChangeVcnCompartmentDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Create a new VCN.
    pub async fn create_vcn(&self, req: CreateVcnRequest) -> Result<ApiResponse<Vcn>> {
        const OP: Operation = Operation {
            name: "CreateVcn",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Vcn/CreateVcn",
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

    /// Get a VCN by id.
    pub async fn get_vcn(&self, req: GetVcnRequest) -> Result<ApiResponse<Vcn>> {
        const OP: Operation = Operation {
            name: "GetVcn",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Vcn/GetVcn",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.vcn_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the VCNs in a compartment.
    pub async fn list_vcns(&self, req: ListVcnsRequest) -> Result<ApiResponse<Vec<Vcn>>> {
        const OP: Operation = Operation {
            name: "ListVcns",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Vcn/ListVcns",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut params = vec![("compartmentId", req.compartment_id)];
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

    /// Update a VCN.
    pub async fn update_vcn(&self, req: UpdateVcnRequest) -> Result<ApiResponse<Vcn>> {
        const OP: Operation = Operation {
            name: "UpdateVcn",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Vcn/UpdateVcn",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.vcn_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a VCN. The VCN must be empty.
    pub async fn delete_vcn(&self, req: DeleteVcnRequest) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteVcn",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Vcn/DeleteVcn",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.vcn_id)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        if let Some(token) = &req.opc_retry_token {
            insert_header(&mut request, headers::RETRY_TOKEN, token)?;
        }
        self.execute_unit(OP, request, &policy).await
    }

    /// Move a VCN into a different compartment.
    pub async fn change_vcn_compartment(
        &self,
        req: ChangeVcnCompartmentRequest,
    ) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "ChangeVcnCompartment",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Vcn/ChangeVcnCompartment",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .action(&req.vcn_id, "changeCompartment", to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        insert_header(&mut request, headers::RETRY_TOKEN, &retry_token(req.opc_retry_token))?;
        self.execute_unit(OP, request, &policy).await
    }
}
