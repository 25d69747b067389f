//! Customer-premises equipment (CPE) operations.
//!
//! Connectivity resources default to the standard retry policy; their
//! control plane tolerates replays and throttles aggressively.
use cloudnet_core::{
    headers,
    models::{Cpe, CreateCpeDetails, UpdateCpeDetails},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "cpes";

/// Request object for `CreateCpe`.
#[derive(Debug, Clone, Default)]
pub struct CreateCpeRequest {
    /// Details for the new CPE.
    pub details: CreateCpeDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetCpe`.
#[derive(Debug, Clone, Default)]
pub struct GetCpeRequest {
    /// Identifier of the CPE.
    pub cpe_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListCpes`.
#[derive(Debug, Clone, Default)]
pub struct ListCpesRequest {
    /// Compartment to list in.
    pub compartment_id: String,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response's `opc-next-page`.
    pub page: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `UpdateCpe`.
#[derive(Debug, Clone, Default)]
pub struct UpdateCpeRequest {
    /// Identifier of the CPE.
    pub cpe_id: String,
    /// Fields to update.
    pub details: UpdateCpeDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteCpe`.
#[derive(Debug, Clone, Default)]
pub struct DeleteCpeRequest {
    /// Identifier of the CPE.
    pub cpe_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Register a new CPE object.
    pub async fn create_cpe(&self, req: CreateCpeRequest) -> Result<ApiResponse<Cpe>> {
        const OP: Operation = Operation {
            name: "CreateCpe",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Cpe/CreateCpe",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .create(to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        insert_header(&mut request, headers::RETRY_TOKEN, &retry_token(req.opc_retry_token))?;
        self.execute(OP, request, &policy).await
    }

    /// Get a CPE by id.
    pub async fn get_cpe(&self, req: GetCpeRequest) -> Result<ApiResponse<Cpe>> {
        const OP: Operation = Operation {
            name: "GetCpe",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Cpe/GetCpe",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.cpe_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the CPEs in a compartment.
    pub async fn list_cpes(&self, req: ListCpesRequest) -> Result<ApiResponse<Vec<Cpe>>> {
        const OP: Operation = Operation {
            name: "ListCpes",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Cpe/ListCpes",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut params = vec![("compartmentId", req.compartment_id)];
        if let Some(limit) = req.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(page) = req.page {
            params.push(("page", page));
        }
        let request = self
            .collection(COLLECTION)
            .list(&params)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// Update a CPE.
    pub async fn update_cpe(&self, req: UpdateCpeRequest) -> Result<ApiResponse<Cpe>> {
        const OP: Operation = Operation {
            name: "UpdateCpe",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Cpe/UpdateCpe",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.cpe_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a CPE. The CPE must not be in use by an IPSec connection.
    pub async fn delete_cpe(&self, req: DeleteCpeRequest) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteCpe",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/Cpe/DeleteCpe",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.cpe_id)
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
