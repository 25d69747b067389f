//! Cross-connect operations.
use cloudnet_core::{
    headers,
    models::{CreateCrossConnectDetails, CrossConnect, UpdateCrossConnectDetails},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "crossConnects";

/// Request object for `CreateCrossConnect`.
#[derive(Debug, Clone, Default)]
pub struct CreateCrossConnectRequest {
    /// Details for the new cross-connect.
    pub details: CreateCrossConnectDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetCrossConnect`.
#[derive(Debug, Clone, Default)]
pub struct GetCrossConnectRequest {
    /// Identifier of the cross-connect.
    pub cross_connect_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListCrossConnects`.
#[derive(Debug, Clone, Default)]
pub struct ListCrossConnectsRequest {
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

/// Request object for `UpdateCrossConnect`.
#[derive(Debug, Clone, Default)]
pub struct UpdateCrossConnectRequest {
    /// Identifier of the cross-connect.
    pub cross_connect_id: String,
    /// Fields to update.
    pub details: UpdateCrossConnectDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteCrossConnect`.
#[derive(Debug, Clone, Default)]
pub struct DeleteCrossConnectRequest {
    /// Identifier of the cross-connect.
    pub cross_connect_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Order a new cross-connect.
    pub async fn create_cross_connect(
        &self,
        req: CreateCrossConnectRequest,
    ) -> Result<ApiResponse<CrossConnect>> {
        const OP: Operation = Operation {
            name: "CreateCrossConnect",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/CrossConnect/CreateCrossConnect",
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

    /// Get a cross-connect by id.
    pub async fn get_cross_connect(
        &self,
        req: GetCrossConnectRequest,
    ) -> Result<ApiResponse<CrossConnect>> {
        const OP: Operation = Operation {
            name: "GetCrossConnect",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/CrossConnect/GetCrossConnect",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.cross_connect_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the cross-connects in a compartment.
    pub async fn list_cross_connects(
        &self,
        req: ListCrossConnectsRequest,
    ) -> Result<ApiResponse<Vec<CrossConnect>>> {
        const OP: Operation = Operation {
            name: "ListCrossConnects",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/CrossConnect/ListCrossConnects",
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
        if let Some(display_name) = req.display_name {
            params.push(("displayName", display_name));
        }
        let request = self
            .collection(COLLECTION)
            .list(&params)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// Update a cross-connect.
    pub async fn update_cross_connect(
        &self,
        req: UpdateCrossConnectRequest,
    ) -> Result<ApiResponse<CrossConnect>> {
        const OP: Operation = Operation {
            name: "UpdateCrossConnect",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/CrossConnect/UpdateCrossConnect",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.cross_connect_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a cross-connect. It must be in a terminatable state.
    pub async fn delete_cross_connect(
        &self,
        req: DeleteCrossConnectRequest,
    ) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteCrossConnect",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/CrossConnect/DeleteCrossConnect",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.cross_connect_id)
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
