//! Security list operations.
use cloudnet_core::{
    headers,
    models::{CreateSecurityListDetails, SecurityList, UpdateSecurityListDetails},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "securityLists";

/// Request object for `CreateSecurityList`.
#[derive(Debug, Clone, Default)]
pub struct CreateSecurityListRequest {
    /// Details for the new security list.
    pub details: CreateSecurityListDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetSecurityList`.
#[derive(Debug, Clone, Default)]
pub struct GetSecurityListRequest {
    /// Identifier of the security list.
    pub security_list_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListSecurityLists`.
#[derive(Debug, Clone, Default)]
pub struct ListSecurityListsRequest {
    /// Compartment to list in.
    pub compartment_id: String,
    /// Restrict to security lists of this VCN.
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

/// Request object for `UpdateSecurityList`.
#[derive(Debug, Clone, Default)]
pub struct UpdateSecurityListRequest {
    /// Identifier of the security list.
    pub security_list_id: String,
    /// Fields to update. Rule vectors replace the whole set.
    pub details: UpdateSecurityListDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteSecurityList`.
#[derive(Debug, Clone, Default)]
pub struct DeleteSecurityListRequest {
    /// Identifier of the security list.
    pub security_list_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Create a new security list in a VCN.
    pub async fn create_security_list(
        &self,
        req: CreateSecurityListRequest,
    ) -> Result<ApiResponse<SecurityList>> {
        const OP: Operation = Operation {
            name: "CreateSecurityList",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/SecurityList/CreateSecurityList",
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

    /// Get a security list by id.
    pub async fn get_security_list(
        &self,
        req: GetSecurityListRequest,
    ) -> Result<ApiResponse<SecurityList>> {
        const OP: Operation = Operation {
            name: "GetSecurityList",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/SecurityList/GetSecurityList",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.security_list_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the security lists in a compartment.
    pub async fn list_security_lists(
        &self,
        req: ListSecurityListsRequest,
    ) -> Result<ApiResponse<Vec<SecurityList>>> {
        const OP: Operation = Operation {
            name: "ListSecurityLists",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/SecurityList/ListSecurityLists",
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

    /// Update a security list.
    pub async fn update_security_list(
        &self,
        req: UpdateSecurityListRequest,
    ) -> Result<ApiResponse<SecurityList>> {
        const OP: Operation = Operation {
            name: "UpdateSecurityList",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/SecurityList/UpdateSecurityList",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.security_list_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a security list. The list must not be in use by a subnet.
    pub async fn delete_security_list(
        &self,
        req: DeleteSecurityListRequest,
    ) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteSecurityList",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/SecurityList/DeleteSecurityList",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.security_list_id)
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
