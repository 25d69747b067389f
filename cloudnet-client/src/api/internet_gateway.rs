//! Internet gateway operations.
use cloudnet_core::{
    headers,
    models::{CreateInternetGatewayDetails, InternetGateway, UpdateInternetGatewayDetails},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "internetGateways";

/// Request object for `CreateInternetGateway`.
#[derive(Debug, Clone, Default)]
pub struct CreateInternetGatewayRequest {
    /// Details for the new internet gateway.
    pub details: CreateInternetGatewayDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetInternetGateway`.
#[derive(Debug, Clone, Default)]
pub struct GetInternetGatewayRequest {
    /// Identifier of the internet gateway.
    pub ig_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListInternetGateways`.
#[derive(Debug, Clone, Default)]
pub struct ListInternetGatewaysRequest {
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

/// Request object for `UpdateInternetGateway`.
#[derive(Debug, Clone, Default)]
pub struct UpdateInternetGatewayRequest {
    /// Identifier of the internet gateway.
    pub ig_id: String,
    /// Fields to update.
    pub details: UpdateInternetGatewayDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteInternetGateway`.
#[derive(Debug, Clone, Default)]
pub struct DeleteInternetGatewayRequest {
    /// Identifier of the internet gateway.
    pub ig_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Create a new internet gateway in a VCN.
    pub async fn create_internet_gateway(
        &self,
        req: CreateInternetGatewayRequest,
    ) -> Result<ApiResponse<InternetGateway>> {
        const OP: Operation = Operation {
            name: "CreateInternetGateway",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/InternetGateway/CreateInternetGateway",
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

    /// Get an internet gateway by id.
    pub async fn get_internet_gateway(
        &self,
        req: GetInternetGatewayRequest,
    ) -> Result<ApiResponse<InternetGateway>> {
        const OP: Operation = Operation {
            name: "GetInternetGateway",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/InternetGateway/GetInternetGateway",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.ig_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the internet gateways in a compartment.
    pub async fn list_internet_gateways(
        &self,
        req: ListInternetGatewaysRequest,
    ) -> Result<ApiResponse<Vec<InternetGateway>>> {
        const OP: Operation = Operation {
            name: "ListInternetGateways",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/InternetGateway/ListInternetGateways",
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

    /// Update an internet gateway.
    pub async fn update_internet_gateway(
        &self,
        req: UpdateInternetGatewayRequest,
    ) -> Result<ApiResponse<InternetGateway>> {
        const OP: Operation = Operation {
            name: "UpdateInternetGateway",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/InternetGateway/UpdateInternetGateway",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.ig_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete an internet gateway.
    pub async fn delete_internet_gateway(
        &self,
        req: DeleteInternetGatewayRequest,
    ) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteInternetGateway",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/InternetGateway/DeleteInternetGateway",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.ig_id)
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
