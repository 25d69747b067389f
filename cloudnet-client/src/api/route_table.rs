//! Route table operations.
use cloudnet_core::{
    headers,
    models::{CreateRouteTableDetails, RouteTable, UpdateRouteTableDetails},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "routeTables";

/// Request object for `CreateRouteTable`.
#[derive(Debug, Clone, Default)]
pub struct CreateRouteTableRequest {
    /// Details for the new route table.
    pub details: CreateRouteTableDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetRouteTable`.
#[derive(Debug, Clone, Default)]
pub struct GetRouteTableRequest {
    /// Identifier of the route table.
    pub rt_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListRouteTables`.
#[derive(Debug, Clone, Default)]
pub struct ListRouteTablesRequest {
    /// Compartment to list in.
    pub compartment_id: String,
    /// Restrict to route tables of this VCN.
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

/// Request object for `UpdateRouteTable`.
#[derive(Debug, Clone, Default)]
pub struct UpdateRouteTableRequest {
    /// Identifier of the route table.
    pub rt_id: String,
    /// Fields to update. A `route_rules` value replaces the whole set.
    pub details: UpdateRouteTableDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteRouteTable`.
#[derive(Debug, Clone, Default)]
pub struct DeleteRouteTableRequest {
    /// Identifier of the route table.
    pub rt_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Create a new route table in a VCN.
    pub async fn create_route_table(
        &self,
        req: CreateRouteTableRequest,
    ) -> Result<ApiResponse<RouteTable>> {
        const OP: Operation = Operation {
            name: "CreateRouteTable",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RouteTable/CreateRouteTable",
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

    /// Get a route table by id.
    pub async fn get_route_table(&self, req: GetRouteTableRequest) -> Result<ApiResponse<RouteTable>> {
        const OP: Operation = Operation {
            name: "GetRouteTable",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RouteTable/GetRouteTable",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.rt_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the route tables in a compartment.
    pub async fn list_route_tables(
        &self,
        req: ListRouteTablesRequest,
    ) -> Result<ApiResponse<Vec<RouteTable>>> {
        const OP: Operation = Operation {
            name: "ListRouteTables",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RouteTable/ListRouteTables",
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

    /// Update a route table.
    pub async fn update_route_table(
        &self,
        req: UpdateRouteTableRequest,
    ) -> Result<ApiResponse<RouteTable>> {
        const OP: Operation = Operation {
            name: "UpdateRouteTable",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RouteTable/UpdateRouteTable",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.rt_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a route table. The table must not be associated with a subnet.
    pub async fn delete_route_table(&self, req: DeleteRouteTableRequest) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteRouteTable",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RouteTable/DeleteRouteTable",
            retry: DefaultRetry::None,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.rt_id)
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
