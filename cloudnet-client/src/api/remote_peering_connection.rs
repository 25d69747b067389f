//! Remote peering connection (RPC) operations.
use cloudnet_core::{
    headers,
    models::{
        ConnectRemotePeeringConnectionsDetails, CreateRemotePeeringConnectionDetails,
        RemotePeeringConnection,
    },
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "remotePeeringConnections";

/// Request object for `CreateRemotePeeringConnection`.
#[derive(Debug, Clone, Default)]
pub struct CreateRemotePeeringConnectionRequest {
    /// Details for the new RPC.
    pub details: CreateRemotePeeringConnectionDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetRemotePeeringConnection`.
#[derive(Debug, Clone, Default)]
pub struct GetRemotePeeringConnectionRequest {
    /// Identifier of the RPC.
    pub remote_peering_connection_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListRemotePeeringConnections`.
#[derive(Debug, Clone, Default)]
pub struct ListRemotePeeringConnectionsRequest {
    /// Compartment to list in.
    pub compartment_id: String,
    /// Restrict to RPCs attached to this DRG.
    pub drg_id: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Pagination cursor from a previous response's `opc-next-page`.
    pub page: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteRemotePeeringConnection`.
#[derive(Debug, Clone, Default)]
pub struct DeleteRemotePeeringConnectionRequest {
    /// Identifier of the RPC.
    pub remote_peering_connection_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ConnectRemotePeeringConnections`.
#[derive(Debug, Clone, Default)]
pub struct ConnectRemotePeeringConnectionsRequest {
    /// Identifier of the local RPC.
    pub remote_peering_connection_id: String,
    /// The peer to connect to.
    pub details: ConnectRemotePeeringConnectionsDetails,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Create a new remote peering connection on a DRG.
    pub async fn create_remote_peering_connection(
        &self,
        req: CreateRemotePeeringConnectionRequest,
    ) -> Result<ApiResponse<RemotePeeringConnection>> {
        const OP: Operation = Operation {
            name: "CreateRemotePeeringConnection",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RemotePeeringConnection/CreateRemotePeeringConnection",
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

    /// Get a remote peering connection by id.
    pub async fn get_remote_peering_connection(
        &self,
        req: GetRemotePeeringConnectionRequest,
    ) -> Result<ApiResponse<RemotePeeringConnection>> {
        const OP: Operation = Operation {
            name: "GetRemotePeeringConnection",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RemotePeeringConnection/GetRemotePeeringConnection",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.remote_peering_connection_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the remote peering connections in a compartment.
    pub async fn list_remote_peering_connections(
        &self,
        req: ListRemotePeeringConnectionsRequest,
    ) -> Result<ApiResponse<Vec<RemotePeeringConnection>>> {
        const OP: Operation = Operation {
            name: "ListRemotePeeringConnections",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RemotePeeringConnection/ListRemotePeeringConnections",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut params = vec![("compartmentId", req.compartment_id)];
        if let Some(drg_id) = req.drg_id {
            params.push(("drgId", drg_id));
        }
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

    /// Delete a remote peering connection.
    pub async fn delete_remote_peering_connection(
        &self,
        req: DeleteRemotePeeringConnectionRequest,
    ) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteRemotePeeringConnection",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RemotePeeringConnection/DeleteRemotePeeringConnection",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.remote_peering_connection_id)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        if let Some(token) = &req.opc_retry_token {
            insert_header(&mut request, headers::RETRY_TOKEN, token)?;
        }
        self.execute_unit(OP, request, &policy).await
    }

    /// Connect this RPC to a peer RPC in another region. Both RPCs then
    /// transition to the PEERED status asynchronously.
    pub async fn connect_remote_peering_connections(
        &self,
        req: ConnectRemotePeeringConnectionsRequest,
    ) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "ConnectRemotePeeringConnections",
            doc_link: "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/RemotePeeringConnection/ConnectRemotePeeringConnections",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .action(&req.remote_peering_connection_id, "connect", to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        self.execute_unit(OP, request, &policy).await
    }
}
