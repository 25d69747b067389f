//! Virtual circuit operations.
use cloudnet_core::{
    headers,
    models::{CreateVirtualCircuitDetails, UpdateVirtualCircuitDetails, VirtualCircuit},
};

use super::{insert_header, retry_token, to_body, ApiResponse, DefaultRetry, Operation, VirtualNetwork};
use crate::{client::RetryPolicy, Error, Result};

const COLLECTION: &str = "virtualCircuits";

/// Request object for `CreateVirtualCircuit`.
#[derive(Debug, Clone, Default)]
pub struct CreateVirtualCircuitRequest {
    /// Details for the new virtual circuit.
    pub details: CreateVirtualCircuitDetails,
    /// Idempotency token; a v4 UUID is generated when absent or blank.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `GetVirtualCircuit`.
#[derive(Debug, Clone, Default)]
pub struct GetVirtualCircuitRequest {
    /// Identifier of the virtual circuit.
    pub virtual_circuit_id: String,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `ListVirtualCircuits`.
#[derive(Debug, Clone, Default)]
pub struct ListVirtualCircuitsRequest {
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

/// Request object for `UpdateVirtualCircuit`.
#[derive(Debug, Clone, Default)]
pub struct UpdateVirtualCircuitRequest {
    /// Identifier of the virtual circuit.
    pub virtual_circuit_id: String,
    /// Fields to update.
    pub details: UpdateVirtualCircuitDetails,
    /// Entity tag the update must match.
    pub if_match: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

/// Request object for `DeleteVirtualCircuit`.
#[derive(Debug, Clone, Default)]
pub struct DeleteVirtualCircuitRequest {
    /// Identifier of the virtual circuit.
    pub virtual_circuit_id: String,
    /// Entity tag the delete must match.
    pub if_match: Option<String>,
    /// Idempotency token, forwarded verbatim when supplied.
    pub opc_retry_token: Option<String>,
    /// Per-request retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl VirtualNetwork {
    /// Provision a new virtual circuit.
    pub async fn create_virtual_circuit(
        &self,
        req: CreateVirtualCircuitRequest,
    ) -> Result<ApiResponse<VirtualCircuit>> {
        const OP: Operation = Operation {
            name: "CreateVirtualCircuit",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/VirtualCircuit/CreateVirtualCircuit",
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

    /// Get a virtual circuit by id.
    pub async fn get_virtual_circuit(
        &self,
        req: GetVirtualCircuitRequest,
    ) -> Result<ApiResponse<VirtualCircuit>> {
        const OP: Operation = Operation {
            name: "GetVirtualCircuit",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/VirtualCircuit/GetVirtualCircuit",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let request = self
            .collection(COLLECTION)
            .get(&req.virtual_circuit_id)
            .map_err(Error::BuildRequest)?;
        self.execute(OP, request, &policy).await
    }

    /// List the virtual circuits in a compartment.
    pub async fn list_virtual_circuits(
        &self,
        req: ListVirtualCircuitsRequest,
    ) -> Result<ApiResponse<Vec<VirtualCircuit>>> {
        const OP: Operation = Operation {
            name: "ListVirtualCircuits",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/VirtualCircuit/ListVirtualCircuits",
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

    /// Update a virtual circuit.
    pub async fn update_virtual_circuit(
        &self,
        req: UpdateVirtualCircuitRequest,
    ) -> Result<ApiResponse<VirtualCircuit>> {
        const OP: Operation = Operation {
            name: "UpdateVirtualCircuit",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/VirtualCircuit/UpdateVirtualCircuit",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .update(&req.virtual_circuit_id, to_body(&req.details)?)
            .map_err(Error::BuildRequest)?;
        if let Some(etag) = &req.if_match {
            insert_header(&mut request, headers::IF_MATCH, etag)?;
        }
        self.execute(OP, request, &policy).await
    }

    /// Delete a virtual circuit.
    pub async fn delete_virtual_circuit(
        &self,
        req: DeleteVirtualCircuitRequest,
    ) -> Result<ApiResponse<()>> {
        const OP: Operation = Operation {
            name: "DeleteVirtualCircuit",
            doc_link:
                "https://docs.oracle.com/iaas/api/#/en/iaas/20160918/VirtualCircuit/DeleteVirtualCircuit",
            retry: DefaultRetry::Standard,
        };
        let policy = self.select_retry(req.retry_policy.as_ref(), OP.retry);
        let mut request = self
            .collection(COLLECTION)
            .delete(&req.virtual_circuit_id)
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
