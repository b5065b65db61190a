//! Concurrent execution of independent request batches.
//!
//! A batch is a set of independent logical calls dispatched concurrently
//! and resolved together. Transfers complete in arbitrary order on the
//! wire; the returned collection is associated back to the originating
//! specs by index, one result per input, always: a request whose
//! transport fails is logged and recorded as an Error result at its
//! index, never silently dropped and never aborting the rest of the
//! batch.

use tokio::task::JoinSet;

use crate::auth::AuthContext;
use crate::clients::errors::ApiError;
use crate::clients::request::RequestSpec;
use crate::clients::response::ApiResponse;
use crate::clients::transport::Transport;

/// Drives N independent requests concurrently to completion.
///
/// Each invocation owns its set of in-flight transfers; nothing is shared
/// across concurrent batches except the underlying connection pool. The
/// per-request nonce and timestamp are generated at dispatch time inside
/// the transport, so in-flight requests need no coordination.
///
/// # Example
///
/// ```rust,ignore
/// use roadsafety_api::{BatchExecutor, Transport};
///
/// let executor = BatchExecutor::new(transport);
/// let results = executor.execute_all(vec![(spec_a, auth_a), (spec_b, auth_b)]).await?;
/// assert_eq!(results.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BatchExecutor {
    transport: Transport,
}

impl BatchExecutor {
    /// Creates a new executor over the given transport.
    #[must_use]
    pub const fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Executes every request concurrently and returns one result per
    /// input, in input order.
    ///
    /// A per-request transport failure (e.g. an unreachable host) is
    /// logged via `tracing::warn!` and recorded as an Error result at
    /// that request's index; the other requests are unaffected. There is
    /// no overall batch timeout beyond the transport's configured
    /// per-request timeout, and no cancellation once dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnrecognizedStatus`] if any response carries a
    /// status literal the client cannot safely interpret. That is a
    /// server contract violation, not a normal failure path.
    pub async fn execute_all(
        &self,
        requests: Vec<(RequestSpec, AuthContext)>,
    ) -> Result<Vec<ApiResponse>, ApiError> {
        let mut tasks = JoinSet::new();
        let total = requests.len();

        for (index, (spec, auth)) in requests.into_iter().enumerate() {
            let transport = self.transport.clone();
            tasks.spawn(async move {
                let outcome = transport.execute(&spec, &auth).await;
                (index, spec, outcome)
            });
        }

        let mut slots: Vec<Option<Result<ApiResponse, ApiError>>> = Vec::new();
        slots.resize_with(total, || None);

        while let Some(joined) = tasks.join_next().await {
            let Ok((index, spec, outcome)) = joined else {
                // A task failed to run to completion; the slot is filled
                // with a synthetic Error result below.
                continue;
            };
            match outcome {
                Ok(raw) => slots[index] = Some(ApiResponse::from_raw(raw)),
                Err(error) => {
                    tracing::warn!(
                        index,
                        resource = spec.resource(),
                        error = %error,
                        "batch request failed in transport"
                    );
                    slots[index] = Some(Ok(ApiResponse::transport_failure(error.to_string())));
                }
            }
        }

        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| Ok(ApiResponse::transport_failure("request was not run")))
            })
            .collect()
    }
}
