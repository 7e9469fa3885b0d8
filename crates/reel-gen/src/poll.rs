//! Operation poll loop.

use tracing::debug;

use crate::client::{GeminiClient, Operation};
use crate::error::{GenError, GenResult};

/// Poll an operation handle until it reaches a terminal state.
///
/// Re-queries the service while the operation is not done, suspending for
/// the configured interval between successive queries; N queries incur N-1
/// delays. There is no wall-clock bound here; the outer retry policy is the
/// only ceiling. A terminal error payload fails immediately with no further
/// queries.
pub async fn await_completion(
    client: &GeminiClient,
    mut operation: Operation,
) -> GenResult<Operation> {
    while !operation.done {
        operation = client.check_operation(&operation).await?;
        if operation.done {
            break;
        }
        debug!(name = %operation.name, "Operation still running");
        tokio::time::sleep(client.config().poll_interval).await;
    }

    if let Some(error) = &operation.error {
        return Err(GenError::poll(format!(
            "failed to generate video: {}",
            error.message
        )));
    }

    Ok(operation)
}
