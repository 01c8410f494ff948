//! Health endpoint

use scout_core::domain::health::HealthStatus;

use crate::ScoutingClient;
use crate::error::Result;

impl ScoutingClient {
    /// Check the health of the API and its dependencies
    ///
    /// An unhealthy dependency is reported in the returned status, not as an error.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(&["health"])?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }
}
