//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use espdash_app::config::DashboardConfig;
use espdash_app::ports::{BackendError, DeviceBackend, Endpoint, Method};
use espdash_domain::api::{ActionResponse, CommandRequest, DevicesResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// [`DeviceBackend`] talking to the device-management API over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            base: config.url(""),
        }
    }

    fn request(&self, endpoint: Endpoint<'_>) -> RequestBuilder {
        let url = format!("{}{}", self.base, endpoint.path());
        match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, BackendError> {
        let resp = self.request(endpoint).send().await.map_err(transport)?;
        decode(endpoint, resp).await
    }
}

fn transport(err: gloo_net::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

/// Decode the JSON body whatever the status code: the backend reports
/// logical failures as `{status: "error", message}` with 4xx/5xx codes.
async fn decode<T: DeserializeOwned>(
    endpoint: Endpoint<'_>,
    resp: Response,
) -> Result<T, BackendError> {
    if !resp.ok() {
        tracing::debug!(%endpoint, status = resp.status(), "non-2xx response");
    }
    resp.json::<T>()
        .await
        .map_err(|err| BackendError::Decode(format!("{endpoint}: {err}")))
}

impl DeviceBackend for HttpBackend {
    async fn fetch_devices(&self) -> Result<DevicesResponse, BackendError> {
        self.call(Endpoint::Devices).await
    }

    async fn send_command(
        &self,
        device_id: &str,
        request: &CommandRequest,
    ) -> Result<ActionResponse, BackendError> {
        let endpoint = Endpoint::Command(device_id);
        let resp = self
            .request(endpoint)
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(endpoint, resp).await
    }

    async fn reset_button(&self, device_id: &str) -> Result<ActionResponse, BackendError> {
        self.call(Endpoint::ResetButton(device_id)).await
    }

    async fn mix_colors(&self) -> Result<ActionResponse, BackendError> {
        self.call(Endpoint::MixColors).await
    }

    async fn discover(&self) -> Result<ActionResponse, BackendError> {
        self.call(Endpoint::Discover).await
    }

    async fn shutdown(&self) -> Result<(), BackendError> {
        self.request(Endpoint::Shutdown)
            .send()
            .await
            .map_err(transport)?;
        Ok(())
    }
}
