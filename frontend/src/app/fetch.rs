use common::{Memo, MemoCreate, MemoId};

use crate::config::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

#[async_trait::async_trait(?Send)]
pub(crate) trait MemoTransport {
    async fn list_memos(&self) -> Result<Vec<Memo>, TransportError>;

    async fn create_memo(&self, payload: &MemoCreate) -> Result<Memo, TransportError>;

    async fn delete_memo(&self, id: MemoId) -> Result<(), TransportError>;
}

pub(crate) struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub(crate) fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

const JSON: &str = "application/json";

fn check_status(response: &reqwasm::http::Response) -> Result<(), TransportError> {
    if response.ok() {
        Ok(())
    } else {
        Err(TransportError::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}

#[async_trait::async_trait(?Send)]
impl MemoTransport for HttpTransport {
    async fn list_memos(&self) -> Result<Vec<Memo>, TransportError> {
        let url = self.config.memos_url();
        log::debug!("event=transport_request method=GET url={}", url);
        let response = reqwasm::http::Request::get(&url)
            .header("content-type", JSON)
            .send()
            .await
            .map_err(|error| TransportError::Network(error.to_string()))?;
        check_status(&response)?;
        response
            .json::<Vec<Memo>>()
            .await
            .map_err(|error| TransportError::Decode(error.to_string()))
    }

    async fn create_memo(&self, payload: &MemoCreate) -> Result<Memo, TransportError> {
        let body = serde_json::to_string(payload)
            .map_err(|error| TransportError::Encode(error.to_string()))?;
        let url = self.config.memos_url();
        log::debug!("event=transport_request method=POST url={}", url);
        let response = reqwasm::http::Request::post(&url)
            .body(body)
            .header("content-type", JSON)
            .send()
            .await
            .map_err(|error| TransportError::Network(error.to_string()))?;
        check_status(&response)?;
        response
            .json::<Memo>()
            .await
            .map_err(|error| TransportError::Decode(error.to_string()))
    }

    async fn delete_memo(&self, id: MemoId) -> Result<(), TransportError> {
        let url = self.config.memo_url(id);
        log::debug!("event=transport_request method=DELETE url={}", url);
        let response = reqwasm::http::Request::delete(&url)
            .header("content-type", JSON)
            .send()
            .await
            .map_err(|error| TransportError::Network(error.to_string()))?;
        check_status(&response)
    }
}
