use super::dto::{ActividadRequest, ActividadResponse};
use super::model::{Notice, NoticeForm};
use reqwest::{Client, RequestBuilder, Response};
use tracing::{error, info};

pub const DEFAULT_API_URL: &str = "https://gestor-de-novedades-backend.onrender.com/actividades";

/// Client of the `/actividades` collection
#[derive(Debug, Clone)]
pub struct NovedadesAPI {
    client: Client,
    base_url: String,
}

impl Default for NovedadesAPI {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl NovedadesAPI {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns every notice, in the order the backend sent them
    #[tracing::instrument(skip(self), fields(url = %self.base_url))]
    pub async fn get_notices(&self) -> Result<Vec<Notice>, APIError> {
        let json_response = Self::send(self.client.get(&self.base_url))
            .await?
            .text()
            .await
            .map_err(request_failed)?;

        match serde_json::from_str::<Vec<ActividadResponse>>(&json_response) {
            Ok(parsed_response) => {
                info!("Got {} notices", parsed_response.len());

                Ok(parsed_response.iter().map(|dto| dto.to_model()).collect())
            }
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(APIError::InvalidResponse(e))
            }
        }
    }

    #[tracing::instrument(skip(self, form), fields(url = %self.base_url, name = %form.name))]
    pub async fn create_notice(&self, form: &NoticeForm) -> Result<(), APIError> {
        Self::send(
            self.client
                .post(&self.base_url)
                .json(&ActividadRequest::from(form)),
        )
        .await?;
        info!("Notice created");

        Ok(())
    }

    #[tracing::instrument(skip(self, form), fields(url = %self.base_url))]
    pub async fn update_notice(&self, id: &str, form: &NoticeForm) -> Result<(), APIError> {
        Self::send(
            self.client
                .put(self.notice_url(id))
                .json(&ActividadRequest::from(form)),
        )
        .await?;
        info!("Notice updated");

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(url = %self.base_url))]
    pub async fn delete_notice(&self, id: &str) -> Result<(), APIError> {
        Self::send(self.client.delete(self.notice_url(id))).await?;
        info!("Notice deleted");

        Ok(())
    }

    fn notice_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Transport errors and non-2xx statuses both end up here
    async fn send(request: RequestBuilder) -> Result<Response, APIError> {
        request
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(request_failed)
    }
}

fn request_failed(e: reqwest::Error) -> APIError {
    error!("Request failed: {}", e);
    APIError::Request(e)
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}
