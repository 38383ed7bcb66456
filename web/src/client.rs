use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::error::ClientError;
use crate::model::{NewTodo, Todo};

pub struct TodoApiService {
    client: Client,
    base_url: String,
}

impl TodoApiService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, rest: &str) -> String {
        format!("{}/api/ToDos{}", self.base_url, rest)
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn get_all(&self) -> Result<Vec<Todo>, ClientError> {
        let url = self.url("");
        debug!("GET {}", url);

        let response = Self::check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// `None` when the record does not exist; other failures are errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Todo>, ClientError> {
        let url = self.url(&format!("/{id}"));
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check(response).await?;
        Ok(Some(response.json().await?))
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Todo>, ClientError> {
        let url = self.url(&format!("/search/{keyword}"));
        debug!("GET {}", url);

        let response = Self::check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn create(&self, todo: &NewTodo) -> Result<Todo, ClientError> {
        let url = self.url("");
        debug!("POST {}", url);

        let response = Self::check(self.client.post(&url).json(todo).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Full replace; the server answers 204 with no body, so the caller
    /// re-fetches to observe the new state.
    pub async fn update(&self, id: i64, todo: &Todo) -> Result<(), ClientError> {
        let url = self.url(&format!("/{id}"));
        debug!("PUT {}", url);

        Self::check(self.client.put(&url).json(todo).send().await?).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let url = self.url(&format!("/{id}"));
        debug!("DELETE {}", url);

        Self::check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
