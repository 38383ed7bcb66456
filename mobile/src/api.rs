use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::error::ClientError;
use crate::model::{NewTodo, Todo};

#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn get_all_todos(&self) -> Result<Vec<Todo>, ClientError>;
    async fn get_todo(&self, id: i64) -> Result<Todo, ClientError>;
    async fn search_todos(&self, keyword: &str) -> Result<Vec<Todo>, ClientError>;
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ClientError>;
    async fn update_todo(&self, id: i64, todo: &Todo) -> Result<(), ClientError>;
    async fn delete_todo(&self, id: i64) -> Result<(), ClientError>;
}

pub struct TodoApiClient {
    client: Client,
    base_url: String,
}

impl TodoApiClient {
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
}

#[async_trait]
impl TodoApi for TodoApiClient {
    async fn get_all_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let url = self.url("");
        debug!("GET {}", url);

        let response = Self::check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn get_todo(&self, id: i64) -> Result<Todo, ClientError> {
        let url = self.url(&format!("/{id}"));
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id));
        }

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn search_todos(&self, keyword: &str) -> Result<Vec<Todo>, ClientError> {
        let url = self.url(&format!("/search/{keyword}"));
        debug!("GET {}", url);

        let response = Self::check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ClientError> {
        let url = self.url("");
        debug!("POST {}", url);

        let response = Self::check(self.client.post(&url).json(todo).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update_todo(&self, id: i64, todo: &Todo) -> Result<(), ClientError> {
        let url = self.url(&format!("/{id}"));
        debug!("PUT {}", url);

        Self::check(self.client.put(&url).json(todo).send().await?).await?;
        Ok(())
    }

    async fn delete_todo(&self, id: i64) -> Result<(), ClientError> {
        let url = self.url(&format!("/{id}"));
        debug!("DELETE {}", url);

        Self::check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
