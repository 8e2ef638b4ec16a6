//! HTTP implementation of `TodosApi` on top of reqwest.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::error::{ApiError, ApiResult};
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::traits::TodosApi;

pub const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

/// REST client scoped to a single owner
#[derive(Debug, Clone)]
pub struct HttpTodosApi {
    client: Client,
    base_url: String,
    user_id: u32,
}

impl HttpTodosApi {
    pub fn new(base_url: impl Into<String>, user_id: u32) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn list_url(&self) -> String {
        format!("{}?userId={}", self.collection_url(), self.user_id)
    }

    fn todo_url(&self, id: u32) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

/// Turn a non-2xx response into `ApiError::Status`
async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait(?Send)]
impl TodosApi for HttpTodosApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let url = self.list_url();
        debug!("[API] GET {}", url);
        let response = check(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, todo: &NewTodo) -> ApiResult<Todo> {
        let url = self.collection_url();
        debug!("[API] POST {} title={:?}", url, todo.title);
        let response = check(self.client.post(&url).json(todo).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: u32, patch: &TodoPatch) -> ApiResult<Todo> {
        let url = self.todo_url(id);
        debug!("[API] PATCH {} {:?}", url, patch);
        let response = check(self.client.patch(&url).json(patch).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let url = self.todo_url(id);
        debug!("[API] DELETE {}", url);
        check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_scoped_to_owner() {
        let api = HttpTodosApi::new("https://example.com/api/", 17);

        assert_eq!(api.collection_url(), "https://example.com/api/todos");
        assert_eq!(api.list_url(), "https://example.com/api/todos?userId=17");
        assert_eq!(api.todo_url(5), "https://example.com/api/todos/5");
    }

    #[test]
    fn test_default_base_url() {
        let api = HttpTodosApi::new(DEFAULT_API_URL, 1);
        assert_eq!(api.list_url(), "https://mate.academy/students-api/todos?userId=1");
    }
}
