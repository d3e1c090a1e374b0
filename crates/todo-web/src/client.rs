//! todo-api の HTTP クライアント

use async_trait::async_trait;
use domain::{CreateTodoRequest, MutationResponse, Todo, TodoId, UpdateTodoRequest};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 2xx 以外の応答
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// 接続失敗・ボディのデコード失敗など
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// ビューから見た API 操作
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Todo>, ClientError>;
    async fn create(&self, title: &str) -> Result<MutationResponse, ClientError>;
    async fn set_completed(&self, id: TodoId, completed: bool)
        -> Result<MutationResponse, ClientError>;
    async fn delete(&self, id: TodoId) -> Result<MutationResponse, ClientError>;
}

/// reqwest による実装
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoApi {
    /// `base_url` は `http://localhost:8787` のようにパスを含まない形で渡す
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }
}

fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ClientError::Status(status.as_u16()))
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let resp = self.client.get(self.todos_url()).send().await?;
        Ok(ensure_success(resp)?.json().await?)
    }

    async fn create(&self, title: &str) -> Result<MutationResponse, ClientError> {
        let body = CreateTodoRequest {
            title: title.to_string(),
        };
        let resp = self.client.post(self.todos_url()).json(&body).send().await?;
        Ok(ensure_success(resp)?.json().await?)
    }

    async fn set_completed(
        &self,
        id: TodoId,
        completed: bool,
    ) -> Result<MutationResponse, ClientError> {
        let body = UpdateTodoRequest { completed };
        let resp = self.client.put(self.todo_url(id)).json(&body).send().await?;
        Ok(ensure_success(resp)?.json().await?)
    }

    async fn delete(&self, id: TodoId) -> Result<MutationResponse, ClientError> {
        let resp = self.client.delete(self.todo_url(id)).send().await?;
        Ok(ensure_success(resp)?.json().await?)
    }
}
