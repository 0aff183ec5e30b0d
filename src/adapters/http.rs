use crate::domain::model::{
    BookPage, BookSubmission, BookSummary, PageRequest, SortField, SortOrder, SubmitResponse,
};
use crate::domain::ports::{BookApi, ConfigProvider};
use crate::utils::error::{Result, SubmitError};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

pub const DEFAULT_ADD_BOOK_PATH: &str = "/api/add-book";
const BOOKS_PATH: &str = "/api/books";
const BOOKS_PAGINATED_PATH: &str = "/api/books-with-pagination";
const BOOKS_SORTED_PATH: &str = "/api/books-with-sorting";

/// 以 reqwest 實作的書籍 API 客戶端
#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client: Client,
    base_url: String,
    add_book_path: String,
}

impl HttpBookApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            add_book_path: DEFAULT_ADD_BOOK_PATH.to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_url()).with_add_book_path(config.add_book_path())
    }

    pub fn with_add_book_path(mut self, path: impl Into<String>) -> Self {
        self.add_book_path = path.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 非 2xx 狀態轉成錯誤，保留回應內容供除錯
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("Making API request to: {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| SubmitError::MalformedResponse {
            message: format!("{}: {}", path, e),
        })
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn add_book(&self, submission: &BookSubmission) -> Result<SubmitResponse> {
        let url = self.url(&self.add_book_path);
        tracing::debug!("📤 POST {} title={:?}", url, submission.title);

        // reqwest 的 json() 會設定 Content-Type: application/json
        let response = self.client.post(&url).json(submission).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;

        SubmitResponse::from_body(&body).map_err(|message| SubmitError::MalformedResponse { message })
    }

    async fn list_books(&self) -> Result<Vec<BookSummary>> {
        self.get_json(BOOKS_PATH, &[]).await
    }

    async fn list_books_paginated(&self, request: PageRequest) -> Result<BookPage> {
        let query = [
            ("page", request.page.to_string()),
            ("per_page", request.per_page.to_string()),
        ];
        self.get_json(BOOKS_PAGINATED_PATH, &query).await
    }

    async fn list_books_sorted(
        &self,
        sort: SortField,
        order: SortOrder,
    ) -> Result<Vec<BookSummary>> {
        let query = [
            ("sort", sort.as_str().to_string()),
            ("order", order.as_str().to_string()),
        ];
        self.get_json(BOOKS_SORTED_PATH, &query).await
    }
}
