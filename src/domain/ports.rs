use crate::domain::model::{
    BookPage, BookSubmission, BookSummary, PageRequest, SortField, SortOrder, SubmitResponse,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 書籍伺服器的網路介面
#[async_trait]
pub trait BookApi: Send + Sync {
    /// One POST of the submission; no retry, no timeout.
    async fn add_book(&self, submission: &BookSubmission) -> Result<SubmitResponse>;
    async fn list_books(&self) -> Result<Vec<BookSummary>>;
    async fn list_books_paginated(&self, request: PageRequest) -> Result<BookPage>;
    async fn list_books_sorted(&self, sort: SortField, order: SortOrder)
        -> Result<Vec<BookSummary>>;
}

/// 表單欄位來源（瀏覽器中的 DOM）
pub trait FormSource: Send + Sync {
    /// Current text value of the element with this id, `None` when it does not exist.
    fn element_value(&self, id: &str) -> Option<String>;
}

/// 使用者可見的效果：確認訊息與頁面重新載入
#[async_trait]
pub trait PageHost: Send + Sync {
    /// Blocking acknowledgment shown to the user.
    async fn acknowledge(&self, message: &str);
    async fn reload(&self);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn add_book_path(&self) -> &str;
    fn acknowledgment(&self) -> &str;
    fn reload_on_success(&self) -> bool;
}

#[async_trait]
impl<T: BookApi + ?Sized> BookApi for std::sync::Arc<T> {
    async fn add_book(&self, submission: &BookSubmission) -> Result<SubmitResponse> {
        (**self).add_book(submission).await
    }

    async fn list_books(&self) -> Result<Vec<BookSummary>> {
        (**self).list_books().await
    }

    async fn list_books_paginated(&self, request: PageRequest) -> Result<BookPage> {
        (**self).list_books_paginated(request).await
    }

    async fn list_books_sorted(
        &self,
        sort: SortField,
        order: SortOrder,
    ) -> Result<Vec<BookSummary>> {
        (**self).list_books_sorted(sort, order).await
    }
}
