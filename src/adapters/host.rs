use crate::domain::model::BookSummary;
use crate::domain::ports::{BookApi, PageHost};
use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// 終端機版的「頁面」：確認訊息寫到輸出，重新載入時重新列出書單
pub struct ConsoleHost<W: Write + Send> {
    api: Arc<dyn BookApi>,
    out: Mutex<W>,
    reload_listing: bool,
}

impl ConsoleHost<std::io::Stdout> {
    pub fn stdout(api: Arc<dyn BookApi>) -> Self {
        Self::new(api, std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleHost<W> {
    pub fn new(api: Arc<dyn BookApi>, out: W) -> Self {
        Self {
            api,
            out: Mutex::new(out),
            reload_listing: true,
        }
    }

    pub fn with_reload_listing(mut self, enabled: bool) -> Self {
        self.reload_listing = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_text(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("⚠️ Failed to write to console: {}", e);
        }
    }
}

#[async_trait]
impl<W: Write + Send> PageHost for ConsoleHost<W> {
    async fn acknowledge(&self, message: &str) {
        tracing::info!("✅ {}", message);
        self.write_text(&format!("{}\n", message));
    }

    async fn reload(&self) {
        if !self.reload_listing {
            tracing::debug!("Reload requested, listing disabled");
            return;
        }

        tracing::debug!("🔄 Reloading book listing");
        match self.api.list_books().await {
            Ok(books) => self.write_text(&render_books(&books)),
            Err(e) => tracing::warn!("⚠️ Reload failed: {}", e),
        }
    }
}

/// 以固定欄寬的表格輸出書單
pub fn render_books(books: &[BookSummary]) -> String {
    if books.is_empty() {
        return "No books yet.\n".to_string();
    }

    let id_width = books
        .iter()
        .map(|b| b.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let title_width = books
        .iter()
        .map(|b| b.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());
    let isbn_width = books
        .iter()
        .map(|b| b.isbn.as_deref().unwrap_or("-").chars().count())
        .max()
        .unwrap_or(0)
        .max("ISBN".len());

    let mut table = format!(
        "{:<id_width$}  {:<title_width$}  {:<isbn_width$}  Author\n",
        "ID", "Title", "ISBN"
    );
    for book in books {
        table.push_str(&format!(
            "{:<id_width$}  {:<title_width$}  {:<isbn_width$}  {}\n",
            book.id,
            book.title,
            book.isbn.as_deref().unwrap_or("-"),
            book.author
        ));
    }
    table
}
