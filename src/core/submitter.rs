use crate::core::{BookApi, FormSource, PageHost};
use crate::domain::model::{BookSubmission, SubmitOutcome};
use crate::utils::error::{Result, SubmitError};

pub const DEFAULT_ACKNOWLEDGMENT: &str = "Book added using API!";

/// 表單上三個欄位的元素 id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldIds {
    pub title: String,
    pub isbn: String,
    pub author: String,
}

impl Default for FormFieldIds {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            isbn: "isbn".to_string(),
            author: "author".to_string(),
        }
    }
}

impl FormFieldIds {
    /// 同步讀取三個欄位；任何一個不存在就不送出請求
    pub fn read<F: FormSource + ?Sized>(&self, form: &F) -> Result<BookSubmission> {
        let lookup = |id: &str| {
            form.element_value(id)
                .ok_or_else(|| SubmitError::MissingField { id: id.to_string() })
        };

        Ok(BookSubmission {
            title: lookup(&self.title)?,
            isbn: lookup(&self.isbn)?,
            author_id: lookup(&self.author)?,
        })
    }
}

/// Orchestrates one submit-and-reload cycle per call.
///
/// Calls are independent: overlapping submissions each send their own request
/// and each react to their own response.
pub struct FormSubmitter<A: BookApi, H: PageHost> {
    api: A,
    host: H,
    fields: FormFieldIds,
    acknowledgment: String,
}

impl<A: BookApi, H: PageHost> FormSubmitter<A, H> {
    pub fn new(api: A, host: H) -> Self {
        Self {
            api,
            host,
            fields: FormFieldIds::default(),
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
        }
    }

    pub fn with_fields(mut self, fields: FormFieldIds) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_acknowledgment(mut self, message: impl Into<String>) -> Self {
        self.acknowledgment = message.into();
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Reads the three fields from `form`, then submits them.
    pub async fn submit_from_form<F: FormSource + ?Sized>(&self, form: &F) -> Result<SubmitOutcome> {
        let submission = self.fields.read(form)?;
        self.submit(&submission).await
    }

    pub async fn submit_book(
        &self,
        title: impl Into<String>,
        isbn: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Result<SubmitOutcome> {
        let submission = BookSubmission::new(title, isbn, author_id);
        self.submit(&submission).await
    }

    pub async fn submit(&self, submission: &BookSubmission) -> Result<SubmitOutcome> {
        let response = self.api.add_book(submission).await?;

        if response.is_success() {
            self.host.acknowledge(&self.acknowledgment).await;
            self.host.reload().await;
            return Ok(SubmitOutcome::Acknowledged);
        }

        // 伺服器回報失敗時不提示使用者
        tracing::debug!("Submission not acknowledged: success={:?}", response.success);
        Ok(SubmitOutcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::form::FieldMap;
    use crate::domain::model::{
        BookPage, BookSummary, PageRequest, SortField, SortOrder, SubmitResponse,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct ScriptedApi {
        reply: Arc<dyn Fn() -> Result<SubmitResponse> + Send + Sync>,
        sent: Arc<Mutex<Vec<BookSubmission>>>,
    }

    impl ScriptedApi {
        fn replying(body: &'static str) -> Self {
            Self {
                reply: Arc::new(move || {
                    SubmitResponse::from_body(body)
                        .map_err(|message| SubmitError::MalformedResponse { message })
                }),
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl BookApi for ScriptedApi {
        async fn add_book(&self, submission: &BookSubmission) -> Result<SubmitResponse> {
            self.sent.lock().await.push(submission.clone());
            (self.reply)()
        }

        async fn list_books(&self) -> Result<Vec<BookSummary>> {
            Ok(vec![])
        }

        async fn list_books_paginated(&self, _request: PageRequest) -> Result<BookPage> {
            unreachable!()
        }

        async fn list_books_sorted(
            &self,
            _sort: SortField,
            _order: SortOrder,
        ) -> Result<Vec<BookSummary>> {
            unreachable!()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Effect {
        Acknowledge(String),
        Reload,
    }

    #[derive(Default)]
    struct RecordingHost {
        effects: Mutex<Vec<Effect>>,
    }

    #[async_trait]
    impl PageHost for RecordingHost {
        async fn acknowledge(&self, message: &str) {
            self.effects
                .lock()
                .await
                .push(Effect::Acknowledge(message.to_string()));
        }

        async fn reload(&self) {
            self.effects.lock().await.push(Effect::Reload);
        }
    }

    fn dune_form() -> FieldMap {
        FieldMap::new()
            .with_field("title", "Dune")
            .with_field("isbn", "9780441172719")
            .with_field("author", "42")
    }

    #[tokio::test]
    async fn test_success_acknowledges_then_reloads() {
        let api = ScriptedApi::replying(r#"{"success": true}"#);
        let submitter = FormSubmitter::new(api.clone(), RecordingHost::default());

        let outcome = submitter.submit_from_form(&dune_form()).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Acknowledged);
        assert_eq!(
            *submitter.host().effects.lock().await,
            vec![
                Effect::Acknowledge("Book added using API!".to_string()),
                Effect::Reload
            ]
        );

        let sent = api.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(
            serde_json::to_value(&sent[0]).unwrap(),
            json!({"title": "Dune", "isbn": "9780441172719", "author_id": "42"})
        );
    }

    #[tokio::test]
    async fn test_falsy_success_has_no_effect() {
        for body in [r#"{"success": false}"#, "{}", r#"{"success": 0}"#, r#"{"success": ""}"#] {
            let api = ScriptedApi::replying(body);
            let submitter = FormSubmitter::new(api.clone(), RecordingHost::default());

            let outcome = submitter.submit_book("Dune", "9780441172719", "42").await.unwrap();

            assert_eq!(outcome, SubmitOutcome::Ignored, "body: {}", body);
            assert!(submitter.host().effects.lock().await.is_empty());
            assert_eq!(api.sent.lock().await.len(), 1);
        }
    }

    #[tokio::test]
    async fn test_missing_field_sends_nothing() {
        let api = ScriptedApi::replying(r#"{"success": true}"#);
        let submitter = FormSubmitter::new(api.clone(), RecordingHost::default());
        let form = FieldMap::new()
            .with_field("title", "Dune")
            .with_field("isbn", "9780441172719");

        let err = submitter.submit_from_form(&form).await.unwrap_err();

        assert!(matches!(err, SubmitError::MissingField { ref id } if id == "author"));
        assert!(api.sent.lock().await.is_empty());
        assert!(submitter.host().effects.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_response_has_no_effect() {
        let api = ScriptedApi::replying("null");
        let submitter = FormSubmitter::new(api, RecordingHost::default());

        let result = submitter.submit_book("a", "b", "c").await;

        assert!(matches!(result, Err(SubmitError::MalformedResponse { .. })));
        assert!(submitter.host().effects.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_custom_field_ids_and_message() {
        let api = ScriptedApi::replying(r#"{"success": "yes"}"#);
        let submitter = FormSubmitter::new(api.clone(), RecordingHost::default())
            .with_fields(FormFieldIds {
                title: "book-title".to_string(),
                isbn: "book-isbn".to_string(),
                author: "author-select".to_string(),
            })
            .with_acknowledgment("Saved");
        let form = FieldMap::new()
            .with_field("book-title", "Emma")
            .with_field("book-isbn", "")
            .with_field("author-select", "7");

        let outcome = submitter.submit_from_form(&form).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Acknowledged);
        assert_eq!(
            submitter.host().effects.lock().await[0],
            Effect::Acknowledge("Saved".to_string())
        );
        assert_eq!(api.sent.lock().await[0], BookSubmission::new("Emma", "", "7"));
    }
}
