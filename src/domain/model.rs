use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 單次提交的書籍資料，每次呼叫時重新建立，請求完成即丟棄
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSubmission {
    pub title: String,
    pub isbn: String,
    pub author_id: String,
}

impl BookSubmission {
    pub fn new(
        title: impl Into<String>,
        isbn: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            isbn: isbn.into(),
            author_id: author_id.into(),
        }
    }
}

/// `/api/add-book` 的回應，只讀取 `success`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitResponse {
    pub success: Option<serde_json::Value>,
}

impl SubmitResponse {
    /// Parses a response body the way a browser would read `result.success`.
    ///
    /// Any JSON document is accepted. Non-object documents have no `success`
    /// attribute and are treated as falsy; a bare `null` cannot be read at all
    /// and is reported as malformed.
    pub fn from_body(body: &str) -> std::result::Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| format!("response is not JSON: {}", e))?;

        match value {
            serde_json::Value::Null => Err("response body is JSON null".to_string()),
            serde_json::Value::Object(mut map) => Ok(Self {
                success: map.remove("success"),
            }),
            _ => Ok(Self::default()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success.as_ref().is_some_and(is_truthy)
    }
}

/// JavaScript 的 truthy 判斷
pub fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// Result of one submit cycle that reached the server and got a JSON answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Acknowledgment shown, then the page reloaded.
    Acknowledged,
    /// `success` was falsy or absent; nothing visible happened.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub isbn: Option<String>,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPage {
    pub total: u64,
    pub pages: u64,
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Id,
    #[default]
    Title,
    Isbn,
    AuthorId,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Isbn => "isbn",
            SortField::AuthorId => "author_id",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = std::convert::Infallible;

    // 伺服器遇到未知欄位會退回 title，這裡保持一致
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "id" => SortField::Id,
            "isbn" => SortField::Isbn,
            "author_id" => SortField::AuthorId,
            _ => SortField::Title,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_payload_shape() {
        let submission = BookSubmission::new("Dune", "9780441172719", "42");
        let body = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            body,
            json!({"title": "Dune", "isbn": "9780441172719", "author_id": "42"})
        );
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_submission_keeps_values_verbatim() {
        let submission = BookSubmission::new("  ", "not-an-isbn", "forty two");
        let body = serde_json::to_string(&submission).unwrap();
        assert_eq!(
            body,
            r#"{"title":"  ","isbn":"not-an-isbn","author_id":"forty two"}"#
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-0.5)));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));

        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
    }

    #[test]
    fn test_response_parsing() {
        assert!(SubmitResponse::from_body(r#"{"success": true}"#)
            .unwrap()
            .is_success());
        assert!(!SubmitResponse::from_body(r#"{"success": false}"#)
            .unwrap()
            .is_success());
        assert!(!SubmitResponse::from_body("{}").unwrap().is_success());
        assert!(!SubmitResponse::from_body(r#"[{"success": true}]"#)
            .unwrap()
            .is_success());
        assert!(!SubmitResponse::from_body("true").unwrap().is_success());

        assert!(SubmitResponse::from_body("null").is_err());
        assert!(SubmitResponse::from_body("<html>oops</html>").is_err());
        assert!(SubmitResponse::from_body("").is_err());
    }

    #[test]
    fn test_sort_parsing_falls_back() {
        assert_eq!("isbn".parse::<SortField>().unwrap(), SortField::Isbn);
        assert_eq!("publisher".parse::<SortField>().unwrap(), SortField::Title);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    }
}
