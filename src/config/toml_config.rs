use crate::adapters::http::DEFAULT_ADD_BOOK_PATH;
use crate::core::submitter::{FormFieldIds, DEFAULT_ACKNOWLEDGMENT};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SubmitError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub form: FormConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub add_book_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            add_book_path: DEFAULT_ADD_BOOK_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub title_id: String,
    pub isbn_id: String,
    pub author_id: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        let ids = FormFieldIds::default();
        Self {
            title_id: ids.title,
            isbn_id: ids.isbn,
            author_id: ids.author,
        }
    }
}

impl From<&FormConfig> for FormFieldIds {
    fn from(form: &FormConfig) -> Self {
        Self {
            title: form.title_id.clone(),
            isbn: form.isbn_id.clone(),
            author: form.author_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub acknowledgment: String,
    pub reload_on_success: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
            reload_on_success: true,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SubmitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BOOK_SERVER})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.server.base_url = base_url;
        }
        self
    }

    pub fn field_ids(&self) -> FormFieldIds {
        FormFieldIds::from(&self.form)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("server.base_url", &self.server.base_url)?;
        validation::validate_route_path("server.add_book_path", &self.server.add_book_path)?;
        validation::validate_non_empty_string("form.title_id", &self.form.title_id)?;
        validation::validate_non_empty_string("form.isbn_id", &self.form.isbn_id)?;
        validation::validate_non_empty_string("form.author_id", &self.form.author_id)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn add_book_path(&self) -> &str {
        &self.server.add_book_path
    }

    fn acknowledgment(&self) -> &str {
        &self.ui.acknowledgment
    }

    fn reload_on_success(&self) -> bool {
        self.ui.reload_on_success
    }
}
