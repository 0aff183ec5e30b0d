use crate::adapters::form::FieldMap;
use crate::config::toml_config::AppConfig;
use crate::core::submitter::FormFieldIds;
use crate::domain::model::{PageRequest, SortField, SortOrder};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "book-submit")]
#[command(about = "Submit books to a book server and browse its catalog")]
pub struct CliConfig {
    /// Server origin, e.g. http://127.0.0.1:5000
    #[arg(long, global = true, env = "BOOK_SUBMIT_BASE_URL")]
    pub base_url: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Submit one book to the add-book endpoint
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        isbn: String,

        /// Author identifier, sent verbatim
        #[arg(long)]
        author: String,
    },

    /// List books, optionally paginated or sorted
    List {
        #[arg(long, conflicts_with = "sort")]
        page: Option<u32>,

        #[arg(long, default_value = "5")]
        per_page: u32,

        /// id, title, isbn or author_id
        #[arg(long)]
        sort: Option<String>,

        #[arg(long, default_value = "asc")]
        order: String,
    },
}

/// `list` 子命令解析後的查詢方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListQuery {
    All,
    Paginated(PageRequest),
    Sorted(SortField, SortOrder),
}

impl CliConfig {
    /// 載入設定檔（若有），再套用命令列覆寫
    pub fn app_config(&self) -> Result<AppConfig> {
        let config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };
        Ok(config.with_base_url(self.base_url.clone()))
    }
}

impl Command {
    /// 把命令列參數當成表單欄位
    pub fn form(&self, ids: &FormFieldIds) -> Option<FieldMap> {
        match self {
            Command::Add {
                title,
                isbn,
                author,
            } => Some(
                FieldMap::new()
                    .with_field(ids.title.clone(), title.clone())
                    .with_field(ids.isbn.clone(), isbn.clone())
                    .with_field(ids.author.clone(), author.clone()),
            ),
            Command::List { .. } => None,
        }
    }

    pub fn list_query(&self) -> Option<ListQuery> {
        match self {
            Command::List {
                page,
                per_page,
                sort,
                order,
            } => Some(match (page, sort) {
                (Some(page), _) => ListQuery::Paginated(PageRequest {
                    page: *page,
                    per_page: *per_page,
                }),
                (None, Some(sort)) => {
                    let sort = sort.parse().unwrap_or_default();
                    let order = order.parse().unwrap_or_default();
                    ListQuery::Sorted(sort, order)
                }
                (None, None) => ListQuery::All,
            }),
            Command::Add { .. } => None,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validation::validate_url("--base-url", base_url)?;
        }
        if let Command::List {
            page: Some(page),
            per_page,
            ..
        } = &self.command
        {
            validation::validate_positive_number("--page", *page, 1)?;
            validation::validate_positive_number("--per-page", *per_page, 1)?;
        }
        Ok(())
    }
}
