use book_submit::adapters::host::render_books;
use book_submit::config::ListQuery;
use book_submit::core::{BookApi, ConfigProvider};
use book_submit::utils::{logger, validation::Validate};
use book_submit::{
    AppConfig, CliConfig, ConsoleHost, FormSubmitter, HttpBookApi, SubmitError, SubmitOutcome,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), SubmitError> {
    cli.validate()?;
    let config = cli.app_config()?;
    config.validate()?;

    let api: Arc<dyn BookApi> = Arc::new(HttpBookApi::from_config(&config));

    if let Some(form) = cli.command.form(&config.field_ids()) {
        return submit(api, &config, &form).await;
    }

    if let Some(query) = cli.command.list_query() {
        return list(api.as_ref(), query).await;
    }

    Ok(())
}

async fn submit(
    api: Arc<dyn BookApi>,
    config: &AppConfig,
    form: &book_submit::FieldMap,
) -> Result<(), SubmitError> {
    let host = ConsoleHost::stdout(api.clone()).with_reload_listing(config.reload_on_success());
    let submitter = FormSubmitter::new(api, host)
        .with_fields(config.field_ids())
        .with_acknowledgment(config.acknowledgment());

    tracing::info!("📤 Submitting book to {}{}", config.base_url(), config.add_book_path());
    match submitter.submit_from_form(form).await? {
        SubmitOutcome::Acknowledged => tracing::debug!("Submission acknowledged"),
        // 與網頁行為一致：伺服器回報失敗時不顯示任何訊息
        SubmitOutcome::Ignored => tracing::debug!("Submission ignored by server"),
    }
    Ok(())
}

async fn list(api: &dyn BookApi, query: ListQuery) -> Result<(), SubmitError> {
    match query {
        ListQuery::All => {
            let books = api.list_books().await?;
            print!("{}", render_books(&books));
        }
        ListQuery::Paginated(request) => {
            let page = api.list_books_paginated(request).await?;
            print!("{}", render_books(&page.books));
            println!(
                "Page {} of {} ({} books)",
                request.page, page.pages, page.total
            );
        }
        ListQuery::Sorted(sort, order) => {
            let books = api.list_books_sorted(sort, order).await?;
            tracing::debug!("Sorted by {} {}", sort, order);
            print!("{}", render_books(&books));
        }
    }
    Ok(())
}
