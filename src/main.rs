use anyhow::Context;
use clap::{Parser, ValueEnum};
use futures::future::join_all;
use lodestone_quest_scraper::{QuestDetail, QuestScraper, Scraper};
use scraper::Html;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// Extract quest records from saved Eorzea database quest pages.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Saved quest detail pages
    #[arg(required = true)]
    pages: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

/// Scrapes one saved page. `None` when the page is not a quest page.
async fn scrape_file(path: PathBuf) -> anyhow::Result<Option<QuestDetail>> {
    let html = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {}", path.display());

    // Html is not Send, parse it on the blocking pool
    let quest = tokio::task::spawn_blocking(move || {
        let doc = Html::parse_document(&html);
        if !QuestScraper.can_be_scraped(&doc) {
            return Ok(None);
        }
        QuestScraper.scrape(&doc).map(Some)
    })
    .await?
    .with_context(|| format!("Failed to scrape {}", path.display()))?;

    if quest.is_none() {
        debug!("Skip {}, not a quest page", path.display());
    }
    Ok(quest)
}

fn print(quest: &QuestDetail, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(quest)?),
        Format::Text => println!("{}", quest),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL")
                .unwrap_or_else(|_| "info,html5ever=error,selectors=error".into()),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();

    let results = join_all(args.pages.iter().cloned().map(scrape_file)).await;

    let (mut scraped, mut skipped, mut failed) = (0, 0, 0);
    for result in results {
        match result {
            Ok(Some(quest)) => {
                print(&quest, args.format)?;
                scraped += 1;
            }
            Ok(None) => skipped += 1,
            Err(e) => {
                warn!("{:#}", e);
                failed += 1;
            }
        }
    }

    info!(
        "Scraped {} of {} pages, skipped {}",
        scraped,
        args.pages.len(),
        skipped
    );
    if failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_scrape_quest_file() {
        let quest = scrape_file(PathBuf::from("tests/htmls/quest_simple.html"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(quest.name, "はじめての冒険");
    }

    #[tokio::test]
    async fn test_other_pages_are_skipped() {
        let quest = scrape_file(PathBuf::from("tests/htmls/not_quest.html"))
            .await
            .unwrap();
        assert_eq!(quest, None);
    }

    #[tokio::test]
    async fn test_unreadable_file_names_the_path() {
        let err = scrape_file(PathBuf::from("tests/htmls/missing.html"))
            .await
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to read tests/htmls/missing.html: "));
    }
}
