use common::{ScrapeResult, ScraperConfig};
use dotenv::dotenv;
use processor_highlights::HighlightScraper;

mod report;
mod tests;

/// 读取配置：环境变量（支持 .env），第一个命令行参数可覆盖目标地址
fn load_config() -> ScraperConfig {
    let mut config = ScraperConfig::from_env();
    if let Some(url) = std::env::args().nth(1) {
        config.url = url;
    }
    config
}

fn log_summary(result: &ScrapeResult) {
    log::info!("{}", "=".repeat(50));
    log::info!("SCRAPING SUMMARY");
    log::info!("Total images found: {}", result.total_images);
    log::info!("Total highlights found: {}", result.total_highlights);
    log::info!("Images downloaded: {}", result.downloaded_count());
    log::info!("{}", "=".repeat(50));
}

async fn run(config: ScraperConfig) -> anyhow::Result<()> {
    let scraper = HighlightScraper::new(config)?;
    let result = scraper.run().await?;

    log_summary(&result);
    let status = report::write_outputs(&result, scraper.config());
    if !status.json_written && !status.text_written {
        log::warn!("No output file could be written");
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    log::info!("Highlight scraper started for {}", config.url);

    // 页面获取失败时不写出任何文件
    if let Err(e) = run(config).await {
        log::error!("Failed to scrape page: {}", e);
        std::process::exit(1);
    }
}
