//! 视频集锦页面抓取模块
//!
//! 抓取单个页面，提取图片和视频集锦链接，并下载前几张图片。
//!
//! # 模块结构
//!
//! - [`downloader`] - 图片下载
//! - [`error`] - 错误类型定义
//! - [`fetcher`] - 页面抓取器
//! - [`highlights`] - 视频集锦提取（三种查找方式 + 去重）
//! - [`images`] - 图片提取
//! - [`metadata`] - 页面元信息提取
//! - [`page`] - 已解析的页面

use common::{HighlightRecord, ImageRecord, PageMetadata, ScrapeResult, ScraperConfig};

pub mod downloader;
mod error;
mod fetcher;
pub mod highlights;
pub mod images;
pub mod metadata;
mod page;
mod utils;

pub use downloader::{DownloadSummary, HttpImageFetcher, ImageDownloader, ImageFetcher};
pub use error::{ScraperError, ScraperResult};
pub use fetcher::PageFetcher;
pub use page::ParsedPage;
pub use utils::sanitize_filename;

/// 没有找到集锦时最多输出的 iframe 数量
const IFRAME_DIAGNOSTIC_LIMIT: usize = 3;

// ============================================================================
// 抓取流程
// ============================================================================

/// 单个页面的提取结果（下载之前）
#[derive(Debug, Clone, Default)]
pub struct PageExtraction {
    pub images: Vec<ImageRecord>,
    pub highlights: Vec<HighlightRecord>,
    /// 没有找到集锦时收集的 iframe 地址，仅用于诊断
    pub iframe_sources: Vec<String>,
}

/// 解析 HTML 并执行所有提取步骤
pub fn extract_page(html: &str, base_url: &str) -> ScraperResult<PageExtraction> {
    let page = ParsedPage::parse(html, base_url)?;
    if log::log_enabled!(log::Level::Debug) {
        log_metadata(&metadata::extract_metadata(&page));
    }

    let images = images::extract_images(&page);
    if images.is_empty() {
        log::info!("No images found on the page");
    } else {
        log::info!("Found {} images", images.len());
    }

    let highlights = highlights::extract_highlights(&page);
    let mut iframe_sources = Vec::new();
    if highlights.is_empty() {
        log::warn!(
            "No video highlights found directly in HTML, content is likely loaded by JavaScript"
        );
        iframe_sources = highlights::iframe_sources(&page, IFRAME_DIAGNOSTIC_LIMIT);
        for src in &iframe_sources {
            log::info!("Found iframe that might contain video: {}", src);
        }
    } else {
        log::info!("Found {} video highlights", highlights.len());
        for (i, h) in highlights.iter().enumerate() {
            log::info!("{}. {} | Link: {}", i + 1, h.title, h.link);
            if !h.thumbnail.is_empty() {
                log::debug!("   Thumbnail: {}", h.thumbnail);
            }
        }
    }

    Ok(PageExtraction {
        images,
        highlights,
        iframe_sources,
    })
}

/// 提取页面元信息（不参与主流程）
pub fn scrape_page_metadata(html: &str, base_url: &str) -> ScraperResult<PageMetadata> {
    let page = ParsedPage::parse(html, base_url)?;
    let metadata = metadata::extract_metadata(&page);
    log_metadata(&metadata);
    Ok(metadata)
}

fn log_metadata(metadata: &PageMetadata) {
    if let Some(title) = &metadata.title {
        log::debug!("Page Title: {}", title);
    }
    if let Some(description) = &metadata.description {
        log::debug!("Description: {}", description);
    }
    log::debug!("Open Graph tags found: {}", metadata.og_tags.len());
}

/// 视频集锦抓取器
pub struct HighlightScraper {
    config: ScraperConfig,
    fetcher: PageFetcher,
    downloader: ImageDownloader,
}

impl HighlightScraper {
    pub fn new(config: ScraperConfig) -> ScraperResult<Self> {
        let fetcher = PageFetcher::new(&config)?;
        let downloader = ImageDownloader::new(
            Box::new(HttpImageFetcher::new(fetcher.client().clone())),
            config.image_dir.clone(),
        );
        Ok(Self {
            config,
            fetcher,
            downloader,
        })
    }

    /// 替换图片获取实现
    pub fn with_image_fetcher(mut self, fetcher: Box<dyn ImageFetcher>) -> Self {
        self.downloader = ImageDownloader::new(fetcher, self.config.image_dir.clone());
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// 抓取配置中的页面
    ///
    /// 页面获取失败时直接返回错误，不产生任何部分结果。
    pub async fn run(&self) -> ScraperResult<ScrapeResult> {
        log::info!("Scraping: {}", self.config.url);
        let html = self.fetcher.fetch_html(&self.config.url).await?;
        self.scrape_html(&html).await
    }

    /// 对已获取的 HTML 执行提取和下载
    pub async fn scrape_html(&self, html: &str) -> ScraperResult<ScrapeResult> {
        let PageExtraction {
            mut images,
            highlights,
            ..
        } = extract_page(html, &self.config.url)?;

        let summary = self
            .downloader
            .download_all(&mut images, self.config.download_limit)
            .await;
        log::debug!("Download summary: {:?}", summary);

        Ok(ScrapeResult::from_parts(
            images,
            highlights,
            self.config.download_limit,
        ))
    }
}
