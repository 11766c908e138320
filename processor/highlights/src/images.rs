//! 图片提取

use common::ImageRecord;
use scraper::Selector;
use std::sync::LazyLock;

use crate::page::ParsedPage;
use crate::utils::image_source;

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// 按文档顺序提取所有图片
///
/// 没有 `src` 和 `data-src` 的图片会被跳过；相同地址的图片不去重。
pub fn extract_images(page: &ParsedPage) -> Vec<ImageRecord> {
    let mut images = Vec::new();

    for img in page.select(&IMG_SELECTOR) {
        let Some(source) = image_source(&img) else {
            continue;
        };
        let Some(url) = page.resolve(source) else {
            log::warn!("Skipping image with unresolvable source: {}", source);
            continue;
        };

        let element = img.value();
        let record = ImageRecord {
            url,
            alt: element.attr("alt").unwrap_or_default().trim().to_string(),
            title: element.attr("title").unwrap_or_default().trim().to_string(),
            width: element.attr("width").unwrap_or_default().to_string(),
            height: element.attr("height").unwrap_or_default().to_string(),
            filename: None,
        };

        log::info!(
            "Found image: {} | URL: {}",
            if record.alt.is_empty() {
                "No alt text"
            } else {
                record.alt.as_str()
            },
            record.url
        );
        images.push(record);
    }

    images
}
