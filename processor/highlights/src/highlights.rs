//! 视频集锦提取
//!
//! 依次执行三种查找方式，再按链接去重：
//!
//! 1. 链接中带有 "video"/"highlight" 的 `<a>` 标签
//! 2. 带 `src` 的 `<video>` 标签
//! 3. `og:video` / `og:video:url` meta 标签
//!
//! 去重时保留最先出现的记录，所以三种方式的顺序不能调整。

use common::HighlightRecord;
use scraper::Selector;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::page::ParsedPage;
use crate::utils::{
    contains_video_keyword, element_text, image_source, is_meaningful_title, non_empty_attr,
};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());
static NESTED_IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());
static VIDEO_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("video[src]").unwrap());
static IFRAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("iframe").unwrap());

const VIDEO_META_PROPERTIES: [&str; 2] = ["og:video", "og:video:url"];
const DEFAULT_VIDEO_TITLE: &str = "Video";
const DEFAULT_META_TITLE: &str = "Video Highlight";

/// 提取并去重所有视频集锦
pub fn extract_highlights(page: &ParsedPage) -> Vec<HighlightRecord> {
    let mut candidates = anchor_highlights(page);
    candidates.extend(video_highlights(page));
    candidates.extend(meta_highlights(page));
    dedup_by_link(candidates)
}

/// `<a>` 标签：链接含关键字且标题长度超过 3
pub fn anchor_highlights(page: &ParsedPage) -> Vec<HighlightRecord> {
    let mut highlights = Vec::new();

    for anchor in page.select(&ANCHOR_SELECTOR) {
        let Some(href) = non_empty_attr(&anchor, "href") else {
            continue;
        };
        if !contains_video_keyword(href) {
            continue;
        }

        let title = element_text(&anchor);
        if !is_meaningful_title(&title) {
            continue;
        }

        let Some(link) = page.resolve(href) else {
            continue;
        };

        // 锚点内的第一张图片作为缩略图
        let thumbnail = anchor
            .select(&NESTED_IMG_SELECTOR)
            .next()
            .and_then(|img| image_source(&img))
            .and_then(|src| page.resolve(src))
            .unwrap_or_default();

        highlights.push(HighlightRecord {
            title,
            link,
            thumbnail,
        });
    }

    highlights
}

/// 直接出现在页面中的 `<video>` 标签
pub fn video_highlights(page: &ParsedPage) -> Vec<HighlightRecord> {
    page.select(&VIDEO_SELECTOR)
        .filter_map(|video| {
            let link = page.resolve(non_empty_attr(&video, "src")?)?;
            let title = non_empty_attr(&video, "title")
                .unwrap_or(DEFAULT_VIDEO_TITLE)
                .to_string();
            let thumbnail = non_empty_attr(&video, "poster")
                .and_then(|poster| page.resolve(poster))
                .unwrap_or_default();

            Some(HighlightRecord {
                title,
                link,
                thumbnail,
            })
        })
        .collect()
}

/// `og:video` 类 meta 标签，标题和缩略图取自 `og:title` 与 `og:image`
pub fn meta_highlights(page: &ParsedPage) -> Vec<HighlightRecord> {
    let mut highlights = Vec::new();

    for (property, content) in page.meta_properties() {
        if !VIDEO_META_PROPERTIES.contains(&property) {
            continue;
        }
        let Some(video_url) = content.filter(|c| !c.is_empty()) else {
            continue;
        };
        if !contains_video_keyword(video_url) {
            continue;
        }
        let Some(link) = page.resolve(video_url) else {
            continue;
        };

        let title = page
            .meta_content("og:title")
            .flatten()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_META_TITLE)
            .to_string();
        let thumbnail = page
            .meta_content("og:image")
            .flatten()
            .filter(|i| !i.is_empty())
            .and_then(|image| page.resolve(image))
            .unwrap_or_default();

        highlights.push(HighlightRecord {
            title,
            link,
            thumbnail,
        });
    }

    highlights
}

/// 按链接去重，保留最先出现的记录
pub fn dedup_by_link(highlights: Vec<HighlightRecord>) -> Vec<HighlightRecord> {
    let mut seen = HashSet::new();
    highlights
        .into_iter()
        .filter(|h| seen.insert(h.link.clone()))
        .collect()
}

/// 页面中的 iframe 地址（最多 `limit` 个），仅用于诊断输出
pub fn iframe_sources(page: &ParsedPage, limit: usize) -> Vec<String> {
    page.select(&IFRAME_SELECTOR)
        .take(limit)
        .filter_map(|iframe| non_empty_attr(&iframe, "src").map(str::to_string))
        .collect()
}
