//! 页面元信息提取

use common::{OgTags, PageMetadata};
use scraper::Selector;
use std::sync::LazyLock;

use crate::page::ParsedPage;
use crate::utils::element_text;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());

const OG_PREFIX: &str = "og:";

/// 提取页面标题、描述和 Open Graph 标签
pub fn extract_metadata(page: &ParsedPage) -> PageMetadata {
    let title = page
        .select(&TITLE_SELECTOR)
        .next()
        .map(|title| element_text(&title));

    let description = page.select(&DESCRIPTION_SELECTOR).next().map(|meta| {
        meta.value()
            .attr("content")
            .unwrap_or_default()
            .trim()
            .to_string()
    });

    let mut og_tags = OgTags::new();
    for (name, content) in page.metas_with_property_prefix(OG_PREFIX) {
        match content {
            Some(content) if !name.is_empty() && !content.is_empty() => {
                og_tags.insert(name, content)
            }
            _ => {}
        }
    }

    PageMetadata {
        title,
        description,
        og_tags,
    }
}
