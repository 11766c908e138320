//! 已解析的页面
//!
//! 提取器只通过这里暴露的查询接口访问文档：按选择器查找元素、
//! 按 property 查找 meta 标签，以及将相对地址解析为绝对地址。

use scraper::html::Select;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::error::ScraperResult;

static META_PROPERTY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property]").unwrap());

/// 页面文档及其基准地址
pub struct ParsedPage {
    document: Html,
    base_url: Url,
}

impl ParsedPage {
    /// 解析 HTML；基准地址无法解析时返回错误
    pub fn parse(html: &str, base_url: &str) -> ScraperResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            document: Html::parse_document(html),
            base_url,
        })
    }

    /// 按文档顺序返回匹配的元素
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.document.select(selector)
    }

    /// 将引用地址解析为绝对地址
    pub fn resolve(&self, reference: &str) -> Option<String> {
        match self.base_url.join(reference.trim()) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                log::debug!("Cannot resolve {:?} against {}: {}", reference, self.base_url, e);
                None
            }
        }
    }

    /// 所有带 property 属性的 meta 标签，返回 (property, content)
    pub fn meta_properties(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.document.select(&META_PROPERTY_SELECTOR).filter_map(|meta| {
            let element = meta.value();
            element
                .attr("property")
                .map(|property| (property, element.attr("content")))
        })
    }

    /// 第一个 property 完全匹配的 meta 标签的 content
    ///
    /// 外层 `None` 表示没有该标签，内层 `None` 表示标签没有 content 属性。
    pub fn meta_content(&self, property: &str) -> Option<Option<&str>> {
        self.meta_properties()
            .find(|(p, _)| *p == property)
            .map(|(_, content)| content)
    }

    /// property 以指定前缀开头的 meta 标签，返回 (去掉前缀的 property, content)
    pub fn metas_with_property_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
        self.meta_properties()
            .filter_map(move |(property, content)| {
                property.strip_prefix(prefix).map(|suffix| (suffix, content))
            })
    }
}
