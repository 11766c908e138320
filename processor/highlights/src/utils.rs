use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

/// 文件名最大长度（字符数）
pub const MAX_FILENAME_LEN: usize = 50;

/// 集锦标题需要超过的最小长度（字符数）
pub const MIN_TITLE_LEN: usize = 3;

// ==== 属性 ====

/// 读取非空属性值
pub fn non_empty_attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|v| !v.is_empty())
}

/// 图片来源：优先 `src`，懒加载图片回退到 `data-src`
pub fn image_source<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    non_empty_attr(element, "src").or_else(|| non_empty_attr(element, "data-src"))
}

/// 元素的可见文本（去除首尾空白）
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

// ==== 关键字 ====

/// 链接中是否包含 "video" 或 "highlight"（不区分大小写）
pub fn contains_video_keyword(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower.contains("video") || lower.contains("highlight")
}

/// 标题是否足够长
pub fn is_meaningful_title(title: &str) -> bool {
    title.chars().count() > MIN_TITLE_LEN
}

// ==== 文件名 ====

static UNSAFE_CHARS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 将 alt 文本转换为安全的文件名
///
/// 删除字母、数字、空白和连字符以外的字符，空白替换为下划线，截断到 50 个字符。
pub fn sanitize_filename(alt: &str) -> String {
    let stripped = UNSAFE_CHARS_REGEX.replace_all(alt, "");
    let joined = WHITESPACE_REGEX.replace_all(stripped.trim(), "_");
    joined.chars().take(MAX_FILENAME_LEN).collect()
}

/// 按位置生成的备用文件名，从 1 开始
pub fn positional_filename(position: usize) -> String {
    format!("image_{}", position)
}
