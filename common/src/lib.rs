//! 共用工具函数库
//!
//! 这个模块包含了整个workspace中可能用到的通用工具函数。
use anyhow::{Result, anyhow};
use human_bytes::human_bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;
pub mod config;
pub mod models;
pub use config::*;
pub use models::*;

pub const MOBILE_UA: &str = "Mozilla/5.0 (Linux; Android 9; Termux) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Mobile Safari/537.36";
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
pub const BROWSER_ACCEPT_ENCODING: &str = "gzip, deflate";
pub const BROWSER_CONNECTION: &str = "keep-alive";

/// 可识别的图片扩展名（小写）
pub const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// 获取环境变量的值
pub fn get_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// 构造模拟浏览器的请求头
///
/// 页面请求和图片下载共用同一组请求头。
pub fn browser_headers(user_agent: &str) -> Result<HeaderMap> {
    let pairs = [
        ("user-agent", user_agent),
        ("accept", BROWSER_ACCEPT),
        ("accept-language", BROWSER_ACCEPT_LANGUAGE),
        ("accept-encoding", BROWSER_ACCEPT_ENCODING),
        ("connection", BROWSER_CONNECTION),
    ];

    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let value = HeaderValue::from_str(value)
            .map_err(|e| anyhow!("Invalid value for header {}: {}", name, e))?;
        headers.insert(HeaderName::from_static(name), value);
    }
    Ok(headers)
}

/// 将字节数转换为人类可读的格式
pub fn convert_bytes<T: Into<f64>>(bytes: T) -> String {
    human_bytes(bytes.into())
}

/// 从URL路径中提取文件名（不含查询参数），无法提取时返回 None
pub fn extract_filename_from_url(url: &str) -> Option<String> {
    use std::path::Path;

    let parsed_url = Url::parse(url).ok()?;
    let filename = Path::new(parsed_url.path()).file_name()?.to_str()?;
    if filename.is_empty() || filename == "/" {
        return None;
    }
    Some(filename.to_string())
}

/// 文件名是否已经带有可识别的图片扩展名
pub fn has_image_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// 根据content-type获取对应的图片扩展名（带点）
///
/// 无法判断时默认为 `.jpg`。
pub fn image_extension_from_content_type(content_type: &str) -> &'static str {
    let content_type = content_type.to_lowercase();
    if content_type.contains("image/jpeg") {
        ".jpg"
    } else if content_type.contains("image/png") {
        ".png"
    } else if content_type.contains("image/webp") {
        ".webp"
    } else {
        ".jpg" // 默认图片格式
    }
}

/// 缺少图片扩展名时，根据 content-type 补上
pub fn ensure_image_extension(filename: &str, content_type: &str) -> String {
    if has_image_extension(filename) {
        filename.to_string()
    } else {
        format!(
            "{}{}",
            filename,
            image_extension_from_content_type(content_type)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_var() {
        // 测试获取一个存在的环境变量
        unsafe {
            std::env::set_var("COMMON_TEST_VAR", "test_value");
        }
        let value = get_env_var("COMMON_TEST_VAR");
        assert_eq!(value, Some("test_value".to_string()));

        // 测试获取一个不存在的环境变量
        let missing_value = get_env_var("COMMON_MISSING_VAR");
        assert_eq!(missing_value, None);
    }

    #[test]
    fn test_browser_headers() {
        let headers = browser_headers(MOBILE_UA).unwrap();
        assert_eq!(headers.len(), 5);
        assert_eq!(headers["user-agent"], MOBILE_UA);
        assert_eq!(headers["accept-encoding"], "gzip, deflate");
        assert_eq!(headers["connection"], "keep-alive");

        // 非法的 header 值应返回错误
        assert!(browser_headers("bad\nagent").is_err());
    }

    #[test]
    fn test_extract_filename_from_url() {
        assert_eq!(
            extract_filename_from_url("https://cdn.example.com/img/logo.png?w=200"),
            Some("logo.png".to_string())
        );
        assert_eq!(extract_filename_from_url("https://cdn.example.com/"), None);
        assert_eq!(extract_filename_from_url("not a url"), None);
    }

    #[test]
    fn test_ensure_image_extension() {
        // 已有扩展名时保持不变（大小写不敏感）
        assert_eq!(ensure_image_extension("photo.JPEG", "image/png"), "photo.JPEG");
        assert_eq!(ensure_image_extension("a.gif", ""), "a.gif");

        // 根据 content-type 补全
        assert_eq!(ensure_image_extension("logo", "image/png"), "logo.png");
        assert_eq!(
            ensure_image_extension("banner", "image/webp; charset=binary"),
            "banner.webp"
        );
        assert_eq!(ensure_image_extension("pic", "image/jpeg"), "pic.jpg");

        // 无法判断时默认 .jpg
        assert_eq!(ensure_image_extension("image_1", "image/avif"), "image_1.jpg");
        assert_eq!(ensure_image_extension("image_2", ""), "image_2.jpg");
    }
}
