//! 抓取模块错误类型定义

/// 抓取流程的错误类型
///
/// 只有页面本身的获取与解析会产生这些错误，单张图片的下载失败不会向上传播。
#[derive(Debug)]
pub enum ScraperError {
    /// 网络请求错误
    Network(reqwest::Error),
    /// HTTP 状态码错误
    Http { status: u16, message: String },
    /// 目标地址无法解析
    InvalidUrl(url::ParseError),
    /// 请求配置错误（例如非法的请求头）
    Config(String),
}

impl std::fmt::Display for ScraperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "网络请求失败: {}", e),
            Self::Http { status, message } => write!(f, "HTTP 错误 {}: {}", status, message),
            Self::InvalidUrl(e) => write!(f, "无效的URL: {}", e),
            Self::Config(msg) => write!(f, "配置错误: {}", msg),
        }
    }
}

impl std::error::Error for ScraperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::InvalidUrl(e) => Some(e),
            Self::Http { .. } | Self::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for ScraperError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error)
    }
}

impl From<url::ParseError> for ScraperError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error)
    }
}

impl From<anyhow::Error> for ScraperError {
    fn from(error: anyhow::Error) -> Self {
        Self::Config(error.to_string())
    }
}

pub type ScraperResult<T> = std::result::Result<T, ScraperError>;
