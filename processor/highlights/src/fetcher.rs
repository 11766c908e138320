//! 页面抓取器

use common::{ScraperConfig, browser_headers};
use reqwest::{Client, StatusCode};

use crate::error::{ScraperError, ScraperResult};

/// 页面抓取器
///
/// 页面请求与图片下载共用同一个带浏览器请求头的客户端。
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &ScraperConfig) -> ScraperResult<Self> {
        let client = Client::builder()
            .default_headers(browser_headers(&config.user_agent)?)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 获取页面 HTML，状态码不是 200 时返回错误
    pub async fn fetch_html(&self, url: &str) -> ScraperResult<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::OK {
            response.text().await.map_err(Into::into)
        } else {
            let status_code = status.as_u16();
            let message = match status_code {
                403 => "访问被拒绝".to_string(),
                404 => "页面不存在".to_string(),
                _ => format!("HTTP 请求失败，状态码: {}", status_code),
            };
            Err(ScraperError::Http {
                status: status_code,
                message,
            })
        }
    }
}
