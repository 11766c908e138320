//! 抓取配置
//!
//! 所有可调参数都集中在 [`ScraperConfig`] 中，由调用方显式传入抓取流程，
//! 测试时可以直接构造指向任意页面的配置。

use std::path::PathBuf;
use std::time::Duration;

use crate::{MOBILE_UA, get_env_var};

pub const DEFAULT_URL: &str =
    "https://www.fancode.com/cricket/tour/bangladesh-premier-league-2025-26-19256675/video-highlights";
pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_DOWNLOAD_LIMIT: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REPORT_TITLE: &str = "Video Highlights Scraping Results";

pub const JSON_OUTPUT_FILE: &str = "output.json";
pub const TEXT_OUTPUT_FILE: &str = "scraping_results.txt";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// 目标页面
    pub url: String,
    pub user_agent: String,
    /// `output.json` 与文本报告所在目录
    pub output_dir: PathBuf,
    /// 图片保存目录
    pub image_dir: PathBuf,
    /// 最多下载的图片数量，也是结果中保留的图片数量
    pub download_limit: usize,
    pub timeout: Duration,
    /// 文本报告的标题行
    pub report_title: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: MOBILE_UA.to_string(),
            output_dir: PathBuf::from("."),
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            download_limit: DEFAULT_DOWNLOAD_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}

impl ScraperConfig {
    /// 指定目标页面，其余使用默认值
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: get_env_var("SCRAPER_URL").unwrap_or(defaults.url),
            user_agent: get_env_var("SCRAPER_USER_AGENT").unwrap_or(defaults.user_agent),
            output_dir: get_env_var("SCRAPER_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            image_dir: get_env_var("SCRAPER_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            download_limit: parse_env_or("SCRAPER_DOWNLOAD_LIMIT", defaults.download_limit),
            timeout: Duration::from_secs(parse_env_or(
                "SCRAPER_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
            report_title: get_env_var("SCRAPER_REPORT_TITLE").unwrap_or(defaults.report_title),
        }
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_OUTPUT_FILE)
    }

    pub fn text_report_path(&self) -> PathBuf {
        self.output_dir.join(TEXT_OUTPUT_FILE)
    }
}

fn parse_env_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match get_env_var(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Invalid value {:?} for {}, using {}", raw, name, default);
                default
            }
        },
        None => default,
    }
}
