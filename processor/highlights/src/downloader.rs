//! 图片下载
//!
//! 单张图片下载失败只记录日志，不影响后续图片。

use anyhow::{Result, anyhow};
use common::{ImageRecord, convert_bytes, ensure_image_extension, extract_filename_from_url};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::utils::{positional_filename, sanitize_filename};

/// 每次写入文件的块大小
pub const CHUNK_SIZE: usize = 1024;

/// 图片获取接口
#[async_trait::async_trait]
pub trait ImageFetcher: Send + Sync {
    /// 下载 `url` 并以 `name` 为基础文件名保存到 `dir`，返回保存路径
    ///
    /// `name` 缺少图片扩展名时由实现根据响应类型补全。
    async fn fetch_to(&self, url: &str, name: &str, dir: &Path) -> Result<PathBuf>;
}

/// 基于 reqwest 的流式下载
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch_to(&self, url: &str, name: &str, dir: &Path) -> Result<PathBuf> {
        log::debug!("Starting download from: {}", url);
        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(anyhow!("HTTP GET request failed: {}", response.status()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or_default();
        log::debug!("Content-Type: {}", content_type);
        let filename = ensure_image_extension(name, content_type);

        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(filename);

        match save_body(response, &path).await {
            Ok(written) => {
                log::debug!(
                    "Successfully downloaded {} ({})",
                    path.display(),
                    convert_bytes(written as f64)
                );
                Ok(path)
            }
            Err(e) => {
                // 不保留写了一半的文件
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    log::debug!("Failed to remove {}: {}", path.display(), remove_err);
                }
                Err(e)
            }
        }
    }
}

async fn save_body(mut response: Response, path: &Path) -> Result<usize> {
    let mut file = File::create(path).await?;
    let mut written = 0;

    while let Some(chunk) = response.chunk().await? {
        for piece in chunk.chunks(CHUNK_SIZE) {
            file.write_all(piece).await?;
        }
        written += chunk.len();
    }

    file.flush().await?;
    Ok(written)
}

/// 一次批量下载的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub attempted: usize,
    pub saved: usize,
}

/// 批量下载图片
pub struct ImageDownloader {
    fetcher: Box<dyn ImageFetcher>,
    dir: PathBuf,
}

impl ImageDownloader {
    pub fn new(fetcher: Box<dyn ImageFetcher>, dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            dir: dir.into(),
        }
    }

    /// 下载前 `limit` 张图片，并把保存路径写回对应记录
    pub async fn download_all(&self, images: &mut [ImageRecord], limit: usize) -> DownloadSummary {
        let count = limit.min(images.len());
        let mut summary = DownloadSummary::default();
        if count == 0 {
            return summary;
        }

        log::info!("Downloading first {} images...", count);

        for (index, image) in images.iter_mut().take(count).enumerate() {
            log::info!("[{}/{}] {}", index + 1, count, image.url);
            let name = download_name(image, index + 1);
            summary.attempted += 1;

            match self.fetcher.fetch_to(&image.url, &name, &self.dir).await {
                Ok(path) => {
                    log::info!("✓ Image saved: {}", path.display());
                    image.filename = Some(path.to_string_lossy().into_owned());
                    summary.saved += 1;
                }
                Err(e) => {
                    log::warn!("✗ Failed to download image {}: {}", image.url, e);
                    image.filename = None;
                }
            }
        }

        summary
    }
}

/// 下载文件名（不含扩展名补全）
///
/// 有 alt 文本时使用清理后的 alt；清理后为空则取 URL 中的文件名；
/// 都没有时使用 `image_<position>`。
pub fn download_name(image: &ImageRecord, position: usize) -> String {
    if image.alt.is_empty() {
        return positional_filename(position);
    }

    let sanitized = sanitize_filename(&image.alt);
    if !sanitized.is_empty() {
        return sanitized;
    }

    extract_filename_from_url(&image.url).unwrap_or_else(|| positional_filename(position))
}
