//! 结果输出：JSON 文件和纯文本报告

use anyhow::{Context, Result};
use common::{ScrapeResult, ScraperConfig};
use std::path::Path;

const HEAVY_RULE_LEN: usize = 50;
const LIGHT_RULE_LEN: usize = 30;

/// 两个输出文件各自的写入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStatus {
    pub json_written: bool,
    pub text_written: bool,
}

/// 写入 JSON 与文本报告，任一失败只记录日志，不影响另一个
pub fn write_outputs(result: &ScrapeResult, config: &ScraperConfig) -> OutputStatus {
    let json_path = config.json_path();
    let json_written = match write_json(result, &json_path) {
        Ok(()) => {
            log::info!("JSON saved as {}", json_path.display());
            true
        }
        Err(e) => {
            log::error!("Could not save JSON results: {:#}", e);
            false
        }
    };

    let text_path = config.text_report_path();
    let text_written = match write_text_report(
        result,
        &config.url,
        &config.report_title,
        &text_path,
    ) {
        Ok(()) => {
            log::info!("Results saved to: {}", text_path.display());
            true
        }
        Err(e) => {
            log::error!("Could not save results to file: {:#}", e);
            false
        }
    };

    OutputStatus {
        json_written,
        text_written,
    }
}

/// 两空格缩进的 JSON，非 ASCII 字符原样保留
pub fn write_json(result: &ScrapeResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

pub fn write_text_report(result: &ScrapeResult, url: &str, title: &str, path: &Path) -> Result<()> {
    let report = render_text_report(result, url, title);
    std::fs::write(path, report).with_context(|| format!("failed to write {}", path.display()))
}

/// 生成纯文本报告
pub fn render_text_report(result: &ScrapeResult, url: &str, title: &str) -> String {
    let mut lines = vec![
        title.to_string(),
        "=".repeat(HEAVY_RULE_LEN),
        format!("URL: {}", url),
        format!("Total images found: {}", result.total_images),
        format!("Total highlights found: {}", result.total_highlights),
        String::new(),
        "VIDEO HIGHLIGHTS:".to_string(),
        "-".repeat(LIGHT_RULE_LEN),
    ];

    for (i, h) in result.highlights.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, h.title));
        lines.push(format!("   Link: {}", h.link));
        if !h.thumbnail.is_empty() {
            lines.push(format!("   Thumbnail: {}", h.thumbnail));
        }
        lines.push(String::new());
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
