#[cfg(test)]
mod main_tests {
    use crate::report::*;
    use common::{HighlightRecord, ImageRecord, ScrapeResult, ScraperConfig};

    fn sample_result() -> ScrapeResult {
        let images = vec![ImageRecord {
            url: "https://www.fancode.com/a.png".to_string(),
            alt: "লোগো Logo".to_string(),
            title: String::new(),
            width: "120".to_string(),
            height: String::new(),
            filename: Some("images/Logo.png".to_string()),
        }];
        let highlights = vec![
            HighlightRecord {
                title: "Watch Highlight — ঢাকা".to_string(),
                link: "https://www.fancode.com/video/1".to_string(),
                thumbnail: "https://www.fancode.com/thumb.jpg".to_string(),
            },
            HighlightRecord {
                title: "Video".to_string(),
                link: "https://www.fancode.com/media/clip.mp4".to_string(),
                thumbnail: String::new(),
            },
        ];
        ScrapeResult::from_parts(images, highlights, 5)
    }

    #[test]
    fn test_render_text_report() {
        let report = render_text_report(
            &sample_result(),
            "https://www.fancode.com/highlights",
            "BPL Scraping Results",
        );
        let expected = format!(
            "BPL Scraping Results\n{}\nURL: https://www.fancode.com/highlights\nTotal images found: 1\nTotal highlights found: 2\n\nVIDEO HIGHLIGHTS:\n{}\n1. Watch Highlight — ঢাকা\n   Link: https://www.fancode.com/video/1\n   Thumbnail: https://www.fancode.com/thumb.jpg\n\n2. Video\n   Link: https://www.fancode.com/media/clip.mp4\n\n",
            "=".repeat(50),
            "-".repeat(30)
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_text_report_without_highlights() {
        let result = ScrapeResult::from_parts(Vec::new(), Vec::new(), 5);
        let report = render_text_report(&result, "https://example.com", "Title");
        assert!(report.ends_with("VIDEO HIGHLIGHTS:\n------------------------------\n"));
        assert!(report.contains("Total highlights found: 0\n"));
    }

    #[test]
    fn test_write_json_preserves_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");
        write_json(&sample_result(), &path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("লোগো Logo"));
        assert!(json.contains("Watch Highlight — ঢাকা"));
        assert!(!json.contains("\\u"));
        // 两空格缩进
        assert!(json.starts_with("{\n  \"images\": [\n    {\n      \"url\""));

        let parsed: ScrapeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_result());
    }

    #[test]
    fn test_json_null_filename() {
        let mut result = sample_result();
        result.images[0].filename = None;
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"filename\": null"));
    }

    #[test]
    fn test_write_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScraperConfig::for_url("https://www.fancode.com/highlights");
        config.output_dir = dir.path().to_path_buf();

        let status = write_outputs(&sample_result(), &config);
        assert!(status.json_written);
        assert!(status.text_written);
        assert!(dir.path().join("output.json").exists());
        assert!(dir.path().join("scraping_results.txt").exists());
    }

    #[test]
    fn test_write_outputs_failure_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScraperConfig::for_url("https://www.fancode.com/highlights");
        config.output_dir = dir.path().to_path_buf();

        // 用同名目录占住 JSON 文件路径，让 JSON 写入失败
        std::fs::create_dir(dir.path().join("output.json")).unwrap();

        let status = write_outputs(&sample_result(), &config);
        assert!(!status.json_written);
        assert!(status.text_written);
        let text = std::fs::read_to_string(dir.path().join("scraping_results.txt")).unwrap();
        assert!(text.starts_with("Video Highlights Scraping Results\n"));
    }

    #[test]
    fn test_write_outputs_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScraperConfig::for_url("https://www.fancode.com/highlights");
        config.output_dir = dir.path().join("does-not-exist");

        let status = write_outputs(&sample_result(), &config);
        assert!(!status.json_written);
        assert!(!status.text_written);
    }
}
