use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// 页面中的一张图片
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// 绝对地址
    pub url: String,
    pub alt: String,
    pub title: String,
    /// 原始属性值，不做数字校验
    pub width: String,
    pub height: String,
    /// 下载成功后的本地路径
    #[serde(default)]
    pub filename: Option<String>,
}

/// 视频集锦链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRecord {
    pub title: String,
    /// 绝对地址，同时作为去重键
    pub link: String,
    /// 缩略图绝对地址，没有时为空字符串
    pub thumbnail: String,
}

/// 按插入顺序保存的 Open Graph 标签
///
/// 重复的键覆盖旧值，但保留其原有位置。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OgTags(Vec<(String, String)>);

impl OgTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for OgTags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// 页面元信息（独立于主抓取结果）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "OgTags::is_empty")]
    pub og_tags: OgTags,
}

/// 一次抓取的完整结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// 前 `download_limit` 张图片，与实际尝试下载的范围一致
    pub images: Vec<ImageRecord>,
    pub highlights: Vec<HighlightRecord>,
    /// 截断前的图片总数
    pub total_images: usize,
    pub total_highlights: usize,
}

impl ScrapeResult {
    /// 组装结果，图片只保留前 `image_limit` 张
    pub fn from_parts(
        mut images: Vec<ImageRecord>,
        highlights: Vec<HighlightRecord>,
        image_limit: usize,
    ) -> Self {
        let total_images = images.len();
        images.truncate(image_limit);
        Self {
            images,
            total_highlights: highlights.len(),
            highlights,
            total_images,
        }
    }

    /// 已成功下载的图片数量
    pub fn downloaded_count(&self) -> usize {
        self.images.iter().filter(|img| img.filename.is_some()).count()
    }
}
