use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_BLOCK_COUNT: usize = 9;
pub const DEFAULT_THRESHOLD: f32 = 0.2;
pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub corpus: CorpusConfig,
    pub index: IndexConfig,
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    #[serde(default = "default_block_count")]
    pub target_block_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            target_block_count: DEFAULT_TARGET_BLOCK_COUNT,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }
}

fn default_block_count() -> usize {
    DEFAULT_TARGET_BLOCK_COUNT
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_default_file_matches_engine_defaults() {
        let cfg = load(Some("../../config/default")).unwrap();
        assert_eq!(cfg.corpus.path, "data/corpus.json");
        assert_eq!(cfg.index.dir, "data/index");
        assert_eq!(cfg.segmentation.target_block_count, DEFAULT_TARGET_BLOCK_COUNT);
        assert!((cfg.search.threshold - DEFAULT_THRESHOLD).abs() < 1e-6);
        assert_eq!(cfg.search.top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn omitted_sections_fall_back_to_defaults() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[corpus]\npath = \"c.json\"\n[index]\ndir = \"idx\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.segmentation.target_block_count, DEFAULT_TARGET_BLOCK_COUNT);
        assert_eq!(cfg.search.top_k, DEFAULT_TOP_K);
    }
}
