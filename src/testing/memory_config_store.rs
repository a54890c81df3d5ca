use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::{ConfigStore, PARAMETERS_FILE, PROMPTS_FILE};

/// Small catalog covering every position tag and a nested category.
pub const SAMPLE_PROMPTS: &str = r#"
categories:
  - id: artist
    name: 摄影师
    special: { isArtist: true, positionTag: artist }
    prompts:
      - { id: ansel, prompt_zh: 安塞尔·亚当斯, prompt_en: Ansel Adams }
      - { id: fan-ho, prompt_zh: 何藩, prompt_en: Fan Ho }
  - id: camera
    name: 镜头
    special: { positionTag: camera }
    subCategories:
      - id: lens
        name: 镜头
        prompts:
          - { id: wide, prompt_zh: 广角, prompt_en: wide angle }
          - { id: macro, prompt_zh: 微距, prompt_en: macro lens }
  - id: lighting
    name: 光线
    special: { positionTag: lighting }
    prompts:
      - { id: golden, prompt_zh: 黄金时刻, prompt_en: golden hour }
  - id: mood
    name: 氛围
    prompts:
      - { id: calm, prompt_zh: 宁静, prompt_en: serene }
subjectEnvironmentExamples:
  - id: lighthouse
    title: 灯塔
    subject: a lone lighthouse
    environment: on a cliff
    fullText: a lone lighthouse on a cliff
"#;

pub const SAMPLE_PARAMETERS: &str = r#"
parameters:
  - id: aspectRatio
    name: 宽高比
    type: select
    param: --ar
    default: "1:1"
    options:
      - { value: "1:1", label: "1:1" }
      - { value: "16:9", label: "16:9" }
  - id: stylize
    name: 风格化
    type: slider
    param: --s
    default: 100
    min: 0
    max: 1000
    step: 10
  - id: tile
    name: 平铺
    type: checkbox
    param: --tile
    default: false
"#;

/// Config store backed by in-memory file contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    files: HashMap<String, String>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the sample catalog and parameters.
    pub fn sample() -> Self {
        Self::new()
            .with_file(PROMPTS_FILE, SAMPLE_PROMPTS)
            .with_file(PARAMETERS_FILE, SAMPLE_PARAMETERS)
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn source(&self) -> String {
        "memory".to_string()
    }

    fn read_file(&self, name: &str) -> Result<String, AppError> {
        self.files.get(name).cloned().ok_or_else(|| AppError::ConfigMissing(name.to_string()))
    }
}
