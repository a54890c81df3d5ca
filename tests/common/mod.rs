//! Shared testing utilities for mjp CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROMPTS_YAML: &str = r#"
categories:
  - id: artist
    name: 摄影师
    special: { isArtist: true, positionTag: artist, singleSelectionHint: 建议单选 }
    prompts:
      - { id: ansel, prompt_zh: 安塞尔·亚当斯, prompt_en: Ansel Adams }
  - id: camera
    name: 镜头
    special: { positionTag: camera }
    subCategories:
      - id: lens
        name: 镜头
        prompts:
          - { id: wide, prompt_zh: 广角, prompt_en: wide angle }
  - id: lighting
    name: 光线
    special: { positionTag: lighting }
    prompts:
      - { id: golden, prompt_zh: 黄金时刻, prompt_en: golden hour }
subjectEnvironmentExamples:
  - id: lighthouse
    title: 灯塔
    subject: a lone lighthouse
    environment: on a cliff
    fullText: a lone lighthouse on a cliff
"#;

pub const PARAMETERS_YAML: &str = r#"
parameters:
  - id: aspectRatio
    name: 宽高比
    type: select
    param: --ar
    default: "16:9"
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
  - id: style
    name: 风格模式
    type: input
    param: --style
    default: ""
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mjp` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mjp").expect("Failed to locate mjp binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        cmd
    }

    /// Write `content` to `relative` under the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the fixture catalog and parameters into `dir` under the work directory.
    pub fn write_config(&self, dir: &str) -> PathBuf {
        self.write_file(&format!("{}/prompts.yaml", dir), PROMPTS_YAML);
        self.write_file(&format!("{}/parameters.yaml", dir), PARAMETERS_YAML);
        self.work_dir.join(dir)
    }
}
