//! Shader source loading.
//!
//! Sources are read from disk at start-up. A missing or unreadable file is
//! logged and replaced with an empty source; compilation then fails and the
//! renderer carries on without a usable program.

use std::fs;
use std::path::Path;

use log::{info, warn};

/// Shader pipeline stage, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex shader",
            ShaderStage::Fragment => "fragment shader",
        }
    }
}

/// WGSL sources of the single shader program
#[derive(Debug, Clone, Default)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Read both stages; never fails
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Self {
        Self {
            vertex: read_source(vertex_path.as_ref(), ShaderStage::Vertex),
            fragment: read_source(fragment_path.as_ref(), ShaderStage::Fragment),
        }
    }

    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn read_source(path: &Path, stage: ShaderStage) -> String {
    match fs::read_to_string(path) {
        Ok(source) => {
            info!("Loaded {} from {}", stage.name(), path.display());
            source
        }
        Err(e) => {
            warn!(
                "{} file {} not successfully read: {}",
                stage.name(),
                path.display(),
                e
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wavesim-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_files_degrade_to_empty_sources() {
        let sources = ShaderSources::load("does/not/exist.wgsl", "also/missing.wgsl");

        assert!(sources.vertex.is_empty());
        assert!(sources.fragment.is_empty());
    }

    #[test]
    fn test_load_reads_both_stages() {
        let vs = temp_file("vs.wgsl", "// vertex");
        let fs_path = temp_file("fs.wgsl", "// fragment");

        let sources = ShaderSources::load(&vs, &fs_path);

        assert_eq!(sources.source(ShaderStage::Vertex), "// vertex");
        assert_eq!(sources.source(ShaderStage::Fragment), "// fragment");

        fs::remove_file(vs).unwrap();
        fs::remove_file(fs_path).unwrap();
    }

    #[test]
    fn test_one_missing_stage_keeps_the_other() {
        let vs = temp_file("only-vs.wgsl", "// vertex only");
        let sources = ShaderSources::load(&vs, "missing-fragment.wgsl");

        assert_eq!(sources.vertex, "// vertex only");
        assert!(sources.fragment.is_empty());

        fs::remove_file(vs).unwrap();
    }

    #[test]
    fn test_shipped_shaders_are_present() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let sources = ShaderSources::load(
            root.join("shaders/vertex.wgsl"),
            root.join("shaders/fragment.wgsl"),
        );

        assert!(sources.vertex.contains("vs_main"));
        assert!(sources.fragment.contains("fs_main"));
    }
}
