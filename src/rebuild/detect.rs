//! Containerization style detection

use std::path::Path;

/// Compose files checked in priority order
pub const COMPOSE_FILES: &[&str] = &["docker-compose.yaml", "docker-compose.yml"];

/// Single-image build file
pub const DOCKERFILE: &str = "Dockerfile";

/// How the project builds its container image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    /// `docker-compose build` for the whole working directory
    Compose,
    /// `docker build .` from a single Dockerfile
    Dockerfile,
}

impl BuildKind {
    pub fn program(&self) -> &'static str {
        match self {
            BuildKind::Compose => "docker-compose",
            BuildKind::Dockerfile => "docker",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            BuildKind::Compose => &["build"],
            BuildKind::Dockerfile => &["build", "."],
        }
    }

    /// The command line, for messages
    pub fn display_command(&self) -> String {
        std::iter::once(self.program())
            .chain(self.args().iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Detect the build style of `working_dir`, compose files first
pub fn detect_build_kind(working_dir: &Path) -> Option<BuildKind> {
    if COMPOSE_FILES
        .iter()
        .any(|file| working_dir.join(file).is_file())
    {
        Some(BuildKind::Compose)
    } else if working_dir.join(DOCKERFILE).is_file() {
        Some(BuildKind::Dockerfile)
    } else {
        None
    }
}
