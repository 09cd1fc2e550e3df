//! Platform icon sets and the generate-all driver

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::icons;
use crate::icon::{IconRenderer, ImageSink};

/// A named table of (relative path, edge length) entries
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    pub name: &'static str,
    pub entries: &'static [(&'static str, u32)],
}

pub const ANDROID: IconSet = IconSet {
    name: "android",
    entries: icons::ANDROID,
};

pub const IOS: IconSet = IconSet {
    name: "ios",
    entries: icons::IOS,
};

/// Which sets to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SetSelection {
    Android,
    Ios,
    #[default]
    All,
}

impl SetSelection {
    pub fn sets(self) -> &'static [IconSet] {
        match self {
            Self::Android => &[ANDROID],
            Self::Ios => &[IOS],
            Self::All => &[ANDROID, IOS],
        }
    }
}

/// One output file to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub set: &'static str,
    /// Forward-slash separated, relative to the output directory
    pub path: &'static str,
    pub size: u32,
}

impl IconTarget {
    pub fn resolve(&self, out_dir: &Path) -> PathBuf {
        self.path.split('/').fold(out_dir.to_path_buf(), |path, part| path.join(part))
    }
}

/// Flatten the selected sets into targets, in table order
pub fn targets(selection: SetSelection) -> Vec<IconTarget> {
    selection
        .sets()
        .iter()
        .flat_map(|set| {
            set.entries.iter().map(|&(path, size)| IconTarget {
                set: set.name,
                path,
                size,
            })
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written, in generation order
    pub written: Vec<PathBuf>,
}

/// Render every target and hand it to `sink`.
///
/// Stops at the first failure; files written before it stay on disk.
pub fn generate_all<S: ImageSink>(
    targets: &[IconTarget],
    out_dir: &Path,
    renderer: &IconRenderer<'_>,
    sink: &mut S,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    for target in targets {
        let path = target.resolve(out_dir);
        let icon = renderer
            .render(target.size)
            .with_context(|| format!("Failed to render {}px icon", target.size))?;
        sink.write(&icon.canvas, &path)
            .with_context(|| format!("Failed to save {} icon {}", target.set, target.path))?;

        info!(
            set = target.set,
            size = target.size,
            font_size = icon.fit.font_size,
            iterations = icon.fit.iterations,
            path = %path.display(),
            "Generated icon"
        );
        println!("  ✓  {:>4}px  {}", target.size, target.path);

        report.written.push(path);
    }

    println!("\nAll icons generated.");
    Ok(report)
}
