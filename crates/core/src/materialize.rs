//! Card-image output for a drafting session.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::Category;

/// Image extension used for card assets.
pub const CARD_EXTENSION: &str = "jpg";

/// Destination that mirrors the cards currently held for each category.
pub trait CardSink {
    /// Create whatever containers the categories need.
    fn prepare(&self, categories: &[Category]) -> Result<()>;
    /// Add the images for `cards` to the category's destination.
    fn copy_in(&self, category: Category, cards: &[String]) -> Result<()>;
    /// Remove every image currently present for the category.
    fn remove_all(&self, category: Category) -> Result<()>;
}

/// Copies card images from an asset tree into a per-session directory.
///
/// Both trees share the layout `<root>/<card_type>/<identifier>.jpg`.
#[derive(Debug, Clone)]
pub struct FsCardSink {
    asset_root: PathBuf,
    session_root: PathBuf,
}

impl FsCardSink {
    /// Sink writing to `<output_root>/<session name>`.
    pub fn new(
        asset_root: impl Into<PathBuf>,
        output_root: impl AsRef<Path>,
        session_name: &str,
    ) -> Self {
        Self {
            asset_root: asset_root.into(),
            session_root: output_root.as_ref().join(sanitize_component(session_name)),
        }
    }

    /// Root of the source image tree.
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    /// Directory holding this session's category folders.
    pub fn session_root(&self) -> &Path {
        &self.session_root
    }

    /// Directory holding a category's images for this session.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.session_root.join(category.card_type())
    }

    fn source_path(&self, category: Category, card: &str) -> PathBuf {
        self.asset_root
            .join(category.card_type())
            .join(card_file_name(card))
    }
}

impl CardSink for FsCardSink {
    fn prepare(&self, categories: &[Category]) -> Result<()> {
        for &category in categories {
            let dir = self.category_dir(category);
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        info!("prepared session folders under {}", self.session_root.display());
        Ok(())
    }

    fn copy_in(&self, category: Category, cards: &[String]) -> Result<()> {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
        for card in cards {
            let source = self.source_path(category, card);
            let destination = dir.join(card_file_name(card));
            fs::copy(&source, &destination).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    source.display(),
                    destination.display()
                )
            })?;
        }
        debug!("copied {} {} images", cards.len(), category);
        Ok(())
    }

    fn remove_all(&self, category: Category) -> Result<()> {
        let dir = self.category_dir(category);
        if !dir.exists() {
            return Ok(());
        }
        let mut removed = 0usize;
        let entries =
            fs::read_dir(&dir).with_context(|| format!("failed to read {}", dir.display()))?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            fs::remove_file(entry.path())
                .with_context(|| format!("failed to remove {}", entry.path().display()))?;
            removed += 1;
        }
        debug!("removed {removed} files from {}", dir.display());
        Ok(())
    }
}

/// File name of a card image.
pub fn card_file_name(card: &str) -> String {
    format!("{card}.{CARD_EXTENSION}")
}

fn sanitize_component(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.trim().chars() {
        if ch.is_alphanumeric() || matches!(ch, '-' | '_' | ' ') {
            result.push(ch);
        }
    }
    if result.trim().is_empty() {
        "session".to_string()
    } else {
        result
    }
}
