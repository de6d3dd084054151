use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::routes::Page;

/// Writes the page as `index.html` under `dir`, creating it if needed.
pub fn write_index(dir: &Path, page: &Page) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join("index.html");
    fs::write(&path, page.html()).with_context(|| format!("writing {}", path.display()))?;

    log::info!("exported {} ({} bytes)", path.display(), page.html().len());
    Ok(path)
}
