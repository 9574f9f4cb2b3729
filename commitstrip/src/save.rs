use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use colored::Colorize;
use commitstrip_core::{DownloadImage, Request};

/// Outcome of saving one comic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Skipped,
}

/// Where the comic titled `title` lands on disk. The title is sanitized and
/// joined to the directory, so separators are correct on every platform.
fn target_path(directory: Option<&Utf8Path>, title: &str) -> Utf8PathBuf {
    let filename = sanitize_filename::sanitize(format!("{title}.jpg"));
    match directory {
        Some(directory) => directory.join(filename),
        None => Utf8PathBuf::from(filename),
    }
}

fn ensure_directory(directory: &Utf8Path) -> std::io::Result<()> {
    if !directory.exists() {
        println!(
            "{}",
            "Directory specified does not exist. Creating directory and saving images".yellow()
        );
        std::fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Download the comic image at `url` into `directory`, named after `title`.
///
/// An image that is already on disk is never fetched again; the existing
/// file is left untouched.
pub async fn save_comic(url: &str, title: &str, directory: Option<&Utf8Path>) -> Result<Outcome> {
    println!("Retrieving comic at {url}");

    if let Some(directory) = directory {
        ensure_directory(directory)?;
    }

    let path = target_path(directory, title);
    if path.exists() {
        println!(
            "{}",
            format!("Image '{title}.jpg' already exists, not downloading").green()
        );
        return Ok(Outcome::Skipped);
    }

    let bytes = DownloadImage::new(url).request().await?;
    tokio::fs::write(&path, &bytes).await?;
    println!("{}", format!("Retrieved comic '{title}'").green());

    Ok(Outcome::Saved)
}
