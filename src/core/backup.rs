//! Backup of the store file: plain copy, optional zip compression.

use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Copy the database file to `dest_file`, optionally replacing the copy
/// with a .zip next to it. An existing destination asks for confirmation
/// before being overwritten.
pub fn backup_database(db_path: &str, dest_file: &str, compress: bool) -> AppResult<()> {
    let src = Path::new(db_path);
    if !src.exists() {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("database not found: {}", src.display()),
        )));
    }

    let dest = Path::new(dest_file);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    if dest.exists() && !confirm_overwrite(dest)? {
        warning("Backup cancelled.");
        return Ok(());
    }

    fs::copy(src, dest)?;
    success(format!("Backup created: {}", dest.display()));

    let final_path = if compress {
        let zipped = zip_in_place(dest)?;
        // A .zip destination is replaced by its own archive: nothing to remove.
        if zipped != dest {
            fs::remove_file(dest)?;
        }
        success(format!("Compressed: {}", zipped.display()));
        zipped
    } else {
        dest.to_path_buf()
    };

    // Audit on the source database, best effort.
    if let Ok(store) = SqliteStore::open(db_path) {
        let message = if compress {
            "Backup created and compressed"
        } else {
            "Backup created"
        };
        if let Err(e) = store.audit("backup", &final_path.to_string_lossy(), message) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Pack `path` into a sibling archive with the same stem and a .zip
/// extension, keeping the original file name inside the archive.
///
/// The archive is written to a staging file and renamed into place only
/// when complete, so a `path` that is itself named .zip becomes the
/// archive instead of being truncated while it is still being read.
fn zip_in_place(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let staging = path.with_extension("zip.part");

    let file = fs::File::create(&staging)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.sqlite".to_string());
    zip.start_file(name, options).map_err(io::Error::other)?;

    let mut src = fs::File::open(path)?;
    io::copy(&mut src, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    if zip_path.exists() {
        fs::remove_file(&zip_path)?;
    }
    fs::rename(&staging, &zip_path)?;

    Ok(zip_path)
}
