//! Database backup: plain file copy with optional zip compression.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file` (default: `punchlog-YYYYMMDD.sqlite`
    /// next to the database), optionally replacing the copy with a zip.
    pub fn backup(
        pool: &mut DbPool,
        cfg: &Config,
        dest_file: Option<&str>,
        compress: bool,
        force: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let dest: PathBuf = match dest_file {
            Some(f) => crate::utils::path::expand_tilde(f),
            None => {
                let stamp = Local::now().format("%Y%m%d");
                let name = format!("punchlog-{}.sqlite", stamp);
                src.parent().unwrap_or_else(|| Path::new(".")).join(name)
            }
        };

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&dest, force)?;

        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                // the zip replaces the plain copy
                if let Err(e) = fs::remove_file(&dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                }
            }

            compressed
        } else {
            dest
        };

        if let Err(e) = crate::db::log::ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(path.file_name().unwrap().to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
