use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store's database file to `dest`, optionally zipped.
    /// Returns the path of the file actually written.
    pub fn backup(store: &EventStore, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = store.pool().file_path().ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "in-memory database has no file to back up",
            ))
        })?;
        let src = Path::new(&src);

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_path.exists() && !force {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!(
                    "'{}' already exists (use --force to overwrite)",
                    final_path.display()
                ),
            )));
        }

        if let Some(parent) = final_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if compress {
            compress_into(src, &final_path)?;
            success(format!("📦 Compressed backup created: {}", final_path.display()));
        } else {
            fs::copy(src, &final_path)?;
            success(format!("Backup created: {}", final_path.display()));
        }

        store.audit(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }
}

/// Write `src` as the single entry of a new zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "database.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
