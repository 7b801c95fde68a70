//! Batch export of thank-you letters to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use mailroom_common::{Result, info};
use tracing::debug;

use super::DonorCollection;

impl DonorCollection {
    /// Writes one letter per donor into `folder`, thanking each for its most
    /// recent gift.
    ///
    /// `None` (or an empty path) means the current directory. The folder is
    /// created when missing. Returns the folder's absolute path.
    pub fn save_letters(&self, folder: Option<&Path>) -> Result<PathBuf> {
        let current_dir: PathBuf = std::env::current_dir()?;
        self.save_letters_in(&resolve_folder(folder, &current_dir))
    }

    fn save_letters_in(&self, folder: &Path) -> Result<PathBuf> {
        fs::create_dir_all(folder)?;
        let folder: PathBuf = folder.canonicalize()?;

        let mut written: usize = 0;
        for donor in self.iter() {
            if donor.gifts() == 0 {
                debug!(donor = %donor.name(), "no gifts, skipping letter");
                continue;
            }

            let path: PathBuf = folder.join(letter_file_name(donor.name()));
            write_lines(&path, &donor.form_letter()?)?;
            written += 1;
        }

        info!("{written} letters saved to {}", folder.display());
        Ok(folder)
    }
}

/// Picks the target folder; a missing or empty path falls back to `current_dir`.
fn resolve_folder(folder: Option<&Path>, current_dir: &Path) -> PathBuf {
    match folder {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => current_dir.to_path_buf(),
    }
}

/// File name a donor's letter is saved under.
pub fn letter_file_name(name: &str) -> String {
    format!("_{name}.txt")
}

fn write_lines(path: &Path, text: &str) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for line in text.lines() {
        writeln!(file, "{line}")?;
    }
    file.flush()?;
    Ok(())
}
