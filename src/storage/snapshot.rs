use crate::storage::reviews::{check_rating, Review, ReviewStore};
use crate::storage::StoreError;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

impl ReviewStore {
    /// Write every review to `path` as a JSON array, replacing the file.
    ///
    /// Cuisine buckets are not part of the snapshot.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
                parent
            }
            None => Path::new("."),
        };

        // Uniquely named sibling, removed on drop unless persisted
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, self.reviews()).map_err(|source| {
                StoreError::Snapshot {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            writer.flush().map_err(|e| StoreError::io(path, e))?;
        }

        temp.persist(path).map_err(|e| StoreError::io(path, e.error))?;

        info!(path = ?path, reviews = self.len(), "Reviews saved");
        Ok(())
    }

    /// Replace the stored reviews with the contents of `path`.
    ///
    /// Returns `Ok(None)` and leaves the store alone when the file does not
    /// exist. Otherwise the file is parsed and checked in full before the
    /// store changes, and the number of loaded reviews is returned.
    pub fn load_snapshot(&mut self, path: &Path) -> Result<Option<usize>, StoreError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = ?path, "Snapshot not found, starting with an empty review list");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let reviews: Vec<Review> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;

        for review in &reviews {
            check_rating(i64::from(review.rating))?;
        }

        let count = reviews.len();
        self.replace_reviews(reviews);

        info!(path = ?path, reviews = count, "Reviews loaded");
        Ok(Some(count))
    }
}
