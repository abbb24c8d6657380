use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("could not determine a cache directory for models")]
    NoCacheDir,
    #[error("failed to create model cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model download cancelled")]
    Cancelled,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 when the server sent no Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Resolve the Whisper model file by name, downloading it into the per-user
/// cache on first use. Subsequent calls hit the cached copy.
///
/// A set `cancel` flag aborts the download between chunks with
/// [`ModelResolveError::Cancelled`].
pub fn resolve(
    name: &str,
    url: &str,
    progress: Option<ProgressFn>,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    let cached = cache_dir.join(name);
    if cached.exists() {
        log::debug!("model {name} found in cache at {}", cached.display());
        return Ok(cached);
    }

    fs::create_dir_all(&cache_dir).map_err(ModelResolveError::CacheDir)?;
    log::info!("downloading model {name} from {url}");
    download(url, &cached, progress, cancel)?;
    Ok(cached)
}

/// Platform model cache directory, e.g. `~/.cache/AudioScout/models` on Linux.
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    dirs::cache_dir()
        .map(|d| d.join("AudioScout").join("models"))
        .ok_or(ModelResolveError::NoCacheDir)
}

fn download(
    url: &str,
    dest: &Path,
    progress: Option<ProgressFn>,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<(), ModelResolveError> {
    if is_cancelled(&cancel) {
        return Err(ModelResolveError::Cancelled);
    }
    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| ModelResolveError::Download {
            url: url.to_string(),
            source: e,
        })?;
    let total = response.content_length().unwrap_or(0);

    // Stream into a sibling .part file, then rename so a cached model is
    // either absent or complete.
    let temp_path = dest.with_extension("part");
    write_stream(&mut response, &temp_path, total, &progress, &cancel)?;

    fs::rename(&temp_path, dest).map_err(|e| ModelResolveError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Copies `reader` into `temp_path`. On any failure, cancellation included,
/// the partial file is removed before the error is returned.
fn write_stream(
    reader: &mut impl Read,
    temp_path: &Path,
    total: u64,
    progress: &Option<ProgressFn>,
    cancel: &Option<Arc<AtomicBool>>,
) -> Result<(), ModelResolveError> {
    let result = copy_into(reader, temp_path, total, progress, cancel);
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}

fn copy_into(
    reader: &mut impl Read,
    temp_path: &Path,
    total: u64,
    progress: &Option<ProgressFn>,
    cancel: &Option<Arc<AtomicBool>>,
) -> Result<(), ModelResolveError> {
    let write_err = |e: std::io::Error| ModelResolveError::Write {
        path: temp_path.to_path_buf(),
        source: e,
    };
    let mut file = fs::File::create(temp_path).map_err(write_err)?;

    let mut buf = vec![0u8; 1024 * 1024];
    let mut downloaded: u64 = 0;
    loop {
        if is_cancelled(cancel) {
            return Err(ModelResolveError::Cancelled);
        }
        let n = reader.read(&mut buf).map_err(write_err)?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n]).map_err(write_err)?;
        downloaded += n as u64;
        if let Some(cb) = progress {
            cb(downloaded, total);
        }
    }

    file.flush().map_err(write_err)
}

fn is_cancelled(cancel: &Option<Arc<AtomicBool>>) -> bool {
    cancel.as_ref().is_some_and(|c| c.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_model_cache_dir_under_app_dir() {
        let dir = model_cache_dir().unwrap();
        assert!(dir.to_string_lossy().contains("AudioScout"));
        assert!(dir.ends_with("AudioScout/models") || dir.to_string_lossy().contains("models"));
    }

    #[test]
    fn test_download_invalid_url_returns_error() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("model.bin");
        let result = download(
            "http://invalid.nonexistent.example.com/model",
            &dest,
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_download_failure_leaves_no_file_behind() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("model.bin");
        let _ = download(
            "http://invalid.nonexistent.example.com/model",
            &dest,
            None,
            None,
        );
        assert!(!dest.exists());
        assert!(!dest.with_extension("part").exists());
    }

    #[test]
    fn test_download_cancelled_before_request() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("model.bin");
        let cancel = Arc::new(AtomicBool::new(true));
        let result = download(
            "http://invalid.nonexistent.example.com/model",
            &dest,
            None,
            Some(cancel),
        );
        assert!(matches!(result, Err(ModelResolveError::Cancelled)));
    }

    /// Reader that yields one chunk and then fails, like a dropped connection.
    struct FailingReader {
        sent: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.sent {
                return Err(std::io::Error::other("connection reset"));
            }
            self.sent = true;
            buf[..4].copy_from_slice(b"ggml");
            Ok(4)
        }
    }

    #[test]
    fn test_write_stream_writes_all_bytes() {
        let tmp = TempDir::new().unwrap();
        let temp_path = tmp.path().join("model.part");
        write_stream(&mut &b"ggml-model"[..], &temp_path, 10, &None, &None).unwrap();
        assert_eq!(fs::read(&temp_path).unwrap(), b"ggml-model");
    }

    #[test]
    fn test_write_stream_mid_stream_failure_removes_partial_file() {
        let tmp = TempDir::new().unwrap();
        let temp_path = tmp.path().join("model.part");
        let result = write_stream(
            &mut FailingReader { sent: false },
            &temp_path,
            0,
            &None,
            &None,
        );
        assert!(matches!(result, Err(ModelResolveError::Write { .. })));
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_stream_cancellation_removes_partial_file() {
        let tmp = TempDir::new().unwrap();
        let temp_path = tmp.path().join("model.part");
        let cancel = Some(Arc::new(AtomicBool::new(true)));
        let result = write_stream(&mut std::io::repeat(0), &temp_path, 0, &None, &cancel);
        assert!(matches!(result, Err(ModelResolveError::Cancelled)));
        assert!(!temp_path.exists());
    }
}
