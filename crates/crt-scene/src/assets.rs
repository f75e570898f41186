//! Background asset loading.
//!
//! A loader thread reads and parses every requested OBJ, then resolves once
//! with either all meshes or an aggregate error. The frame loop polls the
//! channel each tick; a failed load means the scene never starts.

use std::path::PathBuf;
use std::thread;

use crossbeam::channel::{bounded, Receiver, TryRecvError};

use crate::mesh::{parse_obj, MeshData};

/// Result of one load batch: named meshes in request order, or a combined
/// error describing every file that failed.
pub type LoadResult = Result<Vec<(String, MeshData)>, String>;

pub struct AssetLoader {
    rx: Receiver<LoadResult>,
    thread: Option<thread::JoinHandle<()>>,
}

impl AssetLoader {
    /// Spawn a loader thread for the given (name, path) requests.
    pub fn spawn(requests: Vec<(String, PathBuf)>) -> Self {
        let (tx, rx) = bounded(1);

        log::info!("Loading {} assets in the background", requests.len());

        let thread = thread::spawn(move || {
            let mut loaded = Vec::with_capacity(requests.len());
            let mut failures = Vec::new();

            for (name, path) in requests {
                match std::fs::read(&path) {
                    Ok(bytes) => match parse_obj(&bytes) {
                        Ok(mesh) => loaded.push((name, mesh)),
                        Err(e) => failures.push(format!("{name} ({}): {e}", path.display())),
                    },
                    Err(e) => failures.push(format!("{name} ({}): {e}", path.display())),
                }
            }

            let result = if failures.is_empty() {
                Ok(loaded)
            } else {
                Err(format!("Asset load failed: {}", failures.join("; ")))
            };

            // Receiver may be gone if the showcase was torn down mid-load.
            let _ = tx.send(result);
        });

        Self {
            rx,
            thread: Some(thread),
        }
    }

    /// Non-blocking poll. Returns `Some` exactly once, when the batch is
    /// done.
    pub fn try_poll(&mut self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => {
                if let Some(thread) = self.thread.take() {
                    let _ = thread.join();
                }
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("Asset loader thread exited unexpectedly".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn poll_until_done(loader: &mut AssetLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = loader.try_poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "loader never resolved");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_missing_files_aggregate_into_one_error() {
        let mut loader = AssetLoader::spawn(vec![
            ("a".to_string(), PathBuf::from("/nonexistent/a.obj")),
            ("b".to_string(), PathBuf::from("/nonexistent/b.obj")),
        ]);

        let err = poll_until_done(&mut loader).unwrap_err();
        assert!(err.contains("a ("), "missing first failure: {err}");
        assert!(err.contains("b ("), "missing second failure: {err}");
    }

    #[test]
    fn test_one_failure_fails_the_batch() {
        let dir = std::env::temp_dir().join("crt_assets_test");
        std::fs::create_dir_all(&dir).unwrap();
        let good = dir.join("tri.obj");
        std::fs::write(&good, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let mut loader = AssetLoader::spawn(vec![
            ("tri".to_string(), good),
            ("gone".to_string(), dir.join("gone.obj")),
        ]);

        assert!(poll_until_done(&mut loader).is_err());
    }

    #[test]
    fn test_successful_batch_preserves_order() {
        let dir = std::env::temp_dir().join("crt_assets_test_ok");
        std::fs::create_dir_all(&dir).unwrap();
        let tri = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let first = dir.join("first.obj");
        let second = dir.join("second.obj");
        std::fs::write(&first, tri).unwrap();
        std::fs::write(&second, tri).unwrap();

        let mut loader = AssetLoader::spawn(vec![
            ("first".to_string(), first),
            ("second".to_string(), second),
        ]);

        let meshes = poll_until_done(&mut loader).unwrap();
        let names: Vec<&str> = meshes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
