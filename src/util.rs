/// Shared filesystem helpers.
pub mod fs {
    use std::fs;
    use std::io;

    use camino::{Utf8Path, Utf8PathBuf};

    /// What `ensure_dir` found (or did) at a path.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum DirState {
        Created,
        Existing,
    }

    /// A directory `ensure_dir` could not create.
    #[derive(Debug)]
    pub struct DirError {
        pub path: Utf8PathBuf,
        pub source: io::Error,
    }

    /// Ensure a directory exists, creating it and any missing parents one level at a time.
    ///
    /// Every directory made here, parents included, is appended to `created` outermost
    /// first. Never removes or replaces anything: a non-directory entry on the way is an
    /// error naming that entry.
    pub fn ensure_dir(
        path: &Utf8Path,
        created: &mut Vec<Utf8PathBuf>,
    ) -> Result<DirState, DirError> {
        let mut missing = Vec::new();
        let mut current = Some(path);
        while let Some(dir) = current {
            if dir.as_str().is_empty() || dir.is_dir() {
                break;
            }
            if dir.exists() {
                return Err(DirError {
                    path: dir.to_owned(),
                    source: io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} exists and is not a directory", dir),
                    ),
                });
            }
            missing.push(dir);
            current = dir.parent();
        }

        let mut state = DirState::Existing;
        for dir in missing.into_iter().rev() {
            match fs::create_dir(dir) {
                Ok(()) => {
                    created.push(dir.to_owned());
                    state = DirState::Created;
                }
                // Lost a race with another creator; the directory is there either way.
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {
                    state = DirState::Existing;
                }
                Err(source) => {
                    return Err(DirError {
                        path: dir.to_owned(),
                        source,
                    });
                }
            }
        }
        Ok(state)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use camino::Utf8PathBuf;

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Fresh, not-yet-created directory path under the system temp dir.
    pub fn unique_temp_dir() -> Utf8PathBuf {
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
        dir.push(format!("scaffold-test-{ts}-{seq}"));
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }
}
