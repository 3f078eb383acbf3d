//! Work-stealing dispatcher handing input paths out to mapper workers.

use std::sync::Mutex;

/// Shared, mutex-guarded cursor over the caller's input path slice. Each
/// path is handed out to at most one `next_path` caller.
pub(crate) struct FileDispatcher<'a> {
    paths: &'a [String],
    next: Mutex<usize>,
}

impl<'a> FileDispatcher<'a> {
    pub(crate) fn new(paths: &'a [String]) -> FileDispatcher<'a> {
        FileDispatcher {
            paths: paths,
            next: Mutex::new(0),
        }
    }

    /// Returns the next unclaimed path, or `None` once the queue is
    /// exhausted.
    pub(crate) fn next_path(&self) -> Option<&'a str> {
        let mut idx = self.next.lock().expect("file dispatcher mutex poisoned");
        if *idx >= self.paths.len() {
            return None;
        }
        let path = self.paths[*idx].as_str();
        *idx += 1;
        Some(path)
    }
}
