// crates/citytree-core/src/test_support.rs

//! Captures `tracing` output emitted while a closure runs.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a subscriber scoped to this thread and returns its result
/// together with everything logged at `level` or above.
pub(crate) fn capture_logs<R>(level: Level, f: impl FnOnce() -> R) -> (R, String) {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logged = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (out, logged)
}
