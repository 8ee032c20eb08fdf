//! Log Sink
//! Append-only capture of the server's console output
//!
//! The sink is shared between the task pumping the child's stdout and any
//! number of HTTP readers. Writes and snapshots take the same lock, so a
//! snapshot always contains every completed append and no part of an
//! in-flight one. The buffer is never truncated.

use crate::constants::output::PUMP_CHUNK_SIZE;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

/// Thread-safe, cheaply cloneable handle to one output buffer
#[derive(Clone, Default)]
pub struct LogSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // Appends are a single extend, so the buffer is intact after a poisoning panic.
        self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append bytes, returning how many were written
    pub fn write(&self, bytes: &[u8]) -> usize {
        self.lock().extend_from_slice(bytes);
        bytes.len()
    }

    /// Copy of everything written so far
    pub fn snapshot(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Snapshot decoded for display; invalid UTF-8 is replaced
    pub fn snapshot_string(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy `reader` into the sink until EOF
    ///
    /// Each chunk read is appended with a single `write`.
    pub async fn pump<R>(&self, mut reader: R) -> io::Result<u64>
    where
        R: AsyncRead + Unpin,
    {
        let mut chunk = vec![0u8; PUMP_CHUNK_SIZE];
        let mut total = 0u64;
        loop {
            let n = reader.read(&mut chunk).await?;
            if n == 0 {
                debug!(bytes = total, "Output stream closed");
                return Ok(total);
            }
            self.write(&chunk[..n]);
            total += n as u64;
        }
    }
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(LogSink::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for LogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSink").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_sink_is_empty() {
        let sink = LogSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn test_snapshot_is_concatenation_in_call_order() {
        let sink = LogSink::new();
        let writes: [&[u8]; 4] = [
            b"[Server thread/INFO]: Starting minecraft server\n",
            b"",
            b"[Server thread/INFO]: Preparing level \"world\"\n",
            b"Done (3.2s)!",
        ];

        let mut expected = Vec::new();
        for w in writes {
            assert_eq!(sink.write(w), w.len());
            expected.extend_from_slice(w);
        }

        assert_eq!(sink.snapshot(), expected);
        assert_eq!(sink.len(), expected.len());
    }

    #[test]
    fn test_clones_share_the_same_buffer() {
        let sink = LogSink::new();
        let other = sink.clone();
        other.write(b"hello");
        assert_eq!(sink.snapshot(), b"hello");
    }

    #[test]
    fn test_snapshot_is_an_independent_copy() {
        let sink = LogSink::new();
        sink.write(b"before");
        let snap = sink.snapshot();
        sink.write(b" after");
        assert_eq!(snap, b"before");
        assert_eq!(sink.snapshot(), b"before after");
    }

    #[test]
    fn test_snapshot_string_replaces_invalid_utf8() {
        let sink = LogSink::new();
        sink.write(b"ok \xff done");
        assert_eq!(sink.snapshot_string(), "ok \u{fffd} done");
    }

    #[test]
    fn test_io_write_appends() {
        use std::io::Write;

        let mut sink = LogSink::new();
        writeln!(sink, "player joined").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.snapshot_string(), "player joined\n");
    }

    #[test]
    fn test_concurrent_snapshots_never_observe_torn_appends() {
        const CHUNK: usize = 4096;
        const WRITES_PER_THREAD: usize = 200;

        let sink = LogSink::new();

        let writers: Vec<_> = (b'a'..=b'd')
            .map(|letter| {
                let sink = sink.clone();
                thread::spawn(move || {
                    let chunk = vec![letter; CHUNK];
                    for _ in 0..WRITES_PER_THREAD {
                        sink.write(&chunk);
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let sink = sink.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        let snap = sink.snapshot();
                        assert_eq!(snap.len() % CHUNK, 0, "snapshot ended mid-append");
                        for chunk in snap.chunks(CHUNK) {
                            assert!(
                                chunk.iter().all(|b| *b == chunk[0]),
                                "appends from different writers interleaved"
                            );
                        }
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 4 * WRITES_PER_THREAD * CHUNK);
    }

    #[tokio::test]
    async fn test_pump_copies_until_eof() {
        let sink = LogSink::new();
        let (mut tx, rx) = tokio::io::duplex(16);

        let pump_sink = sink.clone();
        let pump = tokio::spawn(async move { pump_sink.pump(rx).await });

        use tokio::io::AsyncWriteExt;
        tx.write_all(b"line one\nline two that is longer than the pipe\n")
            .await
            .unwrap();
        drop(tx);

        let copied = pump.await.unwrap().unwrap();
        assert_eq!(copied, sink.len() as u64);
        assert_eq!(
            sink.snapshot_string(),
            "line one\nline two that is longer than the pipe\n"
        );
    }
}
