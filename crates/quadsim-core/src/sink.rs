//! The shared, line-atomic output sink.
//!
//! All tasks append to one sink. A line is formatted in full before the
//! lock is taken and written with a single `write_all`, so concurrent
//! writers can never interleave characters within a line. Ordering across
//! lines from different tasks is unspecified.

use std::io::{self, Write};

use parking_lot::Mutex;

enum Target {
    Stdout,
    Memory(Vec<String>),
}

/// Process-wide shared output sink.
pub struct LineSink {
    target: Mutex<Target>,
}

impl LineSink {
    /// A sink that appends to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            target: Mutex::new(Target::Stdout),
        }
    }

    /// A sink that captures lines in memory, for tests.
    #[must_use]
    pub fn memory() -> Self {
        Self {
            target: Mutex::new(Target::Memory(Vec::new())),
        }
    }

    /// Append one line. The newline terminator is added here; `line` must
    /// not contain one.
    pub fn write_line(&self, line: &str) {
        debug_assert!(!line.contains('\n'), "embedded newline: {line:?}");
        let mut target = self.target.lock();
        match &mut *target {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                if let Err(e) = out
                    .write_all(line.as_bytes())
                    .and_then(|()| out.write_all(b"\n"))
                    .and_then(|()| out.flush())
                {
                    tracing::warn!(error = %e, "failed to write output line");
                }
            }
            Target::Memory(lines) => lines.push(line.to_string()),
        }
    }

    /// Lines captured so far. Empty for a stdout sink.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match &*self.target.lock() {
            Target::Stdout => Vec::new(),
            Target::Memory(lines) => lines.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn memory_sink_captures_in_write_order() {
        let sink = LineSink::memory();
        sink.write_line("first");
        sink.write_line("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn stdout_sink_captures_nothing() {
        let sink = LineSink::stdout();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn concurrent_writers_never_mangle_a_line() {
        let sink = Arc::new(LineSink::memory());
        let mut handles = Vec::new();
        for writer in 0..8 {
            let sink = Arc::clone(&sink);
            handles.push(std::thread::spawn(move || {
                for i in 0..200 {
                    sink.write_line(&format!("writer-{writer} line-{i}"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 8 * 200);
        for line in &lines {
            let mut parts = line.split(' ');
            let writer = parts.next().unwrap();
            let seq = parts.next().unwrap();
            assert!(parts.next().is_none(), "mangled line: {line}");
            assert!(writer.strip_prefix("writer-").unwrap().parse::<u32>().is_ok());
            assert!(seq.strip_prefix("line-").unwrap().parse::<u32>().is_ok());
        }
    }
}
