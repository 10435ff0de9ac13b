//! Streams a file to a writer, `cat` style.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatError {
    #[error("{}: no such file", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => CatError::NotFound { path },
            io::ErrorKind::PermissionDenied => CatError::PermissionDenied { path },
            _ => CatError::Io { path, source },
        }
    }
}

/// An open source that logs its release when it goes out of scope, on the
/// success path and every error path alike.
struct OpenFile<'a, R: Read = File> {
    reader: R,
    path: &'a Path,
}

impl<'a> OpenFile<'a> {
    fn open(path: &'a Path) -> Result<Self, CatError> {
        let reader = File::open(path).map_err(|err| CatError::from_io(path, err))?;
        log::debug!("opened {}", path.display());
        Ok(OpenFile { reader, path })
    }
}

impl<R: Read> OpenFile<'_, R> {
    /// Consumes the source, so it is released before the result is seen.
    /// Read failures are classified by kind; write failures are always `Io`.
    fn stream<W: Write>(mut self, out: &mut W) -> Result<u64, CatError> {
        let mut buf = [0u8; 8 * 1024];
        let mut copied = 0u64;
        loop {
            let n = match self.reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(CatError::from_io(self.path, err)),
            };
            out.write_all(&buf[..n]).map_err(|err| self.write_error(err))?;
            copied += n as u64;
        }
        out.flush().map_err(|err| self.write_error(err))?;
        Ok(copied)
    }

    fn write_error(&self, source: io::Error) -> CatError {
        CatError::Io {
            path: self.path.to_path_buf(),
            source,
        }
    }
}

impl<R: Read> Drop for OpenFile<'_, R> {
    fn drop(&mut self) {
        log::debug!("released {}", self.path.display());
    }
}

/// Copies the contents of `path` to `out` and returns the byte count.
pub fn read_and_print<W: Write>(path: &Path, out: &mut W) -> Result<u64, CatError> {
    OpenFile::open(path)?.stream(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;
    use std::rc::Rc;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_streams_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line one\nline two\n").unwrap();

        let mut out = Vec::new();
        let copied = read_and_print(file.path(), &mut out).unwrap();

        assert_eq!(copied, 18);
        assert_eq!(String::from_utf8(out).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let mut out = Vec::new();
        assert_eq!(read_and_print(file.path(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let mut out = Vec::new();

        let err = read_and_print(&path, &mut out).unwrap_err();
        assert!(matches!(err, CatError::NotFound { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();
        let err = read_and_print(dir.path(), &mut out).unwrap_err();
        assert!(matches!(err, CatError::Io { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_kinds_are_classified() {
        let path = Path::new("notes.txt");
        let denied = CatError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, CatError::PermissionDenied { .. }));
        assert_eq!(denied.to_string(), "notes.txt: permission denied");

        let missing = CatError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, CatError::NotFound { .. }));

        let other = CatError::from_io(path, io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(other, CatError::Io { .. }));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "data").unwrap();

        let err = read_and_print(file.path(), &mut FailingWriter).unwrap_err();
        assert!(matches!(err, CatError::Io { .. }));
    }

    struct DeniedWriter;

    impl Write for DeniedWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_side_denial_is_not_blamed_on_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "data").unwrap();

        let err = read_and_print(file.path(), &mut DeniedWriter).unwrap_err();
        match err {
            CatError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    /// Counts how many times it has been dropped.
    struct TrackedReader {
        data: io::Cursor<Vec<u8>>,
        fail: bool,
        drops: Rc<Cell<usize>>,
    }

    impl TrackedReader {
        fn new(data: &[u8], fail: bool, drops: &Rc<Cell<usize>>) -> Self {
            TrackedReader {
                data: io::Cursor::new(data.to_vec()),
                fail,
                drops: Rc::clone(drops),
            }
        }
    }

    impl Read for TrackedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fail {
                return Err(io::Error::other("disk gone"));
            }
            self.data.read(buf)
        }
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn tracked(reader: TrackedReader) -> OpenFile<'static, TrackedReader> {
        OpenFile {
            reader,
            path: Path::new("tracked.txt"),
        }
    }

    #[test]
    fn test_source_released_on_success() {
        let drops = Rc::new(Cell::new(0));
        let mut out = Vec::new();
        let copied = tracked(TrackedReader::new(b"hello", false, &drops))
            .stream(&mut out)
            .unwrap();
        assert_eq!(copied, 5);
        assert_eq!(out, b"hello");
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_source_released_on_read_failure() {
        let drops = Rc::new(Cell::new(0));
        let mut out = Vec::new();
        let err = tracked(TrackedReader::new(b"hello", true, &drops))
            .stream(&mut out)
            .unwrap_err();
        assert!(matches!(err, CatError::Io { .. }));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_source_released_on_write_failure() {
        let drops = Rc::new(Cell::new(0));
        let result = tracked(TrackedReader::new(b"hello", false, &drops)).stream(&mut FailingWriter);
        assert!(result.is_err());
        assert_eq!(drops.get(), 1);
    }
}
