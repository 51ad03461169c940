//! Memory-mapped SMS input files
//!
//! An [`SmsFile`] maps a regular input file read-only and hands out
//! `BufRead` views of it, so a whole file can be decoded without copying it
//! into a heap buffer. Inputs that cannot be mapped (pipes, character
//! devices, process substitution) are read into memory instead. The mapping
//! is released when the handle is dropped.

use crate::codec::SmsReader;
use crate::error::{Error, Result};
use memmap2::{Mmap, MmapOptions};
use sms_core::MatrixElement;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

enum Contents {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

/// Read-only handle on an SMS file
pub struct SmsFile {
    contents: Contents,
    path: PathBuf,
}

impl SmsFile {
    /// Open the file at `path`, mapping it when it is a regular file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| Error::io(format!("Cannot open file '{}'", path.display()), e))?;

        let regular = file.metadata().map(|m| m.is_file()).unwrap_or(false);
        let mapped = if regular {
            // SAFETY: the mapping is read-only and lives no longer than this
            // handle. Truncating the file from another process while it is
            // mapped is outside what this tool guards against.
            match unsafe { MmapOptions::new().map(&file) } {
                Ok(mmap) => Some(mmap),
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "mapping failed, reading instead");
                    None
                }
            }
        } else {
            None
        };

        let contents = match mapped {
            Some(mmap) => Contents::Mapped(mmap),
            None => {
                let mut buffer = Vec::new();
                file.read_to_end(&mut buffer)
                    .map_err(|e| Error::io(format!("Cannot read file '{}'", path.display()), e))?;
                Contents::Buffered(buffer)
            }
        };
        Ok(Self {
            contents,
            path: path.to_path_buf(),
        })
    }

    /// Whether the contents are memory mapped rather than read into memory
    pub fn is_mapped(&self) -> bool {
        matches!(self.contents, Contents::Mapped(_))
    }

    /// Path the file was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents
    pub fn as_bytes(&self) -> &[u8] {
        match &self.contents {
            Contents::Mapped(mmap) => &mmap[..],
            Contents::Buffered(buffer) => &buffer[..],
        }
    }

    /// Start decoding the file
    pub fn reader<V: MatrixElement>(&self) -> Result<SmsReader<&[u8], V>> {
        SmsReader::open(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sms_core::SmsHeader;
    use std::io::Write;

    #[test]
    fn test_open_and_read() {
        let path = std::env::temp_dir().join(format!("sms-file-test-{}.sms", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            file.write_all(b"2 2 M\n2 1 7\n0 0 0\n").unwrap();
        }

        let sms = SmsFile::open(&path).unwrap();
        assert!(sms.is_mapped());
        let reader = sms.reader::<f64>().unwrap();
        assert_eq!(reader.header(), SmsHeader::new(2, 2));
        let entries: Vec<_> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, 7.0);

        drop(sms);
        std::fs::remove_file(&path).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_device_is_read_not_mapped() {
        let sms = SmsFile::open("/dev/null").unwrap();
        assert!(!sms.is_mapped());
        assert!(sms.as_bytes().is_empty());
        match sms.reader::<f64>() {
            Err(Error::Sms(sms_core::SmsError::MalformedHeader { line: 0 })) => {}
            other => panic!("unexpected result {:?}", other.map(|r| r.header())),
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SmsFile::open("/nonexistent/matrix.sms").err().unwrap();
        assert_eq!(err.category(), sms_core::ErrorCategory::Io);
        assert!(err.to_string().contains("/nonexistent/matrix.sms"));
    }
}
