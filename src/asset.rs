//! Size of a static asset as it would be transferred gzip compressed,
//! for display on pages.

use std::{io::{self, Write}, path::{Path, PathBuf}};

use flate2::{write::GzEncoder, Compression};
use log::info;

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("reading asset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("compressing asset: {0}")]
    Compression(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSize {
    pub compressed_size: u64,
    pub human_readable: String,
}

/// A sink that only counts the bytes written to it.
#[derive(Debug, Default)]
pub struct CountingWriter {
    count: u64,
}

impl CountingWriter {
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const SIZE_UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count with decimal (SI) units, e.g. "512 B", "1.2
/// kB", "83 MB". One decimal is shown for values below 10 of the
/// chosen unit.
pub fn human_bytes(n: u64) -> String {
    if n < 10 {
        return format!("{n} B")
    }
    let mut exp = 0;
    let mut rest = n;
    while rest >= 1000 && exp < SIZE_UNITS.len() - 1 {
        rest /= 1000;
        exp += 1;
    }
    let unit = SIZE_UNITS[exp];
    let val = (n as f64 / 1000f64.powi(exp as i32) * 10. + 0.5).floor() / 10.;
    if val < 10. {
        format!("{val:.1} {unit}")
    } else {
        format!("{val:.0} {unit}")
    }
}

/// Compress `payload` with gzip at the best compression level and
/// report the size of the result. The compressed data is not kept.
pub fn compress_and_describe(payload: &[u8]) -> Result<AssetSize, AssetError> {
    let mut encoder = GzEncoder::new(CountingWriter::default(), Compression::best());
    encoder.write_all(payload).map_err(AssetError::Compression)?;
    let counter = encoder.finish().map_err(AssetError::Compression)?;
    let compressed_size = counter.count();
    Ok(AssetSize {
        compressed_size,
        human_readable: human_bytes(compressed_size),
    })
}

pub fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(
        |source| AssetError::Io { path: path.to_owned(), source })
}

pub fn describe_file(path: impl AsRef<Path>) -> Result<AssetSize, AssetError> {
    let path = path.as_ref();
    let payload = read_asset(path)?;
    let size = compress_and_describe(&payload)?;
    info!("asset {path:?}: {} bytes, {} compressed",
          payload.len(), size.human_readable);
    Ok(size)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_human_bytes() {
        let t = human_bytes;
        assert_eq!(t(0), "0 B");
        assert_eq!(t(9), "9 B");
        assert_eq!(t(10), "10 B");
        assert_eq!(t(512), "512 B");
        assert_eq!(t(999), "999 B");
        assert_eq!(t(1000), "1.0 kB");
        assert_eq!(t(1234), "1.2 kB");
        assert_eq!(t(9_960), "10 kB");
        assert_eq!(t(12_345), "12 kB");
        assert_eq!(t(1_500_000), "1.5 MB");
        assert_eq!(t(82_854_982), "83 MB");
        assert_eq!(t(u64::MAX), "18 EB");
    }

    #[test]
    fn t_counting_writer() {
        let mut w = CountingWriter::default();
        w.write_all(b"hello").unwrap();
        w.write_all(b"").unwrap();
        w.write_all(b" world").unwrap();
        assert_eq!(w.count(), 11);
    }

    #[test]
    fn t_empty_payload() {
        let size = compress_and_describe(b"").unwrap();
        // gzip header and trailer
        assert!(size.compressed_size >= 18);
        assert_eq!(size.human_readable, format!("{} B", size.compressed_size));
    }

    #[test]
    fn t_compressible_payload() {
        let payload = "function f() { return 42; }\n".repeat(10_000);
        let size = compress_and_describe(payload.as_bytes()).unwrap();
        assert!(size.compressed_size < payload.len() as u64);
        assert_eq!(size.human_readable, human_bytes(size.compressed_size));
    }

    #[test]
    fn t_describe_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.js");
        std::fs::write(&path, "x".repeat(5000)).unwrap();
        let size = describe_file(&path).unwrap();
        assert!(size.compressed_size < 5000);

        let missing = dir.path().join("missing.js");
        match describe_file(&missing) {
            Err(AssetError::Io { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            r => panic!("expected Io error, got {r:?}"),
        }
    }
}
