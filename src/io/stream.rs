//! In-memory stream over a merged document.

use std::io::{self, Cursor, Read};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

/// Readable stream holding a complete merged document.
///
/// All bytes are present when the stream is created; reading never touches
/// the filesystem. Implements both [`std::io::Read`] and
/// [`tokio::io::AsyncRead`].
///
/// # Examples
///
/// ```
/// use pdfmerge::io::PdfStream;
/// use std::io::Read;
///
/// let mut stream = PdfStream::new(b"%PDF-1.4".to_vec());
/// let mut bytes = Vec::new();
/// stream.read_to_end(&mut bytes).unwrap();
/// assert_eq!(bytes, b"%PDF-1.4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfStream {
    inner: Cursor<Vec<u8>>,
}

impl PdfStream {
    /// Wrap merged bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    /// Total size of the document in bytes.
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    /// Check whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.len()
            .saturating_sub(usize::try_from(self.inner.position()).unwrap_or(usize::MAX))
    }

    /// Recover the full document, regardless of read position.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl From<Vec<u8>> for PdfStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl Read for PdfStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl AsyncRead for PdfStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}
