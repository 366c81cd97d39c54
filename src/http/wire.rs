//! Line-oriented reader over a raw connection stream.
//!
//! The header region is decoded byte-for-byte as ISO-8859-1 so that every
//! byte maps to exactly one `char`. Only the body is re-decoded as UTF-8,
//! which keeps non-ASCII bytes from being interpreted twice.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

pub struct WireReader<S> {
    inner: BufReader<S>,
    bytes_seen: usize,
}

impl<S: AsyncRead + Unpin> WireReader<S> {
    pub fn new(stream: S) -> Self {
        Self {
            inner: BufReader::new(stream),
            bytes_seen: 0,
        }
    }

    /// Reads the next line with its `\r\n` or `\n` terminator removed.
    ///
    /// Returns `None` once the stream is exhausted.
    pub async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut raw = Vec::new();
        let n = self.inner.read_until(b'\n', &mut raw).await?;
        if n == 0 {
            return Ok(None);
        }
        self.bytes_seen += n;

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        Ok(Some(latin1(&raw)))
    }

    /// Reads up to `n` bytes and decodes them as UTF-8.
    ///
    /// A peer that closes early yields whatever arrived instead of an error.
    pub async fn read_exact(&mut self, n: usize) -> std::io::Result<String> {
        let mut body = Vec::new();
        let read = (&mut self.inner).take(n as u64).read_to_end(&mut body).await?;
        self.bytes_seen += read;

        if read < n {
            tracing::debug!(expected = n, received = read, "short body read");
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Total bytes consumed from the stream so far.
    pub fn bytes_seen(&self) -> usize {
        self.bytes_seen
    }

    pub fn get_mut(&mut self) -> &mut S {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
