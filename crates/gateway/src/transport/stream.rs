//! Line transport over any async byte stream

use crate::error::{ConnectionError, TransportError};
use crate::transport::{Endpoint, LineTransport, MAX_LINE_LEN};
use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf,
    WriteHalf,
};
use tokio::net::{TcpStream, lookup_host};

/// Line-framed connection to the exchange
///
/// Owns both halves of the stream for the whole session. Inbound bytes are
/// buffered only as far as needed to assemble one line.
pub struct LineStream<S> {
    reader: BufReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    max_line_len: usize,
}

impl<S> LineStream<S>
where
    S: AsyncRead + AsyncWrite + Send,
{
    /// Wrap an already connected stream
    pub fn new(stream: S) -> Self {
        let (read, write) = tokio::io::split(stream);
        Self {
            reader: BufReader::new(read),
            writer: write,
            max_line_len: MAX_LINE_LEN,
        }
    }

    /// Override the inbound line limit
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }
}

impl LineStream<TcpStream> {
    /// Resolve the endpoint and connect over TCP
    ///
    /// Every resolved address is tried in order; the last failure is reported.
    pub async fn connect(endpoint: &Endpoint) -> Result<Self, ConnectionError> {
        let addrs = lookup_host((endpoint.host.as_str(), endpoint.port))
            .await
            .map_err(|source| ConnectionError::Resolve {
                host: endpoint.host.clone(),
                source,
            })?;

        let mut last_err = None;
        for addr in addrs {
            debug!("Connecting to {} ({})", endpoint, addr);
            match TcpStream::connect(addr).await {
                Ok(stream) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Could not disable Nagle on {}: {}", addr, e);
                    }
                    info!("Connected to exchange {} at {}", endpoint, addr);
                    return Ok(Self::new(stream));
                }
                Err(source) => last_err = Some(ConnectionError::Connect { addr, source }),
            }
        }

        Err(last_err.unwrap_or_else(|| ConnectionError::NoAddress {
            host: endpoint.host.clone(),
        }))
    }
}

#[async_trait]
impl<S> LineTransport for LineStream<S>
where
    S: AsyncRead + AsyncWrite + Send,
{
    async fn send_line(&mut self, text: &str) -> Result<(), TransportError> {
        // The exchange only accepts upper-case messages
        let mut line = text.trim_end_matches(['\r', '\n']).to_ascii_uppercase();
        line.push('\n');

        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(TransportError::Send)?;
        self.writer.flush().await.map_err(TransportError::Send)?;
        Ok(())
    }

    async fn receive_line(&mut self) -> Result<String, TransportError> {
        let limit = self.max_line_len + 1;
        let mut buf = Vec::with_capacity(128);

        let read = (&mut self.reader)
            .take(limit as u64)
            .read_until(b'\n', &mut buf)
            .await
            .map_err(TransportError::Receive)?;

        if read == 0 {
            return Err(TransportError::StreamClosed);
        }
        if buf.last() != Some(&b'\n') {
            if buf.len() >= limit {
                return Err(TransportError::LineTooLong {
                    limit: self.max_line_len,
                });
            }
            return Err(TransportError::Unterminated { len: buf.len() });
        }

        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

    #[tokio::test]
    async fn test_send_uppercases_and_terminates() {
        let (client, mut server) = duplex(1024);
        let mut transport = LineStream::new(client);

        transport.send_line("hello stockoverflow").await.unwrap();
        transport.send_line("ADD 1 vale SELL 120 2\n").await.unwrap();

        let mut buf = vec![0u8; 64];
        let n = server.read(&mut buf).await.unwrap();
        let mut received = String::from_utf8_lossy(&buf[..n]).into_owned();
        while !received.ends_with("2\n") {
            let n = server.read(&mut buf).await.unwrap();
            received.push_str(&String::from_utf8_lossy(&buf[..n]));
        }
        assert_eq!(received, "HELLO STOCKOVERFLOW\nADD 1 VALE SELL 120 2\n");
    }

    #[tokio::test]
    async fn test_receive_strips_newline() {
        let (client, mut server) = duplex(1024);
        let mut transport = LineStream::new(client);

        server
            .write_all(b"TRADE VALE 120 5\nOPEN BOND\r\n")
            .await
            .unwrap();

        assert_eq!(transport.receive_line().await.unwrap(), "TRADE VALE 120 5");
        assert_eq!(transport.receive_line().await.unwrap(), "OPEN BOND");
    }

    #[tokio::test]
    async fn test_receive_closed_stream() {
        let (client, server) = duplex(64);
        let mut transport = LineStream::new(client);
        drop(server);

        assert!(matches!(
            transport.receive_line().await,
            Err(TransportError::StreamClosed)
        ));
    }

    #[tokio::test]
    async fn test_receive_unterminated_line() {
        let (client, mut server) = duplex(64);
        let mut transport = LineStream::new(client);

        server.write_all(b"TRADE VALE 12").await.unwrap();
        drop(server);

        assert!(matches!(
            transport.receive_line().await,
            Err(TransportError::Unterminated { len: 13 })
        ));
    }

    #[tokio::test]
    async fn test_receive_line_too_long() {
        let (client, mut server) = duplex(256);
        let mut transport = LineStream::new(client).with_max_line_len(8);

        server.write_all(b"TRADE VALE 120 5\n").await.unwrap();

        assert!(matches!(
            transport.receive_line().await,
            Err(TransportError::LineTooLong { limit: 8 })
        ));
    }

    #[tokio::test]
    async fn test_line_at_limit_is_accepted() {
        let (client, mut server) = duplex(256);
        let mut transport = LineStream::new(client).with_max_line_len(8);

        server.write_all(b"12345678\n").await.unwrap();

        assert_eq!(transport.receive_line().await.unwrap(), "12345678");
    }
}
