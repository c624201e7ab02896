//! Line-oriented serial command channel
//!
//! Opens a port at a fixed 115200 baud, sends carriage-return-terminated
//! commands, and drains whatever response lines the device produced within
//! the read timeout. No retry, no backoff, no reconnect: every failure
//! surfaces to the caller.

use std::io::{self, Read, Write};
use std::time::Duration;
use thiserror::Error;

/// Fixed baud rate for the command link
pub const BAUD_RATE: u32 = 115_200;

/// Serial channel error types
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Port not found
    #[error("Port not found: {0}")]
    PortNotFound(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Channel has been closed
    #[error("Channel is closed")]
    Disconnected,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Device response was not valid UTF-8
    #[error("Response was not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Byte stream the channel drives
///
/// `Box<dyn SerialPort>` in production; tests substitute an in-memory device.
pub trait CommandStream: Read + Write + Send {}

impl<T: Read + Write + Send> CommandStream for T {}

/// A command/response channel over one open serial port
pub struct CommandChannel {
    stream: Option<Box<dyn CommandStream>>,
    port_name: String,
}

impl CommandChannel {
    /// Open the port at [`BAUD_RATE`] with the given read timeout
    ///
    /// The port is acquired immediately; an unavailable device fails here,
    /// not at the first send.
    pub fn open(port: &str, timeout: Duration) -> Result<Self, ChannelError> {
        let stream = serialport::new(port, BAUD_RATE)
            .timeout(timeout)
            .open()
            .map_err(|e| match e.kind() {
                serialport::ErrorKind::NoDevice => ChannelError::PortNotFound(port.to_string()),
                serialport::ErrorKind::Io(io_kind) => match io_kind {
                    io::ErrorKind::PermissionDenied => {
                        ChannelError::PermissionDenied(port.to_string())
                    }
                    _ => ChannelError::ConnectionFailed(e.to_string()),
                },
                _ => ChannelError::ConnectionFailed(e.to_string()),
            })?;

        Ok(Self {
            stream: Some(Box::new(stream)),
            port_name: port.to_string(),
        })
    }

    /// Port identifier this channel was opened on
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Is the port still held?
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Send a command and return the response lines
    ///
    /// Writes exactly `command` + `\r`, then reads all currently available
    /// lines. Lines keep their terminators; a trailing chunk without a
    /// newline is returned as the final line.
    pub fn send_command(&mut self, command: &str) -> Result<Vec<String>, ChannelError> {
        let stream = self.stream.as_mut().ok_or(ChannelError::Disconnected)?;

        let framed = format!("{command}\r");
        stream.write_all(framed.as_bytes())?;
        stream.flush()?;

        read_lines(stream.as_mut())
    }

    /// Write response lines to stdout without adding terminators
    ///
    /// Lines are assumed to already carry their own line endings.
    pub fn display(&self, lines: &[String]) {
        let mut out = io::stdout().lock();
        for line in lines {
            let _ = out.write_all(line.as_bytes());
        }
        let _ = out.flush();
    }

    /// Discard up to `size` stale bytes, then read and print response lines
    ///
    /// The discarded bytes are not returned; the fresh lines are printed to
    /// stdout and returned.
    pub fn read_raw(&mut self, size: usize) -> Result<Vec<String>, ChannelError> {
        let stream = self.stream.as_mut().ok_or(ChannelError::Disconnected)?;

        let mut scratch = vec![0u8; size];
        match stream.read(&mut scratch) {
            Ok(_) => {}
            Err(ref e) if e.kind() == io::ErrorKind::TimedOut => {}
            Err(e) => return Err(ChannelError::Io(e)),
        }

        let lines = read_lines(stream.as_mut())?;
        println!("{lines:?}");
        Ok(lines)
    }

    /// Release the port
    ///
    /// Further sends and reads return [`ChannelError::Disconnected`]. The
    /// port is also released when the channel is dropped.
    pub fn close(&mut self) {
        self.stream = None;
    }
}

impl std::fmt::Debug for CommandChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandChannel")
            .field("port_name", &self.port_name)
            .field("open", &self.is_open())
            .finish()
    }
}

/// Drain available bytes, split on `\n` keeping terminators, decode as UTF-8
///
/// A timeout from the underlying read ends the drain.
fn read_lines(stream: &mut dyn CommandStream) -> Result<Vec<String>, ChannelError> {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 256];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => raw.extend_from_slice(&chunk[..n]),
            Err(ref e) if e.kind() == io::ErrorKind::TimedOut => break,
            Err(e) => return Err(ChannelError::Io(e)),
        }
    }

    let mut lines = Vec::new();
    let mut rest = &raw[..];
    while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
        let (line, tail) = rest.split_at(pos + 1);
        lines.push(String::from_utf8(line.to_vec())?);
        rest = tail;
    }
    if !rest.is_empty() {
        lines.push(String::from_utf8(rest.to_vec())?);
    }

    Ok(lines)
}

/// List serial ports visible to the OS
pub fn list_ports() -> Result<Vec<serialport::SerialPortInfo>, ChannelError> {
    serialport::available_ports().map_err(|e| ChannelError::Io(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// In-memory stand-in for a serial device: records writes, serves a
    /// scripted response, then times out the way a real port would
    struct MockDevice {
        written: Arc<Mutex<Vec<u8>>>,
        response: io::Cursor<Vec<u8>>,
    }

    impl MockDevice {
        fn new(response: &[u8]) -> (Self, Arc<Mutex<Vec<u8>>>) {
            let written = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    written: Arc::clone(&written),
                    response: io::Cursor::new(response.to_vec()),
                },
                written,
            )
        }
    }

    impl Read for MockDevice {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.response.read(buf)?;
            if n == 0 && !buf.is_empty() {
                return Err(io::Error::new(io::ErrorKind::TimedOut, "read timed out"));
            }
            Ok(n)
        }
    }

    impl Write for MockDevice {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn channel_over(device: MockDevice) -> CommandChannel {
        CommandChannel {
            stream: Some(Box::new(device)),
            port_name: "mock".to_string(),
        }
    }

    #[test]
    fn test_send_appends_carriage_return() {
        let (device, written) = MockDevice::new(b"");
        let mut channel = channel_over(device);

        channel.send_command("STATUS").unwrap();
        assert_eq!(written.lock().as_slice(), b"STATUS\r");
    }

    #[test]
    fn test_send_returns_ordered_lines() {
        let (device, _) = MockDevice::new(b"OK\r\nREADY\r\n");
        let mut channel = channel_over(device);

        let lines = channel.send_command("STATUS").unwrap();
        assert_eq!(lines, vec!["OK\r\n".to_string(), "READY\r\n".to_string()]);
    }

    #[test]
    fn test_trailing_partial_chunk_is_last_line() {
        let (device, _) = MockDevice::new(b"OK\r\nREA");
        let mut channel = channel_over(device);

        let lines = channel.send_command("STATUS").unwrap();
        assert_eq!(lines, vec!["OK\r\n".to_string(), "REA".to_string()]);
    }

    #[test]
    fn test_send_after_close_fails() {
        let (device, _) = MockDevice::new(b"OK\r\n");
        let mut channel = channel_over(device);

        channel.close();
        assert!(!channel.is_open());
        assert!(matches!(
            channel.send_command("STATUS"),
            Err(ChannelError::Disconnected)
        ));
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let (device, _) = MockDevice::new(&[0xff, 0xfe, b'\n']);
        let mut channel = channel_over(device);

        assert!(matches!(
            channel.send_command("STATUS"),
            Err(ChannelError::Decode(_))
        ));
    }

    #[test]
    fn test_read_raw_discards_before_reading() {
        let (device, _) = MockDevice::new(b"junkOK\r\n");
        let mut channel = channel_over(device);

        let lines = channel.read_raw(4).unwrap();
        assert_eq!(lines, vec!["OK\r\n".to_string()]);
    }
}
