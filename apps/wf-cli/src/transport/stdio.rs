//! Stdio bridge transport
//!
//! Newline-delimited JSON over stdin/stdout: each inbound line is one
//! `HostEvent`, each outbound line one `HostCommand`. This is the
//! framing a real host-runtime bridge process speaks.

use std::io::{BufRead, StdinLock, Stdout, Write};

use wf_host::BridgeTransport;
use wf_model::{HostCommand, HostEvent, TransportError};

/// Bridge transport over a line-oriented reader/writer pair
pub struct StdioBridge<R, W> {
    reader: R,
    writer: W,
}

impl StdioBridge<StdinLock<'static>, Stdout> {
    /// Bridge over the process's stdin and stdout
    pub fn from_stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioBridge<R, W> {
    /// Bridge over an arbitrary reader/writer pair
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> BridgeTransport for StdioBridge<R, W> {
    fn send(&mut self, command: HostCommand) -> Result<(), TransportError> {
        let json = serde_json::to_string(&command)
            .map_err(|e| TransportError::Serialization(format!("JSON serialize error: {e}")))?;

        writeln!(self.writer, "{}", json)
            .map_err(|e| TransportError::Other(format!("Write failed: {e}")))?;
        self.writer
            .flush()
            .map_err(|e| TransportError::Other(format!("Flush failed: {e}")))?;

        Ok(())
    }

    fn receive(&mut self) -> Result<Option<HostEvent>, TransportError> {
        // Blank lines are skipped; EOF closes the bridge
        loop {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| TransportError::Other(format!("Read failed: {e}")))?;
            if read == 0 {
                return Ok(None);
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let event = serde_json::from_str(line)
                .map_err(|e| TransportError::Deserialization(format!("JSON parse error: {e}")))?;
            return Ok(Some(event));
        }
    }
}
