use std::{
  io,
  sync::{Arc, Mutex},
};

/// Collects every complete log line written through it.
#[derive(Clone, Debug, Default)]
pub(super) struct VecLogWriter {
  buffer: Vec<u8>,
  lines: Arc<Mutex<Vec<String>>>,
}

impl VecLogWriter {
  pub(super) fn new(lines: Arc<Mutex<Vec<String>>>) -> Self {
    Self { buffer: Vec::new(), lines }
  }
}

impl io::Write for VecLogWriter {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.buffer.extend_from_slice(buf);

    while let Some(i) = self.buffer.iter().position(|&b| b == b'\n') {
      let bytes = self.buffer.drain(..=i).collect::<Vec<u8>>();
      let line = String::from_utf8_lossy(&bytes).trim_end().to_string();

      self.lines.lock().unwrap().push(line);
    }

    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}
