//! Rendering in a separate thread into a bounded channel, read from
//! as a response body. A slow reader blocks the renderer; a dropped
//! reader makes the renderer's next write fail, which stops it.

use std::{io::{self, Read, Write},
          sync::mpsc::{sync_channel, Receiver, SyncSender},
          thread::{self, JoinHandle}};

use chj_util::time_guard;
use log::{debug, warn};
use shtml::{render, render_document, Node, RenderError};

pub struct ChunkWriter {
    tx: SyncSender<Vec<u8>>,
}

pub struct ChunkReader {
    rx: Receiver<Vec<u8>>,
    chunk: Vec<u8>,
    pos: usize,
}

/// At most `bound` chunks are held in the channel.
pub fn chunk_channel(bound: usize) -> (ChunkWriter, ChunkReader) {
    let (tx, rx) = sync_channel(bound);
    (ChunkWriter { tx },
     ChunkReader { rx, chunk: Vec::new(), pos: 0 })
}

impl Write for ChunkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0)
        }
        self.tx.send(buf.to_vec()).map_err(
            |_| io::Error::new(io::ErrorKind::BrokenPipe, "response reader was dropped"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for ChunkReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0)
        }
        while self.pos == self.chunk.len() {
            match self.rx.recv() {
                Ok(chunk) => {
                    self.chunk = chunk;
                    self.pos = 0;
                }
                // Writer is gone, rendering finished (or failed).
                Err(_) => return Ok(0)
            }
        }
        let n = buf.len().min(self.chunk.len() - self.pos);
        buf[..n].copy_from_slice(&self.chunk[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Move `tree` to a new thread that renders it into the returned
/// reader.
pub fn spawn_render(
    tree: Node,
    want_doctype: bool,
    bound: usize,
) -> io::Result<(ChunkReader, JoinHandle<Result<(), RenderError>>)> {
    let (writer, reader) = chunk_channel(bound);
    let handle = thread::Builder::new().name("render".into()).spawn(move || {
        time_guard!("render");
        let result = if want_doctype {
            render_document(&tree, writer)
        } else {
            render(&tree, writer)
        };
        match &result {
            Ok(()) => (),
            Err(e) if e.is_cancelled() => debug!("client went away: {e}"),
            Err(e) => warn!("rendering failed: {e}"),
        }
        result
    })?;
    Ok((reader, handle))
}


#[cfg(test)]
mod tests {
    use super::*;
    use shtml::{elements::{div, p}, for_each, text, to_html_string};

    fn tree(n: usize) -> Node {
        div([for_each(0..n, |i| p([text(format!("paragraph {i} & more"))]).unwrap()).into()])
            .unwrap()
    }

    #[test]
    fn t_reads_everything() {
        let (mut reader, handle) = spawn_render(tree(10_000), true, 2).unwrap();
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        handle.join().unwrap().unwrap();
        assert_eq!(out, to_html_string(&tree(10_000), true));
    }

    #[test]
    fn t_empty_read_buffer() {
        let (mut reader, handle) = spawn_render(tree(1), false, 1).unwrap();
        assert_eq!(reader.read(&mut []).unwrap(), 0);
        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "<div><p>paragraph 0 &amp; more</p></div>");
        handle.join().unwrap().unwrap();
    }

    #[test]
    fn t_dropped_reader_cancels() {
        let (mut reader, handle) = spawn_render(tree(100_000), false, 1).unwrap();
        let mut start = [0u8; 100];
        reader.read_exact(&mut start).unwrap();
        assert_eq!(&start[..5], b"<div>");
        drop(reader);
        let result = handle.join().unwrap();
        assert!(result.unwrap_err().is_cancelled());
    }

    #[test]
    fn t_writer_without_reader() {
        let (mut writer, reader) = chunk_channel(1);
        drop(reader);
        let e = writer.write(b"x").unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::BrokenPipe);
    }
}
