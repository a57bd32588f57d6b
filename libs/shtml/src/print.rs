//! Serializing trees to HTML, streamed to any `Write` sink.

use std::{io::{BufWriter, Write}, sync::Arc};

use kstring::KString;
use log::debug;

use crate::{error::{BuildError, RenderError}, fragment::Fragment,
            node::{Element, Node, SerHtmlFrag}};

const DOCTYPE: &str = "<!DOCTYPE html>\n";

/// Capacity of the buffer between the tree walk and the sink. Memory
/// use while rendering does not depend on the size of the tree.
pub const RENDER_BUFFER_SIZE: usize = 8 * 1024;

/// Write `s` with the characters `&`, `<`, `>` (and `"` if
/// `in_attribute`) replaced by entities. Unaffected runs are written
/// as they are, without intermediate allocation.
pub fn write_escaped(out: &mut impl Write, s: &str, in_attribute: bool) -> std::io::Result<()> {
    let bytes = s.as_bytes();
    let mut done = 0;
    for (i, b) in bytes.iter().enumerate() {
        let entity: &[u8] = match b {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' if in_attribute => b"&quot;",
            _ => continue
        };
        out.write_all(&bytes[done..i])?;
        out.write_all(entity)?;
        done = i + 1;
    }
    out.write_all(&bytes[done..])
}

pub trait Print {
    /// Print serialized HTML.
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<(), RenderError>;

    fn to_html_fragment_string(&self) -> Result<String, RenderError> {
        let mut s = Vec::new();
        self.print_html_fragment(&mut s)?;
        Ok(unsafe {
            // Safe because the bytes all come from str values and
            // ASCII byte string literals that were concatenated, and
            // escaping only ever splits strings before or after
            // ASCII characters.
            String::from_utf8_unchecked(s)
        })
    }
}

impl Print for (KString, KString) {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<(), RenderError> {
        // Names were checked when set.
        out.write_all(self.0.as_bytes())?;
        out.write_all(b"=\"")?;
        write_escaped(out, &self.1, true)?;
        out.write_all(b"\"")?;
        Ok(())
    }
}

impl Print for Element {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<(), RenderError> {
        let meta = self.meta;
        out.write_all(b"<")?;
        out.write_all(meta.tag_name.as_bytes())?;
        for att in &self.attr {
            out.write_all(b" ")?;
            att.print_html_fragment(out)?;
        }
        out.write_all(b">")?;
        self.body.print_html_fragment(out)?;
        if meta.has_closing_tag {
            out.write_all(b"</")?;
            out.write_all(meta.tag_name.as_bytes())?;
            out.write_all(b">")?;
        }
        Ok(())
    }
}

impl Print for Node {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<(), RenderError> {
        match self {
            Node::Element(e) => e.print_html_fragment(out),
            Node::Text(s) => Ok(write_escaped(out, s, false)?),
            Node::Fragment(f) => f.print_html_fragment(out),
            Node::Preserialized(ser) => Ok(out.write_all(ser.as_str().as_bytes())?),
        }
    }
}

impl Print for [Node] {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<(), RenderError> {
        for node in self {
            node.print_html_fragment(out)?;
        }
        Ok(())
    }
}

impl Print for Vec<Node> {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<(), RenderError> {
        self.as_slice().print_html_fragment(out)
    }
}

impl Print for Fragment {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<(), RenderError> {
        self.nodes().print_html_fragment(out)
    }
}

fn render_with<W: Write>(
    sink: W,
    print: impl FnOnce(&mut BufWriter<W>) -> Result<(), RenderError>
) -> Result<(), RenderError> {
    let mut out = BufWriter::with_capacity(RENDER_BUFFER_SIZE, sink);
    let result = print(&mut out).and_then(|()| Ok(out.flush()?));
    if let Err(e) = &result {
        debug!("render stopped: {e}");
        // Don't let the BufWriter's drop write the rest of the
        // buffer to a sink that already failed.
        let _ = out.into_parts();
    }
    result
}

/// Serialize `root` to `sink`, in document order. Returns at the
/// first failing write, without writing anything further.
pub fn render(root: &Node, sink: impl Write) -> Result<(), RenderError> {
    render_with(sink, |out| root.print_html_fragment(out))
}

/// Like `render` but starts with the doctype declaration.
pub fn render_document(root: &Node, sink: impl Write) -> Result<(), RenderError> {
    render_with(sink, |out| {
        out.write_all(DOCTYPE.as_bytes())?;
        root.print_html_fragment(out)
    })
}

pub fn to_html_string(root: &Node, want_doctype: bool) -> String {
    let mut v = Vec::new();
    if want_doctype {
        render_document(root, &mut v)
    } else {
        render(root, &mut v)
    }.expect("no I/O errors can happen");
    // Safe for the same reason as in `to_html_fragment_string`.
    unsafe { String::from_utf8_unchecked(v) }
}

/// Serialize an element once, for reuse in many trees (e.g. static
/// parts of pages, across requests).
pub fn preserialize(node: &Node) -> Result<Arc<SerHtmlFrag>, BuildError> {
    let meta = match node {
        Node::Element(e) => e.meta,
        Node::Preserialized(p) => return Ok(p.clone()),
        _ => return Err(BuildError::PreserializeNonElement)
    };
    let s = to_html_string(node, false);
    debug!("preserialized <{}>, {} bytes", meta.tag_name, s.len());
    Ok(Arc::new(SerHtmlFrag {
        meta,
        kstring: KString::from_string(s)
    }))
}


#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{elements::{div, p, br, a, ul, li, span, script},
                fragment::for_each,
                modifier::{att, cls, text, href},
                node::Element};

    fn s(n: &Node) -> String {
        n.to_html_fragment_string().unwrap()
    }

    #[test]
    fn t_scenario_div_classes_text() {
        let mut e = Element::new("div").unwrap();
        e.add_class("a").unwrap();
        e.add_class("b").unwrap();
        e.apply(text("hi")).unwrap();
        assert_eq!(s(&Node::Element(e)), "<div class=\"a b\">hi</div>");
    }

    #[test]
    fn t_escaping() {
        let n = p([att("title", "a \"b\" <&> 'c'"), text("x < y && z > \"w\" 'v'")]).unwrap();
        assert_eq!(s(&n),
                   "<p title=\"a &quot;b&quot; &lt;&amp;&gt; 'c'\">\
                    x &lt; y &amp;&amp; z &gt; \"w\" 'v'</p>");
    }

    #[test]
    fn t_script_injection() {
        let n = div([text("<script>alert(1)</script>")]).unwrap();
        let out = s(&n);
        assert!(!out.contains("<script"));
        assert!(!out.contains("</script"));
        assert_eq!(out, "<div>&lt;script&gt;alert(1)&lt;/script&gt;</div>");
    }

    #[test]
    fn t_non_ascii() {
        let n = p([text("Grüße «ok» & ✓")]).unwrap();
        assert_eq!(s(&n), "<p>Grüße «ok» &amp; ✓</p>");
    }

    #[test]
    fn t_void_elements() {
        let n = div([text("a"), br([]).unwrap().into(), text("b")]).unwrap();
        assert_eq!(s(&n), "<div>a<br>b</div>");
    }

    #[test]
    fn t_nested_order() {
        let n = ul([
            cls("list"),
            for_each(["1", "2"], |t| li([text(t)]).unwrap()).into(),
            li([a([href("/x?a=1&b=2"), text("x")]).unwrap().into()]).unwrap().into(),
        ]).unwrap();
        assert_eq!(s(&n),
                   "<ul class=\"list\"><li>1</li><li>2</li>\
                    <li><a href=\"/x?a=1&amp;b=2\">x</a></li></ul>");
    }

    #[test]
    fn t_empty_fragment_renders_nothing() {
        let f = Node::Fragment(for_each(Vec::<&str>::new(), |t| Node::Text(t.into())));
        assert_eq!(s(&f), "");
        assert_eq!(to_html_string(&f, false), "");
    }

    #[test]
    fn t_document() {
        let n = span([]).unwrap();
        assert_eq!(to_html_string(&n, true), "<!DOCTYPE html>\n<span></span>");
    }

    #[test]
    fn t_preserialize() {
        let n = div([cls("icon"), text("<i>")]).unwrap();
        let ser = preserialize(&n).unwrap();
        assert_eq!(ser.as_str(), "<div class=\"icon\">&lt;i&gt;</div>");
        assert_eq!(ser.meta().tag_name.as_str(), "div");
        let outer = p([ser.clone().into(), ser.into()]).unwrap();
        assert_eq!(s(&outer),
                   "<p><div class=\"icon\">&lt;i&gt;</div><div class=\"icon\">&lt;i&gt;</div></p>");
        assert_eq!(preserialize(&Node::Text("x".into())).unwrap_err(),
                   BuildError::PreserializeNonElement);
    }

    #[test]
    fn t_script_text_is_escaped_too() {
        let n = script([text("if (a < b) {}")]).unwrap();
        assert_eq!(s(&n), "<script>if (a &lt; b) {}</script>");
    }

    /// Accepts `limit` bytes, then fails every write with `kind`.
    struct FailingSink {
        written: Vec<u8>,
        limit: usize,
        kind: io::ErrorKind,
        failed_writes: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() >= self.limit {
                self.failed_writes += 1;
                return Err(io::Error::new(self.kind, "sink closed"))
            }
            let n = buf.len().min(self.limit - self.written.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn big_tree() -> Node {
        div([for_each(0..20_000, |i| p([text(format!("paragraph {i}"))]).unwrap()).into()])
            .unwrap()
    }

    #[test]
    fn t_cancelled_sink() {
        let mut sink = FailingSink {
            written: Vec::new(),
            limit: 1000,
            kind: io::ErrorKind::BrokenPipe,
            failed_writes: 0,
        };
        let r = render(&big_tree(), &mut sink);
        assert!(r.unwrap_err().is_cancelled());
        assert_eq!(sink.written.len(), 1000);
        // Traversal stopped at the first failure.
        assert_eq!(sink.failed_writes, 1);
    }

    #[test]
    fn t_failing_sink() {
        let mut sink = FailingSink {
            written: Vec::new(),
            limit: 0,
            kind: io::ErrorKind::Other,
            failed_writes: 0,
        };
        let r = render(&big_tree(), &mut sink);
        assert!(matches!(r, Err(RenderError::Io(_))));
        assert_eq!(sink.failed_writes, 1);
    }

    /// Records the size of every write reaching the sink.
    struct ChunkSizes(Vec<usize>);

    impl Write for ChunkSizes {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.push(buf.len());
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn t_incremental() {
        let mut sink = ChunkSizes(Vec::new());
        render(&big_tree(), &mut sink).unwrap();
        assert!(sink.0.len() > 10);
        assert!(sink.0.iter().all(|n| *n <= RENDER_BUFFER_SIZE));
        let total: usize = sink.0.iter().sum();
        assert_eq!(total, to_html_string(&big_tree(), false).len());
    }
}
