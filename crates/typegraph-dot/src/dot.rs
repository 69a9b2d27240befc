//! DOT format utilities for graph synthesis.

use std::borrow::Cow;
use std::fmt::Write;

/// Escape text for a DOT double-quoted string.
pub fn escape_quoted(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote an identifier (node name or port) for DOT.
pub fn quote_id(input: &str) -> String {
    format!("\"{}\"", escape_quoted(input))
}

/// Escape text for an HTML-like label or attribute value.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("<BR/>"),
            _ => out.push(c),
        }
    }
    out
}

/// Canonical port name: surrounding whitespace trimmed, inner runs collapsed
/// to a single space.
///
/// Member and property texts may span lines; a `PORT` attribute cannot.
pub fn port_name(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim();
    let single_spaced = trimmed
        .split(' ')
        .all(|word| !word.is_empty() && !word.contains(char::is_whitespace));
    if trimmed.is_empty() || single_spaced {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

/// Escape a value for a `PORT` attribute. Never emits markup.
pub fn escape_port(input: &str) -> String {
    escape_html(&port_name(input))
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// One side of an edge: a node, optionally narrowed to a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub node: &'a str,
    pub port: Option<Cow<'a, str>>,
}

impl<'a> Endpoint<'a> {
    pub fn node(node: &'a str) -> Self {
        Self { node, port: None }
    }

    /// The port is stored in [`port_name`] form so it matches the label's
    /// `PORT` attribute.
    pub fn port(node: &'a str, port: &'a str) -> Self {
        Self {
            node,
            port: Some(port_name(port)),
        }
    }

    fn render(&self) -> String {
        match &self.port {
            Some(port) => format!("{}:{}", quote_id(self.node), quote_id(port)),
            None => quote_id(self.node),
        }
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new directed graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {} {{", quote_id(name));
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}={};", key, quote_id(value));
        self
    }

    /// Set default attributes for `graph`, `node` or `edge`.
    pub fn defaults(&mut self, target: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{target} [{}];", render_attrs(attrs));
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node whose label is an HTML-like table.
    ///
    /// `html` must already be escaped; it is emitted between `<` and `>`.
    pub fn html_node(&mut self, id: &str, html: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{} [label=<{}>];", quote_id(id), html);
        self
    }

    /// Add an edge with attributes.
    pub fn edge(&mut self, from: &Endpoint<'_>, to: &Endpoint<'_>, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{} -> {}", from.render(), to.render());
        if !attrs.is_empty() {
            let _ = write!(self.output, " [{}]", render_attrs(attrs));
        }
        self.output.push_str(";\n");
        self
    }

    /// Start a subgraph cluster.
    pub fn start_cluster(&mut self, id: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph {} {{", quote_id(&format!("cluster_{id}")));
        self.indent += 1;
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent = self.indent.saturating_sub(1);
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

fn render_attrs(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{key}={}", quote_id(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn quoting_escapes_quotes_and_backslashes() {
        assert_eq!(quote_id("User"), "\"User\"");
        assert_eq!(quote_id(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote_id(r"a\b"), r#""a\\b""#);
    }

    #[test]
    fn html_escaping_neutralises_markup() {
        assert_eq!(escape_html("Map<K, V>"), "Map&lt;K, V&gt;");
        assert_eq!(escape_html("A & B"), "A &amp; B");
        assert_eq!(escape_html(r#""OPEN""#), "&quot;OPEN&quot;");
        assert_eq!(escape_html("'x'"), "&#39;x&#39;");
    }

    #[test]
    fn port_names_collapse_whitespace() {
        assert_eq!(port_name("Circle"), "Circle");
        assert!(matches!(port_name("Circle"), Cow::Borrowed(_)));
        assert_eq!(port_name("{ kind: Circle; r: number }"), "{ kind: Circle; r: number }");
        assert_eq!(
            port_name("{\n    kind: Circle;\n    r: number\n}"),
            "{ kind: Circle; r: number }"
        );
        assert_eq!(port_name("  A\t|  B "), "A | B");
        assert_eq!(port_name(""), "");
    }

    #[test]
    fn port_escaping_never_emits_markup() {
        let escaped = escape_port("{\n  items: Map<K, V>;\n}");
        assert_eq!(escaped, "{ items: Map&lt;K, V&gt;; }");
        assert!(!escaped.contains("<BR/>"));
    }

    #[test]
    fn multi_line_port_endpoint_renders_on_one_line() {
        let from = Endpoint::port("Shape", "{\n  kind: Circle;\n}");
        assert_eq!(from.port.as_deref(), Some("{ kind: Circle; }"));
        assert_eq!(from.render(), r#""Shape":"{ kind: Circle; }""#);
    }

    #[test]
    fn builder_emits_well_formed_document() {
        let mut dot = DotBuilder::new("G");
        dot.attr("bgcolor", "transparent")
            .defaults("node", &[("shape", "plain")])
            .start_cluster("objects")
            .html_node("A", "<B>A</B>")
            .end_cluster()
            .edge(
                &Endpoint::port("A", "b"),
                &Endpoint::node("B"),
                &[("style", "dashed")],
            );
        let output = dot.build();
        assert_eq!(
            output,
            concat!(
                "digraph \"G\" {\n",
                "  bgcolor=\"transparent\";\n",
                "  node [shape=\"plain\"];\n",
                "  subgraph \"cluster_objects\" {\n",
                "    \"A\" [label=<<B>A</B>>];\n",
                "  }\n",
                "  \"A\":\"b\" -> \"B\" [style=\"dashed\"];\n",
                "}\n",
            )
        );
    }
}
