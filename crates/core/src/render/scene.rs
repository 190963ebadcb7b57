//! Typed SVG scene description.
//!
//! Renderers build a [`Scene`] out of plain geometric primitives and call
//! [`Scene::to_svg`] once at the end. Escaping and number formatting live
//! here and nowhere else.

use std::fmt::Write;

use super::format::fmt_num;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Horizontal text alignment (`text-anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Any element a chart can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Group(Group),
    Circle(Circle),
    Line(Line),
    Path(Path),
    Rect(Rect),
    Text(Text),
    /// `<title>`: native hover text for the parent element
    Title(String),
    /// `<style>`: CSS scoped to the document
    Style(String),
}

/// `<g>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub class: Option<String>,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }
}

/// `<circle>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub pointer_events: Option<String>,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            ..Self::default()
        }
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn pointer_events(mut self, value: impl Into<String>) -> Self {
        self.pointer_events = Some(value.into());
        self
    }
}

/// `<line>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            ..Self::default()
        }
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }
}

/// `<path>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub d: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl Path {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            ..Self::default()
        }
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(width);
        self
    }
}

/// `<rect>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: Option<f64>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn rx(mut self, rx: f64) -> Self {
        self.rx = Some(rx);
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = Some(width);
        self
    }
}

/// `<text>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: Option<Anchor>,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
    pub fill: Option<String>,
    pub transform: Option<String>,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = Some("bold".into());
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Rotate the text by `degrees` around its own anchor point.
    pub fn rotate(mut self, degrees: f64) -> Self {
        self.transform = Some(format!(
            "rotate({} {} {})",
            fmt_num(degrees),
            fmt_num(self.x),
            fmt_num(self.y)
        ));
        self
    }
}

macro_rules! impl_into_node {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$ty(value)
                }
            }
        )*
    };
}

impl_into_node!(Group, Circle, Line, Path, Rect, Text);

/// Root `<svg>` element with explicit pixel size and a view box.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// `min-x min-y width height`
    pub view_box: [f64; 4],
    pub aria_label: Option<String>,
    pub children: Vec<Node>,
}

impl Scene {
    /// A scene whose view box matches its pixel size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            view_box: [0.0, 0.0, width, height],
            aria_label: None,
            children: Vec::new(),
        }
    }

    /// A scene drawn in `view_box` user units and displayed at `width`×`height`.
    pub fn with_view_box(width: f64, height: f64, view_box: [f64; 4]) -> Self {
        Self {
            view_box,
            ..Self::new(width, height)
        }
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Every node in document order (depth-first, groups before their children).
    pub fn nodes(&self) -> Vec<&Node> {
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
            for node in nodes {
                out.push(node);
                if let Node::Group(g) = node {
                    walk(&g.children, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.children, &mut out);
        out
    }

    /// Serialize the scene to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let [vx, vy, vw, vh] = self.view_box;
        let _ = write!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{}" height="{}" viewBox="{} {} {} {}""#,
            fmt_num(self.width),
            fmt_num(self.height),
            fmt_num(vx),
            fmt_num(vy),
            fmt_num(vw),
            fmt_num(vh),
        );
        if let Some(label) = &self.aria_label {
            write_attr(&mut out, "role", "img");
            write_attr(&mut out, "aria-label", label);
        }
        out.push_str(">\n");
        for node in &self.children {
            write_node(&mut out, node, 1);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Group(g) => {
            out.push_str(&indent);
            out.push_str("<g");
            write_opt_attr(out, "class", g.class.as_deref());
            if g.children.is_empty() {
                out.push_str("/>\n");
                return;
            }
            out.push_str(">\n");
            for child in &g.children {
                write_node(out, child, depth + 1);
            }
            out.push_str(&indent);
            out.push_str("</g>\n");
        }
        Node::Circle(c) => {
            out.push_str(&indent);
            out.push_str("<circle");
            write_num_attr(out, "cx", c.cx);
            write_num_attr(out, "cy", c.cy);
            write_num_attr(out, "r", c.r);
            write_opt_attr(out, "fill", c.fill.as_deref());
            write_opt_attr(out, "stroke", c.stroke.as_deref());
            write_opt_num_attr(out, "stroke-width", c.stroke_width);
            write_opt_attr(out, "pointer-events", c.pointer_events.as_deref());
            out.push_str("/>\n");
        }
        Node::Line(l) => {
            out.push_str(&indent);
            out.push_str("<line");
            write_num_attr(out, "x1", l.x1);
            write_num_attr(out, "y1", l.y1);
            write_num_attr(out, "x2", l.x2);
            write_num_attr(out, "y2", l.y2);
            write_opt_attr(out, "stroke", l.stroke.as_deref());
            write_opt_num_attr(out, "stroke-width", l.stroke_width);
            out.push_str("/>\n");
        }
        Node::Path(p) => {
            out.push_str(&indent);
            out.push_str("<path");
            write_attr(out, "d", &p.d);
            write_opt_attr(out, "fill", p.fill.as_deref());
            write_opt_attr(out, "stroke", p.stroke.as_deref());
            write_opt_num_attr(out, "stroke-width", p.stroke_width);
            out.push_str("/>\n");
        }
        Node::Rect(r) => {
            out.push_str(&indent);
            out.push_str("<rect");
            write_num_attr(out, "x", r.x);
            write_num_attr(out, "y", r.y);
            write_num_attr(out, "width", r.width);
            write_num_attr(out, "height", r.height);
            write_opt_num_attr(out, "rx", r.rx);
            write_opt_attr(out, "fill", r.fill.as_deref());
            write_opt_attr(out, "stroke", r.stroke.as_deref());
            write_opt_num_attr(out, "stroke-width", r.stroke_width);
            out.push_str("/>\n");
        }
        Node::Text(t) => {
            out.push_str(&indent);
            out.push_str("<text");
            write_num_attr(out, "x", t.x);
            write_num_attr(out, "y", t.y);
            write_opt_attr(out, "text-anchor", t.anchor.map(Anchor::as_str));
            write_opt_num_attr(out, "font-size", t.font_size);
            write_opt_attr(out, "font-weight", t.font_weight.as_deref());
            write_opt_attr(out, "fill", t.fill.as_deref());
            write_opt_attr(out, "transform", t.transform.as_deref());
            out.push('>');
            out.push_str(&xml_escape(&t.content));
            out.push_str("</text>\n");
        }
        Node::Title(title) => {
            let _ = writeln!(out, "{indent}<title>{}</title>", xml_escape(title));
        }
        Node::Style(css) => {
            // CSS is authored by the renderers, never by record data.
            let _ = writeln!(out, "{indent}<style>{}</style>", xml_escape(css));
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, r#" {name}="{}""#, xml_escape(value));
}

fn write_opt_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        write_attr(out, name, value);
    }
}

fn write_num_attr(out: &mut String, name: &str, value: f64) {
    let _ = write!(out, r#" {name}="{}""#, fmt_num(value));
}

fn write_opt_num_attr(out: &mut String, name: &str, value: Option<f64>) {
    if let Some(value) = value {
        write_num_attr(out, name, value);
    }
}

/// Escape the five XML special characters for text content and attribute values.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
