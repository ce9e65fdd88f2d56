//! Minimal SVG element tree.
//!
//! Elements keep their attributes in insertion order and are serialized in a
//! single pass, so the emitted bytes depend only on the order in which a
//! generator builds them.

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    /// Numeric attribute, printed the way a browser prints a number.
    pub fn num(self, key: &'static str, value: f64) -> Self {
        self.attr(key, js_number(value))
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape_attr(value, out);
            out.push('"');
        }
    }

    fn write_to(&self, out: &mut String) {
        self.write_open(out);
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
    }
}

/// A complete image: the definitions block followed by drawables in
/// emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    defs: Vec<Element>,
    body: Vec<Element>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn define(&mut self, element: Element) {
        self.defs.push(element);
    }

    pub fn draw(&mut self, element: Element) {
        self.body.push(element);
    }

    pub fn defs(&self) -> &[Element] {
        &self.defs
    }

    pub fn body(&self) -> &[Element] {
        &self.body
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(1024 + 160 * self.body.len());
        Element::new("svg")
            .num("width", self.width)
            .num("height", self.height)
            .attr("xmlns", SVG_NAMESPACE)
            .write_open(&mut out);
        out.push('>');

        out.push_str("<defs>");
        for def in &self.defs {
            def.write_to(&mut out);
        }
        out.push_str("</defs>");

        for element in &self.body {
            element.write_to(&mut out);
        }
        out.push_str("</svg>");
        out
    }
}

/// Formats a number following ECMAScript `Number.prototype.toString`.
///
/// Rust's `Display` already yields the shortest round-trip digits; what
/// differs is the handling of signed zero, non-finite values and the
/// exponent thresholds.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

// ── Shared definitions ─────────────────────────────────────────────

fn stop(offset: &str, color: &str, opacity: &str) -> Element {
    Element::new("stop").attr("offset", offset).attr(
        "style",
        format!("stop-color:{};stop-opacity:{}", color, opacity),
    )
}

/// Two-stop gradient running from the top-left to the bottom-right corner.
pub fn diagonal_gradient(id: String, from: &str, to: &str) -> Element {
    Element::new("linearGradient")
        .attr("id", id)
        .attr("x1", "0%")
        .attr("y1", "0%")
        .attr("x2", "100%")
        .attr("y2", "100%")
        .child(stop("0%", from, "1"))
        .child(stop("100%", to, "1"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialAccent {
    pub cx: &'static str,
    pub cy: &'static str,
    pub color: &'static str,
    pub opacity: &'static str,
    pub fade_to: &'static str,
}

pub fn radial_gradient(id: String, accent: &RadialAccent) -> Element {
    Element::new("radialGradient")
        .attr("id", id)
        .attr("cx", accent.cx)
        .attr("cy", accent.cy)
        .child(stop("0%", accent.color, accent.opacity))
        .child(stop("100%", accent.fade_to, "0"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSpec {
    pub base_frequency: &'static str,
    pub octaves: u32,
    pub blend: bool,
}

/// Fractal turbulence, desaturated; optionally multiplied over the source.
pub fn noise_filter(id: String, noise: &NoiseSpec) -> Element {
    let mut filter = Element::new("filter")
        .attr("id", id)
        .child(
            Element::new("feTurbulence")
                .attr("type", "fractalNoise")
                .attr("baseFrequency", noise.base_frequency)
                .attr("numOctaves", noise.octaves.to_string()),
        )
        .child(
            Element::new("feColorMatrix")
                .attr("type", "saturate")
                .attr("values", "0"),
        );
    if noise.blend {
        filter = filter.child(
            Element::new("feBlend")
                .attr("mode", "multiply")
                .attr("in", "SourceGraphic"),
        );
    }
    filter
}

pub fn full_bounds_rect(width: f64, height: f64, fill: String) -> Element {
    Element::new("rect")
        .num("width", width)
        .num("height", height)
        .attr("fill", fill)
}

pub fn texture_rect(width: f64, height: f64, opacity: &str, filter_id: &str) -> Element {
    Element::new("rect")
        .num("width", width)
        .num("height", height)
        .attr("fill", "white")
        .attr("opacity", opacity)
        .attr("filter", url_ref(filter_id))
}

pub fn url_ref(id: &str) -> String {
    format!("url(#{})", id)
}

/// `rotate(angle cx cy)` about the given centre.
pub fn rotate_about(angle: f64, cx: f64, cy: f64) -> String {
    format!("rotate({} {} {})", js_number(angle), js_number(cx), js_number(cy))
}
