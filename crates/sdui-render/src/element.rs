//! View Elements
//!
//! The minimal element tree the dispatcher produces. Attributes keep
//! insertion order, boolean attributes carry no value, and serialization
//! escapes text so a document's content cannot break out of the markup.

/// A rendered node: an element, bare text, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element(Element),
    Text(String),
    /// Output of an unrecognized component. Serializes to the empty string.
    Empty,
}

impl ViewNode {
    /// Serialize this node and its subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The element inside, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(text) => push_escaped(out, text),
            Self::Empty => {}
        }
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for ViewNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ViewNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// One attribute; `value: None` is a bare boolean attribute like `required`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    pub value: Option<String>,
}

/// One element: tag, ordered attributes, child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<Attr>,
    pub children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: Some(value.into()),
        });
        self
    }

    /// Add an attribute when a value is present.
    pub fn attr_opt(mut self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.attrs.push(Attr {
                name,
                value: Some(value.into()),
            });
        }
        self
    }

    /// Add a bare boolean attribute when `on` holds.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push(Attr { name, value: None });
        }
        self
    }

    /// Append one child node.
    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(ViewNode::Text(text.into()));
        self
    }

    /// Append many child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Value of the first attribute named `name`.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .and_then(|attr| attr.value.as_deref())
    }

    /// Whether an attribute named `name` is present, bare or valued.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|attr| attr.name == name)
    }

    /// Serialize this element and its subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for attr in &self.attrs {
            out.push(' ');
            out.push_str(attr.name);
            if let Some(value) = &attr.value {
                out.push_str("=\"");
                push_escaped(out, value);
                out.push('"');
            }
        }
        out.push('>');
        if is_void(self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Tags serialized without children or a closing tag.
fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "br" | "hr" | "img" | "meta" | "link")
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let element = Element::new("label")
            .attr("for", "email")
            .text("Email Address");
        assert_eq!(
            element.to_html(),
            r#"<label for="email">Email Address</label>"#
        );
    }

    #[test]
    fn test_boolean_attributes_are_bare() {
        let element = Element::new("input")
            .attr("id", "email")
            .flag("required", true)
            .flag("disabled", false);
        assert_eq!(element.to_html(), r#"<input id="email" required>"#);
    }

    #[test]
    fn test_void_tags_have_no_closing_tag() {
        let element = Element::new("input").attr("type", "text");
        assert_eq!(element.to_html(), r#"<input type="text">"#);
        assert!(!element.to_html().contains("</input>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let element = Element::new("p").text(r#"<b>&"bold"</b>"#);
        assert_eq!(
            element.to_html(),
            "<p>&lt;b&gt;&amp;&quot;bold&quot;&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let element = Element::new("input").attr("value", r#"a"b<c"#);
        assert_eq!(element.to_html(), r#"<input value="a&quot;b&lt;c">"#);
    }

    #[test]
    fn test_empty_node_serializes_to_nothing() {
        assert_eq!(ViewNode::Empty.to_html(), "");
        let wrapped = Element::new("div").child(ViewNode::Empty).text("after");
        assert_eq!(wrapped.to_html(), "<div>after</div>");
    }

    #[test]
    fn test_attr_lookup() {
        let element = Element::new("select")
            .attr("id", "country")
            .flag("required", true);
        assert_eq!(element.attr_value("id"), Some("country"));
        assert_eq!(element.attr_value("required"), None);
        assert!(element.has_attr("required"));
        assert!(!element.has_attr("disabled"));
    }
}
