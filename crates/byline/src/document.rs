//! Owned XML element tree for manuscript queries.
//!
//! Manuscripts are small enough to hold in memory, and the extraction rules
//! are phrased as "first descendant named X" or "all descendants named X with
//! attribute Y". This module folds `quick-xml` pull events into a tree of
//! [`Element`]s and offers exactly those queries.
//!
//! Names are matched on their local part, so `<jats:contrib>` and
//! `<contrib>` are the same element to every query here.
//!
//! # Examples
//!
//! ```
//! use byline::document::Document;
//!
//! let doc = Document::parse(
//!   br#"<article><front><article-title>On <italic>Things</italic></article-title></front></article>"#,
//! )?;
//! let title = doc.find("article-title").map(|t| t.normalized_text());
//! assert_eq!(title.as_deref(), Some("On Things"));
//! # Ok::<(), byline::error::BylineError>(())
//! ```

use std::borrow::Cow;

use quick_xml::{
  events::{BytesStart, Event},
  Reader,
};

use super::*;

/// A parsed manuscript.
#[derive(Debug, Clone, Default)]
pub struct Document {
  /// Synthetic unnamed element holding every top-level node.
  root: Element,
}

/// A single XML element with its attributes and children in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
  /// Local name of the element
  name:       String,
  /// Attributes as (local name, unescaped value) pairs
  attributes: Vec<(String, String)>,
  /// Child nodes in document order
  children:   Vec<Node>,
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  /// A nested element
  Element(Element),
  /// A text or CDATA fragment, entities already decoded
  Text(String),
}

impl Document {
  /// Parses raw manuscript bytes into a tree.
  ///
  /// Bytes are decoded as UTF-8, replacing invalid sequences. Elements left
  /// open at the end of input are closed implicitly. Text whose entities
  /// cannot be decoded is kept verbatim.
  ///
  /// # Errors
  ///
  /// Returns [`BylineError::Xml`] for ill-formed markup such as mismatched
  /// end tags.
  pub fn parse(data: &[u8]) -> Result<Self> {
    let xml = String::from_utf8_lossy(data);
    let mut reader = Reader::from_str(&xml);
    let mut stack = vec![Element::default()];

    loop {
      match reader.read_event()? {
        Event::Start(e) => stack.push(Element::from_start(&e)),
        Event::Empty(e) => attach(&mut stack, Node::Element(Element::from_start(&e))),
        Event::End(_) =>
          if stack.len() > 1 {
            close(&mut stack);
          },
        Event::Text(e) => {
          let text = e
            .unescape()
            .map(Cow::into_owned)
            .unwrap_or_else(|_| String::from_utf8_lossy(&e).into_owned());
          attach(&mut stack, Node::Text(text));
        },
        Event::CData(e) => attach(&mut stack, Node::Text(String::from_utf8_lossy(&e).into_owned())),
        Event::Eof => break,
        _ => (),
      }
    }

    while stack.len() > 1 {
      close(&mut stack);
    }

    Ok(Self { root: stack.pop().unwrap_or_default() })
  }

  /// The synthetic root element. Its children are the top-level nodes.
  pub fn root(&self) -> &Element { &self.root }

  /// First element named `name` anywhere in the document.
  pub fn find(&self, name: &str) -> Option<&Element> { self.root.find(name) }

  /// All elements named `name` anywhere in the document, in document order.
  pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    self.root.find_all(name)
  }
}

/// Appends a node to the innermost open element.
fn attach(stack: &mut [Element], node: Node) {
  if let Some(parent) = stack.last_mut() {
    parent.children.push(node);
  }
}

/// Closes the innermost open element and attaches it to its parent.
fn close(stack: &mut Vec<Element>) {
  if let Some(element) = stack.pop() {
    attach(stack, Node::Element(element));
  }
}

impl Element {
  /// Builds an element with no children from a start or empty tag.
  fn from_start(start: &BytesStart) -> Self {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let attributes = start
      .attributes()
      .flatten()
      .map(|attr| {
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
          .unescape_value()
          .map(Cow::into_owned)
          .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
        (key, value)
      })
      .collect();
    Self { name, attributes, children: Vec::new() }
  }

  /// Local name of this element. Empty for the document root.
  pub fn name(&self) -> &str { &self.name }

  /// Value of the attribute with the given local name.
  pub fn attr(&self, name: &str) -> Option<&str> {
    self.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
  }

  /// Direct children of this element.
  pub fn children(&self) -> &[Node] { &self.children }

  /// Every descendant element in document (pre-)order, excluding `self`.
  pub fn descendants(&self) -> Descendants<'_> { Descendants { stack: vec![self.children.iter()] } }

  /// First descendant element named `name`.
  pub fn find(&self, name: &str) -> Option<&Element> {
    self.descendants().find(|element| element.name == name)
  }

  /// All descendant elements named `name`.
  pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    self.descendants().filter(move |element| element.name == name)
  }

  /// First descendant named `name` whose attribute `attr` equals `value`.
  pub fn find_with(&self, name: &str, attr: &str, value: &str) -> Option<&Element> {
    self.descendants().find(|element| element.name == name && element.attr(attr) == Some(value))
  }

  /// All descendants named `name` whose attribute `attr` equals `value`.
  pub fn find_all_with<'a>(
    &'a self,
    name: &'a str,
    attr: &'a str,
    value: &'a str,
  ) -> impl Iterator<Item = &'a Element> + 'a {
    self.find_all(name).filter(move |element| element.attr(attr) == Some(value))
  }

  /// All text beneath this element, concatenated as-is.
  pub fn text(&self) -> String {
    let mut fragments = Vec::new();
    self.collect_text(&mut fragments);
    fragments.concat()
  }

  /// All text beneath this element with whitespace runs collapsed to a
  /// single space and the ends trimmed.
  pub fn normalized_text(&self) -> String { self.text().split_whitespace().collect::<Vec<_>>().join(" ") }

  /// Every text fragment beneath this element trimmed, blank ones dropped,
  /// the rest joined with no separator.
  ///
  /// Words split by inline markup run together: `of <i>Apis</i> bees`
  /// gives `"ofApisbees"`.
  pub fn stripped_text(&self) -> String {
    let mut fragments = Vec::new();
    self.collect_text(&mut fragments);
    fragments.into_iter().map(str::trim).filter(|fragment| !fragment.is_empty()).collect()
  }

  /// Pushes every text fragment beneath this element onto `out`.
  fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
    for child in &self.children {
      match child {
        Node::Text(text) => out.push(text),
        Node::Element(element) => element.collect_text(out),
      }
    }
  }
}

/// Pre-order iterator over descendant elements, see [`Element::descendants`].
pub struct Descendants<'a> {
  /// One child iterator per open ancestor
  stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
  type Item = &'a Element;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(children) = self.stack.last_mut() {
      match children.next() {
        Some(Node::Element(element)) => {
          self.stack.push(element.children.iter());
          return Some(element);
        },
        Some(Node::Text(_)) => continue,
        None => {
          self.stack.pop();
        },
      }
    }
    None
  }
}
