//! HTML DOM helpers
//!
//! Renderers build `markup5ever_rcdom` nodes directly and only turn them into text at the
//! very end, so that escaping is left to the html5ever serializer.

use crate::lauvinko::error::RenderError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Rendered output of a node: zero or more sibling DOM nodes.
pub type Fragment = Vec<Handle>;

/// Create an HTML element with attributes
pub fn element(tag: &str, attrs: &[(&str, &str)]) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(*name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create an element holding the given children.
pub fn element_with(tag: &str, attrs: &[(&str, &str)], children: Fragment) -> Handle {
    let node = element(tag, attrs);
    append_all(&node, children);
    node
}

/// Create a text node
pub fn text(contents: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(contents.to_string().into()),
        },
    })
}

pub fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

pub fn append_all(parent: &Handle, children: Fragment) {
    parent.children.borrow_mut().extend(children);
}

/// Set or replace an attribute on an element node.
pub fn set_attribute(node: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        let local = LocalName::from(name);
        match attrs.iter_mut().find(|attr| attr.name.local == local) {
            Some(attr) => attr.value = value.to_string().into(),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), local),
                value: value.to_string().into(),
            }),
        }
    }
}

/// Serialize sibling nodes to an HTML string.
pub fn to_html(nodes: &[Handle]) -> Result<String, RenderError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for node in nodes {
        let serializable = SerializableHandle::from(node.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| RenderError::Serialize(e.to_string()))?;
    }

    String::from_utf8(output)
        .map_err(|e| RenderError::Serialize(format!("UTF-8 conversion failed: {}", e)))
}

/// Concatenated text content of a node and its descendants.
pub fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

/// Descendant elements of `node` with the given tag name, in document order.
pub fn elements_by_tag(node: &Handle, tag: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    for child in node.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if &*name.local == tag {
                found.push(child.clone());
            }
        }
        found.extend(elements_by_tag(child, tag));
    }
    found
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}
