//! One dataframe row.

use super::Attribute;

/// An ordered, index-addressable sequence of attributes.
///
/// Position `i` corresponds to column name `i` of the owning
/// [`Dataframe`](super::Dataframe). Rows are created through
/// [`Dataframe::create_instance`](super::Dataframe::create_instance) and
/// stay owned by their table for their whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    attributes: Vec<Attribute>,
}

impl Instance {
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute(&self, idx: usize) -> &Attribute {
        &self.attributes[idx]
    }

    /// Append one attribute in column order.
    pub fn add_attribute(&mut self, content: impl Into<String>) {
        self.attributes.push(Attribute::new(content));
    }

    /// Replace the attribute at `idx`, keeping the row width unchanged.
    pub fn set_attribute(&mut self, idx: usize, content: impl Into<String>) {
        self.attributes[idx] = Attribute::new(content);
    }
}
