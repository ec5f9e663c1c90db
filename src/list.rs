use crate::node::Node;
use core::fmt;
use log::{debug, trace};

/// A singly-linked list that grows at the front.
#[derive(Debug)]
pub struct List<T> {
    head: Option<Box<Node<T>>>,
}

/// Iterator over values from head to tail.
pub struct Iter<'a, T> {
    cur: Option<&'a Node<T>>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> List<T> {
    /// Create a list holding a single `value`.
    pub fn new(value: T) -> Self {
        Self {
            head: Some(Box::new(Node::new(value))),
        }
    }

    /// Create a list with no nodes at all.
    pub fn empty() -> Self {
        Self { head: None }
    }

    /// The first node, if any. Walk the rest with [`Node::next`].
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Number of nodes, counted by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Make `value` the new first element.
    pub fn add_to_beginning(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.set_next(self.head.take());
        self.head = Some(node);
        trace!("added node at head");
    }

    /// Iterate values in chain order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { cur: self.head() }
    }

    /// Does any node hold a value equal to `value`?
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.iter().any(|v| *v == *value)
    }

    /// Remove nodes equal to `value` in a single pass from the head.
    ///
    /// The original head is checked once. After that, every node looks at its
    /// immediate successor and bypasses it on a match, then the walk steps
    /// forward one link. A node that becomes adjacent through a splice is not
    /// re-checked from the same position, so `[1, 2, 2, 3]` loses one `2`
    /// while `[1, 2, 3, 2]` loses both. Removing an absent value does nothing.
    pub fn remove_first_occurrence<Q>(&mut self, value: &Q)
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        let mut removed = 0usize;

        if self.head.as_ref().is_some_and(|head| *head.value() == *value) {
            if let Some(mut old_head) = self.head.take() {
                self.head = old_head.take_next();
                removed += 1;
                trace!("dropped head node");
            }
        }

        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.next().is_some_and(|next| *next.value() == *value) {
                let bypass = node.take_next().and_then(|mut skipped| skipped.take_next());
                node.set_next(bypass);
                removed += 1;
                trace!("bypassed matching node");
            }
            cur = node.next_mut();
        }

        debug!("remove_first_occurrence dropped {removed} node(s)");
    }

    /// Render as `a -> b -> c -> None`; an empty list renders as `None`.
    pub fn to_sequence_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        f.write_str("None")
    }
}

impl<T> Drop for List<T> {
    // unlink one node at a time; the default recursive drop can overflow on long chains
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.take_next();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        self.cur = node.next();
        Some(node.value())
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
