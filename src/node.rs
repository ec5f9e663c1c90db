/// One link of a [`List`](crate::List): a value and the node that follows it.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// A detached node holding `value`.
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The following node, or `None` at the end of the chain.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Rebind the next link, dropping whatever it pointed at before.
    pub fn set_next(&mut self, next: Option<Box<Node<T>>>) {
        self.next = next;
    }

    pub(crate) fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Detach the tail of the chain, leaving this node last.
    pub(crate) fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.next.take()
    }
}
