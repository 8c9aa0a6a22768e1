//! # Ordered chain of sparse tuples
//!
//! A singly linked list of `(index, value)` nodes, ordered by increasing index. Every node is owned
//! by exactly one link: either the head of the chain or the `next` field of its predecessor. Nodes
//! can therefore only be moved between links, never shared.
//!
//! The chain itself doesn't know about zero values; keeping those out is the job of the owning
//! vector.
use std::fmt;
use std::iter::FusedIterator;

use crate::data::linear_algebra::SparseTuple;

type Link<F> = Option<Box<Node<F>>>;

struct Node<F> {
    index: usize,
    value: F,
    next: Link<F>,
}

/// Ordered, exclusively owned sequence of sparse tuples.
pub(crate) struct Chain<F> {
    head: Link<F>,
}

impl<F> Chain<F> {
    pub(crate) fn new() -> Self {
        Self { head: None }
    }

    /// Build a chain from tuples that are already ordered by index.
    ///
    /// Nodes are appended at the tail, so this is linear in the number of tuples.
    pub(crate) fn from_sorted<I: IntoIterator<Item=SparseTuple<F>>>(tuples: I) -> Self {
        let mut head = None;
        let mut tail = &mut head;
        for (index, value) in tuples {
            let node = tail.insert(Box::new(Node { index, value, next: None }));
            tail = &mut node.next;
        }

        Self { head }
    }

    /// Find the link at which a node with index `index` is, or should be inserted.
    ///
    /// The walk stops at the first node with an index not smaller than `index`.
    fn seek_mut(&mut self, index: usize) -> &mut Link<F> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.index < index) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }

        link
    }

    /// Value stored at `index`, if any.
    pub(crate) fn find(&self, index: usize) -> Option<&F> {
        self.iter()
            .take_while(|&(i, _)| i <= index)
            .find(|&(i, _)| i == index)
            .map(|(_, value)| value)
    }

    /// Overwrite the value at `index`, or splice in a new node in front of the first node with a
    /// larger index.
    pub(crate) fn insert(&mut self, index: usize, value: F) {
        let link = self.seek_mut(index);
        match link {
            Some(node) if node.index == index => node.value = value,
            _ => {
                let next = link.take();
                *link = Some(Box::new(Node { index, value, next }));
            }
        }
    }

    /// Unlink the node at `index`, returning its value.
    ///
    /// Nothing happens when there is no such node.
    pub(crate) fn remove(&mut self, index: usize) -> Option<F> {
        let link = self.seek_mut(index);
        match link.take() {
            Some(mut node) if node.index == index => {
                *link = node.next.take();
                Some(node.value)
            }
            other => {
                *link = other;
                None
            }
        }
    }

    /// Remove all nodes for which `keep` returns `false`, relinking around them.
    ///
    /// # Return value
    ///
    /// The number of nodes removed.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(usize, &F) -> bool) -> usize {
        let mut removed = 0;
        let mut link = &mut self.head;
        while let Some(mut node) = link.take() {
            if keep(node.index, &node.value) {
                link = &mut link.insert(node).next;
            } else {
                *link = node.next.take();
                removed += 1;
            }
        }

        removed
    }

    /// Release all nodes.
    pub(crate) fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    pub(crate) fn iter(&self) -> Iter<'_, F> {
        Iter { next: self.head.as_deref() }
    }

    pub(crate) fn values_mut(&mut self) -> ValuesMut<'_, F> {
        ValuesMut { next: self.head.as_deref_mut() }
    }

    /// Number of nodes, found by walking the chain.
    pub(crate) fn count(&self) -> usize {
        self.iter().count()
    }
}

impl<F> Default for Chain<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> Clone for Chain<F> {
    fn clone(&self) -> Self {
        Self::from_sorted(self.iter().map(|(index, value)| (index, value.clone())))
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        *self = source.clone();
    }
}

impl<F> Drop for Chain<F> {
    fn drop(&mut self) {
        // The default drop would recurse once per node.
        self.clear();
    }
}

impl<F: fmt::Debug> fmt::Debug for Chain<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over `(index, &value)` in increasing index order.
pub struct Iter<'a, F> {
    next: Option<&'a Node<F>>,
}

impl<'a, F> Iterator for Iter<'a, F> {
    type Item = (usize, &'a F);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            (node.index, &node.value)
        })
    }
}

impl<F> FusedIterator for Iter<'_, F> {}

impl<F> Clone for Iter<'_, F> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

/// Mutable access to the stored values, indices stay fixed.
pub(crate) struct ValuesMut<'a, F> {
    next: Option<&'a mut Node<F>>,
}

impl<'a, F> Iterator for ValuesMut<'a, F> {
    type Item = &'a mut F;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

/// Owning iterator, pops nodes off the front of the chain.
pub struct IntoIter<F> {
    chain: Chain<F>,
}

impl<F> Iterator for IntoIter<F> {
    type Item = SparseTuple<F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.head.take().map(|mut node| {
            self.chain.head = node.next.take();
            (node.index, node.value)
        })
    }
}

impl<F> FusedIterator for IntoIter<F> {}

impl<F> IntoIterator for Chain<F> {
    type Item = SparseTuple<F>;
    type IntoIter = IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}
