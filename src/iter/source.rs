use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A collection which can be read by position.
///
/// The traversal in [`each`] looks up the length and the current element on
/// every step rather than taking a snapshot up front. Collections backed by a
/// [`RefCell`] can therefore be changed by the per-item operation, and those
/// changes are observed by the following lookups.
///
/// [`each`]: crate::iter::each
pub trait Positional {
    /// The type of the elements handed to the per-item operation.
    type Item;

    /// The current number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if it's out of bounds.
    fn at(&self, index: usize) -> Option<Self::Item>;
}

impl<'a, T> Positional for &'a [T] {
    type Item = &'a T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        self.get(index)
    }
}

impl<'a, T, const N: usize> Positional for &'a [T; N] {
    type Item = &'a T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        self.get(index)
    }
}

impl<'a, T> Positional for &'a Vec<T> {
    type Item = &'a T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        self.get(index)
    }
}

impl<'a, T> Positional for &'a VecDeque<T> {
    type Item = &'a T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        self.get(index)
    }
}

// The borrow only lives for the duration of the lookup, so the per-item
// operation is free to `borrow_mut` the same cell.
impl<T: Clone> Positional for &RefCell<Vec<T>> {
    type Item = T;

    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        self.borrow().get(index).cloned()
    }
}

impl<T: Clone> Positional for &Rc<RefCell<Vec<T>>> {
    type Item = T;

    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        self.borrow().get(index).cloned()
    }
}

/// A FIFO queue which can be drained from the front.
///
/// See [`dequeue`] for how appending during a drain behaves.
///
/// [`dequeue`]: crate::iter::dequeue
pub trait Queue {
    /// The type of the elements removed from the queue.
    type Item;

    /// Removes the first element and returns it, or `None` if the queue is
    /// empty.
    fn pop_front(&mut self) -> Option<Self::Item>;
}

impl<T> Queue for &mut VecDeque<T> {
    type Item = T;

    fn pop_front(&mut self) -> Option<Self::Item> {
        VecDeque::pop_front(self)
    }
}

impl<T> Queue for &RefCell<VecDeque<T>> {
    type Item = T;

    fn pop_front(&mut self) -> Option<Self::Item> {
        self.borrow_mut().pop_front()
    }
}

impl<T> Queue for &Rc<RefCell<VecDeque<T>>> {
    type Item = T;

    fn pop_front(&mut self) -> Option<Self::Item> {
        self.borrow_mut().pop_front()
    }
}
