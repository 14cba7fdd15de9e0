use std::fmt;
use std::iter::FusedIterator;

/// One cell of a singly linked list. Each node owns the rest of the chain.
pub struct ListNode {
    pub value: i64,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(value: i64) -> Self {
        Self { value, next: None }
    }
}

// Unlinks iteratively; the derived drop would recurse once per node.
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl PartialEq for ListNode {
    fn eq(&self, other: &Self) -> bool {
        iter(Some(self)).eq(iter(Some(other)))
    }
}

impl Eq for ListNode {}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(iter(Some(self))).finish()
    }
}

pub fn from_values(values: &[i64]) -> Option<Box<ListNode>> {
    let mut head = None;
    for &value in values.iter().rev() {
        head = Some(Box::new(ListNode { value, next: head }));
    }
    head
}

pub struct Iter<'a> {
    cursor: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node.value)
    }
}

impl FusedIterator for Iter<'_> {}

pub fn iter(head: Option<&ListNode>) -> Iter<'_> {
    Iter { cursor: head }
}

pub fn len(head: Option<&ListNode>) -> usize {
    iter(head).count()
}

pub fn to_vec(head: Option<&ListNode>) -> Vec<i64> {
    iter(head).collect()
}
