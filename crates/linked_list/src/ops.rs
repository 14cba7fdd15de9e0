use crate::node::{ListNode, iter};

/// Builds a reversed copy; `head` is left untouched.
pub fn reverse(head: Option<&ListNode>) -> Option<Box<ListNode>> {
    let mut reversed = None;
    for value in iter(head) {
        reversed = Some(Box::new(ListNode {
            value,
            next: reversed,
        }));
    }
    reversed
}

/// Relinks the owned nodes back to front without allocating.
pub fn reverse_in_place(mut head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut reversed = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}

/// Adds two non-negative numbers stored least-significant digit first.
///
/// Digits outside `0..=9` are not rejected; the result is then meaningless.
pub fn add_numbers(l1: Option<&ListNode>, l2: Option<&ListNode>) -> Option<Box<ListNode>> {
    let mut head = None;
    let mut tail = &mut head;
    let mut a = l1;
    let mut b = l2;
    let mut carry = 0_i64;

    while a.is_some() || b.is_some() || carry != 0 {
        let sum = a.map_or(0, |n| n.value) + b.map_or(0, |n| n.value) + carry;
        carry = sum / 10;
        tail = &mut tail.insert(Box::new(ListNode::new(sum % 10))).next;
        a = a.and_then(|n| n.next.as_deref());
        b = b.and_then(|n| n.next.as_deref());
    }
    head
}
