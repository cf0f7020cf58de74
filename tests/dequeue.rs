use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

use seriatim::iter;
use seriatim::task::{sleep, yield_now};

#[seriatim::test]
async fn drains_the_whole_queue() {
    let queue = RefCell::new(VecDeque::from([1, 2, 3, 4, 5, 6]));
    let result = RefCell::new(Vec::new());

    let flow: ControlFlow<()> = iter::dequeue(&queue, |n| {
        result.borrow_mut().push(n * 5);
        async { ControlFlow::Continue(()) }
    })
    .await;

    assert!(flow.is_continue());
    assert_eq!(*result.borrow(), [5, 10, 15, 20, 25, 30]);
    assert!(queue.borrow().is_empty());
}

#[seriatim::test]
async fn stopping_leaves_the_rest_queued() {
    let queue = RefCell::new(VecDeque::from([1, 2, 3, 4, 5, 6, 7, 8]));

    let flow = iter::dequeue(&queue, |n| async move {
        yield_now().await;
        if n == 5 {
            return ControlFlow::Break(5);
        }
        ControlFlow::Continue(())
    })
    .await;

    assert_eq!(flow, ControlFlow::Break(5));
    assert_eq!(queue.borrow().len(), 3);
    assert_eq!(*queue.borrow(), [6, 7, 8]);
}

#[seriatim::test]
async fn empty_queues_finish_without_visiting() {
    let mut queue: VecDeque<u8> = VecDeque::new();
    let mut calls = 0;
    let flow: ControlFlow<()> = iter::dequeue(&mut queue, |_| {
        calls += 1;
        async { ControlFlow::Continue(()) }
    })
    .await;
    assert!(flow.is_continue());
    assert_eq!(calls, 0);
}

#[seriatim::test]
async fn items_pushed_while_draining_are_drained_breadth_first() {
    // A complete binary tree of 15 nodes, numbered level by level.
    let queue = RefCell::new(VecDeque::from([1u32]));
    let visited = RefCell::new(Vec::new());

    let flow: ControlFlow<()> = iter::dequeue(&queue, |node| {
        let (queue, visited) = (&queue, &visited);
        async move {
            yield_now().await;
            visited.borrow_mut().push(node);
            for child in [node * 2, node * 2 + 1] {
                if child < 16 {
                    queue.borrow_mut().push_back(child);
                }
            }
            ControlFlow::Continue(())
        }
    })
    .await;

    assert!(flow.is_continue());
    assert_eq!(*visited.borrow(), (1..16).collect::<Vec<_>>());
    assert!(queue.borrow().is_empty());
}

#[seriatim::test]
async fn shared_queues_can_grow_across_suspensions() {
    let queue = Rc::new(RefCell::new(VecDeque::from(["root"])));
    let visited = RefCell::new(Vec::new());

    let flow = iter::dequeue(&queue, |name| {
        let queue = Rc::clone(&queue);
        let visited = &visited;
        async move {
            sleep(Duration::from_millis(5)).await;
            visited.borrow_mut().push(name);
            match name {
                "root" => queue.borrow_mut().extend(["left", "right"]),
                "left" => queue.borrow_mut().push_back("left.leaf"),
                "right" => return ControlFlow::Break("right"),
                _ => {}
            }
            ControlFlow::Continue(())
        }
    })
    .await;

    assert_eq!(flow, ControlFlow::Break("right"));
    assert_eq!(*visited.borrow(), ["root", "left", "right"]);
    assert_eq!(*queue.borrow(), ["left.leaf"]);
}

#[test_log::test]
fn reruns_on_fresh_input_are_identical() {
    fn run() -> (ControlFlow<i32>, Vec<i32>) {
        let queue = RefCell::new(VecDeque::from([3, 1, 4, 1, 5, 9, 2, 6]));
        let flow = seriatim::runtime::block_on(iter::dequeue(&queue, |n| async move {
            if n == 9 {
                return ControlFlow::Break(n);
            }
            ControlFlow::Continue(())
        }));
        (flow, queue.into_inner().into())
    }

    assert_eq!(run(), run());
    assert_eq!(run(), (ControlFlow::Break(9), vec![2, 6]));
}
