use std::any::Any;

use seriatim::args::last_fn;

type Callback = fn() -> i32;

fn seventy_seven() -> i32 {
    77
}

fn one() -> i32 {
    1
}

fn call_last(args: &[&dyn Any]) -> Option<i32> {
    last_fn::<Callback>(args).map(|f| f())
}

#[test]
fn finds_a_trailing_callback() {
    let f: Callback = seventy_seven;
    assert_eq!(call_last(&[&1, &2, &3, &f]), Some(77));
    assert_eq!(call_last(&[&1, &2, &3, &4, &5, &6, &7, &8, &f]), Some(77));
}

#[test]
fn finds_a_callback_in_the_middle() {
    let f: Callback = seventy_seven;
    assert_eq!(call_last(&[&1, &2, &3, &4, &f, &6, &7, &8]), Some(77));
    assert_eq!(call_last(&[&f, &"two", &3.0]), Some(77));
}

#[test]
fn the_callback_nearest_the_end_wins() {
    let first: Callback = one;
    let last: Callback = seventy_seven;
    assert_eq!(call_last(&[&first, &2, &last, &"four"]), Some(77));
    assert_eq!(call_last(&[&last, &first]), Some(1));
}

#[test]
fn lists_without_a_callback_yield_none() {
    assert_eq!(call_last(&[&1, &"two", &3.0]), None);
    assert_eq!(call_last(&[]), None);
}

#[test]
fn boxed_closures_are_found_too() {
    let offset = 40;
    let add: Box<dyn Fn(i32) -> i32> = Box::new(move |n| n + offset);
    let args: [&dyn Any; 3] = [&add, &"x", &2];
    let f = last_fn::<Box<dyn Fn(i32) -> i32>>(&args).unwrap();
    assert_eq!(f(2), 42);
}
