//! Chapter 5: functions, multiple returns, variadics, closures and
//! deferred cleanup.

use std::cell::RefCell;
use std::io::Write;

use super::LessonResult;
use crate::config::CourseConfig;
use crate::narrate::Narrator;

/// Integer division that treats a zero denominator as yielding 0.
pub fn div(num: i64, denom: i64) -> i64 {
    if denom == 0 {
        return 0;
    }
    num / denom
}

/// Quotient and remainder, or an error for a zero denominator.
pub fn div_and_remainder(num: i64, denom: i64) -> Result<(i64, i64), String> {
    if denom == 0 {
        return Err("cannot divide by zero".to_string());
    }
    Ok((num / denom, num % denom))
}

/// Adds `base` to every value; callers may pass any number of values.
pub fn add_to(base: i64, vals: &[i64]) -> Vec<i64> {
    vals.iter().map(|v| base + v).collect()
}

pub fn make_counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

/// Runs `cleanup` when dropped unless cancelled first. Drops run in
/// reverse declaration order, so stacked guards unwind last-in first-out.
pub struct Deferred<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> Deferred<F> {
    pub fn new(cleanup: F) -> Self {
        Deferred {
            cleanup: Some(cleanup),
        }
    }

    pub fn cancel(mut self) {
        self.cleanup = None;
    }
}

impl<F: FnOnce()> Drop for Deferred<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

fn guarded_step(events: &RefCell<Vec<String>>, fail: bool) -> Result<(), String> {
    events.borrow_mut().push("open".to_string());
    let _close = Deferred::new(|| events.borrow_mut().push("close".to_string()));
    let _log = Deferred::new(|| events.borrow_mut().push("log".to_string()));
    if fail {
        return Err("step failed".to_string());
    }
    events.borrow_mut().push("work".to_string());
    Ok(())
}

pub fn run<W: Write>(n: &mut Narrator<W>, _config: &CourseConfig) -> LessonResult {
    n.section("Calling a Function")?;
    n.line("div(100, 20)", div(100, 20))?;
    n.line("div(100, 0)", div(100, 0))?;
    n.blank()?;

    n.section("Multiple Return Values")?;
    for (num, denom) in [(5, 2), (5, 0)] {
        match div_and_remainder(num, denom) {
            Ok((quotient, remainder)) => {
                n.text(format!("{num} / {denom} = {quotient} remainder {remainder}"))?
            }
            Err(err) => n.text(format!("{num} / {denom}: {err}"))?,
        }
    }
    n.blank()?;

    n.section("Variadic Parameters")?;
    n.line("addTo(3)", format!("{:?}", add_to(3, &[])))?;
    n.line("addTo(3, 2)", format!("{:?}", add_to(3, &[2])))?;
    n.line("addTo(3, 2, 4, 6, 8)", format!("{:?}", add_to(3, &[2, 4, 6, 8])))?;
    n.blank()?;

    n.section("Closures")?;
    let mut counter = make_counter();
    counter();
    counter();
    n.line("counter() after two calls", counter())?;
    let ops: [(&str, fn(i64, i64) -> i64); 3] =
        [("+", |a, b| a + b), ("*", |a, b| a * b), ("div", div)];
    for (name, op) in ops {
        n.text(format!("12 {name} 4 = {}", op(12, 4)))?;
    }
    n.blank()?;

    n.section("Deferred Cleanup")?;
    for fail in [false, true] {
        let events = RefCell::new(Vec::new());
        let outcome = guarded_step(&events, fail);
        n.text(format!(
            "fail = {fail}: {:?} -> {}",
            outcome,
            events.into_inner().join(", ")
        ))?;
    }
    n.blank()?;
    Ok(())
}
