//! Closure capture semantics through the public evaluator API.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

mod common;

use common::{add, assign, block, call, eval, func, int, program, string, var};
use pretty_assertions::assert_eq;
use primi_eval::{Context, Interpreter, Value};
use primi_ir::StringInterner;

/// `make = function() { n = 1; read = function() { n }; n = 2; read }`:
/// `n` changes after the inner closure is built but before it runs.
#[test]
fn closure_observes_mutation_after_defining_call_returned() {
    let make = func(
        &[],
        block(vec![
            assign("n", int(1)),
            assign("read", func(&[], var("n"))),
            assign("n", int(2)),
            var("read"),
        ]),
    );
    let node = program(vec![
        assign("make", make),
        assign("reader", call(var("make"), vec![])),
        call(var("reader"), vec![]),
    ]);
    assert_eq!(eval(&node).unwrap(), Value::int(2));
}

#[test]
fn closure_reads_global_binding_made_after_creation() {
    let interner = StringInterner::new();
    let interp = Interpreter::new(&interner);
    let ctx = Context::global();

    let getter = interp.eval(&func(&[], var("late")), &ctx).unwrap();
    ctx.bind(interner.intern("late"), Value::string("bound"));

    assert_eq!(interp.call(&getter, &[]).unwrap(), Value::string("bound"));
}

#[test]
fn closures_passed_as_arguments() {
    // double = function(s) { s + s }; twice = function(f, x) { f(f(x)) }
    let node = program(vec![
        assign("double", func(&["s"], add(var("s"), var("s")))),
        assign(
            "twice",
            func(
                &["f", "x"],
                call(var("f"), vec![call(var("f"), vec![var("x")])]),
            ),
        ),
        call(var("twice"), vec![var("double"), string("ab")]),
    ]);
    assert_eq!(eval(&node).unwrap().internal_value(), "abababab");
}
