use super::*;
use crate::event_sink::{BufferEventSink, EventSink};
use crate::liveness::analyze;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn run(ops: Vec<Operation>, config: &EvalConfig) -> (VariableStore, ScheduleReport) {
    let program = Program::new(ops).unwrap();
    let (live, _) = analyze(program.operations());
    let store = VariableStore::new();
    let report = run_waves(&program, &live, &store, config, &EventSink::Silent);
    (store, report)
}

fn values(store: &VariableStore) -> Vec<(String, i64)> {
    store
        .snapshot()
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[test]
fn example_program_needs_two_waves() {
    let ops = vec![
        Operation::calc("x", "10", "+", "2"),
        Operation::print("x"),
        Operation::calc("y", "x", "-", "3"),
        Operation::calc("z", "x", "*", "y"),
        Operation::print("y"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert_eq!(values(&store), vec![("x".into(), 12), ("y".into(), 9)]);
    assert_eq!(report.waves, 2);
    assert_eq!(report.computed, 2);
    assert!(report.discarded.is_empty());
    assert!(report.unresolved.is_empty());
}

#[test]
fn dead_operations_are_never_executed() {
    let ops = vec![
        Operation::calc("a", "1", "+", "1"),
        Operation::calc("b", "2", "+", "2"),
        Operation::print("a"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert_eq!(values(&store), vec![("a".into(), 2)]);
    assert_eq!(report.waves, 1);
}

#[test]
fn declaration_order_does_not_matter() {
    let ops = vec![
        Operation::print("c"),
        Operation::calc("c", "b", "*", "2"),
        Operation::calc("b", "a", "+", "1"),
        Operation::calc("a", "5", "+", "0"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert_eq!(store.get("c"), Some(12));
    assert_eq!(report.waves, 3);
}

#[test]
fn no_calc_means_zero_waves() {
    let (store, report) = run(vec![Operation::print("x")], &EvalConfig::default());

    assert!(store.is_empty());
    assert_eq!(report, ScheduleReport::default());
}

#[test]
fn cycle_stops_without_a_wave() {
    let ops = vec![
        Operation::calc("p", "q", "+", "1"),
        Operation::calc("q", "p", "+", "1"),
        Operation::print("p"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert!(store.is_empty());
    assert_eq!(report.waves, 0);
    assert_eq!(report.unresolved, vec![0, 1]);
}

#[test]
fn undefined_reference_blocks_only_its_chain() {
    let ops = vec![
        Operation::calc("a", "ghost", "+", "1"),
        Operation::calc("b", "3", "*", "3"),
        Operation::print("a"),
        Operation::print("b"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert_eq!(values(&store), vec![("b".into(), 9)]);
    assert_eq!(report.waves, 1);
    assert_eq!(report.unresolved, vec![0]);
}

#[test]
fn unsupported_operator_is_discarded() {
    let ops = vec![
        Operation::calc("a", "8", "/", "2"),
        Operation::calc("b", "a", "+", "1"),
        Operation::print("b"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert!(store.is_empty());
    assert_eq!(report.waves, 1);
    assert_eq!(report.computed, 0);
    assert_eq!(
        report.discarded,
        vec![Discarded {
            operation: 0,
            target: Name::new("a"),
            reason: DiscardReason::UnsupportedOperator("/".into()),
        }]
    );
    assert_eq!(report.unresolved, vec![1]);
}

#[test]
fn overflow_is_discarded() {
    let ops = vec![
        Operation::calc("big", "9223372036854775807", "+", "1"),
        Operation::print("big"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert!(store.get("big").is_none());
    assert_eq!(report.discarded.len(), 1);
    assert_eq!(report.discarded[0].reason, DiscardReason::Overflow);
}

#[test]
fn discard_does_not_stop_a_wave_that_made_progress() {
    let ops = vec![
        Operation::calc("bad", "1", "%", "2"),
        Operation::calc("ok", "1", "+", "2"),
        Operation::calc("next", "ok", "+", "1"),
        Operation::print("bad"),
        Operation::print("next"),
    ];
    let (store, report) = run(ops, &EvalConfig::default());

    assert_eq!(values(&store), vec![("next".into(), 4), ("ok".into(), 3)]);
    assert_eq!(report.waves, 2);
}

#[test]
fn events_are_reported_in_wave_order() {
    let program = Program::new(vec![
        Operation::calc("x", "10", "+", "2"),
        Operation::calc("y", "x", "-", "3"),
        Operation::print("y"),
    ])
    .unwrap();
    let (live, _) = analyze(program.operations());
    let store = VariableStore::new();
    let sink = EventSink::Buffer(BufferEventSink::new());

    run_waves(&program, &live, &store, &EvalConfig::default(), &sink);

    assert_eq!(
        sink.render(),
        "wave 1: 1 ready, 1 blocked\n\
         wave 1: x = 12\n\
         wave 2: 1 ready, 0 blocked\n\
         wave 2: y = 9\n\
         fixed point after 2 wave(s): 2 computed, 0 unresolved\n"
    );
}

#[test]
fn wave_count_is_chain_depth() {
    let mut ops = vec![Operation::calc("v0", "0", "+", "1")];
    for i in 1..50 {
        ops.push(Operation::calc(
            format!("v{i}").as_str(),
            &format!("v{}", i - 1),
            "+",
            "1",
        ));
    }
    ops.push(Operation::print("v49"));
    let (store, report) = run(ops, &EvalConfig::default());

    assert_eq!(report.waves, 50);
    assert_eq!(store.get("v49"), Some(50));
}

#[test]
fn single_thread_pool_matches_default() {
    let ops = || {
        vec![
            Operation::calc("a", "2", "*", "3"),
            Operation::calc("b", "a", "*", "a"),
            Operation::calc("c", "b", "-", "a"),
            Operation::print("c"),
        ]
    };
    let single = EvalConfig {
        num_threads: 1,
        ..EvalConfig::default()
    };
    let (one, _) = run(ops(), &single);
    let (many, _) = run(ops(), &EvalConfig::default());

    assert_eq!(values(&one), values(&many));
    assert_eq!(one.get("c"), Some(30));
}

#[test]
fn discard_reason_display() {
    assert_eq!(
        DiscardReason::UnsupportedOperator("/".into()).to_string(),
        "unsupported operator `/`"
    );
    assert_eq!(DiscardReason::Overflow.to_string(), "integer overflow");
}

const NAMES: &[&str] = &["a", "b", "c", "d", "e", "f"];
const OPERATORS: &[&str] = &["+", "-", "*"];

fn arb_operand() -> impl Strategy<Value = String> {
    prop_oneof![
        (-20i64..20).prop_map(|n| n.to_string()),
        prop::sample::select(NAMES).prop_map(str::to_owned),
    ]
}

/// One optional `calc` per name, so definitions never collide.
fn arb_program() -> impl Strategy<Value = Vec<Operation>> {
    (
        prop::collection::vec(
            prop::option::of((
                arb_operand(),
                prop::sample::select(OPERATORS),
                arb_operand(),
            )),
            NAMES.len(),
        ),
        prop::collection::vec(prop::sample::select(NAMES), 0..4),
    )
        .prop_map(|(calcs, prints)| {
            let mut ops: Vec<Operation> = calcs
                .into_iter()
                .zip(NAMES)
                .filter_map(|(calc, name)| {
                    calc.map(|(left, op, right)| Operation::calc(*name, &left, op, &right))
                })
                .collect();
            ops.extend(prints.into_iter().map(Operation::print));
            ops
        })
}

proptest! {
    #[test]
    fn parallel_matches_sequential(ops in arb_program()) {
        let (parallel, parallel_report) = run(ops.clone(), &EvalConfig::default());
        let (sequential, sequential_report) = run(ops, &EvalConfig::sequential());

        prop_assert_eq!(values(&parallel), values(&sequential));
        prop_assert_eq!(parallel_report, sequential_report);
    }

    #[test]
    fn only_live_variables_are_stored(ops in arb_program()) {
        let (live, _) = analyze(&ops);
        let (store, _) = run(ops, &EvalConfig::default());

        for (name, _) in store.snapshot() {
            prop_assert!(live.contains(name.as_str()));
        }
    }

    #[test]
    fn rerun_is_idempotent(ops in arb_program()) {
        let program = Program::new(ops).unwrap();
        let (live, _) = analyze(program.operations());
        let store = VariableStore::new();
        let config = EvalConfig::default();

        run_waves(&program, &live, &store, &config, &EventSink::Silent);
        let first = values(&store);
        let again = run_waves(&program, &live, &store, &config, &EventSink::Silent);

        prop_assert_eq!(values(&store), first);
        prop_assert_eq!(again.computed, 0);
    }
}
