//! Whole-pipeline integration test: orchestrate all four tasks in-process
//! against a capture sink and verify the narrated output.

use std::sync::Arc;

use quadsim_core::{LineSink, TaskId, TaskParameters};
use quadsim_orchestration::orchestrator::{run, RunOptions};
use quadsim_orchestration::runner::TerminalState;

fn params() -> TaskParameters {
    TaskParameters {
        fib_n: 10,
        needle_trials: 10_000,
        semi_major: 10,
        semi_minor: 5,
        ellipse_samples: 100_000,
        bucket_count: 9,
        ball_drops: 500,
    }
}

fn seeded() -> RunOptions {
    RunOptions {
        base_seed: Some(2024),
        iterative_fib: false,
    }
}

#[test]
fn narration_brackets_the_whole_run() {
    let sink = Arc::new(LineSink::memory());
    run(&params(), &seeded(), &sink);

    let lines = sink.lines();
    assert_eq!(lines.first().unwrap(), "Orchestrator Started");
    assert_eq!(lines.last().unwrap(), "Orchestrator Exits");

    // Seven echo lines directly after the startup notice.
    for line in &lines[1..8] {
        assert!(line.contains(" = "), "expected echo line, got: {line}");
    }
}

#[test]
fn every_task_is_created_started_and_exits() {
    let sink = Arc::new(LineSink::memory());
    let reports = run(&params(), &seeded(), &sink);
    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.state() == TerminalState::Succeeded));

    let lines = sink.lines();
    for id in TaskId::ALL {
        let name = id.name();
        let indent = id.indent();
        assert!(lines.contains(&format!("{name} Task Created")), "{name}");
        assert!(
            lines.contains(&format!("{indent}{name} Task Started")),
            "{name}"
        );
        assert!(
            lines.contains(&format!("{indent}{name} Task Exits")),
            "{name}"
        );
    }
}

#[test]
fn task_results_are_present_and_plausible() {
    let sink = Arc::new(LineSink::memory());
    run(&params(), &seeded(), &sink);
    let lines = sink.lines();

    assert!(lines.contains(&"   Fibonacci Number f(10) is 55".to_string()));

    let probability: f64 = lines
        .iter()
        .find_map(|l| l.trim().strip_prefix("Estimated Probability is "))
        .unwrap()
        .parse()
        .unwrap();
    assert!((0.0..=1.0).contains(&probability));

    let estimated: f64 = lines
        .iter()
        .find_map(|l| l.trim().strip_prefix("Estimated Area is "))
        .unwrap()
        .parse()
        .unwrap();
    let actual = std::f64::consts::PI * 10.0 * 5.0;
    assert!((estimated - actual).abs() / actual < 0.05);

    // One histogram row per bucket, counts summing to the drop count.
    let total: i64 = lines
        .iter()
        .filter(|l| l.len() > 4 && l.as_bytes()[3] == b'-' && l[..3].trim().parse::<u8>().is_ok())
        .map(|l| l[5..12].trim().parse::<i64>().unwrap())
        .sum();
    assert_eq!(total, 500);
}

#[test]
fn reports_arrive_for_all_tasks_even_with_a_failing_one() {
    let mut p = params();
    p.bucket_count = -1;
    let sink = Arc::new(LineSink::memory());
    let reports = run(&p, &seeded(), &sink);

    assert_eq!(reports.len(), 4);
    let failed: Vec<TaskId> = reports
        .iter()
        .filter(|r| r.state() == TerminalState::Failed)
        .map(|r| r.task)
        .collect();
    assert_eq!(failed, vec![TaskId::PinballHistogram]);
    assert_eq!(sink.lines().last().unwrap(), "Orchestrator Exits");
}
