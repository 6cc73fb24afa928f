//! Firing semantics of the async registry.

use precept::{
    AsyncRegistry, Dispatch, Immediate, Trigger,
    testing::{CallLog, FailingInstruction, RecordingInstruction},
};

mod common;
use common::{Arg, is_logged_out, is_over_14_days, recorders};

#[tokio::test]
async fn test_async_stop_propagation() {
    let log = CallLog::new();
    let instructions = recorders(&log, &[("a", false), ("b", true), ("c", true)]);
    let mut registry: AsyncRegistry<Arg> = AsyncRegistry::new();
    for instruction in instructions.iter().cloned() {
        registry.add_instruction_to_event(instruction, "routeX");
    }

    assert_eq!(
        registry.dispatch("routeX", &[Arg::Days(1)]).await.unwrap(),
        Dispatch::Applied { position: 1 }
    );
    assert_eq!(log.entries(), vec!["a", "b"]);
    assert_eq!(instructions[1].calls(), vec![vec![Arg::Days(1)]]);
    assert_eq!(instructions[2].call_count(), 0);
}

#[tokio::test]
async fn test_async_route_scenario() {
    let mut registry: AsyncRegistry<Arg> = AsyncRegistry::new();
    registry.add_instruction_to_event(Immediate(is_over_14_days), "routeX");
    registry.add_instruction_to_event(Immediate(is_logged_out), "routeX");

    assert_eq!(
        registry.dispatch("routeX", &[Arg::Days(20)]).await.unwrap(),
        Dispatch::Applied { position: 0 }
    );
    assert_eq!(
        registry.dispatch("routeX", &[Arg::Days(3)]).await.unwrap(),
        Dispatch::Exhausted
    );
    assert!(registry.do_event("routeX", &[Arg::Days(3)]).await.unwrap());
    assert!(!registry.fire(&Trigger::new("unregisteredX")).await.unwrap());
}

#[tokio::test]
async fn test_async_error_propagation() {
    let failing = FailingInstruction::new("backend unavailable");
    let after = RecordingInstruction::<Arg>::applying("after");
    let mut registry: AsyncRegistry<Arg> = AsyncRegistry::new();
    registry.add_instruction_to_event(failing.clone(), "routeX");
    registry.add_instruction_to_event(after.clone(), "routeX");

    let err = registry.do_event("routeX", &[]).await.unwrap_err();
    assert_eq!(err.position(), 0);
    assert_eq!(err.into_source().to_string(), "backend unavailable");
    assert_eq!(after.call_count(), 0);
}
