//! Time-limited async instructions.
#![cfg(feature = "timeout")]

use precept::{AsyncRegistry, Dispatch, InstructionError, decorators::Timeout};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_timed_out_instruction_aborts_firing() {
    let mut registry: AsyncRegistry<u32> = AsyncRegistry::new();
    registry.add_instruction_to_event(
        Timeout::new(
            |_: &[u32]| async {
                sleep(Duration::from_millis(500)).await;
                true
            },
            Duration::from_millis(10),
        ),
        "routeX",
    );
    registry.add_instruction_to_event(|_: &[u32]| async { true }, "routeX");

    let err = registry.do_event("routeX", &[]).await.unwrap_err();
    assert_eq!(err.position(), 0);
    assert!(matches!(
        err.into_source().downcast_ref::<InstructionError>(),
        Some(InstructionError::Timeout(_))
    ));
}

#[tokio::test]
async fn test_fast_instruction_within_limit() {
    let mut registry: AsyncRegistry<u32> = AsyncRegistry::new();
    registry.add_instruction_to_event(
        Timeout::new(
            |args: &[u32]| {
                let days = args[0];
                async move { days > 14 }
            },
            Duration::from_secs(1),
        ),
        "routeX",
    );

    assert_eq!(
        registry.dispatch("routeX", &[20]).await.unwrap(),
        Dispatch::Applied { position: 0 }
    );
}
