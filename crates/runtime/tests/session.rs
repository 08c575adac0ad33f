//! Session behavior against a snapshot-native backend: every observed
//! snapshot is specialized, and boundary violations surface as errors.

use adventure_core::{
    Action, Entity, GridSnapshot, Position, Simulation, StepError,
};
use adventure_runtime::Session;

/// Backend whose native state is the snapshot itself; `advance` bumps the
/// turn counter and flags a loss when the limit runs out.
struct SnapshotSim;

#[derive(Debug, thiserror::Error)]
enum SnapshotSimError {}

impl Simulation for SnapshotSim {
    type State = GridSnapshot;
    type Error = SnapshotSimError;

    fn to_snapshot(&self, state: &Self::State) -> GridSnapshot {
        state.clone()
    }

    fn from_snapshot(&self, snapshot: &GridSnapshot) -> Result<Self::State, Self::Error> {
        Ok(snapshot.clone())
    }

    fn advance(&self, mut state: Self::State, _action: Action) -> Result<Self::State, Self::Error> {
        state.turn += 1;
        if let Some(limit) = state.turn_limit {
            if state.turn >= limit {
                state.lose = true;
            }
        }
        Ok(state)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

#[test]
fn session_exposes_only_specialized_snapshots() {
    init_tracing();
    let level = adventure_content::levels::intro::capstone(113).unwrap();
    let mut session = Session::new(SnapshotSim, level);

    let all_specialized = |snapshot: &GridSnapshot| {
        snapshot
            .entities()
            .all(|(_, entity)| entity.is_specialized())
    };
    assert!(all_specialized(session.snapshot()));

    let next = session.apply(Action::Wait).unwrap();
    assert_eq!(next.turn, 1);
    assert!(all_specialized(next));
}

#[test]
fn session_rejects_agentless_snapshots() {
    let mut empty = GridSnapshot::new(2, 2);
    empty.add(Position::new(0, 0), Entity::new()).unwrap();
    let mut session = Session::new(SnapshotSim, empty);

    match session.apply(Action::Wait) {
        Err(StepError::AgentCount { count: 0 }) => {}
        other => panic!("expected AgentCount error, got {other:?}"),
    }
    // The session snapshot is unchanged after a failed step.
    assert_eq!(session.snapshot().turn, 0);
}

#[test]
fn session_runs_to_the_turn_limit() {
    let level = adventure_content::levels::intro::basic_movement(100).unwrap();
    let limit = level.turn_limit.unwrap();
    let mut session = Session::new(SnapshotSim, level);

    for _ in 0..limit {
        session.apply(Action::Wait).unwrap();
    }
    assert!(session.snapshot().lose);
    assert_eq!(session.snapshot().turn, limit);
}
