//! Multi-turn runs through `ProgressionPlugin`: research requests, turn
//! requests and event decisions all arrive as Bevy events.

use super::{drain_effects, progression_app, run_turn};
use crate::{CityStateSnapshot, EventDecision, ProgressionCoordinator, ResearchRequest};

fn city(turn: u32, population: u32, money: f64) -> CityStateSnapshot {
    CityStateSnapshot {
        turn,
        population,
        money,
        satisfaction: 70.0,
        road_segment_count: turn * 3,
        start_population: 100,
        ..Default::default()
    }
    .with_buildings("house", turn)
}

#[test]
fn test_one_batch_per_turn() {
    let mut app = progression_app();
    for turn in 0..12 {
        let batches = run_turn(&mut app, city(turn, 100 + turn * 30, 10_000.0));
        assert_eq!(batches.len(), 1, "turn {turn}");
    }
    let coordinator = app.world().resource::<ProgressionCoordinator>();
    assert_eq!(coordinator.objectives.current_turn(), 11);
}

#[test]
fn test_research_request_then_completion() {
    let mut app = progression_app();
    app.world_mut().send_event(ResearchRequest {
        technology_id: "basic_construction".to_string(),
        investment: 0,
    });

    let mut unlocked = Vec::new();
    for turn in 0..3 {
        for batch in run_turn(&mut app, city(turn, 100, 1_000.0)) {
            unlocked.extend(batch.newly_unlocked_buildings);
        }
    }
    assert_eq!(unlocked, vec!["improved_house".to_string()]);

    let coordinator = app.world().resource::<ProgressionCoordinator>();
    assert!(coordinator
        .technology
        .get("basic_construction")
        .is_some_and(|t| t.is_researched));
}

#[test]
fn test_rejected_research_request_is_ignored() {
    let mut app = progression_app();
    app.world_mut().send_event(ResearchRequest {
        technology_id: "space_technology".to_string(),
        investment: 1_000_000,
    });
    run_turn(&mut app, city(0, 100, 1_000.0));

    let coordinator = app.world().resource::<ProgressionCoordinator>();
    assert!(coordinator.technology.current_research().is_none());
    assert_eq!(coordinator.technology.total_investment(), 0);
}

#[test]
fn test_population_objective_rewarded_after_grace_period() {
    let mut app = progression_app();
    let mut completed = Vec::new();
    let mut money = 0.0;
    for turn in 0..4 {
        for batch in run_turn(&mut app, city(turn, 300, 1_000.0)) {
            money += batch.money_delta;
            if turn < 2 {
                assert!(batch.completed_objectives.is_empty());
            }
            completed.extend(batch.completed_objectives);
        }
    }
    assert!(completed.contains(&"first_population".to_string()));
    assert!(money >= 1_000.0);
}

#[test]
fn test_event_decision_round_trip() {
    let mut app = progression_app();
    let mut triggered = None;
    for turn in 0..=8 {
        for batch in run_turn(&mut app, city(turn, 100, 1_000.0)) {
            if batch.triggered_event.is_some() {
                triggered = batch.triggered_event;
            }
        }
    }
    let event_id = triggered.expect("turn 8 triggers an event");

    let (option, expected) = {
        let coordinator = app.world().resource::<ProgressionCoordinator>();
        let event = coordinator.pending_event().expect("event is pending");
        let option = event.options[1].clone();
        let expected = event.decision_effects[&option];
        (option, expected)
    };

    app.world_mut().send_event(EventDecision {
        event_id: event_id.clone(),
        option: option.clone(),
    });
    app.update();
    let batches = drain_effects(&mut app);
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].money_delta, expected.money);
    assert_eq!(batches[0].satisfaction_delta, expected.satisfaction);

    // a repeated decision is dropped
    app.world_mut().send_event(EventDecision { event_id, option });
    app.update();
    assert!(drain_effects(&mut app).is_empty());
}

#[test]
fn test_snapshot_from_json() {
    let mut app = progression_app();
    let snapshot: CityStateSnapshot = serde_json::from_str(
        r#"{"turn": 5, "population": 260, "building_type_counts": {"house": 3}}"#,
    )
    .expect("snapshot json");
    let batches = run_turn(&mut app, snapshot);
    assert_eq!(
        batches[0].completed_objectives,
        vec!["first_population".to_string()]
    );
}
