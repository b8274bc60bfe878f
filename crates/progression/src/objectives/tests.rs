use super::*;
use crate::snapshot::CityStateSnapshot;

fn snapshot(turn: u32) -> CityStateSnapshot {
    CityStateSnapshot {
        turn,
        ..Default::default()
    }
}

fn population_objective(id: &str, target: f64) -> Objective {
    Objective::new(
        id,
        id,
        "",
        ObjectiveCategory::Population,
        ObjectiveGoal::Reach(CityMetric::Population),
        target,
    )
}

#[test]
fn test_population_objective_completes_with_reward() {
    let mut tracker = ObjectiveTracker::new(vec![population_objective("pop_250", 250.0)
        .rewards(1_000.0, 5.0, "First residents")]);

    let outcomes = tracker.update_objectives(&CityStateSnapshot {
        turn: 3,
        population: 250,
        ..Default::default()
    });

    assert_eq!(tracker.get("pop_250").unwrap().status, ObjectiveStatus::Completed);
    assert_eq!(
        outcomes,
        vec![ObjectiveOutcome::Completed {
            id: "pop_250".to_string(),
            title: "pop_250".to_string(),
            reward: ObjectiveReward::new(1_000.0, 5.0, "First residents"),
        }]
    );
    assert_eq!(tracker.completed_ids(), ["pop_250".to_string()]);
}

#[test]
fn test_grace_period_blocks_early_completion() {
    let mut tracker = ObjectiveTracker::default();
    let rich = CityStateSnapshot {
        population: 9_999,
        money: 5_000_000.0,
        satisfaction: 100.0,
        road_segment_count: 500,
        ..Default::default()
    };

    for turn in 0..2 {
        let outcomes = tracker.update_objectives(&CityStateSnapshot { turn, ..rich.clone() });
        assert!(outcomes.is_empty());
    }
    assert!(tracker.get_completed_objectives().is_empty());
    assert_eq!(
        tracker.get("first_population").unwrap().status,
        ObjectiveStatus::Active
    );
}

#[test]
fn test_prerequisites_unlock_dependents() {
    let mut tracker = ObjectiveTracker::new(vec![
        population_objective("small", 100.0),
        population_objective("large", 1_000.0).requires(&["small"]),
    ]);
    assert_eq!(tracker.get("large").unwrap().status, ObjectiveStatus::Locked);

    let big = CityStateSnapshot {
        turn: 2,
        population: 5_000,
        ..Default::default()
    };
    tracker.update_objectives(&big);
    // unlocked this turn, evaluated from the next one
    assert_eq!(tracker.get("small").unwrap().status, ObjectiveStatus::Completed);
    let large = tracker.get("large").unwrap();
    assert_eq!(large.status, ObjectiveStatus::Active);
    assert_eq!(large.activated_turn, Some(2));

    tracker.update_objectives(&CityStateSnapshot { turn: 3, ..big });
    assert_eq!(tracker.get("large").unwrap().status, ObjectiveStatus::Completed);
    assert_eq!(
        tracker.completed_ids(),
        ["small".to_string(), "large".to_string()]
    );
}

#[test]
fn test_locked_forever_when_prerequisite_fails() {
    let timed = Objective::new(
        "timed",
        "timed",
        "",
        ObjectiveCategory::Economy,
        ObjectiveGoal::Reach(CityMetric::Money),
        1_000_000.0,
    )
    .within(2);
    let mut tracker = ObjectiveTracker::new(vec![
        timed,
        population_objective("after", 1.0).requires(&["timed"]),
    ]);

    for turn in 2..10 {
        tracker.update_objectives(&snapshot(turn));
    }
    assert_eq!(tracker.get("timed").unwrap().status, ObjectiveStatus::Failed);
    assert_eq!(tracker.get("after").unwrap().status, ObjectiveStatus::Locked);
}

#[test]
fn test_time_limit_fails_after_completion_check() {
    let goal = ObjectiveGoal::Sustained {
        metric: CityMetric::Satisfaction,
        threshold: Threshold::AtLeast(75.0),
    };
    let make = || {
        Objective::new("streak", "Streak", "", ObjectiveCategory::Satisfaction, goal.clone(), 3.0)
            .within(3)
    };
    let happy = |turn| CityStateSnapshot {
        turn,
        satisfaction: 80.0,
        ..Default::default()
    };

    // three good turns inside a three-turn limit complete on the last one
    let mut tracker = ObjectiveTracker::new(vec![make()]);
    for turn in 2..5 {
        tracker.update_objectives(&happy(turn));
    }
    assert_eq!(tracker.get("streak").unwrap().status, ObjectiveStatus::Completed);

    // one miss resets the streak and the limit runs out
    let mut tracker = ObjectiveTracker::new(vec![make()]);
    tracker.update_objectives(&happy(2));
    tracker.update_objectives(&snapshot(3));
    assert_eq!(tracker.get("streak").unwrap().current_value, 0.0);
    assert_eq!(tracker.get("streak").unwrap().turns_remaining, Some(1));
    let outcomes = tracker.update_objectives(&happy(4));
    assert_eq!(
        outcomes,
        vec![ObjectiveOutcome::Failed {
            id: "streak".to_string(),
            title: "Streak".to_string(),
        }]
    );
    assert_eq!(tracker.get_failed_objectives().len(), 1);
}

#[test]
fn test_terminal_statuses_never_revert() {
    let mut tracker = ObjectiveTracker::default();
    let boom = CityStateSnapshot {
        turn: 2,
        population: 300,
        road_segment_count: 25,
        ..Default::default()
    };
    tracker.update_objectives(&boom);
    let completed: Vec<String> = tracker
        .get_completed_objectives()
        .iter()
        .map(|o| o.id.clone())
        .collect();
    assert!(completed.contains(&"first_population".to_string()));
    assert!(completed.contains(&"first_roads".to_string()));

    for turn in 3..30 {
        tracker.update_objectives(&snapshot(turn));
        for id in &completed {
            assert_eq!(tracker.get(id).unwrap().status, ObjectiveStatus::Completed);
        }
    }
}

#[test]
fn test_objective_progress_queries() {
    let mut tracker = ObjectiveTracker::new(vec![
        population_objective("pop", 1_000.0),
        population_objective("zero", 0.0).requires(&["pop"]),
    ]);
    tracker.update_objectives(&CityStateSnapshot {
        turn: 2,
        population: 250,
        ..Default::default()
    });
    assert_eq!(tracker.get_objective_progress("pop"), 0.25);
    assert_eq!(tracker.get_objective_progress("zero"), 1.0);
    assert_eq!(tracker.get_objective_progress("missing"), 0.0);
}

#[test]
fn test_objectives_summary() {
    let tracker = ObjectiveTracker::default();
    let summary = tracker.get_objectives_summary();
    assert_eq!(summary.total, 25);
    assert_eq!(summary.active, 5);
    assert_eq!(summary.locked, 20);
    assert_eq!(summary.completed, 0);
    assert_eq!(summary.completion_rate, 0.0);
}

#[test]
fn test_standard_catalogue_prerequisites_exist() {
    let objectives = standard_catalogue();
    for objective in &objectives {
        assert!(objective.goal.accepts_state(&objective.state));
        for prereq in &objective.prerequisites {
            assert!(
                objectives.iter().any(|o| &o.id == prereq),
                "{} requires missing {}",
                objective.id,
                prereq
            );
        }
    }
}

#[test]
fn test_save_roundtrip_preserves_streaks() {
    let mut tracker = ObjectiveTracker::default();
    for turn in 2..6 {
        tracker.update_objectives(&CityStateSnapshot {
            turn,
            population: 260,
            money: 500.0,
            ..Default::default()
        });
    }
    assert_eq!(
        tracker.get("crisis_survival").unwrap().state,
        GoalState::Streak(4)
    );

    let bytes = bitcode::encode(&tracker.to_save());
    let save: ObjectiveSave = bitcode::decode(&bytes).unwrap();
    let mut restored = ObjectiveTracker::default();
    restored.apply_save(&save);
    assert_eq!(restored, tracker);
}

#[test]
fn test_apply_save_skips_bad_records() {
    let save = ObjectiveSave {
        current_turn: 7,
        completed_order: Vec::new(),
        failed_order: Vec::new(),
        objectives: vec![
            ObjectiveRecord {
                id: "nonexistent".to_string(),
                status: ObjectiveStatus::Completed,
                current_value: 1.0,
                turns_remaining: None,
                activated_turn: Some(0),
                state: GoalState::Stateless,
            },
            ObjectiveRecord {
                id: "crisis_survival".to_string(),
                status: ObjectiveStatus::Active,
                current_value: 3.0,
                turns_remaining: None,
                activated_turn: Some(0),
                state: GoalState::Baseline(Some(1.0)),
            },
            ObjectiveRecord {
                id: "first_roads".to_string(),
                status: ObjectiveStatus::Completed,
                current_value: 20.0,
                turns_remaining: None,
                activated_turn: Some(0),
                state: GoalState::Stateless,
            },
        ],
    };
    let mut tracker = ObjectiveTracker::default();
    tracker.apply_save(&save);

    assert_eq!(tracker.current_turn(), 7);
    assert_eq!(
        tracker.get("crisis_survival").unwrap().state,
        GoalState::Streak(0)
    );
    assert_eq!(tracker.completed_ids(), ["first_roads".to_string()]);
}

#[test]
fn test_save_exports_as_json() {
    let tracker = ObjectiveTracker::default();
    let json = serde_json::to_string(&tracker.to_save()).unwrap();
    let back: ObjectiveSave = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tracker.to_save());
}

#[test]
fn test_first_services_counts_houses_without_per_type_cap() {
    let mut tracker = ObjectiveTracker::default();
    tracker.update_objectives(&snapshot(3).with_buildings("house", 17));

    let services = tracker.get("first_services").unwrap();
    assert_eq!(services.status, ObjectiveStatus::Completed);
    assert_eq!(services.current_value, 17.0);
}

#[test]
fn test_extreme_building_counts_do_not_panic() {
    let mut tracker = ObjectiveTracker::new(vec![
        Objective::new(
            "roads_and_schools",
            "Roads and Schools",
            "",
            ObjectiveCategory::Infrastructure,
            ObjectiveGoal::RoadsAndBuildings {
                building_types: vec!["school".to_string()],
            },
            100.0,
        ),
        Objective::new(
            "many_buildings",
            "Many Buildings",
            "",
            ObjectiveCategory::Buildings,
            ObjectiveGoal::Reach(CityMetric::TotalBuildings),
            100.0,
        ),
    ]);
    let mut city = snapshot(3)
        .with_buildings("school", 1)
        .with_buildings("house", u32::MAX);
    city.road_segment_count = u32::MAX;

    let outcomes = tracker.update_objectives(&city);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        tracker.get("many_buildings").unwrap().current_value,
        f64::from(u32::MAX)
    );
}
