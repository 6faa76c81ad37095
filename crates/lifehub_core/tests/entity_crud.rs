use lifehub_core::model::{finance, profile, task, workout};
use lifehub_core::metrics::nutrition;
use lifehub_core::{NutritionProfile, Repository};
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

fn finance_payload(amount: &str, date: &str) -> serde_json::Value {
    json!({
        "description": "entry",
        "amount": amount,
        "category": "general",
        "kind": "expense",
        "date": date,
    })
}

#[test]
fn create_then_get_returns_input_fields_plus_fresh_id() {
    let mut repo = Repository::new();
    let fields = finance::validate(&finance_payload("120.50", "2024-05-01")).unwrap();

    let created = repo.finances.create(fields.clone());
    let loaded = repo.finances.get(created.id).expect("created record must be readable");

    assert_eq!(loaded, created);
    assert_eq!(loaded.amount, fields.amount);
    assert_eq!(loaded.date, fields.date);
    assert_ne!(loaded.id, Uuid::nil());
}

#[test]
fn ids_are_unique_within_a_collection() {
    let mut repo = Repository::new();
    let mut ids = HashSet::new();
    for _ in 0..50 {
        let fields = finance::validate(&finance_payload("1", "2024-01-01")).unwrap();
        ids.insert(repo.finances.create(fields).id);
    }
    assert_eq!(ids.len(), 50);
}

#[test]
fn update_replaces_the_whole_record_body() {
    let mut repo = Repository::new();
    let with_notes = workout::validate(&json!({
        "exercise": "Deadlift",
        "sets": 3,
        "reps": 5,
        "weight": "100kg",
        "date": "2024-05-01",
        "notes": "belt on",
    }))
    .unwrap();
    let created = repo.workouts.create(with_notes);
    assert_eq!(created.notes.as_deref(), Some("belt on"));

    // The update payload omits weight and notes; both revert to their
    // schema defaults instead of keeping prior values.
    let without_notes = workout::validate(&json!({
        "exercise": "Deadlift",
        "sets": 5,
        "reps": 3,
        "date": "2024-05-08",
    }))
    .unwrap();
    let updated = repo
        .workouts
        .update(created.id, without_notes)
        .expect("known id must update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.sets, 5);
    assert_eq!(updated.weight, None);
    assert_eq!(updated.notes, None);
}

#[test]
fn update_unknown_id_returns_none_and_leaves_the_collection() {
    let mut repo = Repository::new();
    let fields = task::validate(&json!({
        "title": "Pay rent",
        "date": "2024-04-01",
        "priority": "high",
    }))
    .unwrap();
    repo.tasks.create(fields.clone());

    let missing = repo.tasks.update(Uuid::new_v4(), fields);
    assert!(missing.is_none());
    assert_eq!(repo.tasks.len(), 1);
}

#[test]
fn delete_is_idempotent_in_effect() {
    let mut repo = Repository::new();
    let fields = task::validate(&json!({
        "title": "Water plants",
        "date": "2024-04-02",
        "priority": "low",
    }))
    .unwrap();
    let created = repo.tasks.create(fields);

    assert!(repo.tasks.delete(created.id));
    assert_eq!(repo.tasks.len(), 0);
    assert!(!repo.tasks.delete(created.id));
    assert_eq!(repo.tasks.len(), 0);
}

#[test]
fn list_reflects_creates_minus_deletes_with_unique_ids() {
    let mut repo = Repository::new();
    let mut created_ids = Vec::new();
    for day in 1..=6 {
        let fields =
            finance::validate(&finance_payload("10", &format!("2024-03-{day:02}"))).unwrap();
        created_ids.push(repo.finances.create(fields).id);
    }
    for id in created_ids.iter().take(2) {
        assert!(repo.finances.delete(*id));
    }

    let listed = repo.finances.list();
    assert_eq!(listed.len(), 4);
    let unique: HashSet<_> = listed.iter().map(|entry| entry.id).collect();
    assert_eq!(unique.len(), 4);
}

#[test]
fn nutrition_profile_slot_holds_at_most_one() {
    let mut repo = Repository::new();
    assert!(repo.nutrition_profile().is_none());

    let biometrics = profile::validate(&json!({
        "age": 25, "sex": "M", "weight": 70, "height": 175,
        "activityLevel": "moderate", "goal": "maintenance",
    }))
    .unwrap();
    let plan = nutrition::plan(&biometrics);
    repo.set_nutrition_profile(NutritionProfile::assemble(Uuid::new_v4(), biometrics, plan));
    assert_eq!(
        repo.nutrition_profile().map(|p| p.target_calories),
        Some(2594)
    );

    let replacement = profile::validate(&json!({
        "age": 25, "sex": "M", "weight": 70, "height": 175,
        "activityLevel": "moderate", "goal": "weight_loss",
    }))
    .unwrap();
    let plan = nutrition::plan(&replacement);
    repo.set_nutrition_profile(NutritionProfile::assemble(Uuid::new_v4(), replacement, plan));
    assert_eq!(
        repo.nutrition_profile().map(|p| p.target_calories),
        Some(2094)
    );
}
