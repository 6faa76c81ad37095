use lifehub_core::metrics::{finance::finance_totals, nutrition, study::progress_average};
use lifehub_core::model::{finance, meal, study};
use lifehub_core::Repository;
use serde_json::json;

#[test]
fn finance_totals_over_repository_state() {
    let mut repo = Repository::new();
    for (amount, kind) in [("500", "income"), ("200", "expense"), ("50", "expense")] {
        let fields = finance::validate(&json!({
            "description": "entry",
            "amount": amount,
            "category": "general",
            "kind": kind,
            "date": "2024-01-01",
        }))
        .unwrap();
        repo.finances.create(fields);
    }

    let totals = finance_totals(&repo.finances.list());
    assert_eq!(totals.income, 500.0);
    assert_eq!(totals.expense, 250.0);
    assert_eq!(totals.balance, 250.0);
    assert!(totals.invalid.is_empty());
}

#[test]
fn calorie_total_sums_stored_meals_including_defaults() {
    let mut repo = Repository::new();
    let payloads = [
        json!({ "name": "Oats", "calories": "350", "date": "2024-02-01", "mealSlot": "breakfast" }),
        json!({ "name": "Rice", "calories": 620, "date": "2024-02-01", "mealSlot": "lunch" }),
        json!({ "name": "Tea", "date": "2024-02-01", "mealSlot": "supper" }),
    ];
    for payload in &payloads {
        repo.meals.create(meal::validate(payload).unwrap());
    }

    assert_eq!(nutrition::calorie_total(&repo.meals.list()), 970.0);
}

#[test]
fn study_average_over_repository_state() {
    let mut repo = Repository::new();
    assert_eq!(progress_average(&repo.studies.list()), 0);

    for progress in [20, 60, 100] {
        let fields = study::validate(&json!({
            "title": "course",
            "category": "general",
            "progress": progress,
        }))
        .unwrap();
        repo.studies.create(fields);
    }

    assert_eq!(progress_average(&repo.studies.list()), 60);
}
