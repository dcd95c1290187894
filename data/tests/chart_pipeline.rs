use club::EvaluationRecord;
use data::chart::layout::{self, SizeClass};
use data::chart::scene::Scene;
use data::chart::{catalog, date, hover, series};
use serde_json::json;

fn athlete_42_history() -> Vec<EvaluationRecord> {
    serde_json::from_value(json!([
        { "id": "ev-1", "athleteId": "42", "date": "10-01-2024",
          "metrics": { "controle": 4, "passe": 2 } },
        { "id": "ev-2", "athleteId": "42", "date": "2024-02-14",
          "metrics": { "controle": 3, "passe": 5 } },
        { "id": "ev-3", "athleteId": "42", "date": "20-03-2024",
          "metrics": { "controle": 5, "passe": 3 } }
    ]))
    .expect("fixture should deserialize")
}

#[test]
fn three_evaluation_history_aggregates_as_documented() {
    let mut records = athlete_42_history();
    date::sort_by_date(&mut records);

    let keys = catalog::discover(&records);
    assert_eq!(keys, ["controle", "passe"]);

    let mean = series::mean(&records, &keys);
    assert_eq!(mean.get("controle"), Some(4.0));
    assert_eq!(mean.get("passe"), Some(3.3));

    let second = records.iter().find(|r| r.id == "ev-2").unwrap();
    let selected = series::selected(second, &keys);
    assert_eq!(selected.get("controle"), Some(3.0));
    assert_eq!(selected.get("passe"), Some(5.0));
}

#[test]
fn full_pipeline_builds_a_hoverable_radar_scene() {
    let mut records = athlete_42_history();
    date::sort_by_date(&mut records);

    let layout = layout::resolve(800.0);
    let scene = Scene::build(&records, Some("ev-2"), &layout);

    let Scene::Radar(radar) = &scene else {
        panic!("two metric keys should produce a radar scene");
    };

    assert_eq!(radar.frame.axes.len(), 2);
    assert_eq!(radar.mean.len(), 2);

    let selected = radar.selected.as_ref().expect("ev-2 is highlighted");
    assert_eq!(selected.record_id, "ev-2");

    // Pointer exactly on a selected vertex: tooltip shows and activation
    // resolves back to the highlighted evaluation.
    let vertex = &selected.vertices[0];
    assert!(!scene.hover(vertex.x, vertex.y).is_idle());
    assert_eq!(scene.pressed(vertex.x, vertex.y), Some("ev-2"));
}

#[test]
fn mixed_date_formats_sort_into_one_timeline() {
    let mut records = athlete_42_history();
    date::sort_by_date(&mut records);

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["ev-1", "ev-2", "ev-3"]);
}

#[test]
fn hit_testing_respects_the_radar_threshold() {
    let mut records = athlete_42_history();
    date::sort_by_date(&mut records);

    let layout = layout::resolve(800.0);
    let scene = Scene::build(&records, None, &layout);
    let Scene::Radar(radar) = &scene else {
        panic!("expected radar scene");
    };

    let vertex = &radar.mean[0];
    let threshold = hover::show_threshold(data::chart::ChartMode::Radar);

    assert!(!scene.hover(vertex.x, vertex.y).is_idle());
    assert!(scene
        .hover(vertex.x + threshold + 1.0, vertex.y + threshold + 1.0)
        .is_idle());
}
