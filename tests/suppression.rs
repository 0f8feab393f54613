use detpost::{suppress, BBox, Detection};
use serde::Deserialize;

fn det(x: i32, y: i32, width: i32, height: i32, class_id: usize, confidence: f32) -> Detection {
    Detection {
        bbox: BBox::new(x, y, width, height),
        class_id,
        confidence,
    }
}

#[test]
fn heavy_overlap_keeps_only_the_strongest() {
    // IoU between the strips is exactly 0.7; with threshold 0.3 the trigger
    // is 1 - 0.3 = 0.7, and the trigger is inclusive.
    let mut candidates = vec![
        det(0, 0, 85, 10, 0, 0.9),
        det(15, 0, 85, 10, 0, 0.8),
    ];
    let kept = suppress(&mut candidates, 0.3);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].confidence, 0.9);
}

#[test]
fn light_overlap_keeps_both() {
    // IoU 0.1 stays below the 0.7 trigger.
    let mut candidates = vec![
        det(0, 0, 55, 10, 0, 0.9),
        det(45, 0, 55, 10, 0, 0.8),
    ];
    let kept = suppress(&mut candidates, 0.3);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].confidence, 0.9);
    assert_eq!(kept[1].confidence, 0.8);
}

#[test]
fn suppression_ignores_class_boundaries() {
    // Same geometry as the heavy-overlap case but different classes: still
    // suppressed, since candidates compete frame-wide.
    let mut candidates = vec![
        det(0, 0, 85, 10, 2, 0.9),
        det(15, 0, 85, 10, 5, 0.8),
    ];
    let kept = suppress(&mut candidates, 0.3);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].class_id, 2);
}

#[test]
fn empty_input_yields_empty_output() {
    let kept = suppress(&mut [], 0.3);
    assert!(kept.is_empty());
}

#[test]
fn output_is_a_sorted_subset_of_the_input() {
    let input = vec![
        det(0, 0, 30, 30, 0, 0.55),
        det(100, 100, 30, 30, 1, 0.95),
        det(5, 5, 30, 30, 0, 0.85),
        det(200, 0, 30, 30, 2, 0.65),
        det(102, 102, 30, 30, 1, 0.75),
    ];
    let mut candidates = input.clone();
    let kept = suppress(&mut candidates, 0.3);

    assert!(!kept.is_empty());
    for d in kept.iter() {
        assert!(input.contains(d), "suppression invented {d:?}");
    }
    for pair in kept.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn rerunning_on_the_kept_set_changes_nothing() {
    let mut candidates = vec![
        det(0, 0, 40, 40, 0, 0.9),
        det(10, 10, 40, 40, 0, 0.8),
        det(100, 100, 40, 40, 1, 0.7),
        det(105, 105, 40, 40, 1, 0.6),
    ];
    let mut kept = suppress(&mut candidates, 0.4);
    let again = suppress(&mut kept, 0.4);
    assert_eq!(kept, again);
}

#[test]
fn equal_confidence_resolves_to_the_earlier_candidate() {
    // Fully overlapping boxes with tied confidence: the stable sort keeps
    // scan order, so the first row wins.
    let mut candidates = vec![
        det(0, 0, 40, 40, 3, 0.8),
        det(0, 0, 40, 40, 7, 0.8),
    ];
    let kept = suppress(&mut candidates, 0.3);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].class_id, 3);
}

#[test]
fn equal_confidence_without_overlap_keeps_scan_order() {
    let mut candidates = vec![
        det(0, 0, 20, 20, 1, 0.8),
        det(500, 500, 20, 20, 2, 0.8),
    ];
    let kept = suppress(&mut candidates, 0.3);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].class_id, 1);
    assert_eq!(kept[1].class_id, 2);
}

#[test]
fn degenerate_boxes_neither_suppress_nor_get_suppressed() {
    // A zero-area candidate sits inside a stronger box: overlap never
    // triggers for it, so it survives on confidence rank alone.
    let mut candidates = vec![
        det(0, 0, 100, 100, 0, 0.9),
        det(50, 50, 0, 0, 0, 0.6),
    ];
    let kept = suppress(&mut candidates, 0.3);
    assert_eq!(kept.len(), 2);

    // And a stronger zero-area candidate shields nothing beneath it.
    let mut candidates = vec![
        det(50, 50, 0, 0, 0, 0.95),
        det(0, 0, 100, 100, 0, 0.6),
    ];
    let kept = suppress(&mut candidates, 0.3);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].bbox.area(), 0);
}

#[derive(Debug, Deserialize)]
struct BoxCase {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    confidence: f32,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    suppression_threshold: f32,
    boxes: Vec<BoxCase>,
    expect_kept: Vec<usize>,
}

/// Table-driven scenarios: `expect_kept` lists input indices in output order.
#[test]
fn scenario_table_matches_expected_kept_sets() {
    let text = r#"[
        {
            "name": "chain of overlaps collapses to the strongest",
            "suppression_threshold": 0.5,
            "boxes": [
                {"x": 0, "y": 0, "width": 50, "height": 50, "confidence": 0.6},
                {"x": 5, "y": 5, "width": 50, "height": 50, "confidence": 0.9},
                {"x": 10, "y": 10, "width": 50, "height": 50, "confidence": 0.7}
            ],
            "expect_kept": [1]
        },
        {
            "name": "distant clusters are suppressed independently",
            "suppression_threshold": 0.5,
            "boxes": [
                {"x": 0, "y": 0, "width": 50, "height": 50, "confidence": 0.6},
                {"x": 5, "y": 5, "width": 50, "height": 50, "confidence": 0.9},
                {"x": 500, "y": 500, "width": 50, "height": 50, "confidence": 0.8},
                {"x": 505, "y": 505, "width": 50, "height": 50, "confidence": 0.4}
            ],
            "expect_kept": [1, 2]
        },
        {
            "name": "tight threshold keeps moderate overlaps",
            "suppression_threshold": 0.05,
            "boxes": [
                {"x": 0, "y": 0, "width": 50, "height": 50, "confidence": 0.9},
                {"x": 25, "y": 0, "width": 50, "height": 50, "confidence": 0.8}
            ],
            "expect_kept": [0, 1]
        }
    ]"#;

    let scenarios: Vec<Scenario> = serde_json::from_str(text).unwrap();
    for scenario in scenarios {
        let input: Vec<Detection> = scenario
            .boxes
            .iter()
            .map(|b| det(b.x, b.y, b.width, b.height, 0, b.confidence))
            .collect();
        let mut candidates = input.clone();
        let kept = suppress(&mut candidates, scenario.suppression_threshold);
        let expected: Vec<Detection> = scenario
            .expect_kept
            .iter()
            .map(|&idx| input[idx])
            .collect();
        assert_eq!(kept, expected, "scenario failed: {}", scenario.name);
    }
}
