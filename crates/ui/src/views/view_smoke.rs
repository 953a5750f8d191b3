use dioxus::prelude::*;
use drill_core::SwipeDirection;

use super::test_harness::{DrillViewHarness, render_component};
use crate::views::{CardFace, ResultsTable};
use crate::vm::{DrillIntent, DrillScreen, ReportRowVm};

#[test]
fn drill_view_opens_on_start_screen() {
    let harness = DrillViewHarness::new(1);
    let html = harness.render();

    assert!(html.contains("start-button"), "missing start button in {html}");
    assert!(!html.contains("game-screen"), "card shown too early in {html}");
}

#[test]
fn start_shows_question_with_hidden_answer() {
    let mut harness = DrillViewHarness::new(2);
    harness.dispatch(DrillIntent::Start);

    let question = harness
        .with_vm(|vm| vm.question_label())
        .expect("card in play");
    let html = harness.render();

    assert!(html.contains(&question), "missing {question} in {html}");
    assert!(!html.contains("card__answer"), "answer visible in {html}");
}

#[test]
fn reveal_then_swipe_moves_to_next_card() {
    let mut harness = DrillViewHarness::new(3);
    harness.dispatch(DrillIntent::Start);
    harness.dispatch(DrillIntent::Reveal);

    let answer = harness.with_vm(|vm| vm.answer_label()).expect("revealed");
    let html = harness.render();
    assert!(html.contains("card__answer"), "answer hidden in {html}");
    assert!(html.contains(&answer), "missing {answer} in {html}");

    harness.dispatch(DrillIntent::Grade(SwipeDirection::Left));
    let graded = harness.with_vm(|vm| vm.session().map(|s| s.total_graded()));
    assert_eq!(graded, Some(1));
    assert!(!harness.render().contains("card__answer"));
}

#[test]
fn finished_drill_renders_results_table() {
    let mut harness = DrillViewHarness::new(4);
    harness.dispatch(DrillIntent::Start);
    harness.with_vm(|vm| {
        while vm.screen() == DrillScreen::Card {
            vm.dispatch(DrillIntent::Reveal);
            vm.dispatch(DrillIntent::Grade(SwipeDirection::Left));
        }
    });

    let html = harness.render();
    assert!(html.contains("Total Cards Seen"), "missing results in {html}");
    assert!(html.contains("144"), "missing total in {html}");
    assert!(html.contains("restart-button"), "missing restart in {html}");
}

#[test]
fn card_face_progress_bar_tracks_percent() {
    #[allow(non_snake_case)]
    fn Face() -> Element {
        rsx! {
            CardFace {
                question: "3 x 4".to_string(),
                answer: "12".to_string(),
                revealed: false,
                progress_percent: 25.0,
            }
        }
    }

    let html = render_component(Face);
    assert!(html.contains("3 x 4"), "missing question in {html}");
    assert!(html.contains("width: 25.00%"), "missing progress in {html}");
    assert!(!html.contains("card__answer"), "answer visible in {html}");
}

#[test]
fn results_table_renders_not_available_accuracy() {
    #[allow(non_snake_case)]
    fn Results() -> Element {
        let rows = vec![
            ReportRowVm {
                label: "Total Cards Seen".to_string(),
                value: "0".to_string(),
            },
            ReportRowVm {
                label: "Accuracy (Correct Marks)".to_string(),
                value: "N/A".to_string(),
            },
        ];
        rsx! { ResultsTable { rows } }
    }

    let html = render_component(Results);
    assert!(html.contains("Accuracy (Correct Marks)"), "missing label in {html}");
    assert!(html.contains("N/A"), "missing N/A in {html}");
}
