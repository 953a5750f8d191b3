use dioxus::prelude::*;

/// Question, answer (once revealed) and the progress bar.
#[component]
pub fn CardFace(
    question: String,
    answer: String,
    revealed: bool,
    progress_percent: f64,
) -> Element {
    let width = format!("width: {progress_percent:.2}%;");

    rsx! {
        div { class: "progress-bar",
            div { class: "progress-bar__fill", style: "{width}" }
        }
        div { class: "card",
            div { id: "question", class: "card__question", "{question}" }
            if revealed {
                div { id: "answer", class: "card__answer", "{answer}" }
            }
        }
    }
}
