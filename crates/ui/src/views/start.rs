use dioxus::prelude::*;

#[component]
pub fn StartScreen(on_start: EventHandler<()>) -> Element {
    rsx! {
        section { class: "screen start-screen",
            h1 { "Times Tables" }
            p { class: "start-hint",
                "Tap the card to see the answer. Swipe left if you got it, right to see it again."
            }
            button {
                id: "start-button",
                class: "btn btn-primary",
                onclick: move |_| on_start.call(()),
                "Start"
            }
        }
    }
}
