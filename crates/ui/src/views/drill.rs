use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{CardFace, ResultsTable, StartScreen};
use crate::vm::{DrillIntent, DrillScreen, DrillVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn DrillView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| DrillVm::new(ctx.settings(), ctx.clock()));

    let dispatch_intent = use_callback(move |intent: DrillIntent| {
        vm.write().dispatch(intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DrillTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let screen = vm_guard.screen();
    let question = vm_guard.question_label().unwrap_or_default();
    let answer = vm_guard.answer_label();
    let revealed = answer.is_some();
    let answer = answer.unwrap_or_default();
    let progress_percent = vm_guard.progress_percent();
    let rows = vm_guard.report_rows().unwrap_or_default();
    drop(vm_guard);

    rsx! {
        div { class: "drill",
            match screen {
                DrillScreen::Start => rsx! {
                    StartScreen { on_start: move |()| dispatch_intent.call(DrillIntent::Start) }
                },
                DrillScreen::Card => rsx! {
                    section {
                        id: "game-screen",
                        class: "screen game-screen",
                        onpointerdown: move |evt: PointerEvent| {
                            vm.write().pointer_down(evt.data.client_coordinates().x);
                        },
                        onpointerup: move |evt: PointerEvent| {
                            let _ = vm.write().pointer_up(evt.data.client_coordinates().x);
                        },
                        onpointercancel: move |_| vm.write().pointer_cancel(),
                        CardFace { question, answer, revealed, progress_percent }
                    }
                },
                DrillScreen::Results => rsx! {
                    section { class: "screen results-screen",
                        h2 { "Results" }
                        ResultsTable { rows }
                        button {
                            id: "restart-button",
                            class: "btn btn-primary",
                            onclick: move |_| dispatch_intent.call(DrillIntent::Start),
                            "Start again"
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DrillTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DrillIntent>>>>,
    vm: Rc<RefCell<Option<Signal<DrillVm>>>>,
}

#[cfg(test)]
impl DrillTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<DrillIntent>, vm: Signal<DrillVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<DrillIntent> {
        (*self.dispatch.borrow()).expect("drill dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<DrillVm> {
        (*self.vm.borrow()).expect("drill vm registered")
    }
}
