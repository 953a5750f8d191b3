use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use drill_core::time::fixed_clock;
use services::{Clock, DrillSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::DrillView;
use crate::views::drill::DrillTestHandles;
use crate::vm::{DrillIntent, DrillVm};

#[derive(Clone, Copy)]
struct TestApp {
    settings: DrillSettings,
}

impl UiApp for TestApp {
    fn settings(&self) -> DrillSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct DrillHarnessProps {
    app: Arc<TestApp>,
    handles: DrillTestHandles,
}

impl PartialEq for DrillHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn DrillHarness(props: DrillHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { DrillView {} }
}

pub struct DrillViewHarness {
    pub dom: VirtualDom,
    pub handles: DrillTestHandles,
}

impl DrillViewHarness {
    pub fn new(seed: u64) -> Self {
        let settings = DrillSettings::new(Some(seed), 50.0).expect("valid settings");
        let handles = DrillTestHandles::default();
        let mut dom = VirtualDom::new_with_props(
            DrillHarness,
            DrillHarnessProps {
                app: Arc::new(TestApp { settings }),
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, handles }
    }

    pub fn dispatch(&mut self, intent: DrillIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Run `f` against the view's state, then re-render.
    pub fn with_vm<R>(&mut self, f: impl FnOnce(&mut DrillVm) -> R) -> R {
        let mut vm = self.handles.vm();
        let result = self.dom.in_runtime(|| f(&mut vm.write()));
        drive_dom(&mut self.dom);
        result
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Render a props-free component to HTML.
pub fn render_component(component: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(component);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
