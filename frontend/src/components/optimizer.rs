//! The optimizer page: stepper, the active step's panel, Back/Next buttons.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::services::{HttpUploadGateway, UploadGateway};
use crate::{
    Dispatcher, FileAcquisition, JobsResumeInfo, Stepper, UploadConfig,
    UploadNotice, WizardController, NOTICE_TIMEOUT_MS, WIZARD_STEPS,
};

#[component]
pub fn Optimizer() -> impl IntoView {
    let gateway: Rc<dyn UploadGateway> = Rc::new(HttpUploadGateway::new(UploadConfig::from_build_env()));
    let steps: Vec<String> = WIZARD_STEPS.iter().map(|s| s.to_string()).collect();

    view! { <Wizard steps=steps gateway=gateway/> }
}

/// Wizard shell. All navigation rules live in [`WizardController`]; this
/// component only renders its state and forwards clicks.
#[component]
pub fn Wizard(steps: Vec<String>, gateway: Rc<dyn UploadGateway>) -> impl IntoView {
    let acquisition = create_rw_signal(FileAcquisition::new());
    let (notice, set_notice) = create_signal(None::<UploadNotice>);

    let dispatch: Dispatcher = Rc::new(|task: LocalBoxFuture<'static, ()>| spawn_local(task));
    let show_notice = move |shown: UploadNotice| {
        set_notice.set(Some(shown.clone()));
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            // Only dismiss if no newer notice replaced it.
            set_notice.update(|current| {
                if current.as_ref().map(|n| n.seq) == Some(shown.seq) {
                    *current = None;
                }
            });
        });
    };

    let controller = match WizardController::new(steps.clone(), gateway, dispatch) {
        Ok(controller) => controller.with_notice_sink(Rc::new(show_notice)),
        Err(e) => {
            log::error!("❌ {}", e);
            return view! { <div class="error-message">{e.to_string()}</div> }.into_view();
        }
    };
    let wizard = create_rw_signal(controller);

    let current_step = Signal::derive(move || wizard.with(|w| w.current_step()));
    let is_first = move || wizard.with(|w| w.state().is_first());
    let is_last = move || wizard.with(|w| w.state().is_last());

    let on_back = move |_| {
        wizard.update(|w| {
            w.retreat();
        });
    };

    let on_next = move |_| {
        let file = acquisition.with_untracked(|a| a.held().cloned());
        wizard.update(|w| {
            let transition = w.advance(file.as_ref());
            if transition.moved() {
                log::info!("➡️  Step {} -> {}", transition.from, transition.to);
            }
        });
    };

    view! {
        <main class="optimizer">
            <Stepper current_step=current_step steps=steps/>

            <div class="step-panel">
                {move || match current_step.get() {
                    0 => view! { <JobsResumeInfo acquisition=acquisition/> }.into_view(),
                    1 => view! { <TemplateSelection/> }.into_view(),
                    _ => view! { <DownloadFile/> }.into_view(),
                }}
            </div>

            <div class="wizard-buttons">
                <button class="wizard-button" class:enabled=move || !is_first() on:click=on_back>
                    "Back"
                </button>
                <button class="wizard-button" class:enabled=move || !is_last() on:click=on_next>
                    "Next"
                </button>
            </div>

            <Show when=move || notice.get().is_some() fallback=|| view! {}>
                {move || notice.get().map(|n| view! {
                    <div class=n.css_class()>"[" {n.timestamp.clone()} "] " {n.message()}</div>
                })}
            </Show>
        </main>
    }
    .into_view()
}

#[component]
fn TemplateSelection() -> impl IntoView {
    view! {
        <div class="template-selection">
            <h2>"Template Selection"</h2>
            <p>"Pick the layout for your optimized resume."</p>
        </div>
    }
}

#[component]
fn DownloadFile() -> impl IntoView {
    view! {
        <div class="download-file">
            <h2>"Download file"</h2>
            <p>"Your optimized resume will be available here once processing finishes."</p>
        </div>
    }
}
