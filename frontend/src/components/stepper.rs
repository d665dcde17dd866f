//! Stepper: numbered markers with connectors, driven by [`step_markers`].

use leptos::*;

use crate::step_markers;

#[component]
pub fn Stepper(
    #[prop(into)] current_step: Signal<usize>,
    steps: Vec<String>,
) -> impl IntoView {
    let markers = move || step_markers(current_step.get(), &steps);

    view! {
        <div class="stepper">
            {move || {
                markers()
                    .into_iter()
                    .map(|marker| {
                        let number = marker.number();
                        let connector = marker.connector.map(|c| view! {
                            <div class="stepSpacer" class:stepSpacerDone=c.done></div>
                        });
                        view! {
                            <div class="step">
                                <div class="stepNumber" class:currStepNumber=marker.reached>
                                    {number}
                                </div>
                                <div class="stepText" class:currStepText=marker.reached>
                                    {marker.label}
                                </div>
                            </div>
                            {connector}
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
