//! Step 0 panel: job links on the left, resume drop zone on the right.

use leptos::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::{
    AcquiredFile, Acquisition, AcquisitionSource, AppError, AppResult, FileAcquisition,
    JobLinkList, PDF_MIME,
};

/// The held file lives in the parent so it survives step changes; the job
/// links belong to this panel and start over each time it mounts.
#[component]
pub fn JobsResumeInfo(acquisition: RwSignal<FileAcquisition>) -> impl IntoView {
    let job_links = create_rw_signal(JobLinkList::new());
    let (hint, set_hint) = create_signal(None::<String>);

    // Shared by drop and picker: check the type first, then read the bytes.
    let accept_file = move |file: web_sys::File, source: AcquisitionSource| {
        if let Err(reason) = FileAcquisition::accepts(&file.type_()) {
            set_hint.set(Some(reason.hint()));
            return;
        }
        spawn_local(async move {
            match read_file(&file).await {
                Ok(acquired) => {
                    // The wizard itself may be gone by the time the read finishes.
                    let Some(outcome) = acquisition.try_update(|a| a.receive(acquired, source)) else {
                        return;
                    };
                    set_hint.set(match outcome {
                        Acquisition::Accepted => None,
                        Acquisition::Rejected(reason) => Some(reason.hint()),
                    });
                }
                Err(e) => {
                    log::error!("❌ {}", e);
                    set_hint.set(Some("Could not read the selected file".to_string()));
                }
            }
        });
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        acquisition.update(FileAcquisition::drag_over);
    };

    let on_drag_leave = move |_: DragEvent| {
        acquisition.update(FileAcquisition::drag_leave);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        acquisition.update(FileAcquisition::drag_leave);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file, AcquisitionSource::Drop);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file, AcquisitionSource::Picker);
        }
    };

    let entry_count = move || job_links.with(|links| links.len());

    view! {
        <div class="jobs-resume-info">
            <div class="jobs-column">
                <h2>"Jobs"</h2>
                <div class="job-links">
                    <For
                        each=move || 0..entry_count()
                        key=|index| *index
                        children=move |index| {
                            let value = move || {
                                job_links.with(|links| links.entries().get(index).cloned().unwrap_or_default())
                            };
                            view! {
                                <div class="job-link">
                                    <input
                                        type="text"
                                        placeholder="Paste job link"
                                        prop:value=value
                                        on:input=move |ev| {
                                            let text = event_target_value(&ev);
                                            job_links.update(|links| {
                                                links.set_entry(index, text);
                                            });
                                        }
                                    />
                                    <button
                                        class="round-button"
                                        on:click=move |_| job_links.update(|links| {
                                            links.remove_entry(index);
                                        })
                                    >
                                        "-"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
                <div class="job-links-actions">
                    <button class="round-button" on:click=move |_| job_links.update(JobLinkList::add_entry)>
                        "+"
                    </button>
                </div>
            </div>

            <div class="column-divider"></div>

            <div class="resume-column">
                <h2>"Resume"</h2>
                <div
                    class="drop-zone"
                    class:drag-active=move || acquisition.with(|a| a.drag_active())
                    on:dragenter=on_drag_over
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    {move || acquisition.with(|a| {
                        a.held()
                            .map(|file| file.name.clone())
                            .unwrap_or_else(|| "drag the PDF file here".to_string())
                    })}
                </div>
                <Show when=move || hint.get().is_some() fallback=|| view! {}>
                    <div class="upload-hint">{move || hint.get().unwrap_or_default()}</div>
                </Show>
                <input
                    type="file"
                    accept=PDF_MIME
                    id="fileUpload"
                    style="display:none"
                    on:change=on_file_change
                />
                <label for="fileUpload" class="upload-button">"Select file"</label>
            </div>
        </div>
    }
}

/// Read a browser `File` into memory.
async fn read_file(file: &web_sys::File) -> AppResult<AcquiredFile> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::Upload(format!("Failed to read {}: {:?}", file.name(), e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(AcquiredFile::new(file.name(), file.type_(), bytes))
}
