//! Wizard navigation with a fire-and-forget upload on forward moves.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::services::UploadGateway;
use crate::{AcquiredFile, AppResult, UploadNotice, WizardState};

/// Runs a detached task. In the browser this is `spawn_local`.
pub type Dispatcher = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Receives the outcome of every dispatched upload.
pub type NoticeSink = Rc<dyn Fn(UploadNotice)>;

/// What a call to [`WizardController::advance`] or
/// [`WizardController::retreat`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepTransition {
    pub from: usize,
    pub to: usize,
    /// An upload task was handed to the dispatcher.
    pub upload_dispatched: bool,
}

impl StepTransition {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Owns the step position and dispatches uploads without waiting for them.
pub struct WizardController {
    state: WizardState,
    gateway: Rc<dyn UploadGateway>,
    dispatch: Dispatcher,
    on_notice: Option<NoticeSink>,
}

impl WizardController {
    pub fn new<I, S>(
        steps: I,
        gateway: Rc<dyn UploadGateway>,
        dispatch: Dispatcher,
    ) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            state: WizardState::new(steps)?,
            gateway,
            dispatch,
            on_notice: None,
        })
    }

    /// Deliver upload outcomes to `sink` once they settle.
    pub fn with_notice_sink(mut self, sink: NoticeSink) -> Self {
        self.on_notice = Some(sink);
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    /// Step forward. With a file present, its upload is dispatched first but
    /// never awaited; the step changes whatever the upload does.
    pub fn advance(&mut self, file: Option<&AcquiredFile>) -> StepTransition {
        let from = self.state.current_step();
        if self.state.is_last() {
            return StepTransition {
                from,
                to: from,
                upload_dispatched: false,
            };
        }

        let upload_dispatched = match file {
            Some(file) => {
                self.dispatch_upload(file.clone());
                true
            }
            None => false,
        };

        self.state.advance();
        StepTransition {
            from,
            to: self.state.current_step(),
            upload_dispatched,
        }
    }

    pub fn retreat(&mut self) -> StepTransition {
        let from = self.state.current_step();
        self.state.retreat();
        StepTransition {
            from,
            to: self.state.current_step(),
            upload_dispatched: false,
        }
    }

    fn dispatch_upload(&self, file: AcquiredFile) {
        let name = file.name.clone();
        let pending = self.gateway.submit(file);
        let on_notice = self.on_notice.clone();

        let task = async move {
            let result = pending.await;
            log::debug!("Upload of {} settled: ok={}", name, result.ok);
            if let Some(sink) = on_notice {
                sink(UploadNotice::new(name, result));
            }
        }
        .boxed_local();

        (self.dispatch)(task);
    }
}
