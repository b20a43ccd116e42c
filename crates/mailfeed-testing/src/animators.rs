use futures::future::{FutureExt, LocalBoxFuture};
use mailfeed_engine::Animation;
use mailfeed_runtime::Animator;
use mailfeed_types::MessageId;
use std::cell::RefCell;
use tokio::sync::Notify;

/// Completes immediately and remembers what it played
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    played: RefCell<Vec<(MessageId, Animation)>>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<(MessageId, Animation)> {
        self.played.borrow().clone()
    }
}

impl Animator for RecordingAnimator {
    fn play<'a>(&'a self, card: &'a MessageId, animation: Animation) -> LocalBoxFuture<'a, ()> {
        self.played.borrow_mut().push((card.clone(), animation));
        futures::future::ready(()).boxed_local()
    }
}

/// Holds every animation open until [`release`](Self::release) is called
#[derive(Debug, Default)]
pub struct GatedAnimator {
    gate: Notify,
    started: RefCell<Vec<(MessageId, Animation)>>,
}

impl GatedAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the completion signal for one pending (or the next) animation
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn started(&self) -> Vec<(MessageId, Animation)> {
        self.started.borrow().clone()
    }
}

impl Animator for GatedAnimator {
    fn play<'a>(&'a self, card: &'a MessageId, animation: Animation) -> LocalBoxFuture<'a, ()> {
        self.started.borrow_mut().push((card.clone(), animation));
        self.gate.notified().boxed_local()
    }
}
