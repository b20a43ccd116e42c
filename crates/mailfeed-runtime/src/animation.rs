use futures::future::{FutureExt, LocalBoxFuture};
use mailfeed_engine::Animation;
use mailfeed_types::MessageId;
use std::time::Duration;

/// Plays a removal animation; the future resolves on the completion signal
pub trait Animator {
    fn play<'a>(&'a self, card: &'a MessageId, animation: Animation) -> LocalBoxFuture<'a, ()>;
}

/// Completes every animation at once
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {
    fn play<'a>(&'a self, _card: &'a MessageId, _animation: Animation) -> LocalBoxFuture<'a, ()> {
        futures::future::ready(()).boxed_local()
    }
}

/// Completes after a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct TimedAnimator {
    duration: Duration,
}

impl TimedAnimator {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Animator for TimedAnimator {
    fn play<'a>(&'a self, _card: &'a MessageId, _animation: Animation) -> LocalBoxFuture<'a, ()> {
        tokio::time::sleep(self.duration).boxed_local()
    }
}
