use std::cell::Cell;
use std::future::Future;

use wayfarer_animation::AnimationClip;
use wayfarer_core::Result;

use crate::app::WorldEvent;
use crate::assets::AssetLoader;
use crate::scene::Actor;

/// Wraps a loader and reports every finished request as a
/// [`WorldEvent::LoadProgress`].
///
/// Requests are counted when they start, so `loaded` never exceeds `total`
/// and both reach the same value once everything in flight has finished.
pub struct ProgressLoader<'a, L> {
    inner: &'a L,
    events: flume::Sender<WorldEvent>,
    requested: Cell<usize>,
    finished: Cell<usize>,
}

impl<'a, L: AssetLoader> ProgressLoader<'a, L> {
    #[must_use]
    pub fn new(inner: &'a L, events: flume::Sender<WorldEvent>) -> Self {
        Self {
            inner,
            events,
            requested: Cell::new(0),
            finished: Cell::new(0),
        }
    }

    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    #[must_use]
    pub fn finished(&self) -> usize {
        self.finished.get()
    }

    async fn track<T>(&self, path: &str, request: impl Future<Output = Result<T>>) -> Result<T> {
        self.requested.set(self.requested.get() + 1);
        let result = request.await;
        self.finished.set(self.finished.get() + 1);

        if let Err(err) = &result {
            self.notify(WorldEvent::LoadFailed {
                path: path.to_string(),
                reason: err.to_string(),
            });
        }
        self.notify(WorldEvent::LoadProgress {
            path: path.to_string(),
            loaded: self.finished.get(),
            total: self.requested.get(),
        });
        log::debug!("Loaded {}/{}: {path}", self.finished.get(), self.requested.get());

        result
    }

    fn notify(&self, event: WorldEvent) {
        if self.events.send(event).is_err() {
            log::debug!("No listener for load progress");
        }
    }
}

impl<L: AssetLoader> AssetLoader for ProgressLoader<'_, L> {
    async fn load_clip(&self, path: &str) -> Result<AnimationClip> {
        self.track(path, self.inner.load_clip(path)).await
    }

    async fn load_model(&self, path: &str) -> Result<Actor> {
        self.track(path, self.inner.load_model(path)).await
    }
}
