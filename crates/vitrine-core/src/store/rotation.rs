// ── Rotation store ──
//
// Owns the state watch channel and the three collaborator ports, and
// implements the synchronization routines. Failure policy: only `advance`
// surfaces an error to its caller; everything else logs and degrades to
// whatever is already cached.
//
// Image preloads are strictly sequential, within a property and across
// properties. Display devices sit on constrained links, and a deterministic
// failure point makes "which image broke the refresh" a one-line answer.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::{Configuration, Property};
use crate::ports::{ContentCache, DirectoryService, ImagePreloader, CONFIG_KEY, PROPERTIES_KEY};
use crate::store::state::{apply, RotationEvent, RotationState};

/// The rotation state store.
///
/// State lives in a `watch` channel: every dispatch publishes a complete
/// new snapshot, so consumers never observe a half-applied transition.
pub struct RotationStore {
    state: watch::Sender<RotationState>,
    cache: Arc<dyn ContentCache>,
    directory: Arc<dyn DirectoryService>,
    preloader: Arc<dyn ImagePreloader>,
}

impl RotationStore {
    pub fn new(
        cache: Arc<dyn ContentCache>,
        directory: Arc<dyn DirectoryService>,
        preloader: Arc<dyn ImagePreloader>,
    ) -> Self {
        let (state, _) = watch::channel(RotationState::default());
        Self {
            state,
            cache,
            directory,
            preloader,
        }
    }

    /// The current state (cheap clone of the snapshot).
    pub fn snapshot(&self) -> RotationState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<RotationState> {
        self.state.subscribe()
    }

    /// Apply one event through the pure reducer and publish the new state.
    pub fn dispatch(&self, event: RotationEvent) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.state.send_modify(|state| *state = apply(state, event));
    }

    // ── Synchronization routines ─────────────────────────────────────

    /// Synchronize the display configuration with the directory service.
    ///
    /// The identifiers are dispatched immediately so they are visible
    /// before the network call resolves. On success the merged
    /// configuration (remote fields win) is dispatched and persisted under
    /// `"config"`; a persistence failure is logged, not surfaced, but this
    /// routine does not return until the write has settled. On fetch
    /// failure the cached configuration, if any, is dispatched instead.
    pub async fn synchronize_configuration(
        &self,
        branch_id: Option<u64>,
        tv_id: Option<String>,
    ) {
        self.dispatch(RotationEvent::SetConfiguration(Configuration::identifiers(
            branch_id,
            tv_id.clone(),
        )));

        match self
            .directory
            .get_configuration(branch_id, tv_id.as_deref())
            .await
        {
            Ok(remote) => {
                let merged = Configuration::identifiers(branch_id, tv_id).merge(remote);
                self.dispatch(RotationEvent::SetConfiguration(merged.clone()));
                self.persist(CONFIG_KEY, &merged).await;
            }
            Err(e) => {
                warn!(error = %e, "configuration fetch failed, falling back to cache");
                if let Some(cached) = self.read_cached::<Configuration>(CONFIG_KEY).await {
                    self.dispatch(RotationEvent::SetConfiguration(cached));
                }
            }
        }
    }

    /// Advance the rotation to the next property, wrapping after the last.
    ///
    /// Every image of the next property is preloaded before the display
    /// moves, strictly in sequence. If any preload fails the error
    /// propagates and the state is left at its pre-advance value.
    pub async fn advance(&self) -> Result<(), CoreError> {
        let (current, properties) = {
            let state = self.state.borrow();
            (state.current, state.properties.clone())
        };

        if properties.is_empty() {
            return Err(CoreError::EmptyRotation);
        }

        let next = (current + 1) % properties.len();
        let next_property = properties[next].clone();

        self.preload_images(&next_property).await?;

        self.dispatch(RotationEvent::SetCurrent {
            current: next,
            current_property: next_property,
        });
        Ok(())
    }

    /// Surface the cached property list, if there is one.
    ///
    /// An absent or empty cache entry is a no-op. Otherwise the list is
    /// dispatched; if no property is currently shown the display is pointed
    /// at the first one; and the store is marked ready.
    pub async fn load_cached_properties(&self) {
        let Some(properties) = self.read_cached::<Vec<Property>>(PROPERTIES_KEY).await else {
            return;
        };
        if properties.is_empty() {
            return;
        }

        let needs_current = self.state.borrow().current_property.is_none();

        self.dispatch(RotationEvent::SetProperties(properties.clone()));
        if needs_current {
            self.dispatch(RotationEvent::SetCurrent {
                current: 0,
                current_property: properties[0].clone(),
            });
        }
        self.dispatch(RotationEvent::SetReady);
    }

    /// Refresh the property list from the directory service.
    ///
    /// Properties are processed strictly in order: each one's images are
    /// preloaded sequentially, then the accumulated list so far is
    /// persisted and surfaced through `load_cached_properties`, so progress
    /// is visible one property at a time. On the first failure the refresh
    /// is abandoned, the error logged, and the cache surfaced once more so
    /// the display keeps whatever it already had.
    pub async fn refresh_properties(&self) {
        let (branch_id, tv_id) = {
            let state = self.state.borrow();
            (state.branch_id, state.tv_id.clone())
        };

        let properties = match self
            .directory
            .get_properties(branch_id, tv_id.as_deref())
            .await
        {
            Ok(properties) => properties,
            Err(e) => {
                warn!(error = %e, "property fetch failed, serving cached list");
                self.load_cached_properties().await;
                return;
            }
        };

        debug!(count = properties.len(), "refreshing property list");

        let mut loaded: Vec<Property> = Vec::with_capacity(properties.len());
        for property in properties {
            if let Err(e) = self.preload_images(&property).await {
                warn!(error = %e, "image preload failed, abandoning refresh");
                self.load_cached_properties().await;
                return;
            }

            loaded.push(property);
            self.persist(PROPERTIES_KEY, &loaded).await;
            self.load_cached_properties().await;
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Preload every image of `property`, one at a time, in order.
    async fn preload_images(&self, property: &Property) -> Result<(), CoreError> {
        for image in &property.images {
            self.preloader.preload(image).await?;
        }
        Ok(())
    }

    /// Serialize and persist a value, logging (not surfacing) failures.
    async fn persist<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                if let Err(e) = self.cache.set(key, &json).await {
                    warn!(key, error = %e, "cache write failed");
                }
            }
            Err(e) => warn!(key, error = %e, "cache serialization failed"),
        }
    }

    /// Read and decode a cached value. Absent, unreadable, or malformed
    /// entries all come back as `None` -- a stale cache must never take the
    /// display down.
    async fn read_cached<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.cache.get(key).await {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(key, error = %e, "cache entry malformed, ignoring");
                None
            }
        }
    }
}
