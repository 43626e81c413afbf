//! Theme preference store
//!
//! This module provides reactive tracking of the user's theme selection
//! and the resolved scheme actually applied to rendering, including
//! persistence across restarts and cross-component synchronization.

use std::sync::Arc;
use tokio::sync::{broadcast, watch, RwLock};

use app_platform::{PlatformScheme, SchemeSource};
use storage::{
    AppPersistedState, ColorScheme, PersistedState, PersistenceConfig, PersistenceError,
};

/// Theme store errors
#[derive(Debug, thiserror::Error)]
pub enum ThemeStoreError {
    /// Persistence error
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type for theme store operations
pub type Result<T> = std::result::Result<T, ThemeStoreError>;

/// Scheme actually applied to rendering
///
/// Unlike [`ColorScheme`], this is always resolved: a `System` selection
/// has already been mapped through the platform-reported scheme, and an
/// unreportable platform resolves to `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveScheme {
    /// Light rendering scheme
    #[default]
    Light,
    /// Dark rendering scheme
    Dark,
}

impl EffectiveScheme {
    /// Whether this is the dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, EffectiveScheme::Dark)
    }

    /// The other scheme
    pub fn opposite(&self) -> EffectiveScheme {
        match self {
            EffectiveScheme::Light => EffectiveScheme::Dark,
            EffectiveScheme::Dark => EffectiveScheme::Light,
        }
    }

    /// The explicit selection that pins this scheme
    pub fn as_selection(&self) -> ColorScheme {
        match self {
            EffectiveScheme::Light => ColorScheme::Light,
            EffectiveScheme::Dark => ColorScheme::Dark,
        }
    }
}

impl From<PlatformScheme> for EffectiveScheme {
    fn from(scheme: PlatformScheme) -> Self {
        match scheme {
            PlatformScheme::Light => EffectiveScheme::Light,
            PlatformScheme::Dark => EffectiveScheme::Dark,
        }
    }
}

impl std::fmt::Display for EffectiveScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectiveScheme::Light => write!(f, "light"),
            EffectiveScheme::Dark => write!(f, "dark"),
        }
    }
}

/// Events broadcast when theme state changes
#[derive(Debug, Clone)]
pub enum ThemeEvent {
    /// The user selection changed
    SelectionChanged(ColorScheme),
    /// The resolved scheme changed
    ResolvedChanged(EffectiveScheme),
}

/// Internal store state
#[derive(Debug, Clone, Copy)]
struct ThemeState {
    /// Current user selection
    selection: ColorScheme,
    /// Resolved scheme applied to rendering
    effective: EffectiveScheme,
}

/// Reactive theme preference store
///
/// The store is the single owner of the theme selection. Views read a
/// snapshot, subscribe for changes, and request mutations; nothing else
/// writes the selection. Mutations are serialized by the internal write
/// lock and propagate to every subscriber at send time.
///
/// Dropping a receiver returned by the `subscribe_*` methods is the
/// subscription cleanup; there is nothing else to unhook.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use app_platform::{FixedSchemeSource, PlatformScheme};
/// use app_state::{ColorScheme, EffectiveScheme, ThemeStore};
///
/// #[tokio::main]
/// async fn main() {
///     let source = Arc::new(FixedSchemeSource::new(PlatformScheme::Dark));
///     let store = ThemeStore::new(source);
///
///     // System selection resolves through the platform
///     assert_eq!(store.effective_scheme().await, EffectiveScheme::Dark);
///
///     store.set_color_scheme(ColorScheme::Light).await.unwrap();
///     assert_eq!(store.effective_scheme().await, EffectiveScheme::Light);
/// }
/// ```
pub struct ThemeStore {
    /// Internal state
    state: Arc<RwLock<ThemeState>>,
    /// Selection sender
    selection_tx: watch::Sender<ColorScheme>,
    /// Resolved scheme sender
    effective_tx: watch::Sender<EffectiveScheme>,
    /// Event broadcaster
    events_tx: broadcast::Sender<ThemeEvent>,
    /// Platform scheme source
    source: Arc<dyn SchemeSource>,
    /// Backing state file, when persistent
    persisted: Option<PersistedState<AppPersistedState>>,
}

impl ThemeStore {
    /// Create an in-memory store with the default `System` selection
    pub fn new(source: Arc<dyn SchemeSource>) -> Self {
        Self::with_selection(source, ColorScheme::System, None)
    }

    /// Create a store restoring its selection from disk
    ///
    /// A missing state file starts from defaults; an unreadable one is
    /// logged and replaced rather than surfaced to the user.
    pub async fn load(config: PersistenceConfig, source: Arc<dyn SchemeSource>) -> Result<Self> {
        let persisted: PersistedState<AppPersistedState> = PersistedState::new(config);

        let selection = match persisted.init().await {
            Ok(()) => persisted.get().await?.color_scheme,
            Err(e) => {
                tracing::warn!(error = %e, "theme state unreadable, falling back to defaults");
                persisted.set(AppPersistedState::default()).await?;
                ColorScheme::System
            }
        };

        Ok(Self::with_selection(source, selection, Some(persisted)))
    }

    fn with_selection(
        source: Arc<dyn SchemeSource>,
        selection: ColorScheme,
        persisted: Option<PersistedState<AppPersistedState>>,
    ) -> Self {
        let effective = resolve(source.as_ref(), selection);
        let (selection_tx, _) = watch::channel(selection);
        let (effective_tx, _) = watch::channel(effective);
        let (events_tx, _) = broadcast::channel(16);

        ThemeStore {
            state: Arc::new(RwLock::new(ThemeState { selection, effective })),
            selection_tx,
            effective_tx,
            events_tx,
            source,
            persisted,
        }
    }

    /// Get the current user selection
    pub async fn color_scheme(&self) -> ColorScheme {
        self.state.read().await.selection
    }

    /// Get the resolved scheme applied to rendering
    pub async fn effective_scheme(&self) -> EffectiveScheme {
        self.state.read().await.effective
    }

    /// Whether the resolved scheme is dark
    pub async fn is_dark(&self) -> bool {
        self.effective_scheme().await.is_dark()
    }

    /// Set the user selection
    ///
    /// This is the only mutation. Setting the current value is a no-op and
    /// notifies nobody. On change, subscribers are notified before the
    /// write-through to disk completes.
    pub async fn set_color_scheme(&self, selection: ColorScheme) -> Result<()> {
        let mut state = self.state.write().await;

        if state.selection == selection {
            return Ok(());
        }

        let effective = resolve(self.source.as_ref(), selection);
        let effective_changed = state.effective != effective;
        state.selection = selection;
        state.effective = effective;
        drop(state);

        tracing::debug!(%selection, %effective, "color scheme changed");

        let _ = self.selection_tx.send(selection);
        let _ = self.events_tx.send(ThemeEvent::SelectionChanged(selection));
        if effective_changed {
            let _ = self.effective_tx.send(effective);
            let _ = self.events_tx.send(ThemeEvent::ResolvedChanged(effective));
        }

        if let Some(persisted) = &self.persisted {
            persisted.update(|s| s.color_scheme = selection).await?;
        }

        Ok(())
    }

    /// Flip the resolved scheme to its opposite explicit selection
    ///
    /// Used by the binary toggle widgets: from a `System` selection this
    /// pins whichever scheme is currently *not* showing, never `System`.
    pub async fn toggle_effective(&self) -> Result<ColorScheme> {
        let target = self.effective_scheme().await.opposite().as_selection();
        self.set_color_scheme(target).await?;
        Ok(target)
    }

    /// Re-resolve a `System` selection after the platform scheme changed
    ///
    /// The host calls this when the OS reports an appearance change. The
    /// selection itself is untouched, so nothing is persisted.
    pub async fn refresh_platform_scheme(&self) {
        let mut state = self.state.write().await;

        let effective = resolve(self.source.as_ref(), state.selection);
        if state.effective == effective {
            return;
        }

        state.effective = effective;
        drop(state);

        tracing::debug!(%effective, "platform scheme changed");

        let _ = self.effective_tx.send(effective);
        let _ = self.events_tx.send(ThemeEvent::ResolvedChanged(effective));
    }

    /// Subscribe to selection changes
    pub fn subscribe_selection(&self) -> watch::Receiver<ColorScheme> {
        self.selection_tx.subscribe()
    }

    /// Subscribe to resolved scheme changes
    pub fn subscribe_effective(&self) -> watch::Receiver<EffectiveScheme> {
        self.effective_tx.subscribe()
    }

    /// Subscribe to all theme events
    pub fn subscribe_events(&self) -> broadcast::Receiver<ThemeEvent> {
        self.events_tx.subscribe()
    }
}

/// Resolve a selection to the scheme applied to rendering
///
/// `System` defers to the platform; a platform that cannot report defaults
/// to light.
fn resolve(source: &dyn SchemeSource, selection: ColorScheme) -> EffectiveScheme {
    match selection {
        ColorScheme::Light => EffectiveScheme::Light,
        ColorScheme::Dark => EffectiveScheme::Dark,
        ColorScheme::System => source
            .detect()
            .map(EffectiveScheme::from)
            .unwrap_or(EffectiveScheme::Light),
    }
}
