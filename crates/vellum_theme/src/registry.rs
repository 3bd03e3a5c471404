//! Active-theme registry
//!
//! The registry owns the catalog of named themes, the active theme and the
//! change listeners. It is a plain value passed to whoever needs it; the
//! interior `RefCell`s make it `!Sync`, so all access happens on the UI
//! thread.
//!
//! Listeners run after the active theme has been swapped, with no internal
//! borrows held. A listener may read [`ThemeRegistry::current`], subscribe,
//! unsubscribe or activate another theme. A nested activation supersedes the
//! outer one: listeners not yet notified of the outer switch only hear about
//! the newer theme.

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::fonts::{FontCatalog, SystemFonts};
use crate::theme::ThemeRef;
use crate::themes::{BuiltinTheme, EmergencyTheme};
use indexmap::IndexMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

new_key_type! {
    /// Handle returned by [`ThemeRegistry::subscribe`]
    pub struct ListenerId;
}

type Listener = Rc<dyn Fn(&ThemeRegistry, &ThemeRef)>;

fn same_theme(a: &ThemeRef, b: &ThemeRef) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// Catalog of named themes with exactly one active theme
pub struct ThemeRegistry {
    themes: RefCell<IndexMap<String, ThemeRef>>,
    active: RefCell<ThemeRef>,
    listeners: RefCell<SlotMap<ListenerId, Listener>>,
    /// Incremented on every switch
    generation: Cell<u64>,
}

impl ThemeRegistry {
    /// Registry holding `initial`, which is also active
    pub fn new(initial: ThemeRef) -> Self {
        let mut themes = IndexMap::new();
        themes.insert(initial.name().to_string(), Rc::clone(&initial));
        Self {
            themes: RefCell::new(themes),
            active: RefCell::new(initial),
            listeners: RefCell::new(SlotMap::with_key()),
            generation: Cell::new(0),
        }
    }

    /// Registry whose initial theme comes from `build`
    ///
    /// If `build` fails the error is logged and the [`EmergencyTheme`]
    /// becomes the initial theme.
    pub fn with_fallback(build: impl FnOnce() -> Result<ThemeRef>) -> Self {
        let initial: ThemeRef = match build() {
            Ok(theme) => theme,
            Err(err) => {
                tracing::error!(
                    "Default theme failed to build, falling back to {}: {}",
                    EmergencyTheme::NAME,
                    err
                );
                Rc::new(EmergencyTheme::new())
            }
        };
        Self::new(initial)
    }

    /// Registry with every built-in theme, Corporate active
    pub fn with_fonts(fonts: &dyn FontCatalog) -> Self {
        let registry = Self::with_fallback(|| BuiltinTheme::Corporate.build(fonts));
        for builtin in BuiltinTheme::all() {
            if registry.contains(builtin.name()) {
                continue;
            }
            match builtin.build(fonts) {
                Ok(theme) => registry.register(theme),
                Err(err) => tracing::warn!("Skipping built-in theme {}: {}", builtin, err),
            }
        }
        registry
    }

    /// Registry with every built-in theme, resolving typefaces against the
    /// installed system fonts
    pub fn with_default() -> Self {
        Self::with_fonts(&SystemFonts::load())
    }

    // ========== Catalog ==========

    /// Insert or replace a theme under its name
    ///
    /// Replacing the active theme's entry makes the replacement active and
    /// notifies the listeners, so [`current`](Self::current) always names a
    /// registered theme.
    pub fn register(&self, theme: ThemeRef) {
        let name = theme.name().trim().to_string();
        if name.is_empty() {
            tracing::warn!("Ignoring theme registration with an empty name");
            return;
        }
        tracing::trace!("Registering theme {} ({})", name, theme.version());
        let replaces_active = self.active.borrow().name().trim() == name;
        self.themes.borrow_mut().insert(name, Rc::clone(&theme));
        if replaces_active {
            self.switch_to(theme);
        }
    }

    pub fn get(&self, name: &str) -> Option<ThemeRef> {
        self.themes.borrow().get(name.trim()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.borrow().contains_key(name.trim())
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.themes.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.themes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.borrow().is_empty()
    }

    /// Register every valid definition of `config`, then activate its default
    ///
    /// Broken definitions are skipped with a warning. Returns the number of
    /// themes registered.
    pub fn load_config(&self, config: &ThemeConfig, fonts: &dyn FontCatalog) -> usize {
        let mut loaded = 0;
        for (index, definition) in config.definitions().enumerate() {
            let theme = definition.and_then(|definition| definition.build(fonts));
            match theme {
                Ok(theme) => {
                    self.register(Rc::new(theme));
                    loaded += 1;
                }
                Err(err) => tracing::warn!("Skipping theme definition #{}: {}", index, err),
            }
        }

        if let Some(default) = &config.default {
            if !self.activate(default) {
                tracing::warn!("Configured default theme '{}' is not registered", default);
            }
        }
        loaded
    }

    // ========== Activation ==========

    /// The active theme
    pub fn current(&self) -> ThemeRef {
        Rc::clone(&self.active.borrow())
    }

    /// Make the theme registered as `name` active
    ///
    /// Returns false for empty or unknown names; nothing changes and no
    /// listener runs. Activating the already active theme returns true
    /// without notifying.
    pub fn activate(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Refusing to activate a theme with an empty name");
            return false;
        }
        let Some(theme) = self.get(name) else {
            tracing::debug!("Cannot activate unknown theme '{}'", name);
            return false;
        };
        self.switch_to(theme);
        true
    }

    /// Register `theme` and make it active
    pub fn activate_theme(&self, theme: ThemeRef) -> bool {
        if theme.name().trim().is_empty() {
            tracing::debug!("Refusing to activate a theme with an empty name");
            return false;
        }
        self.register(Rc::clone(&theme));
        self.switch_to(theme);
        true
    }

    fn switch_to(&self, theme: ThemeRef) {
        if same_theme(&self.active.borrow(), &theme) {
            return;
        }
        let previous = self.active.replace(Rc::clone(&theme));
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        tracing::debug!(
            "ThemeRegistry::activate - switching from {} to {}",
            previous.name(),
            theme.name()
        );
        self.notify(&theme, generation);
    }

    fn notify(&self, theme: &ThemeRef, generation: u64) {
        let snapshot: SmallVec<[(ListenerId, Listener); 4]> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (id, Rc::clone(listener)))
            .collect();

        for (id, listener) in snapshot {
            if self.generation.get() != generation {
                tracing::trace!("Theme switch to {} superseded", theme.name());
                return;
            }
            if !self.listeners.borrow().contains_key(id) {
                continue;
            }
            listener(self, theme);
        }
    }

    /// Number of successful switches so far
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    // ========== Listeners ==========

    /// Call `listener` after every switch of the active theme
    pub fn subscribe(&self, listener: impl Fn(&ThemeRegistry, &ThemeRef) + 'static) -> ListenerId {
        self.listeners.borrow_mut().insert(Rc::new(listener))
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.names())
            .field("active", &self.active.borrow().name())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
