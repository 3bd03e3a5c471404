//! Typeface availability and fallback substitution
//!
//! Themes name their preferred families. When a family is not installed the
//! theme is still built, with the catalog's fallback family substituted.

use crate::tokens::TypographyTokens;
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use indexmap::IndexSet;
use vellum_paint::FontSpec;

/// Family used when nothing better is known
pub const FALLBACK_FAMILY: &str = "sans-serif";

/// Generic family names that always resolve
const GENERIC_FAMILIES: [&str; 4] = ["sans-serif", "serif", "monospace", "system-ui"];

fn is_generic(family: &str) -> bool {
    GENERIC_FAMILIES
        .iter()
        .any(|generic| generic.eq_ignore_ascii_case(family))
}

/// Source of typeface availability
pub trait FontCatalog {
    /// Whether `family` can be used as-is
    fn has_family(&self, family: &str) -> bool;

    /// Family substituted for unavailable ones
    fn fallback_family(&self) -> &str {
        FALLBACK_FAMILY
    }

    /// `font` if its family is available, otherwise the fallback family
    fn resolve(&self, font: &FontSpec) -> FontSpec {
        if self.has_family(&font.family) {
            return font.clone();
        }
        tracing::debug!(
            "Font family '{}' unavailable, substituting '{}'",
            font.family,
            self.fallback_family()
        );
        font.with_family(self.fallback_family())
    }

    /// Resolve every text role of `typography`
    fn resolve_typography(&self, typography: TypographyTokens) -> TypographyTokens {
        typography.map_fonts(|_, font| self.resolve(font))
    }
}

/// Installed system fonts, discovered with fontdb
pub struct SystemFonts {
    db: Database,
}

impl SystemFonts {
    /// Scan the system font directories
    pub fn load() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self { db }
    }

    /// Use an already populated database
    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }
}

impl FontCatalog for SystemFonts {
    fn has_family(&self, family: &str) -> bool {
        if is_generic(family) {
            return true;
        }
        let query = Query {
            families: &[Family::Name(family)],
            weight: Weight::NORMAL,
            style: Style::Normal,
            stretch: Stretch::Normal,
        };
        self.db.query(&query).is_some()
    }
}

impl std::fmt::Debug for SystemFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFonts")
            .field("faces", &self.db.len())
            .finish()
    }
}

/// A fixed list of available families
///
/// Matching is case-insensitive. Generic families are always available.
#[derive(Clone, Debug, Default)]
pub struct StaticFonts {
    families: IndexSet<String>,
    fallback: Option<String>,
}

impl StaticFonts {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            families: families
                .into_iter()
                .map(|family| family.as_ref().to_ascii_lowercase())
                .collect(),
            fallback: None,
        }
    }

    /// Only generic families are available
    pub fn generic() -> Self {
        Self::default()
    }

    pub fn with_fallback(mut self, family: impl Into<String>) -> Self {
        self.fallback = Some(family.into());
        self
    }
}

impl FontCatalog for StaticFonts {
    fn has_family(&self, family: &str) -> bool {
        is_generic(family) || self.families.contains(&family.to_ascii_lowercase())
    }

    fn fallback_family(&self) -> &str {
        self.fallback.as_deref().unwrap_or(FALLBACK_FAMILY)
    }
}
