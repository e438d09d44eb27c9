//! Icon glyphs and the name-based resolver.
//!
//! Glyphs are stroke icons drawn on a 24x24 grid (Lucide outlines). Rust code
//! names icons through the [`Icon`] enum, which is checked at compile time.
//! Names that arrive as strings (template literals, catalog records) go
//! through [`IconResolver::resolve`]: kebab-case is turned into the canonical
//! identifier (`shopping-cart` -> `ShoppingCart`), looked up, and replaced by
//! the [`Icon::HelpCircle`] glyph when nothing matches.
//!
//! Resolved names are memoized for the life of the resolver. The cache is
//! unbounded because the set of names used by the page is small and static.

use askama::filters::{Html, escape};
use moka::sync::Cache;

/// A renderable icon: canonical identifier plus SVG child elements.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    pub name: &'static str,
    pub body: &'static str,
}

impl Glyph {
    /// Render as an inline `<svg>` element sized `size` pixels square.
    ///
    /// `class` is HTML-escaped; an empty class omits the attribute.
    #[must_use]
    pub fn to_svg(&self, size: u32, class: &str) -> String {
        let class_attr = if class.is_empty() {
            String::new()
        } else {
            match escape(class, Html) {
                Ok(class) => format!(r#" class="{class}""#),
                Err(never) => match never {},
            }
        };
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" data-icon="{name}"{class_attr}>{body}</svg>"#,
            name = self.name,
            body = self.body,
        )
    }
}

macro_rules! icons {
    ($($variant:ident => $body:expr,)+) => {
        /// Every glyph in the registry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $($variant,)+
        }

        impl Icon {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            #[must_use]
            pub fn glyph(self) -> &'static Glyph {
                match self {
                    $(Self::$variant => {
                        static GLYPH: Glyph = Glyph {
                            name: stringify!($variant),
                            body: $body,
                        };
                        &GLYPH
                    })+
                }
            }

            /// Look up by canonical identifier (`ShoppingCart`).
            ///
            /// An exact match wins; otherwise the identifier is compared
            /// ignoring ASCII case, so `SHOPPINGCART` still finds its glyph.
            #[must_use]
            pub fn from_canonical(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => Self::ALL
                        .iter()
                        .copied()
                        .find(|icon| icon.glyph().name.eq_ignore_ascii_case(name)),
                }
            }
        }
    };
}

icons! {
    Sun => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
    Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
    ShoppingCart => r#"<circle cx="8" cy="21" r="1"/><circle cx="19" cy="21" r="1"/><path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>"#,
    ShoppingBag => r#"<path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"/><path d="M3 6h18"/><path d="M16 10a4 4 0 0 1-8 0"/>"#,
    Star => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
    ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
    Menu => r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#,
    Flame => r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#,
    PlayCircle => r#"<circle cx="12" cy="12" r="10"/><polygon points="10 8 16 12 10 16 10 8"/>"#,
    Truck => r#"<path d="M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2"/><path d="M15 18H9"/><path d="M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14"/><circle cx="17" cy="18" r="2"/><circle cx="7" cy="18" r="2"/>"#,
    ShieldCheck => r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#,
    RefreshCw => r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#,
    ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
    Facebook => r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
    Instagram => r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
    Youtube => r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><path d="m10 15 5-3-5-3z"/>"#,
    Twitter => r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
    HelpCircle => r#"<circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#,
}

impl Icon {
    /// Glyph used for names that do not resolve.
    pub const FALLBACK: Self = Self::HelpCircle;
}

/// Turn a kebab-case icon name into its canonical identifier.
///
/// The first character of each `-`-separated segment is uppercased and the
/// rest is kept as written, so `play-circle`, `playCircle` and `PlayCircle`
/// all map to `PlayCircle`. Empty segments are dropped.
#[must_use]
pub fn canonical_name(name: &str) -> String {
    name.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Memoizing name-to-glyph resolver.
///
/// Cheap to clone; clones share one cache.
#[derive(Clone)]
pub struct IconResolver {
    cache: Cache<String, &'static Glyph>,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IconResolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }

    /// Resolve `name` to a glyph, never failing.
    ///
    /// Repeated calls with the same name return the same `&'static` reference
    /// without repeating the name transformation.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &'static Glyph {
        self.cache.get_with_by_ref(name, || lookup(name))
    }

    /// Resolve `name` and render it as inline SVG.
    ///
    /// Usage in templates: `{{ icons.svg("sun", 20, "icon-sun")|safe }}`
    #[must_use]
    pub fn svg(&self, name: &str, size: u32, class: &str) -> String {
        self.resolve(name).to_svg(size, class)
    }

    /// Number of distinct names resolved so far.
    #[must_use]
    pub fn cached_names(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

fn lookup(name: &str) -> &'static Glyph {
    let canonical = canonical_name(name);
    Icon::from_canonical(&canonical).map_or_else(
        || {
            tracing::debug!(icon = name, "Unknown icon, using fallback glyph");
            Icon::FALLBACK.glyph()
        },
        Icon::glyph,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("sun"), "Sun");
        assert_eq!(canonical_name("shopping-cart"), "ShoppingCart");
        assert_eq!(canonical_name("SHIELD-CHECK"), "SHIELDCHECK");
        assert_eq!(canonical_name("ShoppingCart"), "ShoppingCart");
        assert_eq!(canonical_name("playCircle"), "PlayCircle");
        assert_eq!(canonical_name("refresh--cw"), "RefreshCw");
        assert_eq!(canonical_name(""), "");
    }

    #[test]
    fn test_every_icon_resolves_by_kebab_name() {
        let resolver = IconResolver::new();
        for icon in Icon::ALL {
            let glyph = icon.glyph();
            let kebab = kebab_case(glyph.name);
            assert!(
                std::ptr::eq(resolver.resolve(&kebab), glyph),
                "{kebab} did not resolve to {}",
                glyph.name
            );
        }
    }

    #[test]
    fn test_pascal_and_camel_case_names_resolve() {
        let resolver = IconResolver::new();
        assert!(std::ptr::eq(
            resolver.resolve("ShoppingCart"),
            Icon::ShoppingCart.glyph()
        ));
        assert!(std::ptr::eq(
            resolver.resolve("playCircle"),
            Icon::PlayCircle.glyph()
        ));
    }

    #[test]
    fn test_shouted_names_resolve_ignoring_case() {
        let resolver = IconResolver::new();
        assert!(std::ptr::eq(
            resolver.resolve("SHIELD-CHECK"),
            Icon::ShieldCheck.glyph()
        ));
        assert_eq!(Icon::from_canonical("helpcircle"), Some(Icon::HelpCircle));
        assert_eq!(Icon::from_canonical("Shopping"), None);
    }

    #[test]
    fn test_repeated_resolution_is_identical() {
        let resolver = IconResolver::new();
        let first = resolver.resolve("sun");
        let second = resolver.resolve("sun");
        let shouted = resolver.resolve("SUN");

        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, shouted));
        assert!(std::ptr::eq(first, Icon::Sun.glyph()));
        assert_eq!(resolver.cached_names(), 2);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let resolver = IconResolver::new();
        let glyph = resolver.resolve("totally-unknown-icon");
        assert!(std::ptr::eq(glyph, Icon::HelpCircle.glyph()));
        assert_eq!(resolver.resolve("").name, "HelpCircle");
    }

    #[test]
    fn test_clones_share_cache() {
        let resolver = IconResolver::new();
        let clone = resolver.clone();
        let _ = clone.resolve("moon");
        assert_eq!(resolver.cached_names(), 1);
    }

    #[test]
    fn test_svg_rendering_escapes_class() {
        let svg = IconResolver::new().svg("star", 16, r#"fill "x"<"#);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="16" height="16""#));
        assert!(svg.contains(r#"data-icon="Star""#));
        assert!(svg.contains(r#"class="fill &#34;x&#34;&#60;""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_svg_without_class() {
        let svg = Icon::Menu.glyph().to_svg(24, "");
        assert!(!svg.contains("class="));
    }

    fn kebab_case(canonical: &str) -> String {
        let mut out = String::new();
        for (i, c) in canonical.chars().enumerate() {
            if c.is_uppercase() && i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        }
        out
    }
}
