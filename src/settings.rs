//! Effect preferences
//!
//! Persisted as one JSON record in LocalStorage. `reduced_motion` is the
//! union of the stored flag and the `prefers-reduced-motion` media query,
//! and the `effective_*` accessors fold it into every motion-heavy effect.

use serde::{Deserialize, Serialize};

/// Per-effect enable flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scroll-triggered section fade-ins
    pub reveal: bool,
    /// Lazy image opacity fade
    pub lazy_fade: bool,
    /// Animated in-page anchor scrolling
    pub smooth_scroll: bool,
    /// Hero parallax
    pub parallax: bool,
    /// Photo grid hover zoom
    pub hover_zoom: bool,
    /// Staggered social link load-in
    pub stagger: bool,

    /// Minimize movement (seeded from `prefers-reduced-motion`)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal: true,
            lazy_fade: true,
            smooth_scroll: true,
            parallax: true,
            hover_zoom: true,
            stagger: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "page_motion_settings";

    /// Effective reveal: under reduced motion sections stay fully visible
    pub fn effective_reveal(&self) -> bool {
        self.reveal && !self.reduced_motion
    }

    /// Effective parallax (respects reduced_motion)
    pub fn effective_parallax(&self) -> bool {
        self.parallax && !self.reduced_motion
    }

    /// Effective stagger (respects reduced_motion)
    pub fn effective_stagger(&self) -> bool {
        self.stagger && !self.reduced_motion
    }

    /// Whether anchor scrolling may animate; reduced motion jumps instantly
    pub fn effective_smooth_scroll(&self) -> bool {
        self.smooth_scroll && !self.reduced_motion
    }

    /// Load settings from LocalStorage and the reduced-motion media query
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let mut settings = Self::stored().unwrap_or_else(|| {
            log::info!("Using default settings");
            Self::default()
        });

        if prefers_reduced_motion() {
            settings.reduced_motion = true;
        }
        settings
    }

    #[cfg(target_arch = "wasm32")]
    fn stored() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from LocalStorage");
                Some(settings)
            }
            Err(e) => {
                log::warn!("Ignoring corrupt settings record: {e}");
                None
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Whether the browser asks for minimal animation
#[cfg(target_arch = "wasm32")]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .is_some_and(|q| q.matches())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let s = Settings::default();
        assert!(s.effective_reveal());
        assert!(s.effective_parallax());
        assert!(s.effective_stagger());
        assert!(s.effective_smooth_scroll());
    }

    #[test]
    fn test_reduced_motion_disables_movement() {
        let s = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!s.effective_reveal());
        assert!(!s.effective_parallax());
        assert!(!s.effective_stagger());
        assert!(!s.effective_smooth_scroll());
    }

    #[test]
    fn test_flags_are_independent() {
        let s = Settings {
            parallax: false,
            ..Default::default()
        };
        assert!(!s.effective_parallax());
        assert!(s.effective_reveal());
        assert!(s.effective_stagger());
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        // Old records that predate a flag still parse
        let s: Settings = serde_json::from_str(r#"{"parallax":false}"#).unwrap();
        assert!(!s.parallax);
        assert!(s.reveal);
        assert!(!s.reduced_motion);
    }
}
