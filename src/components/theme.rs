use serde::{Deserialize, Serialize};
use stylist::GlobalStyle;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{SiteConfig, ThemeRamp};

const THEME_KEY: &str = "theme";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn logo(self, config: &SiteConfig) -> &str {
        match self {
            ThemeMode::Dark => &config.dark_logo_path,
            ThemeMode::Light => &config.logo_path,
        }
    }
}

fn document_theme() -> Option<ThemeMode> {
    let root = web_sys::window()?.document()?.document_element()?;
    Some(if root.class_list().contains("dark") {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    })
}

fn apply_to_document(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if mode.is_dark() {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if let Err(err) = result {
        log::warn!("could not switch theme class: {:?}", err);
    }
}

/// Current theme plus a toggle. The choice is kept in local storage.
#[hook]
pub fn use_theme() -> (ThemeMode, Callback<()>) {
    let storage = use_local_storage::<ThemeMode>(THEME_KEY.to_string());
    let mode = {
        let stored = *storage;
        use_state_eq(move || {
            stored
                .or_else(document_theme)
                .unwrap_or(ThemeMode::Dark)
        })
    };

    {
        let storage = storage.clone();
        use_effect_with_deps(
            move |mode: &ThemeMode| {
                apply_to_document(*mode);
                storage.set(*mode);
                || ()
            },
            *mode,
        );
    }

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_| mode.set((*mode).toggled()))
    };

    (*mode, toggle)
}

/// Publishes the colour ramp as `:root` custom properties while mounted.
#[hook]
pub fn use_theme_ramp(ramp: ThemeRamp) {
    use_effect_with_deps(
        move |css: &String| {
            let style = match GlobalStyle::new(css.clone()) {
                Ok(style) => Some(style),
                Err(err) => {
                    log::error!("theme ramp rejected: {}", err);
                    None
                }
            };
            move || {
                if let Some(style) = style {
                    style.unregister();
                }
            }
        },
        ramp.to_css(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_modes() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn stored_value_is_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeMode::Light);
        assert!(serde_json::from_str::<ThemeMode>("\"sepia\"").is_err());
    }

    #[test]
    fn logo_follows_mode() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(ThemeMode::Dark.logo(&config), "/assets/dark.png");
        assert_eq!(ThemeMode::Light.logo(&config), "/assets/light.png");
    }
}
