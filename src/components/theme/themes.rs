#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg_color: &'static str,
    pub text_color: &'static str,
}

static LIGHT: Theme = Theme {
    bg_color: "white",
    text_color: "black",
};

static DARK: Theme = Theme {
    bg_color: "black",
    text_color: "white",
};

/// Looks up the theme for a mode name. Anything that isn't a known mode
/// gets the light theme.
pub fn resolve(mode: impl AsRef<str>) -> &'static Theme {
    match Mode::try_from(mode.as_ref()) {
        Ok(Mode::Dark) => &DARK,
        Ok(Mode::Light) | Err(_) => &LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_modes() {
        let light = resolve(Mode::Light);
        assert_eq!(light.bg_color, "white");
        assert_eq!(light.text_color, "black");

        let dark = resolve("dark");
        assert_eq!(dark.bg_color, "black");
        assert_eq!(dark.text_color, "white");
    }

    #[test]
    fn unknown_modes_resolve_to_light() {
        for mode in ["", "pastel", "Dark", "undefined", "null"] {
            assert_eq!(resolve(mode), &LIGHT, "{mode:?}");
        }
    }

    #[test]
    fn typed_and_stored_names_agree() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(resolve(mode), resolve(mode.to_string()));
        }
        assert_ne!(resolve(Mode::Light), resolve(Mode::Dark));
    }
}

use super::modes::Mode;
