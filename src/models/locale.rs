// ============================================================================
// LOCALE - Idiomas soportados por el sitio
// ============================================================================

use std::fmt;

/// Dirección del texto del documento (`<html dir>`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
    Fr,
    Es,
    Pt,
}

impl Locale {
    /// Orden de aparición en el selector de idioma
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Ar, Locale::Fr, Locale::Es, Locale::Pt];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Fr => "fr",
            Locale::Es => "es",
            Locale::Pt => "pt",
        }
    }

    /// Códigos fuera del conjunto soportado devuelven `None`
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Locale::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// Etiqueta corta del selector (cada idioma en su propia escritura)
    pub fn switcher_label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ar => "عربي",
            Locale::Fr => "FR",
            Locale::Es => "ES",
            Locale::Pt => "PT",
        }
    }

    /// fr/es tienen etiquetas de navegación más largas
    pub fn uses_compact_nav(&self) -> bool {
        matches!(self, Locale::Fr | Locale::Es)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn codes_are_normalized() {
        assert_eq!(Locale::from_code(" FR "), Some(Locale::Fr));
        assert_eq!(Locale::from_code("Ar"), Some(Locale::Ar));
    }

    #[test]
    fn unsupported_codes_are_rejected() {
        for code in ["", "de", "en-US", "pt_BR", "zz"] {
            assert_eq!(Locale::from_code(code), None, "{code}");
        }
    }

    #[test]
    fn only_arabic_is_rtl() {
        for locale in Locale::ALL {
            assert_eq!(locale.is_rtl(), locale == Locale::Ar);
        }
        assert_eq!(Locale::Ar.direction().as_str(), "rtl");
        assert_eq!(Locale::Pt.direction().as_str(), "ltr");
    }
}
