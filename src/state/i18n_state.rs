//! I18nState - Locale Selection State

use crate::i18n::Locale;

/// State for the current locale
#[derive(Debug, Clone, Copy, Default)]
pub struct I18nState {
    pub locale: Locale,
}

impl I18nState {
    /// Toggle between Spanish and English
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::EsEs => Locale::EnUs,
            Locale::EnUs => Locale::EsEs,
        };
    }
}
