// ============================================================================
// PAGE VIEWMODEL - Modelos de página a partir de (idioma, traducciones)
// ============================================================================
// Todo el texto visible sale de las tablas de traducción. Las vistas reciben
// estos structs y sólo construyen DOM.
// ============================================================================

use crate::config::AppConfig;
use crate::models::locale::Locale;
use crate::models::quote::QuoteField;
use crate::models::translation::TranslationValue;
use crate::services::translation_service::TranslationService;
use crate::utils::markup::{parse_inline, Segment};
use crate::viewmodels::navigation_viewmodel::{nav_links, NavLink, QUOTE_ANCHOR};

/// Puntos de "why us" en la columna izquierda
const WHY_US_LEFT_COLUMN: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct NavbarModel {
    pub logo_src: String,
    pub logo_alt: String,
    pub logo_href: String,
    pub links: Vec<NavLink>,
    pub quote: NavLink,
    pub menu_label: String,
    /// Texto de enlaces reducido (fr/es son más largos)
    pub compact: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LanguageSwitcherModel {
    pub title: String,
    pub globe_icon: String,
    pub active_label: &'static str,
    pub options: Vec<LanguageOption>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

/// Tarjeta genérica: producto, especie o paso del proceso
#[derive(Clone, Debug, PartialEq)]
pub struct CardModel {
    pub key: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroModel {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<String>,
    pub quote: NavLink,
    pub catalog_label: String,
    pub catalog_href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductsModel {
    pub heading: SectionHeading,
    pub cards: Vec<CardModel>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesModel {
    pub title: String,
    pub groups: Vec<CardModel>,
    pub image_src: String,
    pub image_alt: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessModel {
    pub heading: SectionHeading,
    pub steps: Vec<CardModel>,
    pub cta: NavLink,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhyUsModel {
    pub title: String,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceSummaryModel {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub button: NavLink,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CertificationsModel {
    pub heading: SectionHeading,
    pub badges: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AboutModel {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogModel {
    pub heading: SectionHeading,
    pub cta_label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqModel {
    pub title: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuoteFieldModel {
    pub field: QuoteField,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductOption {
    /// Valor enviado (clave de categoría, igual en todos los idiomas)
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuoteFormModel {
    pub heading: SectionHeading,
    pub form_name: String,
    pub action: String,
    pub honeypot_field: String,
    pub honeypot_label: String,
    pub fields: Vec<QuoteFieldModel>,
    pub categories_label: String,
    pub products: Vec<ProductOption>,
    pub submit_label: String,
    pub submitting_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FooterModel {
    pub logo_src: String,
    pub logo_alt: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomePage {
    pub hero: HeroModel,
    pub products: ProductsModel,
    pub species: SpeciesModel,
    pub process: ProcessModel,
    pub why_us: WhyUsModel,
    pub compliance: ComplianceSummaryModel,
    pub certifications: CertificationsModel,
    pub about: AboutModel,
    pub catalog: CatalogModel,
    pub faq: FaqModel,
    pub quote: QuoteFormModel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceItem {
    pub label: String,
    pub text: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComplianceSection {
    pub key: String,
    pub title: String,
    pub paragraphs: Vec<Vec<Segment>>,
    pub items: Vec<ComplianceItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompliancePage {
    pub title: String,
    pub subtitle: String,
    pub heading: String,
    pub intro: Vec<Segment>,
    pub sections: Vec<ComplianceSection>,
    pub contact_title: String,
    pub contact_body: String,
    pub contact: NavLink,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotFoundPage {
    pub title: String,
    pub message: String,
    pub home: NavLink,
}

/// ViewModel de páginas - sólo lectura de traducciones y configuración
pub struct PageViewModel<'a> {
    translations: &'a TranslationService,
    locale: Locale,
    config: &'a AppConfig,
}

impl<'a> PageViewModel<'a> {
    pub fn new(translations: &'a TranslationService, locale: Locale, config: &'a AppConfig) -> Self {
        Self { translations, locale, config }
    }

    fn t(&self, key: &str) -> String {
        self.translations.text(key, self.locale)
    }

    fn heading(&self, section: &str) -> SectionHeading {
        SectionHeading {
            title: self.t(&format!("{}.title", section)),
            subtitle: self.t(&format!("{}.subtitle", section)),
        }
    }

    fn cards(&self, key: &str) -> Vec<CardModel> {
        self.translations
            .entries(key, self.locale)
            .into_iter()
            .map(|(key, value)| CardModel {
                title: value.field("title"),
                description: value.field("description"),
                key,
            })
            .collect()
    }

    fn quote_link(&self, on_home: bool) -> NavLink {
        NavLink::section(self.t("hero.cta.quote"), QUOTE_ANCHOR, on_home)
    }

    // ========================================================================
    // CHROME (navbar, selector de idioma, footer)
    // ========================================================================

    pub fn navbar(&self, on_home: bool) -> NavbarModel {
        NavbarModel {
            logo_src: self.config.assets.logo_horizontal.clone(),
            logo_alt: self.t("brand.logoAlt"),
            logo_href: if on_home { "#home".to_string() } else { "/".to_string() },
            links: nav_links(self.translations, self.locale, on_home),
            quote: self.quote_link(on_home),
            menu_label: self.t("nav.menu"),
            compact: self.locale.uses_compact_nav(),
        }
    }

    pub fn language_switcher(&self) -> LanguageSwitcherModel {
        LanguageSwitcherModel {
            title: self.t("language.selector"),
            globe_icon: self.config.assets.globe_icon.clone(),
            active_label: self.locale.switcher_label(),
            options: Locale::ALL
                .iter()
                .map(|locale| LanguageOption {
                    code: locale.code(),
                    label: locale.switcher_label(),
                    active: *locale == self.locale,
                })
                .collect(),
        }
    }

    pub fn footer(&self) -> FooterModel {
        FooterModel {
            logo_src: self.config.assets.footer_logo.clone(),
            logo_alt: self.t("brand.logoAlt"),
            tagline: self.t("footer.tagline"),
            email: self.t("footer.email"),
            phone: self.t("footer.phone"),
            copyright: self.t("footer.copyright"),
        }
    }

    // ========================================================================
    // PÁGINA PRINCIPAL
    // ========================================================================

    pub fn home_page(&self) -> HomePage {
        HomePage {
            hero: self.hero(),
            products: ProductsModel {
                heading: self.heading("products"),
                cards: self.cards("products.items"),
            },
            species: self.species(),
            process: ProcessModel {
                heading: self.heading("process"),
                steps: self.cards("process.steps"),
                cta: NavLink::section(self.t("process.cta"), QUOTE_ANCHOR, true),
            },
            why_us: self.why_us(),
            compliance: ComplianceSummaryModel {
                title: self.t("compliance.summary.title"),
                paragraphs: vec![
                    self.t("compliance.summary.description1"),
                    self.t("compliance.summary.description2"),
                ],
                button: NavLink::page(self.t("compliance.summary.button"), "/compliance"),
            },
            certifications: CertificationsModel {
                heading: self.heading("certifications"),
                badges: self.translations.resolve("certifications.badges", self.locale).texts(),
            },
            about: AboutModel {
                title: self.t("about.title"),
                description: self.t("about.description"),
            },
            catalog: CatalogModel {
                heading: self.heading("catalog"),
                cta_label: self.t("catalog.cta"),
                href: self.config.assets.catalog_pdf.clone(),
            },
            faq: self.faq(),
            quote: self.quote_form(),
        }
    }

    fn hero(&self) -> HeroModel {
        HeroModel {
            title: self.t("hero.title"),
            subtitle: self.t("hero.subtitle"),
            features: self
                .translations
                .resolve("hero.features", self.locale)
                .texts()
                .into_iter()
                .filter(|feature| !feature.is_empty())
                .collect(),
            quote: self.quote_link(true),
            catalog_label: self.t("hero.cta.catalog"),
            catalog_href: self.config.assets.catalog_pdf.clone(),
        }
    }

    fn species(&self) -> SpeciesModel {
        let groups = ["tropical", "reforested"]
            .iter()
            .map(|group| {
                let value = self.translations.resolve(&format!("species.{}", group), self.locale);
                CardModel {
                    key: group.to_string(),
                    title: value.field("title"),
                    description: value.field("description"),
                }
            })
            .collect();
        SpeciesModel {
            title: self.t("species.title"),
            groups,
            image_src: self.config.assets.woodgrain.clone(),
            image_alt: self.t("species.imageAlt"),
        }
    }

    fn why_us(&self) -> WhyUsModel {
        let mut left = self.translations.resolve("whyUs.points", self.locale).texts();
        let right = if left.len() > WHY_US_LEFT_COLUMN {
            left.split_off(WHY_US_LEFT_COLUMN)
        } else {
            Vec::new()
        };
        WhyUsModel {
            title: self.t("whyUs.title"),
            left,
            right,
        }
    }

    /// Entradas del FAQ en orden de autoría
    pub fn faq(&self) -> FaqModel {
        FaqModel {
            title: self.t("faq.title"),
            entries: self
                .translations
                .list("faq.questions", self.locale)
                .iter()
                .map(|entry| FaqEntry {
                    question: entry.field("question"),
                    answer: entry.field("answer"),
                })
                .collect(),
        }
    }

    fn quote_form(&self) -> QuoteFormModel {
        let form = &self.config.form;
        QuoteFormModel {
            heading: self.heading("quote"),
            form_name: form.form_name.clone(),
            action: form.action.clone(),
            honeypot_field: form.honeypot_field.clone(),
            honeypot_label: self.t("quote.form.honeypot"),
            fields: QuoteField::ALL
                .iter()
                .map(|field| QuoteFieldModel {
                    field: *field,
                    label: self.t(field.label_key()),
                })
                .collect(),
            categories_label: self.t("quote.form.productCategories"),
            products: self
                .translations
                .entries("quote.form.products", self.locale)
                .into_iter()
                .map(|(value, label)| ProductOption { value, label: label.as_text() })
                .collect(),
            submit_label: self.t("quote.form.submit"),
            submitting_label: self.t("quote.form.submitting"),
        }
    }

    // ========================================================================
    // PÁGINAS SECUNDARIAS
    // ========================================================================

    pub fn compliance_page(&self) -> CompliancePage {
        let sections = self
            .translations
            .entries("compliancePage.sections", self.locale)
            .into_iter()
            .map(|(key, section)| compliance_section(key, &section))
            .collect();

        CompliancePage {
            title: self.t("compliancePage.title"),
            subtitle: self.t("compliancePage.subtitle"),
            heading: self.t("compliancePage.heading"),
            intro: parse_inline(&self.t("compliancePage.intro")),
            sections,
            contact_title: self.t("compliancePage.contact.title"),
            contact_body: self.t("compliancePage.contact.body"),
            contact: NavLink::section(self.t("compliancePage.contact.button"), QUOTE_ANCHOR, false),
        }
    }

    pub fn not_found_page(&self) -> NotFoundPage {
        NotFoundPage {
            title: self.t("notFound.title"),
            message: self.t("notFound.message"),
            home: NavLink::page(self.t("notFound.home"), "/"),
        }
    }
}

fn compliance_section(key: String, section: &TranslationValue) -> ComplianceSection {
    ComplianceSection {
        key,
        title: section.field("title"),
        paragraphs: section
            .child("paragraphs")
            .texts()
            .iter()
            .map(|text| parse_inline(text))
            .collect(),
        items: section
            .child("items")
            .items()
            .iter()
            .map(|item| ComplianceItem {
                label: item.field("label"),
                text: parse_inline(&item.field("text")),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::document_service::fakes::RecordingDocument;
    use crate::services::storage_service::MemoryStorage;
    use crate::state::LocaleState;

    fn page(translations: &TranslationService, locale: Locale) -> HomePage {
        PageViewModel::new(translations, locale, &AppConfig::default()).home_page()
    }

    #[test]
    fn persisted_french_renders_french_hero() {
        let document = RecordingDocument::default();
        let state = LocaleState::load(
            Box::new(MemoryStorage::with_entry("i18nextLng", "fr")),
            Box::new(document.clone()),
            "i18nextLng",
            Locale::En,
        );
        let translations = TranslationService::default();
        let home = page(&translations, state.get_active_locale());

        assert_eq!(home.hero.title, translations.text("hero.title", Locale::Fr));
        assert_eq!(home.hero.title, "Bois brésilien haut de gamme pour les marchés mondiaux");
        assert_eq!(document.attributes(), Some(("fr", "ltr")));
    }

    #[test]
    fn home_page_sections_follow_table_order() {
        let translations = TranslationService::default();
        let home = page(&translations, Locale::En);

        assert_eq!(home.hero.features.len(), 3);
        assert_eq!(home.hero.quote.href, "#quote");
        assert_eq!(home.products.cards.len(), 6);
        assert_eq!(home.products.cards[0].key, "decking");
        let steps: Vec<&str> = home.process.steps.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(steps, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(home.species.groups.len(), 2);
        assert_eq!(home.faq.entries.len(), 6);
        assert_eq!(home.certifications.badges.len(), 4);
        assert_eq!(home.compliance.button.href, "/compliance");
    }

    #[test]
    fn why_us_splits_three_and_rest() {
        let translations = TranslationService::default();
        let why_us = page(&translations, Locale::Es).why_us;
        assert_eq!(why_us.left.len(), 3);
        assert_eq!(why_us.right.len(), 3);
        assert!(why_us.left.iter().chain(why_us.right.iter()).all(|p| !p.is_empty()));
    }

    #[test]
    fn quote_product_values_are_locale_independent() {
        let translations = TranslationService::default();
        let values = |locale| -> Vec<String> {
            page(&translations, locale).quote.products.into_iter().map(|p| p.value).collect()
        };
        let reference = values(Locale::En);
        assert_eq!(reference.len(), 6);
        for locale in Locale::ALL {
            assert_eq!(values(locale), reference);
        }
    }

    #[test]
    fn quote_form_uses_config_and_localized_labels() {
        let translations = TranslationService::default();
        let quote = page(&translations, Locale::Pt).quote;
        assert_eq!(quote.form_name, "quote");
        assert_eq!(quote.honeypot_field, "bot-field");
        assert_eq!(quote.fields.len(), QuoteField::ALL.len());
        assert!(quote.fields.iter().all(|f| !f.label.is_empty()));
        assert_eq!(quote.submitting_label, translations.text("quote.form.submitting", Locale::Pt));
    }

    #[test]
    fn compliance_page_is_fully_localized() {
        let translations = TranslationService::default();
        let config = AppConfig::default();
        for locale in Locale::ALL {
            let compliance = PageViewModel::new(&translations, locale, &config).compliance_page();
            assert!(!compliance.title.is_empty());
            assert_eq!(compliance.sections.len(), 4);
            assert_eq!(compliance.sections[2].key, "dueDiligence");
            assert_eq!(compliance.sections[2].items.len(), 5);
            assert!(compliance.intro.iter().any(|s| matches!(s, Segment::Strong(_))));
            assert_eq!(compliance.contact.href, "/#quote");
        }
    }

    #[test]
    fn navbar_depends_on_page_and_locale() {
        let translations = TranslationService::default();
        let config = AppConfig::default();
        let home = PageViewModel::new(&translations, Locale::Fr, &config).navbar(true);
        assert!(home.compact);
        assert_eq!(home.quote.href, "#quote");

        let compliance = PageViewModel::new(&translations, Locale::Ar, &config).navbar(false);
        assert!(!compliance.compact);
        assert_eq!(compliance.logo_href, "/");
        assert_eq!(compliance.quote.href, "/#quote");
    }

    #[test]
    fn switcher_marks_only_the_active_locale() {
        let translations = TranslationService::default();
        let config = AppConfig::default();
        let switcher = PageViewModel::new(&translations, Locale::Ar, &config).language_switcher();
        assert_eq!(switcher.options.len(), 5);
        assert_eq!(switcher.active_label, "عربي");
        let active: Vec<&str> = switcher.options.iter().filter(|o| o.active).map(|o| o.code).collect();
        assert_eq!(active, vec!["ar"]);
    }

    fn partial_source(locale: Locale) -> &'static str {
        match locale {
            Locale::Pt => r#"{ "hero": { "title": "Madeira" } }"#,
            other => crate::services::translation_service::embedded_source(other),
        }
    }

    #[test]
    fn missing_keys_fall_back_to_default_locale() {
        let translations = TranslationService::with_source(Locale::En, partial_source);
        let home = page(&translations, Locale::Pt);
        assert_eq!(home.hero.title, "Madeira");
        assert_eq!(home.hero.subtitle, translations.text("hero.subtitle", Locale::En));
        assert_eq!(home.faq.entries.len(), 6);
    }

    #[test]
    fn not_found_links_home() {
        let translations = TranslationService::default();
        let not_found = PageViewModel::new(&translations, Locale::En, &AppConfig::default()).not_found_page();
        assert_eq!(not_found.title, "404");
        assert_eq!(not_found.home.href, "/");
    }
}
