// Campos del formulario de presupuesto. Los nombres son el contrato con el
// endpoint externo de formularios: no traducir ni renombrar.

/// Nombre del grupo de checkboxes de categorías de producto
pub const PRODUCTS_FIELD: &str = "products[]";

/// Campo oculto con el nombre del formulario (requerido por el endpoint)
pub const FORM_NAME_FIELD: &str = "form-name";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteField {
    CompanyName,
    ContactName,
    Email,
    Phone,
    Location,
    Website,
}

impl QuoteField {
    pub const ALL: [QuoteField; 6] = [
        QuoteField::CompanyName,
        QuoteField::ContactName,
        QuoteField::Email,
        QuoteField::Phone,
        QuoteField::Location,
        QuoteField::Website,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuoteField::CompanyName => "company-name",
            QuoteField::ContactName => "contact-name",
            QuoteField::Email => "email",
            QuoteField::Phone => "phone",
            QuoteField::Location => "location",
            QuoteField::Website => "website",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            QuoteField::Email => "email",
            QuoteField::Phone => "tel",
            QuoteField::Website => "url",
            _ => "text",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, QuoteField::Website)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            QuoteField::CompanyName => "quote.form.companyName",
            QuoteField::ContactName => "quote.form.contactName",
            QuoteField::Email => "quote.form.email",
            QuoteField::Phone => "quote.form.phone",
            QuoteField::Location => "quote.form.location",
            QuoteField::Website => "quote.form.website",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_website_is_optional() {
        let optional: Vec<_> = QuoteField::ALL.iter().filter(|f| !f.required()).collect();
        assert_eq!(optional, vec![&QuoteField::Website]);
    }

    #[test]
    fn wire_names_are_stable() {
        let names: Vec<_> = QuoteField::ALL.iter().map(QuoteField::name).collect();
        assert_eq!(names, vec!["company-name", "contact-name", "email", "phone", "location", "website"]);
    }
}
