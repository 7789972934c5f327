//! # Formatting Capability
//!
//! `mint-core` does not know any locale rules. Human-readable output is
//! produced by an [`AmountFormatter`] supplied by the caller
//! (`mint_catalog::LocaleFormatter` in this workspace).

/// Options passed along with every formatting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Upper bound on fraction digits. `None` means "use the currency's own
    /// digit count".
    pub max_fraction_digits: Option<u32>,
}

impl FormatOptions {
    /// Options that suppress the fraction part entirely.
    pub const fn without_fraction() -> Self {
        FormatOptions {
            max_fraction_digits: Some(0),
        }
    }
}

/// Renders a default-unit amount for a currency in a locale.
pub trait AmountFormatter {
    /// Formats `amount` (in default units, e.g. euros) for `alpha_code`.
    ///
    /// The returned string is used verbatim.
    fn format_currency(
        &self,
        amount: f64,
        alpha_code: &str,
        locale: &str,
        options: FormatOptions,
    ) -> String;
}

impl<F: AmountFormatter + ?Sized> AmountFormatter for &F {
    fn format_currency(
        &self,
        amount: f64,
        alpha_code: &str,
        locale: &str,
        options: FormatOptions,
    ) -> String {
        (**self).format_currency(amount, alpha_code, locale, options)
    }
}
