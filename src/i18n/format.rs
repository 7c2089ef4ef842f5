// SPDX-License-Identifier: MPL-2.0
//! Positional message formatting.
//!
//! Patterns use indexed placeholders, `{0}`, `{1,number}`,
//! `{2,number,integer}`, `{3,number,percent}`, with single-quote escaping:
//! `''` produces one quote and `'...'` keeps its content literal, braces
//! included. Numbers and percents are rendered with the CLDR conventions of
//! the message language through ICU4X.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Placeholder without argument | Left as written |
//! | Non-numeric placeholder | Left as written |
//! | Unterminated `{` | Rest of the pattern emitted literally |
//! | Unterminated quote | Quoted to the end of the pattern |
//! | `NaN` or infinite number | Plain `f64` text |
//! | No locale data for the language | Root locale conventions |

use crate::domain::Lang;
use fixed_decimal::{Decimal, FloatPrecision};
use fluent_bundle::types::{FluentNumber, FluentType};
use fluent_bundle::FluentValue;
use icu::decimal::options::DecimalFormatterOptions;
use icu::decimal::DecimalFormatter;
use icu::locale::{locale, Locale};
use icu_experimental::dimension::percent::formatter::PercentFormatter;
use intl_memoizer::concurrent::IntlLangMemoizer;
use std::cell::OnceCell;
use writeable::Writeable;

/// Fraction digits shown for numbers without explicit options.
const DEFAULT_MAX_FRACTION_DIGITS: i16 = 3;

/// Upper bound for fraction digit options, as in ECMA-402.
const MAX_FRACTION_DIGITS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Default,
    Integer,
    Percent,
}

// =============================================================================
// Locale formatters
// =============================================================================

/// Formatters for one language, created on first use and kept for the rest
/// of the pattern.
struct LocaleFormatters<'a> {
    lang: &'a Lang,
    locale: Locale,
    decimal: OnceCell<Option<DecimalFormatter>>,
    percent: OnceCell<Option<PercentFormatter<DecimalFormatter>>>,
    intls: OnceCell<IntlLangMemoizer>,
}

impl<'a> LocaleFormatters<'a> {
    fn new(lang: &'a Lang) -> Self {
        let locale = lang.code().parse::<Locale>().unwrap_or_else(|err| {
            tracing::debug!(lang = %lang, %err, "no ICU locale, using root");
            locale!("und")
        });
        Self {
            lang,
            locale,
            decimal: OnceCell::new(),
            percent: OnceCell::new(),
            intls: OnceCell::new(),
        }
    }

    fn decimal(&self) -> Option<&DecimalFormatter> {
        self.decimal
            .get_or_init(|| {
                DecimalFormatter::try_new(self.locale.clone().into(), DecimalFormatterOptions::default())
                    .inspect_err(|err| tracing::debug!(lang = %self.lang, %err, "no decimal data"))
                    .ok()
            })
            .as_ref()
    }

    fn percent(&self) -> Option<&PercentFormatter<DecimalFormatter>> {
        self.percent
            .get_or_init(|| {
                PercentFormatter::try_new(self.locale.clone().into(), Default::default())
                    .inspect_err(|err| tracing::debug!(lang = %self.lang, %err, "no percent data"))
                    .ok()
            })
            .as_ref()
    }

    fn intls(&self) -> &IntlLangMemoizer {
        self.intls
            .get_or_init(|| IntlLangMemoizer::new(self.lang.identifier().clone()))
    }

    fn number(&self, number: &FluentNumber, style: Style) -> String {
        let value = match style {
            Style::Percent => number.value * 100.0,
            Style::Default | Style::Integer => number.value,
        };
        let Ok(mut decimal) = Decimal::try_from_f64(value, FloatPrecision::RoundTrip) else {
            return number.value.to_string();
        };

        match style {
            Style::Integer | Style::Percent => decimal.round(0),
            Style::Default => {
                let digits = |option: Option<usize>| {
                    option.map(|v| i16::try_from(v.min(MAX_FRACTION_DIGITS)).unwrap_or_default())
                };
                let min = digits(number.options.minimum_fraction_digits).unwrap_or(0);
                let max = digits(number.options.maximum_fraction_digits)
                    .unwrap_or(DEFAULT_MAX_FRACTION_DIGITS)
                    .max(min);
                // Rounding pads shorter numbers, so only round longer ones.
                if *decimal.magnitude_range().start() < -max {
                    decimal.round(-max);
                }
                decimal.trim_end();
                decimal.pad_end(-min);
            }
        }

        if style == Style::Percent {
            if let Some(formatter) = self.percent() {
                return formatter.format(&decimal).write_to_string().into_owned();
            }
        } else if let Some(formatter) = self.decimal() {
            return formatter.format(&decimal).to_string();
        }
        decimal.write_to_string().into_owned()
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Substitutes `args` into `pattern` for `lang`.
///
/// # Example
///
/// ```
/// use fluent_bundle::FluentValue;
/// use lang_messages::domain::Lang;
/// use lang_messages::i18n::format::format_message;
///
/// let de: Lang = "de".parse().unwrap();
/// let text = format_message("{0} hat {1} Punkte", &de, &["Anna".into(), 1234.5.into()]);
/// assert_eq!(text, "Anna hat 1.234,5 Punkte");
/// ```
#[must_use]
pub fn format_message(pattern: &str, lang: &Lang, args: &[FluentValue<'_>]) -> String {
    let formatters = LocaleFormatters::new(lang);
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                while let Some(q) = chars.next() {
                    if q != '\'' {
                        out.push(q);
                    } else if chars.peek() == Some(&'\'') {
                        chars.next();
                        out.push('\'');
                    } else {
                        break;
                    }
                }
            }
            '{' => {
                let mut element = String::new();
                let mut closed = false;
                for e in chars.by_ref() {
                    if e == '}' {
                        closed = true;
                        break;
                    }
                    element.push(e);
                }
                if !closed {
                    out.push('{');
                    out.push_str(&element);
                    break;
                }
                match render_element(&element, args, &formatters) {
                    Some(rendered) => out.push_str(&rendered),
                    None => {
                        out.push('{');
                        out.push_str(&element);
                        out.push('}');
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn render_element(
    element: &str,
    args: &[FluentValue<'_>],
    formatters: &LocaleFormatters<'_>,
) -> Option<String> {
    let mut parts = element.split(',').map(str::trim);
    let index: usize = parts.next()?.parse().ok()?;
    let arg = args.get(index)?;
    let style = match (parts.next(), parts.next()) {
        (Some("number"), Some("integer")) => Style::Integer,
        (Some("number"), Some("percent")) => Style::Percent,
        _ => Style::Default,
    };
    Some(render_arg(arg, style, formatters))
}

fn render_arg(arg: &FluentValue<'_>, style: Style, formatters: &LocaleFormatters<'_>) -> String {
    match arg {
        FluentValue::String(text) => text.to_string(),
        FluentValue::Number(number) => formatters.number(number, style),
        FluentValue::Custom(custom) => custom.as_string_threadsafe(formatters.intls()).into_owned(),
        FluentValue::None | FluentValue::Error => String::new(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_bundle::types::FluentNumberOptions;
    use std::borrow::Cow;

    fn lang(tag: &str) -> Lang {
        tag.parse().expect("valid tag")
    }

    fn en(pattern: &str, args: &[FluentValue<'_>]) -> String {
        format_message(pattern, &lang("en"), args)
    }

    fn one(tag: &str, pattern: &str, value: f64) -> String {
        format_message(pattern, &lang(tag), &[FluentValue::from(value)])
    }

    #[test]
    fn pattern_without_placeholders_is_unchanged() {
        assert_eq!(en("Hello world", &[]), "Hello world");
    }

    #[test]
    fn positional_arguments_follow_index() {
        let args = ["first".into(), "second".into()];
        assert_eq!(en("{1} then {0}, {1} again", &args), "second then first, second again");
    }

    #[test]
    fn placeholder_without_argument_is_kept() {
        assert_eq!(en("{0} and {1}", &["only".into()]), "only and {1}");
        assert_eq!(en("{name}", &["x".into()]), "{name}");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        assert_eq!(en("broken {0", &["x".into()]), "broken {0");
    }

    #[test]
    fn doubled_quote_is_one_quote() {
        assert_eq!(en("it''s {0}", &["here".into()]), "it's here");
    }

    #[test]
    fn quoted_text_is_literal() {
        assert_eq!(en("'{0}' is {0}", &["x".into()]), "{0} is x");
        assert_eq!(en("'it''s' {0}", &["x".into()]), "it's x");
        assert_eq!(en("open 'quote {0}", &["x".into()]), "open quote {0}");
    }

    #[test]
    fn integers_are_grouped_per_language() {
        let args = [FluentValue::from(1_234_567)];
        assert_eq!(format_message("{0}", &lang("en"), &args), "1,234,567");
        assert_eq!(format_message("{0}", &lang("de"), &args), "1.234.567");
        assert_eq!(format_message("{0}", &lang("fr"), &args), "1\u{202f}234\u{202f}567");
        assert_eq!(format_message("{0}", &lang("de-CH"), &args), "1\u{2019}234\u{2019}567");
    }

    #[test]
    fn region_changes_separators() {
        assert_eq!(one("es-ES", "{0}", 1_234_567.5), "1.234.567,5");
        assert_eq!(one("es-MX", "{0}", 1_234_567.5), "1,234,567.5");
        assert_eq!(one("de-DE", "{0}", 1_234_567.5), "1.234.567,5");
        assert_eq!(one("de-AT", "{0}", 1_234_567.5), "1\u{a0}234\u{a0}567,5");
        assert_eq!(one("en-IN", "{0}", 1_234_567.0), "12,34,567");
    }

    #[test]
    fn decimals_use_language_separator() {
        assert_eq!(one("en-US", "{0}", 1234.5), "1,234.5");
        assert_eq!(one("ru", "{0}", 1234.5), "1\u{a0}234,5");
    }

    #[test]
    fn fraction_is_limited_to_three_digits() {
        assert_eq!(en("{0}", &[FluentValue::from(0.1 + 0.2)]), "0.3");
        assert_eq!(en("{0}", &[FluentValue::from(2.0 / 3.0)]), "0.667");
        assert_eq!(en("{0}", &[FluentValue::from(0.00001)]), "0");
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(en("{0}", &[FluentValue::from(-1234.5)]), "-1,234.5");
    }

    #[test]
    fn number_styles() {
        assert_eq!(en("{0,number,integer}", &[FluentValue::from(2.6)]), "3");
        assert_eq!(en("{0, number, percent}", &[FluentValue::from(0.25)]), "25%");
        assert_eq!(en("{0,number}", &[FluentValue::from(9999)]), "9,999");
    }

    #[test]
    fn percent_follows_language() {
        let text = one("fr", "{0,number,percent}", 0.25);
        let (number, sign) = text.split_at(2);
        assert_eq!(number, "25");
        assert!(sign == "\u{a0}%" || sign == "\u{202f}%", "unexpected {text:?}");
        assert_eq!(one("de", "{0,number,percent}", 0.13), "13\u{a0}%");
    }

    #[test]
    fn strings_ignore_number_style() {
        assert_eq!(en("{0,number}", &["n/a".into()]), "n/a");
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(en("{0}", &[FluentValue::from(f64::NAN)]), "NaN");
        assert_eq!(en("{0}", &[FluentValue::from(f64::NEG_INFINITY)]), "-inf");
    }

    #[test]
    fn minimum_fraction_digits_are_padded() {
        let options = FluentNumberOptions {
            minimum_fraction_digits: Some(2),
            ..FluentNumberOptions::default()
        };
        let price = FluentValue::Number(FluentNumber::new(1234.5, options));
        assert_eq!(en("{0}", &[price]), "1,234.50");
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Weekday(&'static str);

    impl FluentType for Weekday {
        fn duplicate(&self) -> Box<dyn FluentType + Send> {
            Box::new(self.clone())
        }

        fn as_string(&self, _intls: &intl_memoizer::IntlLangMemoizer) -> Cow<'static, str> {
            Cow::Borrowed(self.0)
        }

        fn as_string_threadsafe(&self, _intls: &IntlLangMemoizer) -> Cow<'static, str> {
            Cow::Borrowed(self.0)
        }
    }

    #[test]
    fn custom_values_render_their_text() {
        let day = FluentValue::Custom(Box::new(Weekday("Monday")));
        assert_eq!(en("See you {0}", &[day]), "See you Monday");
    }
}
