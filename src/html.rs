//! Shared HTML building blocks: the page layout, error pages, style classes and number formatting.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

// Link styles
pub const LINK_STYLE: &str = "link";
pub const LINK_DELETE_STYLE: &str = "link link-delete";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_STYLE: &str = "table";
pub const TABLE_HEADER_STYLE: &str = "table-header";
pub const TABLE_ROW_STYLE: &str = "table-row";
pub const TABLE_CELL_STYLE: &str = "table-cell";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page-container";

const STYLESHEET: &str = r#"
body {
    margin: 0;
    font-family: system-ui, sans-serif;
    color: #111827;
    background: #f9fafb;
}
nav {
    display: flex;
    gap: 1.5rem;
    padding: 1rem 1.5rem;
    background: #ffffff;
    border-bottom: 1px solid #e5e7eb;
}
nav a {
    color: #111827;
    text-decoration: none;
}
nav a.current {
    color: #1d4ed8;
    font-weight: 600;
}
.page-container, .form-container {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 2rem 1.5rem;
    margin: 0 auto;
}
.form-container {
    max-width: 28rem;
}
.form-container form, .search-form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    width: 100%;
}
.search-form {
    flex-direction: row;
    align-items: end;
    max-width: 48rem;
    margin-bottom: 1rem;
}
.form-label {
    display: block;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
}
.form-input {
    display: block;
    box-sizing: border-box;
    width: 100%;
    padding: 0.625rem;
    font-size: 0.875rem;
    border: 1px solid #d1d5db;
    border-radius: 0.25rem;
    background: #f9fafb;
}
.button {
    padding: 0.5rem 1rem;
    border: none;
    border-radius: 0.25rem;
    cursor: pointer;
}
.button-primary {
    color: #ffffff;
    background: #3b82f6;
}
.button-primary:hover {
    background: #2563eb;
}
.link {
    color: #2563eb;
    text-decoration: underline;
}
.link-delete {
    color: #dc2626;
}
.table {
    width: 100%;
    max-width: 48rem;
    border-collapse: collapse;
    font-size: 0.875rem;
    text-align: left;
}
.table-header {
    font-size: 0.75rem;
    text-transform: uppercase;
    background: #f3f4f6;
}
.table-row {
    background: #ffffff;
    border-bottom: 1px solid #e5e7eb;
}
.table-cell, .table th {
    padding: 1rem 1.5rem;
}
.amount-negative {
    color: #b91c1c;
}
.amount-positive {
    color: #15803d;
}
.error-header {
    font-size: 4.5rem;
    font-weight: 800;
    color: #2563eb;
    margin: 0 0 1rem;
}
"#;

/// Wrap `content` in a full HTML page with the shared stylesheet.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Ledger" }
                style { (PreEscaped(STYLESHEET)) }
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="error-header"
            {
                (header)
            }

            p { strong { (description) } }

            p { (fix) }

            a href="/" class=(LINK_STYLE)
            {
                "Back to Homepage"
            }
        }
    );

    base(title, &content)
}

/// Dollar amounts at or above this are formatted without numfmt, which
/// switches to scientific notation for large numbers.
const GROUPED_DOLLARS_LIMIT: f64 = 1e13;

/// Format `number` as a dollar amount rounded to the nearest cent, e.g., "-$234.50".
pub fn format_currency(number: f64) -> String {
    static DOLLARS_FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let dollars_fmt = DOLLARS_FMT.get_or_init(|| {
        Formatter::currency("$")
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(0)))
    });

    if !number.is_finite() {
        return number.to_string();
    }

    let cents = (number.abs() * 100.0).round();
    let sign = if number < 0.0 && cents > 0.0 { "-" } else { "" };
    let dollars = (cents / 100.0).trunc();

    let Some(dollars_fmt) = dollars_fmt.as_ref().filter(|_| dollars < GROUPED_DOLLARS_LIMIT) else {
        return format!("{sign}${:.2}", cents / 100.0);
    };

    // numfmt only sees whole dollars so it never truncates the cents.
    // Zero is hardcoded as "0", so we must specify the formatted string for zero.
    let dollars_string = if dollars == 0.0 {
        "$0".to_owned()
    } else {
        dollars_fmt.fmt_string(dollars)
    };
    let remaining_cents = (cents - dollars * 100.0) as u8;

    format!("{sign}{dollars_string}.{remaining_cents:02}")
}

/// The CSS class for displaying `amount` in red or green.
pub fn amount_class(amount: f64) -> &'static str {
    if amount < 0.0 {
        "amount-negative"
    } else {
        "amount-positive"
    }
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn formats_whole_numbers_with_cents() {
        assert_eq!(format_currency(100.0), "$100.00");
        assert_eq!(format_currency(-200.0), "-$200.00");
    }

    #[test]
    fn formats_fractions_with_two_decimals() {
        assert_eq!(format_currency(12.3), "$12.30");
        assert_eq!(format_currency(-50.25), "-$50.25");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(format_currency(12.346), "$12.35");
        assert_eq!(format_currency(-12.346), "-$12.35");
        assert_eq!(format_currency(0.05), "$0.05");
    }

    #[test]
    fn rounding_carries_into_dollars() {
        let formatted = format_currency(999.999);

        assert_eq!(formatted, format_currency(1000.0));
        assert!(formatted.ends_with(".00"), "got {formatted}");
        assert!(!formatted.contains("999"), "got {formatted}");
    }

    #[test]
    fn sub_cent_amounts_round_to_zero() {
        assert_eq!(format_currency(0.001), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(5e-324), "$0.00");
    }

    #[test]
    fn large_amounts_are_not_in_scientific_notation() {
        assert_eq!(format_currency(1e15), "$1000000000000000.00");
        assert_eq!(format_currency(-1e15), "-$1000000000000000.00");
    }
}
