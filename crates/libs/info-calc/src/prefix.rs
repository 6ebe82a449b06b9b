//! Unit prefix tables and the rendering engine behind the display adapters.

use std::fmt::{self, Write};

pub(crate) const KILO: u64 = 1000;
pub(crate) const MEGA: u64 = 1000 * KILO;
pub(crate) const GIGA: u64 = 1000 * MEGA;
pub(crate) const TERA: u64 = 1000 * GIGA;
pub(crate) const PETA: u64 = 1000 * TERA;
pub(crate) const EXA: u64 = 1000 * PETA;

pub(crate) const KIBI: u64 = 1024;
pub(crate) const MEBI: u64 = 1024 * KIBI;
pub(crate) const GIBI: u64 = 1024 * MEBI;
pub(crate) const TEBI: u64 = 1024 * GIBI;
pub(crate) const PEBI: u64 = 1024 * TEBI;
pub(crate) const EXBI: u64 = 1024 * PEBI;

/// One prefix family: six scale thresholds with their names.
///
/// Invariant: thresholds are strictly increasing, each one the previous times
/// the family's base (1000 or 1024).
pub(crate) struct PrefixTable {
    pub thresholds: [u64; 6],
    pub abbr: [&'static str; 6],
    pub full: [&'static str; 6],
}

pub(crate) static SI: PrefixTable = PrefixTable {
    thresholds: [KILO, MEGA, GIGA, TERA, PETA, EXA],
    abbr: ["k", "M", "G", "T", "P", "E"],
    full: ["kilo", "mega", "giga", "tera", "peta", "exa"],
};

pub(crate) static BINARY: PrefixTable = PrefixTable {
    thresholds: [KIBI, MEBI, GIBI, TEBI, PEBI, EXBI],
    abbr: ["Ki", "Mi", "Gi", "Ti", "Pi", "Ei"],
    full: ["kibi", "mebi", "gibi", "tebi", "pebi", "exbi"],
};

impl PrefixTable {
    /// Index of the largest tier whose threshold does not exceed `value`.
    ///
    /// The caller must ensure `value >= thresholds[0]`.
    fn tier_of(&self, value: f64) -> usize {
        let mut idx = 0;
        while idx < 5 && self.thresholds[idx + 1] as f64 <= value {
            idx += 1;
        }
        idx
    }
}

/// Rendering options carried by the display adapters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Style {
    /// Use the binary (power-of-1024) table instead of the SI one.
    pub binary: bool,
    /// Spell out prefix and unit words instead of abbreviations.
    pub long_names: bool,
    /// Insert a space between the digits and the unit.
    pub spaced: bool,
}

impl Style {
    pub(crate) const fn plain() -> Self {
        Style {
            binary: false,
            long_names: false,
            spaced: false,
        }
    }

    fn table(&self) -> &'static PrefixTable {
        if self.binary {
            &BINARY
        } else {
            &SI
        }
    }
}

fn number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{value:.p$}"),
        None => format!("{value}"),
    }
}

/// Renders an integral count.
///
/// Counts below the smallest threshold print as plain integers in the base
/// unit, regardless of the requested precision. Full unit words pluralize
/// unless the raw value is exactly one or exactly equals the chosen
/// threshold.
pub(crate) fn render_count(
    value: u64,
    style: Style,
    precision: Option<usize>,
    unit_abbr: &str,
    unit_full: &str,
) -> String {
    let table = style.table();
    let (prefixes, unit, mut plural) = if style.long_names {
        (&table.full, unit_full, "s")
    } else {
        (&table.abbr, unit_abbr, "")
    };
    let sp = if style.spaced { " " } else { "" };
    if value == 1 {
        plural = "";
    }
    if value < table.thresholds[0] {
        return format!("{value}{sp}{unit}{plural}");
    }
    let tier = table.tier_of(value as f64);
    if value == table.thresholds[tier] {
        plural = "";
    }
    let scaled = value as f64 / table.thresholds[tier] as f64;
    format!(
        "{}{sp}{}{unit}{plural}",
        number(scaled, precision),
        prefixes[tier]
    )
}

/// Renders a floating-point rate.
///
/// NaN and infinities are printed the way the float formatter spells them,
/// suffixed with the unscaled base unit. The `bps` flag selects the compact
/// "bps" suffix instead of "bit/s"; spelled-out names override it.
pub(crate) fn render_rate(
    value: f64,
    style: Style,
    precision: Option<usize>,
    bps: bool,
) -> String {
    let table = style.table();
    let (prefixes, unit, mut plural, suffix) = if style.long_names {
        (&table.full, "bit", "s", " per second")
    } else if bps {
        (&table.abbr, "bps", "", "")
    } else {
        (&table.abbr, "bit", "", "/s")
    };
    let sp = if style.spaced { " " } else { "" };
    if value == 1.0 {
        plural = "";
    }
    if !value.is_finite() || value < table.thresholds[0] as f64 {
        return format!("{}{sp}{unit}{plural}{suffix}", number(value, precision));
    }
    let tier = table.tier_of(value);
    if value == table.thresholds[tier] as f64 {
        plural = "";
    }
    let scaled = value / table.thresholds[tier] as f64;
    format!(
        "{}{sp}{}{unit}{plural}{suffix}",
        number(scaled, precision),
        prefixes[tier]
    )
}

/// Applies the formatter's width, fill, and alignment to a rendered string.
///
/// The formatter's precision is digit precision here, not string truncation,
/// so padding is done by hand instead of through [`fmt::Formatter::pad`].
pub(crate) fn pad(f: &mut fmt::Formatter<'_>, rendered: &str) -> fmt::Result {
    let Some(width) = f.width() else {
        return f.write_str(rendered);
    };
    let len = rendered.chars().count();
    if len >= width {
        return f.write_str(rendered);
    }
    let fill = f.fill();
    let missing = width - len;
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Left) => (0, missing),
        Some(fmt::Alignment::Center) => (missing / 2, missing - missing / 2),
        Some(fmt::Alignment::Right) | None => (missing, 0),
    };
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(rendered)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_order() {
        for table in [&SI, &BINARY] {
            let base = table.thresholds[0];
            for pair in table.thresholds.windows(2) {
                assert!(pair[0] < pair[1]);
                assert_eq!(pair[0] * base, pair[1]);
            }
        }
    }

    #[test]
    fn test_tier_selection() {
        assert_eq!(SI.tier_of(1000.0), 0);
        assert_eq!(SI.tier_of(999_999.0), 0);
        assert_eq!(SI.tier_of(1_000_000.0), 1);
        assert_eq!(SI.tier_of(u64::MAX as f64), 5);
        assert_eq!(BINARY.tier_of(1024.0), 0);
        assert_eq!(BINARY.tier_of(1_048_576.0), 1);
    }

    #[test]
    fn test_render_count_base_unit_is_integral() {
        let style = Style {
            spaced: true,
            ..Style::plain()
        };
        // The base unit never carries a fractional part.
        assert_eq!(render_count(999, style, Some(2), "B", "byte"), "999 B");
        assert_eq!(render_count(0, style, Some(1), "B", "byte"), "0 B");
    }

    #[test]
    fn test_render_count_boundary_keeps_unit() {
        let style = Style {
            spaced: true,
            ..Style::plain()
        };
        // Rounding up to the next threshold must not switch tiers.
        assert_eq!(
            render_count(999_996, style, Some(1), "B", "byte"),
            "1000.0 kB"
        );
    }
}
