//! Human-readable durations.
//!
//! Short spans (< 1 minute) are scaled to s/ms/µs/ns with three significant
//! digits; long spans are split into days, hours, minutes and seconds.

/// How the micro prefix is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MicroSign {
    #[default]
    Unicode,
    /// `us`, for terminals that cannot show `µ`.
    Ascii,
}

const LONG_UNITS: [(&str, f64); 4] = [
    ("d", 86_400.0),
    ("h", 3_600.0),
    ("m", 60.0),
    ("s", 1.0),
];

const SCALING: [f64; 4] = [1.0, 1e3, 1e6, 1e9];

/// Format `seconds` using the `µ` sign.
pub fn format_duration(seconds: f64) -> String {
    format_duration_with(seconds, MicroSign::Unicode)
}

pub fn format_duration_with(seconds: f64, micro: MicroSign) -> String {
    if seconds >= 60.0 {
        format_long(seconds)
    } else {
        format_short(seconds, micro)
    }
}

fn format_long(mut remaining: f64) -> String {
    let mut parts = Vec::new();

    for (unit, length) in LONG_UNITS {
        let value = (remaining / length).floor();
        if value > 0.0 {
            remaining %= length;
            parts.push(format!("{}{unit}", value as u64));
        }
        if remaining < 1.0 {
            break;
        }
    }

    parts.join(" ")
}

fn format_short(seconds: f64, micro: MicroSign) -> String {
    let units = [
        "s",
        "ms",
        match micro {
            MicroSign::Unicode => "\u{b5}s",
            MicroSign::Ascii => "us",
        },
        "ns",
    ];

    let order = if seconds > 0.0 {
        let scale = -(seconds.log10() / 3.0).floor();
        scale.clamp(0.0, 3.0) as usize
    } else {
        3
    };

    format!(
        "{}{}",
        significant(seconds * SCALING[order], 3),
        units[order]
    )
}

/// Render `value` like C's `%.*g`: `digits` significant digits, trailing
/// zeros removed, scientific notation outside `1e-4 <= |v| < 10^digits`.
fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value.is_finite() {
            "0".to_string()
        } else {
            value.to_string()
        };
    }

    let digits = digits.max(1);
    // `{:e}` rounds to the requested precision, giving the post-rounding exponent.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
