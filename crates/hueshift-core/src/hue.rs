//! HSL⇄RGB color-space math.
//!
//! All functions here are pure and operate on normalized `f64` values; the
//! parsers and formatters own the scaling to and from 8-bit channels.

/// Map one hue-shifted parameter to its channel intensity.
///
/// `p` and `q` are the intermediate intensities from the HSL→RGB transform;
/// `t` is the hue shifted by ±1/3 for the red/blue channels. Callers
/// guarantee `t` is within one period of `[0, 1]`, so a single-step wrap
/// suffices.
///
/// ```text
/// t < 1/6 → p + (q − p) × 6t
/// t < 1/2 → q
/// t < 2/3 → p + (q − p) × (2/3 − t) × 6
/// else    → p
/// ```
pub fn hue_to_rgb_comp(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert normalized HSL (each in `[0, 1]`) to normalized RGB intensities.
///
/// Zero saturation is the achromatic case: every channel equals the
/// lightness. Otherwise each channel is interpolated through its hue
/// segment via [`hue_to_rgb_comp`].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_rgb_comp(p, q, h + 1.0 / 3.0),
        hue_to_rgb_comp(p, q, h),
        hue_to_rgb_comp(p, q, h - 1.0 / 3.0),
    ]
}

/// Convert normalized RGB intensities (each in `[0, 1]`) to HSL.
///
/// Returns `(hue, saturation, lightness)` with hue in degrees and
/// saturation/lightness in `[0, 1]`. Hue uses a sign-preserving remainder,
/// so colors between magenta and red come out slightly negative rather
/// than wrapped — truncation then keeps the sign.
///
/// Hue selection checks red, then green, then blue, so a channel tie
/// resolves toward red. Saturation is zero at both lightness extremes.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let l = (max + min) / 2.0;

    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    (h * 60.0, s, l)
}
