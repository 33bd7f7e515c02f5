use crate::color::hash::stable_hash;
use crate::color::hex::HexColor;

/// Background used on top of bright palettes (and for an empty palette).
pub const DARK_BACKGROUND: HexColor = HexColor::from_rgb(0x0B, 0x0B, 0x10);
/// Background used on top of dark or mid-tone palettes.
pub const LIGHT_BACKGROUND: HexColor = HexColor::from_rgb(0xFA, 0xF7, 0xF2);

const BRIGHT_PALETTE_THRESHOLD: f64 = 0.55;

/// Convert HSL (each nominally in `[0, 1]`) to a hex color.
///
/// `h` wraps modulo 1.0 and `s`/`l` are clamped. Channels are truncated, not rounded, when
/// converted to bytes.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    const ONE_THIRD: f64 = 1.0 / 3.0;
    const ONE_SIXTH: f64 = 1.0 / 6.0;
    const TWO_THIRD: f64 = 2.0 / 3.0;

    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
        let hue = hue.rem_euclid(1.0);
        if hue < ONE_SIXTH {
            return m1 + (m2 - m1) * hue * 6.0;
        }
        if hue < 0.5 {
            return m2;
        }
        if hue < TWO_THIRD {
            return m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0;
        }
        m1
    }

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        (
            channel(m1, m2, h + ONE_THIRD),
            channel(m1, m2, h),
            channel(m1, m2, h - ONE_THIRD),
        )
    };

    fn to_byte(c: f64) -> u8 {
        (c * 255.0) as u8
    }

    HexColor::from_rgb(to_byte(r), to_byte(g), to_byte(b))
}

/// Deterministic palette of `n` colors derived only from `word`.
///
/// Each color re-hashes `"{word}|{previous}|{index}"` and takes hue, saturation and lightness from
/// separate bit ranges of the hash, keeping saturation in `0.55..0.90` and lightness in
/// `0.42..0.62`.
pub fn fallback_palette(word: &str, n: usize) -> Vec<HexColor> {
    let key = word.trim().to_lowercase();
    let mut state = stable_hash(if key.is_empty() { "mandala" } else { &key });

    let mut colors = Vec::with_capacity(n);
    for i in 0..n {
        state = stable_hash(&format!("{word}|{state}|{i}"));
        let h = ((state >> 8) % 360) as f64 / 360.0;
        let s = 0.55 + ((state >> 20) % 35) as f64 / 100.0;
        let l = 0.42 + ((state >> 30) % 20) as f64 / 100.0;
        colors.push(hsl_to_hex(h, s, l));
    }
    colors
}

/// Pick a background that contrasts with the average brightness of `palette`.
pub fn choose_contrasting_background(palette: &[HexColor]) -> HexColor {
    if palette.is_empty() {
        return DARK_BACKGROUND;
    }

    let total: f64 = palette
        .iter()
        .map(|c| {
            let [r, g, b] = c.rgb01();
            (r + g + b) / 3.0
        })
        .sum();
    let mean = total / palette.len() as f64;

    if mean > BRIGHT_PALETTE_THRESHOLD {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
