use super::{Hsl, Hsv, Rgb};

/// Converts RGB to HSL. Achromatic input (all channels equal) yields hue 0 and
/// saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = unit_channels(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    Hsl {
        h: hue(r, g, b, max, d),
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Converts HSL to RGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let gray = to_byte(l);
        return Rgb::new(gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_byte(hue_to_channel(p, q, h)),
        to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Converts RGB to HSV. Black has saturation 0; achromatic input has hue 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = unit_channels(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if max == min { 0.0 } else { hue(r, g, b, max, d) };

    Hsv {
        h,
        s: s * 100.0,
        v: max * 100.0,
    }
}

/// Converts HSV to RGB, rounding each channel to the nearest integer.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h.rem_euclid(360.0) / 60.0;
    let s = (hsv.s / 100.0).clamp(0.0, 1.0);
    let v = (hsv.v / 100.0).clamp(0.0, 1.0);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

fn unit_channels(rgb: Rgb) -> (f64, f64, f64) {
    (
        f64::from(rgb.r) / 255.0,
        f64::from(rgb.g) / 255.0,
        f64::from(rgb.b) / 255.0,
    )
}

// `max` is always one of r/g/b, so the exact float comparisons pick its channel.
fn hue(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    sector * 60.0
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

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

fn to_byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn channel_distance(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn black_and_white_are_achromatic() {
        for rgb in [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)] {
            let hsl = rgb_to_hsl(rgb);
            let hsv = rgb_to_hsv(rgb);
            assert_eq!((hsl.h, hsl.s), (0.0, 0.0));
            assert_eq!((hsv.h, hsv.s), (0.0, 0.0));
        }
        assert_eq!(rgb_to_hsl(Rgb::new(255, 255, 255)).l, 100.0);
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)).v, 0.0);
    }

    #[test]
    fn grays_keep_hue_zero() {
        for level in [1u8, 64, 128, 200, 254] {
            let gray = Rgb::new(level, level, level);
            assert_eq!(rgb_to_hsl(gray).h, 0.0);
            assert_eq!(rgb_to_hsv(gray).h, 0.0);
            assert_eq!(hsl_to_rgb(rgb_to_hsl(gray)), gray);
        }
    }

    #[test]
    fn primaries_land_on_expected_hues() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)).h, 0.0);
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)).h, 120.0);
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)).h, 240.0);
        assert_eq!(rgb_to_hsv(Rgb::new(255, 255, 0)).h, 60.0);
        assert_eq!(
            hsl_to_rgb(Hsl {
                h: 300.0,
                s: 100.0,
                l: 50.0
            }),
            Rgb::new(255, 0, 255)
        );
        assert_eq!(
            hsv_to_rgb(Hsv {
                h: 180.0,
                s: 100.0,
                v: 100.0
            }),
            Rgb::new(0, 255, 255)
        );
    }

    #[test]
    fn sweeping_rgb_space_round_trips_within_one_step() {
        // Deterministic lattice over the cube; steps are coprime with 256 so
        // every residue of each channel shows up across the sweep.
        let mut checked = 0;
        let mut r = 0u32;
        while r <= 255 {
            let mut g = (r * 7) % 256;
            for _ in 0..12 {
                let b = (r * 3 + g * 5 + 11) % 256;
                let rgb = Rgb::new(r as u8, g as u8, b as u8);
                assert!(channel_distance(hsl_to_rgb(rgb_to_hsl(rgb)), rgb) <= 1, "{rgb:?}");
                assert!(channel_distance(hsv_to_rgb(rgb_to_hsv(rgb)), rgb) <= 1, "{rgb:?}");
                checked += 1;
                g = (g + 23) % 256;
            }
            r += 13;
        }
        assert!(checked >= 100);
    }

    #[test]
    fn hue_outside_one_turn_wraps() {
        let wrapped = hsl_to_rgb(Hsl {
            h: 480.0,
            s: 100.0,
            l: 50.0,
        });
        let direct = hsl_to_rgb(Hsl {
            h: 120.0,
            s: 100.0,
            l: 50.0,
        });
        assert_eq!(wrapped, direct);
    }
}
