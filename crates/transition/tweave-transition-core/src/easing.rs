//! Named easing curves.
//!
//! Identifiers follow a `family[-mode]` grammar with modes `in` (default),
//! `out` and `in-out`: `"cubic-in-out"`, `"quad-out"`, `"elastic"`. The
//! `out` and `in-out` shapes are derived from the family's `in` shape.
//! Every resolved curve clamps its input to [0, 1] and snaps the
//! endpoints, so t >= 1 always maps to exactly 1.0 regardless of family.

use std::f32::consts::PI;

use tweave_api_core::TweenError;

/// Progress curve: linear completion ratio in, eased progress out.
pub type Easer = Box<dyn Fn(f32) -> f32>;

/// Easing used when no identifier is given.
pub const DEFAULT_EASING: &str = "cubic-in-out";

/// Default first curve parameter (elastic amplitude, poly exponent,
/// back overshoot scale).
pub const DEFAULT_EASE_A: f32 = 1.0;

/// Default second curve parameter (elastic period).
pub const DEFAULT_EASE_B: f32 = 0.4;

#[derive(Copy, Clone, Debug)]
enum Mode {
    In,
    Out,
    InOut,
}

/// Resolve a named curve with default parameters.
pub fn ease(name: &str) -> Result<Easer, TweenError> {
    ease_with(name, DEFAULT_EASE_A, DEFAULT_EASE_B)
}

/// Resolve a named curve with explicit parameters. The meaning of `a` and
/// `b` depends on the family; families that take no parameters ignore them.
pub fn ease_with(name: &str, a: f32, b: f32) -> Result<Easer, TweenError> {
    let full = if name.is_empty() { DEFAULT_EASING } else { name };
    let (family, mode) = split_mode(full);

    let base: Box<dyn Fn(f32) -> f32> = match family {
        "linear" => Box::new(|t| t),
        "quad" => Box::new(|t| t * t),
        "cubic" => Box::new(|t| t * t * t),
        "poly" => {
            let exponent = if a > 0.0 { a } else { DEFAULT_EASE_A };
            Box::new(move |t: f32| t.powf(exponent))
        }
        "sin" => Box::new(|t: f32| 1.0 - (t * PI / 2.0).cos()),
        "exp" => Box::new(|t: f32| 2.0f32.powf(10.0 * (t - 1.0))),
        "circle" => Box::new(|t: f32| 1.0 - (1.0 - t * t).max(0.0).sqrt()),
        "back" => {
            let s = 1.70158 * a;
            Box::new(move |t: f32| t * t * ((s + 1.0) * t - s))
        }
        "elastic" => {
            let amplitude = a.max(1.0);
            let period = if b > 0.0 { b } else { DEFAULT_EASE_B };
            let s = period / (2.0 * PI) * (1.0 / amplitude).asin();
            Box::new(move |t: f32| {
                -(amplitude
                    * 2.0f32.powf(10.0 * (t - 1.0))
                    * ((t - 1.0 - s) * 2.0 * PI / period).sin())
            })
        }
        "bounce" => Box::new(|t: f32| 1.0 - bounce_out(1.0 - t)),
        _ => {
            return Err(TweenError::UnknownEasing {
                name: full.to_string(),
            })
        }
    };

    Ok(apply_mode(base, mode))
}

/// Split `family[-mode]`. `-in-out` must be tried before `-out`.
fn split_mode(name: &str) -> (&str, Mode) {
    if let Some(family) = name.strip_suffix("-in-out") {
        (family, Mode::InOut)
    } else if let Some(family) = name.strip_suffix("-out") {
        (family, Mode::Out)
    } else if let Some(family) = name.strip_suffix("-in") {
        (family, Mode::In)
    } else {
        (name, Mode::In)
    }
}

fn apply_mode(base: Box<dyn Fn(f32) -> f32>, mode: Mode) -> Easer {
    Box::new(move |t: f32| {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match mode {
            Mode::In => base(t),
            Mode::Out => 1.0 - base(1.0 - t),
            Mode::InOut => {
                if t < 0.5 {
                    base(2.0 * t) / 2.0
                } else {
                    1.0 - base(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    })
}

/// Piecewise parabolic bounce, in its natural `out` orientation.
fn bounce_out(t: f32) -> f32 {
    const B1: f32 = 7.5625;
    if t < 1.0 / 2.75 {
        B1 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        B1 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        B1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        B1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) {
        assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
    }

    #[test]
    fn empty_name_resolves_to_default() {
        let e = ease("").unwrap();
        let named = ease(DEFAULT_EASING).unwrap();
        approx(e(0.3), named(0.3), 1e-6);
    }

    #[test]
    fn unknown_family_is_an_error() {
        let err = ease("wobble-out").err().expect("unknown family should fail");
        assert_eq!(
            err,
            TweenError::UnknownEasing {
                name: "wobble-out".to_string()
            }
        );
    }

    #[test]
    fn endpoints_are_exact_for_every_family() {
        for name in [
            "linear", "quad", "cubic", "poly", "sin", "exp", "circle", "back", "elastic",
            "bounce", "cubic-in-out", "quad-out", "bounce-out", "elastic-in-out",
        ] {
            let e = ease(name).unwrap();
            approx(e(0.0), 0.0, 1e-6);
            approx(e(1.0), 1.0, 1e-6);
            // clamp past the domain
            approx(e(1.5), 1.0, 1e-6);
            approx(e(-0.5), 0.0, 1e-6);
        }
    }

    #[test]
    fn modes_derive_from_in_shape() {
        let quad_in = ease("quad").unwrap();
        let quad_out = ease("quad-out").unwrap();
        let quad_in_out = ease("quad-in-out").unwrap();
        approx(quad_in(0.25), 0.0625, 1e-6);
        approx(quad_out(0.75), 1.0 - 0.0625, 1e-6);
        approx(quad_in_out(0.5), 0.5, 1e-6);
        approx(quad_in_out(0.25), quad_in(0.5) / 2.0, 1e-6);
    }

    #[test]
    fn poly_uses_exponent_parameter() {
        let cubic = ease("cubic").unwrap();
        let poly3 = ease_with("poly", 3.0, 0.0).unwrap();
        approx(poly3(0.6), cubic(0.6), 1e-5);
    }
}
