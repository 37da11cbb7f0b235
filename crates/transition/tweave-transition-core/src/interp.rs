//! Interpolator construction over Value kinds.
//!
//! `interpolate` binds a captured (from, to) pair into a reusable
//! `t -> Value` closure:
//! - numeric kinds blend component-wise with an unclamped lerp
//! - `Vector` blends element-wise when lengths match
//! - `Bool`/`Text` step: the old value holds until t reaches 1
//! - mismatched kinds hold the left value (fail-soft)

use tweave_api_core::Value;

/// Bound interpolator from a captured endpoint pair.
pub type Interpolator = Box<dyn Fn(f32) -> Value>;

/// Linear interpolation of scalars. Deliberately unclamped: easing curves
/// own the domain, and overshooting curves rely on extrapolation.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[inline]
pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

/// Blend a pair of values at progress t.
pub fn blend(a: &Value, b: &Value, t: f32) -> Value {
    match (a, b) {
        (Value::Float(va), Value::Float(vb)) => Value::Float(lerp_f32(*va, *vb, t)),
        (Value::Vec2(va), Value::Vec2(vb)) => Value::Vec2(lerp_vec2(*va, *vb, t)),
        (Value::Vec3(va), Value::Vec3(vb)) => Value::Vec3(lerp_vec3(*va, *vb, t)),
        (Value::Vec4(va), Value::Vec4(vb)) => Value::Vec4(lerp_vec4(*va, *vb, t)),
        (Value::ColorRgba(ca), Value::ColorRgba(cb)) => Value::ColorRgba(lerp_vec4(*ca, *cb, t)),
        (Value::Vector(va), Value::Vector(vb)) if va.len() == vb.len() => Value::Vector(
            va.iter()
                .zip(vb.iter())
                .map(|(x, y)| lerp_f32(*x, *y, t))
                .collect(),
        ),
        (Value::Bool(_), Value::Bool(_)) | (Value::Text(_), Value::Text(_)) => {
            step(a, b, t)
        }
        // Fallback: if kinds mismatch, hold left (fail-soft).
        _ => a.clone(),
    }
}

/// Step interpolation: hold the old value until completion.
#[inline]
fn step(a: &Value, b: &Value, t: f32) -> Value {
    if t >= 1.0 {
        b.clone()
    } else {
        a.clone()
    }
}

/// Build a bound interpolator from a captured endpoint pair.
pub fn interpolate(from: &Value, to: &Value) -> Interpolator {
    let from = from.clone();
    let to = to.clone();
    Box::new(move |t| blend(&from, &to, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_endpoints_and_midpoint() {
        let f = interpolate(&Value::f(0.0), &Value::f(100.0));
        assert_eq!(f(0.0), Value::f(0.0));
        assert_eq!(f(0.5), Value::f(50.0));
        assert_eq!(f(1.0), Value::f(100.0));
    }

    #[test]
    fn lerp_is_unclamped() {
        let f = interpolate(&Value::f(0.0), &Value::f(10.0));
        assert_eq!(f(1.2), Value::f(12.0));
    }

    #[test]
    fn text_steps_at_completion() {
        let f = interpolate(&Value::text("old"), &Value::text("new"));
        assert_eq!(f(0.999), Value::text("old"));
        assert_eq!(f(1.0), Value::text("new"));
    }

    #[test]
    fn mismatched_kinds_hold_left() {
        let f = interpolate(&Value::f(1.0), &Value::text("nope"));
        assert_eq!(f(1.0), Value::f(1.0));
    }

    #[test]
    fn vector_blends_when_lengths_match() {
        let f = interpolate(
            &Value::Vector(vec![0.0, 10.0]),
            &Value::Vector(vec![10.0, 0.0]),
        );
        assert_eq!(f(0.5), Value::Vector(vec![5.0, 5.0]));

        let mismatched = interpolate(&Value::Vector(vec![0.0]), &Value::Vector(vec![1.0, 2.0]));
        assert_eq!(mismatched(0.5), Value::Vector(vec![0.0]));
    }
}
