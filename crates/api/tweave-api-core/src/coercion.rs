//! Coercion helpers between Value shapes.
//! Fail-soft: unconvertible inputs collapse to a neutral scalar/vector
//! rather than erroring, mirroring step-style fallbacks elsewhere.

use crate::Value;

/// Attempt to coerce a Value into a scalar f32.
/// Rules:
/// - Float -> its value
/// - Bool -> 1.0 / 0.0
/// - Vec2/3/4, ColorRgba -> first component
/// - Vector -> first element or 0.0 if empty
/// - Text -> 0.0
pub fn to_float(v: &Value) -> f32 {
    match v {
        Value::Float(f) => *f,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Vec2(a) => a[0],
        Value::Vec3(a) => a[0],
        Value::Vec4(a) => a[0],
        Value::ColorRgba(a) => a[0],
        Value::Vector(vec) => vec.first().copied().unwrap_or(0.0),
        Value::Text(_) => 0.0,
    }
}

/// Convert a Value into a Vec<f32> (generic vector).
/// - VecN / ColorRgba -> vector of components
/// - Float -> single-element vec
/// - Bool -> single 0/1
/// - Vector -> clone
/// - Text -> empty
pub fn to_vector(v: &Value) -> Vec<f32> {
    match v {
        Value::Float(f) => vec![*f],
        Value::Bool(b) => vec![if *b { 1.0 } else { 0.0 }],
        Value::Vec2(a) => a.to_vec(),
        Value::Vec3(a) => a.to_vec(),
        Value::Vec4(a) => a.to_vec(),
        Value::ColorRgba(a) => a.to_vec(),
        Value::Vector(vec) => vec.clone(),
        Value::Text(_) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_float_picks_first_component() {
        assert_eq!(to_float(&Value::f(2.5)), 2.5);
        assert_eq!(to_float(&Value::vec3(7.0, 8.0, 9.0)), 7.0);
        assert_eq!(to_float(&Value::Bool(true)), 1.0);
        assert_eq!(to_float(&Value::Vector(vec![])), 0.0);
    }

    #[test]
    fn to_vector_flattens_components() {
        assert_eq!(to_vector(&Value::vec2(1.0, 2.0)), vec![1.0, 2.0]);
        assert_eq!(to_vector(&Value::text("nope")), Vec::<f32>::new());
    }
}
