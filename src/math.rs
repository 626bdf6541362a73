//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from a 3x3 matrix. The components are treated as a
/// row vector, so `m11, m21, m31` are the factors producing the first output
/// component.
#[allow(clippy::too_many_arguments)]
pub fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, from: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(from.0, from.1, from.2));
    Components(x, y, z)
}

pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Wrap a hue expressed in turns into [0..1).
pub fn normalize_hue<T: Float>(hue: T) -> T {
    let wrapped = hue - hue.floor();
    // Rounding can land a tiny negative hue on exactly one turn.
    if wrapped >= T::one() {
        T::zero()
    } else {
        wrapped
    }
}

/// Interpolate between two hues, in turns, along the shorter arc.
pub fn lerp_hue<T: Float>(a: T, b: T, t: T) -> T {
    let half = T::one() / (T::one() + T::one());
    let mut delta = b - a;
    if delta > half {
        delta = delta - T::one();
    } else if delta < -half {
        delta = delta + T::one();
    }
    normalize_hue(a + delta * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_component_eq;

    #[test]
    fn identity_transform() {
        let m = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(
            transform(&m, Components(0.1, 0.2, 0.3)),
            Components(0.1, 0.2, 0.3)
        );
    }

    #[test]
    fn transform_uses_row_vectors() {
        // The first output sums the first column.
        #[rustfmt::skip]
        let m = transform_3x3(
            1.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
        );
        let Components(x, y, z) = transform(&m, Components(0.1, 0.2, 0.3));
        assert_component_eq!(x, 0.6);
        assert_component_eq!(y, 0.0);
        assert_component_eq!(z, 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_component_eq!(lerp::<Component>(0.2, 0.6, 0.0), 0.2);
        assert_component_eq!(lerp::<Component>(0.2, 0.6, 1.0), 0.6);
        assert_component_eq!(lerp::<Component>(0.2, 0.6, 0.5), 0.4);
    }

    #[test]
    fn hue_wraps() {
        assert_component_eq!(normalize_hue::<Component>(1.25), 0.25);
        assert_component_eq!(normalize_hue::<Component>(-0.25), 0.75);
        assert_eq!(normalize_hue::<Component>(1.0), 0.0);
    }

    #[test]
    fn hue_takes_the_short_way_around() {
        assert_component_eq!(lerp_hue::<Component>(0.9, 0.1, 0.25), 0.95);
        assert_component_eq!(lerp_hue::<Component>(0.9, 0.1, 0.75), 0.05);
        assert_component_eq!(lerp_hue::<Component>(0.1, 0.9, 0.25), 0.05);
        assert_component_eq!(lerp_hue::<Component>(0.2, 0.4, 0.5), 0.3);
    }
}
