//! Component-wise color mixing for layer gradients.

use rand::Rng;

use crate::types::Color;

use super::defaults;

/// Proportionally mix two colors, component by component.
///
/// Each component interpolates from its smaller endpoint toward its
/// larger one by `factor`, regardless of which input holds the larger
/// value: `mix(a, b, t) == mix(b, a, t)`, not a signed lerp from
/// `inner` to `outer`. Identical inputs are returned unchanged to
/// avoid any rounding drift.
///
/// `factor` is in `[0, 1]` by contract.
pub fn mix(inner: Color, outer: Color, factor: f64) -> Color {
    debug_assert!(
        (0.0..=1.0).contains(&factor),
        "mix factor {factor} outside [0, 1]"
    );
    if inner == outer {
        return inner;
    }

    let a = inner.components();
    let b = outer.components();
    let mut mixed = [0.0; 4];
    for (i, m) in mixed.iter_mut().enumerate() {
        let lo = a[i].min(b[i]);
        let hi = a[i].max(b[i]);
        *m = lo + factor * (hi - lo);
    }
    Color::from_components(mixed)
}

/// Interpolation factor for layer `layer` of `layer_count` total:
/// `layer / (layer_count - 1)`, or 0 for a single layer.
pub fn layer_factor(layer: u32, layer_count: u32) -> f64 {
    if layer_count > 1 {
        f64::from(layer) / f64::from(layer_count - 1)
    } else {
        0.0
    }
}

/// A color with each component sampled independently and uniformly from
/// the 256-bucket discretization of `[0, 1)`.
///
/// No seeding contract; reproducibility is not offered.
pub fn random_color() -> Color {
    let mut rng = rand::thread_rng();
    let mut components = [0.0; 4];
    for c in &mut components {
        *c = f64::from(rng.gen_range(0..defaults::COLOR_BUCKETS))
            / f64::from(defaults::COLOR_BUCKETS);
    }
    Color::from_components(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: Color, b: Color) -> bool {
        a.components()
            .iter()
            .zip(b.components())
            .all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn mix_identical_colors_is_identity() {
        let c = Color::new(0.3, 0.6, 0.9, 0.5);
        for factor in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(mix(c, c, factor), c);
        }
    }

    #[test]
    fn mix_ignores_argument_order() {
        let a = Color::new(0.1, 0.8, 0.3, 1.0);
        let b = Color::new(0.7, 0.2, 0.9, 0.4);
        for factor in [0.0, 0.1, 0.33, 0.5, 0.75, 1.0] {
            assert!(
                close(mix(a, b, factor), mix(b, a, factor)),
                "order-dependent at factor {factor}"
            );
        }
    }

    #[test]
    fn mix_endpoints_take_component_extremes() {
        // a is smaller in hue/brightness, larger in saturation/alpha, so
        // factor 0 picks the minimum of each pair, not simply `a`.
        let a = Color::new(0.1, 0.9, 0.2, 0.8);
        let b = Color::new(0.5, 0.3, 0.6, 0.4);
        assert!(close(mix(a, b, 0.0), Color::new(0.1, 0.3, 0.2, 0.4)));
        assert!(close(mix(a, b, 1.0), Color::new(0.5, 0.9, 0.6, 0.8)));
    }

    #[test]
    fn mix_midpoint() {
        let a = Color::new(0.0, 1.0, 0.0, 1.0);
        let b = Color::new(1.0, 0.0, 1.0, 0.0);
        assert!(close(mix(a, b, 0.5), Color::new(0.5, 0.5, 0.5, 0.5)));
    }

    #[test]
    fn layer_factor_spreads_over_layer_count() {
        assert_eq!(layer_factor(0, 5), 0.0);
        assert_eq!(layer_factor(2, 5), 0.5);
        assert_eq!(layer_factor(4, 5), 1.0);
    }

    #[test]
    fn layer_factor_single_layer_is_zero() {
        assert_eq!(layer_factor(0, 1), 0.0);
    }

    #[test]
    fn random_color_stays_on_the_bucket_grid() {
        for _ in 0..32 {
            for c in random_color().components() {
                assert!((0.0..1.0).contains(&c), "component {c} outside [0, 1)");
                let scaled = c * f64::from(defaults::COLOR_BUCKETS);
                assert!(
                    (scaled - scaled.round()).abs() < EPS,
                    "component {c} not on the 1/{} grid",
                    defaults::COLOR_BUCKETS
                );
            }
        }
    }
}
