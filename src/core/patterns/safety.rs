//! Safety / critical systems: bold blue field with large circles and
//! rounded blocks.

use super::{CountRange, Palette, PatternSpec, Span};
use crate::core::rng::SeededRandom;
use crate::core::svg::{self, Element, NoiseSpec, SvgDocument};
use crate::domain::model::Seed;

pub const RECIPE: PatternSpec = PatternSpec {
    palette: Palette {
        gradient_from: "#1e40af",
        gradient_to: "#0f172a",
        accent: None,
        shape_fill: "#06b6d4",
        secondary_fill: None,
    },
    noise: NoiseSpec {
        base_frequency: "0.9",
        octaves: 4,
        blend: true,
    },
    texture_opacity: "0.03",
    shapes: CountRange::new(4, 4),
    curves: None,
    opacity: Span::new(0.08, 0.12),
    rotation_spread: None,
};

const CIRCLE_RADIUS: Span = Span::new(80.0, 120.0);
const BLOCK_SIDE: Span = Span::new(100.0, 200.0);
const BLOCK_REACH: f64 = 0.7;

pub fn generate(seed: Seed, width: f64, height: f64) -> String {
    compose(seed, width, height).render()
}

pub fn compose(seed: Seed, width: f64, height: f64) -> SvgDocument {
    let mut rng = SeededRandom::new(seed);
    let mut doc = SvgDocument::new(width, height);

    let gradient_id = format!("safety-grad-{}", seed);
    let noise_id = format!("noise-{}", seed);
    doc.define(svg::diagonal_gradient(
        gradient_id.clone(),
        RECIPE.palette.gradient_from,
        RECIPE.palette.gradient_to,
    ));
    doc.define(svg::noise_filter(noise_id.clone(), &RECIPE.noise));

    // texture sits under the shapes here, unlike the other domains
    doc.draw(svg::full_bounds_rect(width, height, svg::url_ref(&gradient_id)));
    doc.draw(svg::texture_rect(width, height, RECIPE.texture_opacity, &noise_id));

    let count = RECIPE.shapes.sample(rng.next());
    for _ in 0..count {
        let shape = if rng.next() > 0.5 {
            circle(&mut rng, width, height)
        } else {
            block(&mut rng, width, height)
        };
        doc.draw(shape);
    }

    doc
}

fn circle(rng: &mut SeededRandom, width: f64, height: f64) -> Element {
    let cx = rng.next() * width;
    let cy = rng.next() * height;
    let r = CIRCLE_RADIUS.sample(rng.next());
    let opacity = RECIPE.opacity.sample(rng.next());
    Element::new("circle")
        .num("cx", cx)
        .num("cy", cy)
        .num("r", r)
        .attr("fill", RECIPE.palette.shape_fill)
        .num("opacity", opacity)
}

fn block(rng: &mut SeededRandom, width: f64, height: f64) -> Element {
    let x = rng.next() * width * BLOCK_REACH;
    let y = rng.next() * height * BLOCK_REACH;
    let w = BLOCK_SIDE.sample(rng.next());
    let h = BLOCK_SIDE.sample(rng.next());
    let opacity = RECIPE.opacity.sample(rng.next());
    Element::new("rect")
        .num("x", x)
        .num("y", y)
        .num("width", w)
        .num("height", h)
        .attr("fill", RECIPE.palette.shape_fill)
        .num("opacity", opacity)
        .attr("rx", "8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order() {
        let doc = compose(Seed(2183), 500.0, 300.0);
        let body = doc.body();
        assert_eq!(body[0].get("fill"), Some("url(#safety-grad-2183)"));
        assert_eq!(body[1].get("filter"), Some("url(#noise-2183)"));
        assert_eq!(body[1].get("opacity"), Some("0.03"));
        for shape in &body[2..] {
            assert!(matches!(shape.name(), "circle" | "rect"));
            assert_eq!(shape.get("fill"), Some("#06b6d4"));
        }
    }

    #[test]
    fn test_defs_are_gradient_and_filter() {
        let doc = compose(Seed(7), 500.0, 300.0);
        let names: Vec<&str> = doc.defs().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["linearGradient", "filter"]);
        assert_eq!(doc.defs()[1].children().len(), 3);
    }

    #[test]
    fn test_shape_count_within_range() {
        for seed in 0..500 {
            let doc = compose(Seed(seed), 500.0, 300.0);
            let shapes = doc.body().len() as u32 - 2;
            assert!(RECIPE.shapes.contains(shapes), "seed {} drew {}", seed, shapes);
        }
    }

    #[test]
    fn test_opacity_within_range() {
        for seed in 0..200 {
            let doc = compose(Seed(seed), 640.0, 360.0);
            for shape in &doc.body()[2..] {
                let opacity: f64 = shape.get("opacity").unwrap().parse().unwrap();
                assert!(opacity >= RECIPE.opacity.min && opacity < RECIPE.opacity.max() + 1e-12);
            }
        }
    }
}
