//! Social / community: teal field, overlapping circles and a few broad
//! flowing strokes.

use super::{CountRange, Palette, PatternSpec, Span};
use crate::core::rng::SeededRandom;
use crate::core::svg::{self, js_number, Element, NoiseSpec, RadialAccent, SvgDocument};
use crate::domain::model::Seed;

pub const RECIPE: PatternSpec = PatternSpec {
    palette: Palette {
        gradient_from: "#0d9488",
        gradient_to: "#065f46",
        accent: Some(RadialAccent {
            cx: "70%",
            cy: "70%",
            color: "#14b8a6",
            opacity: "0.3",
            fade_to: "#065f46",
        }),
        shape_fill: "#14b8a6",
        secondary_fill: Some("#5eead4"),
    },
    noise: NoiseSpec {
        base_frequency: "0.7",
        octaves: 2,
        blend: false,
    },
    texture_opacity: "0.02",
    shapes: CountRange::new(4, 4),
    curves: Some(CURVES),
    opacity: Span::new(0.1, 0.15),
    rotation_spread: None,
};

const CURVES: CountRange = CountRange::new(2, 3);
const CIRCLE_RADIUS: Span = Span::new(60.0, 100.0);
const STROKE_WIDTH: Span = Span::new(30.0, 50.0);
const CURVE_OPACITY: Span = Span::new(0.08, 0.12);

pub fn generate(seed: Seed, width: f64, height: f64) -> String {
    compose(seed, width, height).render()
}

pub fn compose(seed: Seed, width: f64, height: f64) -> SvgDocument {
    let mut rng = SeededRandom::new(seed);
    let mut doc = SvgDocument::new(width, height);

    let gradient_id = format!("social-grad-{}", seed);
    let radial_id = format!("social-radial-{}", seed);
    let noise_id = format!("social-noise-{}", seed);

    doc.define(svg::diagonal_gradient(
        gradient_id.clone(),
        RECIPE.palette.gradient_from,
        RECIPE.palette.gradient_to,
    ));
    if let Some(accent) = &RECIPE.palette.accent {
        doc.define(svg::radial_gradient(radial_id.clone(), accent));
    }
    doc.define(svg::noise_filter(noise_id.clone(), &RECIPE.noise));

    doc.draw(svg::full_bounds_rect(width, height, svg::url_ref(&gradient_id)));
    doc.draw(svg::full_bounds_rect(width, height, svg::url_ref(&radial_id)));

    let circles = RECIPE.shapes.sample(rng.next());
    for _ in 0..circles {
        doc.draw(circle(&mut rng, width, height));
    }

    // curve count is drawn only after every circle
    let curves = CURVES.sample(rng.next());
    for _ in 0..curves {
        doc.draw(curve(&mut rng, width, height));
    }

    doc.draw(svg::texture_rect(width, height, RECIPE.texture_opacity, &noise_id));
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

fn point(rng: &mut SeededRandom, width: f64, height: f64) -> String {
    let x = rng.next() * width;
    let y = rng.next() * height;
    format!("{},{}", js_number(x), js_number(y))
}

fn curve(rng: &mut SeededRandom, width: f64, height: f64) -> Element {
    let start = point(rng, width, height);
    let control1 = point(rng, width, height);
    let control2 = point(rng, width, height);
    let end = point(rng, width, height);
    let stroke_width = STROKE_WIDTH.sample(rng.next());
    let opacity = CURVE_OPACITY.sample(rng.next());

    Element::new("path")
        .attr("d", format!("M{} C{} {} {}", start, control1, control2, end))
        .attr("stroke", RECIPE.palette.secondary_fill.unwrap_or(RECIPE.palette.shape_fill))
        .num("stroke-width", stroke_width)
        .attr("fill", "none")
        .num("opacity", opacity)
        .attr("stroke-linecap", "round")
}
