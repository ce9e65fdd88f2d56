//! Education / research: indigo field mixing soft circles with tilted
//! rounded squares.

use super::{sample_rotation, CountRange, Palette, PatternSpec, Span};
use crate::core::rng::SeededRandom;
use crate::core::svg::{self, Element, NoiseSpec, RadialAccent, SvgDocument};
use crate::domain::model::Seed;

pub const RECIPE: PatternSpec = PatternSpec {
    palette: Palette {
        gradient_from: "#6366f1",
        gradient_to: "#312e81",
        accent: Some(RadialAccent {
            cx: "50%",
            cy: "50%",
            color: "#a78bfa",
            opacity: "0.25",
            fade_to: "#312e81",
        }),
        shape_fill: "#a78bfa",
        secondary_fill: Some("#c4b5fd"),
    },
    noise: NoiseSpec {
        base_frequency: "0.85",
        octaves: 3,
        blend: false,
    },
    texture_opacity: "0.02",
    shapes: CountRange::new(5, 5),
    curves: None,
    opacity: Span::new(0.1, 0.15),
    rotation_spread: Some(ROTATION_SPREAD),
};

const ROTATION_SPREAD: f64 = 20.0;
const CIRCLE_THRESHOLD: f64 = 0.6;
const CIRCLE_RADIUS: Span = Span::new(50.0, 90.0);
const SQUARE_SIDE: Span = Span::new(70.0, 120.0);
const SQUARE_REACH: f64 = 0.8;

pub fn generate(seed: Seed, width: f64, height: f64) -> String {
    compose(seed, width, height).render()
}

pub fn compose(seed: Seed, width: f64, height: f64) -> SvgDocument {
    let mut rng = SeededRandom::new(seed);
    let mut doc = SvgDocument::new(width, height);

    let gradient_id = format!("edu-grad-{}", seed);
    let radial_id = format!("edu-radial-{}", seed);
    let noise_id = format!("edu-noise-{}", seed);

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

    let shapes = RECIPE.shapes.sample(rng.next());
    for _ in 0..shapes {
        let shape = if rng.next() > CIRCLE_THRESHOLD {
            circle(&mut rng, width, height)
        } else {
            square(&mut rng, width, height)
        };
        doc.draw(shape);
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
        .attr("fill", RECIPE.palette.secondary_fill.unwrap_or(RECIPE.palette.shape_fill))
        .num("opacity", opacity)
}

fn square(rng: &mut SeededRandom, width: f64, height: f64) -> Element {
    let x = rng.next() * width * SQUARE_REACH;
    let y = rng.next() * height * SQUARE_REACH;
    let size = SQUARE_SIDE.sample(rng.next());
    let opacity = RECIPE.opacity.sample(rng.next());
    let rotation = sample_rotation(ROTATION_SPREAD, rng.next());

    Element::new("rect")
        .num("x", x)
        .num("y", y)
        .num("width", size)
        .num("height", size)
        .attr("fill", RECIPE.palette.shape_fill)
        .num("opacity", opacity)
        .attr("rx", "16")
        .attr("transform", svg::rotate_about(rotation, x + size / 2.0, y + size / 2.0))
}
