//! Government / regulatory: amber field with slightly rotated, stacked
//! document-like sheets.

use super::{sample_rotation, CountRange, Palette, PatternSpec, Span};
use crate::core::rng::SeededRandom;
use crate::core::svg::{self, Element, NoiseSpec, RadialAccent, SvgDocument};
use crate::domain::model::Seed;

pub const RECIPE: PatternSpec = PatternSpec {
    palette: Palette {
        gradient_from: "#92400e",
        gradient_to: "#451a03",
        accent: Some(RadialAccent {
            cx: "30%",
            cy: "30%",
            color: "#d97706",
            opacity: "0.2",
            fade_to: "#451a03",
        }),
        shape_fill: "#d97706",
        secondary_fill: None,
    },
    noise: NoiseSpec {
        base_frequency: "0.8",
        octaves: 3,
        blend: false,
    },
    texture_opacity: "0.02",
    shapes: CountRange::new(5, 5),
    curves: None,
    opacity: Span::new(0.12, 0.18),
    rotation_spread: Some(ROTATION_SPREAD),
};

const ROTATION_SPREAD: f64 = 15.0;
const SHEET_WIDTH: Span = Span::new(120.0, 250.0);
const SHEET_HEIGHT: Span = Span::new(60.0, 120.0);

pub fn generate(seed: Seed, width: f64, height: f64) -> String {
    compose(seed, width, height).render()
}

pub fn compose(seed: Seed, width: f64, height: f64) -> SvgDocument {
    let mut rng = SeededRandom::new(seed);
    let mut doc = SvgDocument::new(width, height);

    let gradient_id = format!("reg-grad-{}", seed);
    let radial_id = format!("reg-radial-{}", seed);
    let noise_id = format!("reg-noise-{}", seed);

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

    let layers = RECIPE.shapes.sample(rng.next());
    for _ in 0..layers {
        doc.draw(sheet(&mut rng, width, height));
    }

    doc.draw(svg::texture_rect(width, height, RECIPE.texture_opacity, &noise_id));
    doc
}

fn sheet(rng: &mut SeededRandom, width: f64, height: f64) -> Element {
    let w = SHEET_WIDTH.sample(rng.next());
    let h = SHEET_HEIGHT.sample(rng.next());
    let x = rng.next() * (width - w);
    let y = rng.next() * (height - h);
    let opacity = RECIPE.opacity.sample(rng.next());
    let rotation = sample_rotation(ROTATION_SPREAD, rng.next());

    Element::new("rect")
        .num("x", x)
        .num("y", y)
        .num("width", w)
        .num("height", h)
        .attr("fill", RECIPE.palette.shape_fill)
        .num("opacity", opacity)
        .attr("rx", "6")
        .attr("transform", svg::rotate_about(rotation, x + w / 2.0, y + h / 2.0))
}
