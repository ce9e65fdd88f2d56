use project_art::core::rng::SeededRandom;
use project_art::{derive_seed, generate_project_image, Domain, Seed};
use regex::Regex;
use std::collections::HashSet;

const NAMES: [&str; 8] = [
    "Holden",
    "Antarctic",
    "ASIC",
    "DCCEEW",
    "Border Force",
    "University",
    "Icon Water",
    "MDBA",
];

fn shape_count(svg: &str) -> usize {
    svg.matches("<circle ").count() + svg.matches("<rect x=").count()
}

fn ids(svg: &str) -> HashSet<String> {
    let re = Regex::new(r#"id="([^"]+)""#).unwrap();
    re.captures_iter(svg).map(|c| c[1].to_string()).collect()
}

#[test]
fn end_to_end_safety_holden() {
    let first = generate_project_image("safety", "Holden", 500.0, 300.0);
    let second = generate_project_image("safety", "Holden", 500.0, 300.0);

    assert_eq!(first, second);
    assert_eq!(first.matches("<linearGradient ").count(), 1);
    assert_eq!(first.matches("<filter ").count(), 1);
    let shapes = shape_count(&first);
    assert!((4..=7).contains(&shapes), "drew {} shapes", shapes);
}

#[test]
fn output_is_deterministic_for_every_domain() {
    for domain in ["safety", "regulatory", "social", "education", "other"] {
        for name in NAMES {
            for (w, h) in [(500.0, 300.0), (800.0, 280.0), (333.5, 120.25)] {
                assert_eq!(
                    generate_project_image(domain, name, w, h),
                    generate_project_image(domain, name, w, h)
                );
            }
        }
    }
}

#[test]
fn fallback_is_regulatory() {
    for name in NAMES {
        assert_eq!(
            generate_project_image("nonexistent-domain", name, 500.0, 300.0),
            generate_project_image("regulatory", name, 500.0, 300.0)
        );
    }
}

#[test]
fn domains_are_distinct_for_a_fixed_seed() {
    for seed in [0, 1, 2183, 99_999] {
        let outputs: HashSet<String> = Domain::ALL
            .iter()
            .map(|d| d.generate(Seed(seed), 500.0, 300.0))
            .collect();
        assert_eq!(outputs.len(), 4);
    }
}

#[test]
fn seed_correctness() {
    assert_eq!(derive_seed(""), Seed(0));
    assert_eq!(derive_seed("A"), Seed(65));
    assert_eq!(derive_seed("AB"), Seed(197));
}

#[test]
fn rng_correctness() {
    let mut rng = SeededRandom::new(Seed(1));
    assert_eq!(rng.next(), 58_598.0 / 233_280.0);
}

#[test]
fn shape_counts_stay_in_documented_ranges() {
    for seed in 0..3_000u64 {
        let seed = Seed(seed);

        let safety = Domain::Safety.generate(seed, 500.0, 300.0);
        assert!((4..=7).contains(&shape_count(&safety)));

        let regulatory = Domain::Regulatory.generate(seed, 500.0, 300.0);
        assert!((5..=9).contains(&shape_count(&regulatory)));

        let social = Domain::Social.generate(seed, 500.0, 300.0);
        assert!((4..=7).contains(&social.matches("<circle ").count()));
        assert!((2..=4).contains(&social.matches("<path ").count()));

        let education = Domain::Education.generate(seed, 500.0, 300.0);
        assert!((5..=9).contains(&shape_count(&education)));
    }
}

#[test]
fn definition_ids_never_collide_across_seeds() {
    for domain in Domain::ALL {
        for (a, b) in [(12, 123), (1, 11), (2183, 218), (0, 10)] {
            let left = ids(&domain.generate(Seed(a), 500.0, 300.0));
            let right = ids(&domain.generate(Seed(b), 500.0, 300.0));
            assert!(left.is_disjoint(&right), "{} seeds {} / {}", domain, a, b);
            assert!(left.iter().all(|id| id.ends_with(&format!("-{}", a))));
        }
    }
}

#[test]
fn concurrent_calls_do_not_interfere() {
    let expected: Vec<String> = NAMES
        .iter()
        .map(|n| generate_project_image("social", n, 500.0, 300.0))
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                NAMES
                    .iter()
                    .map(|n| generate_project_image("social", n, 500.0, 300.0))
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn definitions_precede_drawables() {
    for domain in Domain::ALL {
        let svg = domain.generate(Seed(77), 500.0, 300.0);
        let defs_end = svg.find("</defs>").unwrap();
        let first_drawable = svg.find("<rect ").unwrap();
        assert!(defs_end < first_drawable);
        assert!(svg.starts_with(r#"<svg width="500" height="300" xmlns="http://www.w3.org/2000/svg"><defs>"#));
    }
}
