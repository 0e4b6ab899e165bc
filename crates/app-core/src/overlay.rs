//! Marquee copy projected for each scroll section.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideContent {
    pub heading: &'static str,
    pub sub: &'static str,
}

/// Slide shown on the screen for a section index; out-of-range indices
/// fall through to the closing slide.
pub fn slide_content(section: usize) -> SlideContent {
    match section {
        0 => SlideContent {
            heading: "Samarth Jagtap",
            sub: "Software Engineer · AI · 3D · Filmmaking",
        },
        1 => SlideContent {
            heading: "Featured Projects",
            sub: "Quickdrop · Winning Data Platform · Travel Discovery App",
        },
        2 => SlideContent {
            heading: "Tech Stack",
            sub: "Rust · WebGPU · Python · Node · Postgres · AWS / GCP",
        },
        _ => SlideContent {
            heading: "Now Casting",
            sub: "Open to internships & collabs — let's build something wild.",
        },
    }
}
