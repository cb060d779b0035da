// src/fakes/text.rs
//! Word-bank text generation for fake articles and users.

use super::rng::FakeRng;

pub use crate::infrastructure::util::slugify;

const BLOG_CATEGORIES: [&str; 9] = [
    "ASP.NET Core",
    "Blazor Server",
    "Blazor WebAssembly",
    "C# Programming",
    "Entity Framework Core (EF Core)",
    ".NET MAUI",
    "General Programming",
    "Web Development",
    "Other .NET Topics",
];

// Every entry is at most 12 characters so generated titles and sentences stay
// well under the article length ceilings.
const WORDS: &[&str] = &[
    "synergy", "framework", "paradigm", "leverage", "component", "pipeline", "render",
    "scalable", "robust", "dynamic", "holistic", "iterative", "pragmatic", "modular",
    "strategic", "emergent", "baseline", "workflow", "platform", "metrics", "deploy",
    "refactor", "interface", "compose", "abstract", "migrate", "observe", "capacity",
    "delivery", "momentum", "threshold", "alignment", "insight", "feedback", "runtime",
    "template", "outcome", "roadmap", "incentive", "blueprint", "catalyst", "endpoint",
    "schema", "storage", "session", "document", "velocity", "quality", "sustain",
    "validate", "optimize", "integrate", "evaluate", "restructure", "consolidate",
    "the", "a", "of", "for", "with", "across", "within", "beyond", "through", "and",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Brian", "Claire", "Dennis", "Edsger", "Frances", "Grace",
    "Hedy", "Ivan", "Joan", "Ken", "Linus", "Margaret", "Niklaus", "Olga", "Radia",
    "Sophie", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Cerf", "Dijkstra", "Engelbart", "Floyd", "Goldberg", "Hopper",
    "Iverson", "Kay", "Lamport", "Liskov", "Hamilton", "Perlman", "Ritchie", "Stroustrup",
    "Thompson", "Wilson", "Wirth", "Zuse",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "blog.test"];

/// The fixed set of blog category names.
pub const fn blog_categories() -> &'static [&'static str] {
    &BLOG_CATEGORIES
}

pub fn category_name(rng: &mut FakeRng) -> String {
    (*rng.pick(&BLOG_CATEGORIES)).to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn words(rng: &mut FakeRng, count: u32) -> Vec<&'static str> {
    (0..count).map(|_| *rng.pick(WORDS)).collect()
}

/// Three to seven capitalised words.
pub fn title(rng: &mut FakeRng) -> String {
    let count = rng.range(3, 8);
    words(rng, count)
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Six to thirteen words, capitalised and closed with a full stop.
pub fn sentence(rng: &mut FakeRng) -> String {
    let count = rng.range(6, 14);
    let body = words(rng, count).join(" ");
    format!("{}.", capitalize(&body))
}

/// A markdown document: a heading followed by `paragraphs` paragraphs,
/// never longer than `max_chars`.
pub fn markdown(rng: &mut FakeRng, paragraphs: u32, max_chars: usize) -> String {
    let mut out = format!("# {}", title(rng));
    for _ in 0..paragraphs {
        let sentences = rng.range(2, 5);
        let paragraph = (0..sentences)
            .map(|_| sentence(rng))
            .collect::<Vec<_>>()
            .join(" ");
        if out.chars().count() + paragraph.chars().count() + 2 > max_chars {
            break;
        }
        out.push_str("\n\n");
        out.push_str(&paragraph);
    }
    out
}

pub fn picsum_url(rng: &mut FakeRng) -> String {
    format!("https://picsum.photos/640/480/?image={}", rng.range(0, 1000))
}

pub fn full_name(rng: &mut FakeRng) -> (String, String) {
    let first = (*rng.pick(FIRST_NAMES)).to_string();
    let last = (*rng.pick(LAST_NAMES)).to_string();
    (first, last)
}

pub fn email(rng: &mut FakeRng, first: &str, last: &str) -> String {
    let domain = rng.pick(EMAIL_DOMAINS);
    let suffix = rng.range(0, 100);
    format!(
        "{}.{}{suffix}@{domain}",
        first.to_lowercase(),
        last.to_lowercase()
    )
}
