// Static narrative content; read-only lookup for the typewriter and finale.

pub const QUOTES: &[&str] = &[
    "Some people come quietly… and change everything.",
    "If feelings had a sound, mine would be your name.",
    "I don’t know when it started, but every small thing reminds me of you.",
    "This isn’t a confession… it’s just my heart being honest.",
    "Feb 2 — I just wanted you to know you matter to me.",
];

#[inline]
pub fn quote(index: usize) -> Option<&'static str> {
    QUOTES.get(index).copied()
}
