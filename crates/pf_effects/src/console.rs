use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

pub const BANNER: &str = r#"
    ╔═══════════════════════════════════╗
    ║     Welcome to Charlie's Site!    ║
    ║                                   ║
    ║   Thanks for checking the console ║
    ║   Want to work together?          ║
    ║   Let's connect! 🚀               ║
    ╚═══════════════════════════════════╝
"#;

pub const HIRE_ME: &str = "Hiring me would be a great decision! 💼";

/// Delay before the joke is printed
pub const JOKE_DELAY: Duration = Duration::from_secs(3);

pub const JOKES: [&str; 4] = [
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem! 💡",
    "Why don't programmers like nature? It has too many bugs! 🌿",
    "What's a programmer's favorite hangout place? Foo Bar! 🍺",
];

pub fn random_joke<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOKES.choose(rng).copied().unwrap_or(JOKES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn joke_comes_from_the_list() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert!(JOKES.contains(&random_joke(&mut rng)));
        }
    }

    #[test]
    fn banner_greets() {
        assert!(BANNER.contains("Welcome to Charlie's Site!"));
    }
}
