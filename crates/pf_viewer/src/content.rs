//! Text and figures shown on the portfolio pages.

pub const TYPING_PHRASES: [&str; 4] = [
    "Charlie Old",
    "Full Stack Developer",
    "Problem Solver",
    "Code Enthusiast",
];

/// Lines of the hero block, revealed one after the other once loading ends
pub const HERO_LINES: [&str; 4] = [
    "Hello, I'm",
    "I build fast, friendly software for the web and the desktop.",
    "Currently open to new opportunities.",
    "View my work  |  Get in touch",
];

pub const CODE_WINDOW: &str = r#"const developer = {
    name: "Charlie Old",
    skills: ["Rust", "TypeScript", "SQL"],
    coffee: Infinity,
};"#;

pub const ABOUT: [&str; 2] = [
    "I'm a developer who enjoys turning rough ideas into polished products.",
    "When I'm not coding I'm reading about compilers or out on a long bike ride.",
];

pub struct Stat {
    pub element: &'static str,
    pub label: &'static str,
    pub target: u64,
}

pub const STATS: [Stat; 3] = [
    Stat {
        element: "stat-years",
        label: "Years of experience",
        target: 5,
    },
    Stat {
        element: "stat-projects",
        label: "Projects completed",
        target: 42,
    },
    Stat {
        element: "stat-coffee",
        label: "Cups of coffee",
        target: 1234,
    },
];

pub struct Skill {
    pub element: &'static str,
    pub name: &'static str,
    pub percent: u8,
}

pub const SKILLS: [Skill; 5] = [
    Skill {
        element: "skill-rust",
        name: "Rust",
        percent: 90,
    },
    Skill {
        element: "skill-typescript",
        name: "TypeScript",
        percent: 85,
    },
    Skill {
        element: "skill-sql",
        name: "SQL",
        percent: 75,
    },
    Skill {
        element: "skill-css",
        name: "CSS",
        percent: 70,
    },
    Skill {
        element: "skill-devops",
        name: "DevOps",
        percent: 60,
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Trailhead",
        description: "Route planner for cyclists with offline maps.",
        tech: "Rust · WebAssembly · PostGIS",
    },
    Project {
        title: "Ledgerly",
        description: "Small-business bookkeeping with bank imports.",
        tech: "TypeScript · React · SQL",
    },
    Project {
        title: "Pulse",
        description: "Self-hosted uptime monitor with alerting.",
        tech: "Rust · Tokio · Grafana",
    },
];

pub const CONTACT_METHODS: [(&str, &str); 3] = [
    ("Email", "charlie@example.com"),
    ("GitHub", "github.com/charlie-old"),
    ("LinkedIn", "linkedin.com/in/charlie-old"),
];

/// Floating background shapes drawn with a parallax offset
pub const SHAPES: usize = 4;
