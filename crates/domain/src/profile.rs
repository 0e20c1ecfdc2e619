//! Static résumé records
//!
//! Everything the pages show lives here as constant data.

use crate::content::Percentage;

/// A row of the personal data grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalField {
    /// Row label including the trailing colon.
    pub label: &'static str,
    /// Row value.
    pub value: &'static str,
}

/// A career timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Date range, newest first.
    pub period: &'static str,
    /// Position title.
    pub title: &'static str,
    /// Employer.
    pub company: &'static str,
    /// Short description of the role.
    pub description: &'static str,
}

/// A skill with a self-assessed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Skill name.
    pub name: &'static str,
    /// Self-assessed level.
    pub level: Percentage,
}

impl Skill {
    /// Creates a skill, clamping the level to `0..=100`.
    #[must_use]
    pub const fn new(name: &'static str, level: i32) -> Self {
        Self {
            name,
            level: Percentage::new(level),
        }
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Project name.
    pub title: &'static str,
    /// What the project is.
    pub description: &'static str,
    /// Comma separated technology list.
    pub technologies: &'static str,
}

/// A contact channel shown as a link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    /// Button label.
    pub label: &'static str,
    /// Web URL or bare e-mail address.
    pub target: &'static str,
}

/// Home page headline.
pub const WELCOME: &str = "Welcome to my interactive application!";

/// Home page subtitle.
pub const TAGLINE: &str = "My professional application";

/// Home page description paragraph.
pub const INTRODUCTION: &str = "This interactive application app showcases my qualifications,\n\
Experience and projects in a modern and innovative way.\n\
\n\
Use the navigation on the left to learn more about me.";

/// Personal data rows.
pub const PERSONAL_DATA: [PersonalField; 6] = [
    PersonalField {
        label: "Name:",
        value: "Steven Dias Carrilho",
    },
    PersonalField {
        label: "Birthday:",
        value: "08.03.1991",
    },
    PersonalField {
        label: "Nationality:",
        value: "Portugal",
    },
    PersonalField {
        label: "Residence:",
        value: "Soutosa, Moimenta da Beira, Portugal",
    },
    PersonalField {
        label: "E-Mail:",
        value: "steven.dias.carrilho@gmail.com",
    },
    PersonalField {
        label: "Phone:",
        value: "928044197",
    },
];

/// Career history, newest first.
pub const TIMELINE: [TimelineEntry; 3] = [
    TimelineEntry {
        period: "2022 - Now",
        title: "1stL Support for Zeiss",
        company: "FujitsuPT",
        description: "First Line Support, Trainer for Newcomers",
    },
    TimelineEntry {
        period: "2022 - 2022",
        title: "1stL Support for Philips HUE",
        company: "Webhelp",
        description: "Customer support for smart home infrastructure",
    },
    TimelineEntry {
        period: "2022 - 2013",
        title: "Waiter in England, Portugal, Italy, Switzerland",
        company: "Various Hotels",
        description: "Various Restaurants",
    },
];

/// Skills in display order.
pub const SKILLS: [Skill; 9] = [
    Skill::new("Java", 45),
    Skill::new("JavaFX", 25),
    Skill::new("Python", 60),
    Skill::new("Rust", 30),
    Skill::new("Maven / Gradle", 20),
    Skill::new("REST APIs", 0),
    Skill::new("Cyber Security", 75),
    Skill::new("Windows Admin", 40),
    Skill::new("Debuging", 35),
];

/// Portfolio projects.
pub const PROJECTS: [Project; 1] = [Project {
    title: "These App for Candidation.",
    description: "This application was developed as part of my job application process. \
It serves as an interactive portfolio to showcase my qualifications, experience and projects \
in a modern and innovative way. The app is built using JavaFX and features a dark mode theme, \
smooth animations and a user-friendly interface.",
    technologies: "Java, JavaFX, UI/UX Design",
}];

/// Intro line above the contact buttons.
pub const CONTACT_INTRO: &str = "Please feel free to contact me via the following channels:";

/// Contact channels.
pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "📧 Send E-Mail",
        target: "steven.carrilho@fujitsu.com",
    },
    ContactLink {
        label: "🔗 GitHub Profile",
        target: "https://github.com/Sunshine031991",
    },
    ContactLink {
        label: "🔗 LinkedIn Profile",
        target: "https://www.linkedin.com/in/steven-carrilho-923651175/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_in_range() {
        for skill in SKILLS {
            assert!(skill.level.value() <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn skill_new_clamps() {
        assert_eq!(Skill::new("x", 140).level, Percentage::MAX);
        assert_eq!(Skill::new("x", -1).level, Percentage::MIN);
    }

    #[test]
    fn personal_labels_end_with_colon() {
        assert!(PERSONAL_DATA.iter().all(|f| f.label.ends_with(':')));
    }
}
