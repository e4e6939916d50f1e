//! The literal résumé content.
//!
//! Everything the page shows is hand-authored data defined in this module.
//! The records are plain and renderer-agnostic; [`crate::view`] turns them
//! into the markup tree and the PDF typesetter consumes that same tree.
//! There is no loading, mutation or persistence, only [`resume`].

use crate::markup::Span;
use crate::theme::Tone;

/// The résumé owner.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub name: String,
    pub headline: String,
}

/// Contact entry categories, used by the host to pick an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Location,
    Email,
    Phone,
    Link,
}

/// A single contact line in the card header.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    pub kind: ContactKind,
    pub label: String,
    /// Link target; `None` renders as plain text.
    pub href: Option<String>,
}

/// Details of an earlier role held at the same organisation.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviousRole {
    pub title: String,
    pub date_range: String,
    pub description: String,
}

/// One work-history entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub title: String,
    /// Employer; `None` for the career-break entry.
    pub organization: Option<String>,
    pub date_range: String,
    /// Tenure summary such as `1 yr 3 mos • On-site`.
    pub tenure: Option<String>,
    pub description: String,
    pub previous_role: Option<PreviousRole>,
    pub tags: Vec<String>,
}

/// One education entry.
#[derive(Clone, Debug, PartialEq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    /// Certifying body and completion date, where recorded.
    pub note: Option<String>,
}

/// One project entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: String,
    pub date_range: String,
    pub description: String,
}

/// The complete résumé content.
#[derive(Clone, Debug, PartialEq)]
pub struct Resume {
    pub person: Person,
    pub contacts: Vec<Contact>,
    /// Summary prose with inline emphasis.
    pub summary: Vec<Span>,
    pub experience: Vec<Job>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    /// Credit line rendered underneath the card.
    pub footer_credit: Vec<Span>,
}

/// Returns the résumé content shown on the page.
pub fn resume() -> Resume {
    Resume {
        person: Person {
            name: "Dhanashri Patil".into(),
            headline: "Software Test Engineer".into(),
        },
        contacts: vec![
            Contact {
                kind: ContactKind::Location,
                label: "Virar, Maharashtra, India".into(),
                href: None,
            },
            Contact {
                kind: ContactKind::Email,
                label: "patil.dhanuu23@gmail.com".into(),
                href: Some("mailto:patil.dhanuu23@gmail.com".into()),
            },
            Contact {
                kind: ContactKind::Phone,
                label: "+91 8237207698".into(),
                href: Some("tel:+918237207698".into()),
            },
            Contact {
                kind: ContactKind::Link,
                label: "linkedin.com/in/patildhanashri".into(),
                href: Some("https://www.linkedin.com/in/patildhanashri".into()),
            },
        ],
        summary: vec![
            Span::new("Results-oriented").toned(Tone::Emerald).semibold(),
            Span::new(
                " software test engineer with expertise in automation and manual testing, \
                 passionate about ensuring ",
            ),
            Span::new("robust and reliable").toned(Tone::Cyan).semibold(),
            Span::new(
                " software releases through rigorous analysis and collaborative teamwork. \
                 Skilled in tools like ",
            ),
            Span::new("Cypress").toned(Tone::EmeraldSoft).semibold(),
            Span::new(" and "),
            Span::new("Selenium").toned(Tone::EmeraldSoft).semibold(),
            Span::new(
                ", with a knack for troubleshooting and process enhancement in Agile \
                 environments. Committed to delivering high-quality outcomes and learning \
                 new technologies to drive team and project success. During a recent career \
                 break, proactively upskilled in ",
            ),
            Span::new("artificial intelligence (AI)")
                .toned(Tone::Cyan)
                .semibold(),
            Span::new(
                " technologies, gaining knowledge in AI-driven testing tools and automation \
                 frameworks to enhance testing efficiency and innovation in future projects.",
            ),
        ],
        experience: vec![
            Job {
                title: "Full-time Parenting (Career Break)".into(),
                organization: None,
                date_range: "Nov 2022 - Present".into(),
                tenure: None,
                description: "After a meaningful pause to embrace marriage and motherhood, \
                              I'm excited to return with renewed energy and a commitment to \
                              upskilling in the latest technologies and AI, ready to \
                              contribute effectively and grow professionally in software \
                              testing."
                    .into(),
                previous_role: None,
                tags: Vec::new(),
            },
            Job {
                title: "Software Test Engineer".into(),
                organization: Some("TechBuzz".into()),
                date_range: "May 2020 - Jul 2021".into(),
                tenure: Some("1 yr 3 mos • On-site".into()),
                description: "Experienced Software Test Engineer with a strong focus on \
                              designing, executing, and maintaining manual and automated \
                              tests for web and mobile applications. Skilled in creating \
                              test plans, identifying defects, collaborating with \
                              cross-functional teams, and ensuring software meets quality \
                              standards. Proficient with testing tools like Selenium and \
                              Appium, with a commitment to improving testing processes and \
                              delivering reliable, user-friendly software solutions."
                    .into(),
                previous_role: None,
                tags: vec![
                    "Software Testing".into(),
                    "Adhoc Testing".into(),
                    "Selenium".into(),
                    "Appium".into(),
                ],
            },
            Job {
                title: "Software Test Engineer".into(),
                organization: Some("Integration Wizards Solutions Private Limited".into()),
                date_range: "Apr 2018 - May 2020".into(),
                tenure: Some("2 yrs 2 mos • Remote".into()),
                description: "Transitioned from Associate Software Test Engineer to Software \
                              Test Engineer with enhanced responsibilities in creating and \
                              executing detailed test plans, identifying defects, and \
                              collaborating with development teams to improve software \
                              quality. Skilled in both manual and automated testing, \
                              contributing to test case design, defect tracking, and basic \
                              team coordination. Continuously developing technical skills in \
                              test automation and programming for stronger QA impact."
                    .into(),
                previous_role: Some(PreviousRole {
                    title: "Associate Software Test Engineer".into(),
                    date_range: "Oct 2017 - Apr 2018".into(),
                    description: "Seasoned UI & Mobile App Tester skilled in ensuring \
                                  seamless user experiences for websites and iOS/Android \
                                  apps. Experienced in manual and automated testing, defect \
                                  tracking, and collaborating with development teams to \
                                  deliver high-quality, user-friendly products. Proficient \
                                  in Selenium, Cypress, and industry-standard QA practices."
                        .into(),
                }),
                tags: vec![
                    "Data Structures".into(),
                    "Test Automation".into(),
                    "Cypress".into(),
                    "Selenium".into(),
                ],
            },
        ],
        education: vec![
            EducationEntry {
                degree: "Bachelor of Engineering - Electrical, Electronics and \
                         Communications Engineering"
                    .into(),
                institution: "VIVA Institute of Technology".into(),
                note: Some("Mumbai University • Jun 2017".into()),
            },
            EducationEntry {
                degree: "Diploma - Electrical, Electronics and Communications Engineering"
                    .into(),
                institution: "Pravin Rohidas Patil College of Diploma Engineering & \
                              Technology"
                    .into(),
                note: Some("Maharashtra State Board of Technical Education • May 2014".into()),
            },
            EducationEntry {
                degree: "Secondary School Certificate".into(),
                institution: "Aryan High School".into(),
                note: None,
            },
        ],
        projects: vec![Project {
            title: "Prototype Model of Electromagnetic Type of Differential Relay".into(),
            date_range: "Aug 2016 - May 2017".into(),
            description: "The objective of this project is to have a clearer visual view of \
                          how a differential relay operates in the industries and how the \
                          fault clearing is done within the relay."
                .into(),
        }],
        skills: vec![
            "Mobile App Testing".into(),
            "Software Test Engineer".into(),
            "UI Testing".into(),
            "Software Quality Assurance".into(),
            "Selenium".into(),
            "Cypress".into(),
            "Appium".into(),
            "Test Automation".into(),
            "Manual Testing".into(),
            "API Testing".into(),
            "Agile Methodology".into(),
            "Defect Tracking".into(),
            "Test Planning".into(),
            "Regression Testing".into(),
            "Data Structures".into(),
            "AI-Powered Testing".into(),
            "Agentic Testing".into(),
            "AI Test Automation".into(),
            "Machine Learning for QA".into(),
            "Intelligent Test Generation".into(),
            "AI-Driven Test Analysis".into(),
            "Automated Test Case Generation".into(),
            "AI Quality Assurance".into(),
            "Predictive Testing".into(),
            "Natural Language Processing for Testing".into(),
        ],
        footer_credit: vec![
            Span::new("Built with "),
            Span::new("Next.js 14").toned(Tone::Emerald),
            Span::new(" + "),
            Span::new("TailwindCSS").toned(Tone::Cyan),
            Span::new(" • Developed by "),
            Span::new("Dhanashri Patil").toned(Tone::Cyan),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn content_has_expected_shape() {
        let resume = resume();
        assert_eq!(resume.person.name, "Dhanashri Patil");
        assert_eq!(resume.contacts.len(), 4);
        assert_eq!(resume.experience.len(), 3);
        assert_eq!(resume.education.len(), 3);
        assert_eq!(resume.projects.len(), 1);
        assert_eq!(resume.skills.len(), 25);
    }

    #[test]
    fn skills_are_distinct() {
        let resume = resume();
        let unique: HashSet<&str> = resume.skills.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), resume.skills.len());
    }

    #[test]
    fn summary_opens_with_emphasis() {
        let resume = resume();
        let lead = &resume.summary[0];
        assert_eq!(lead.text(), "Results-oriented");
        assert_eq!(lead.tone(), Some(Tone::Emerald));
    }

    #[test]
    fn career_break_entry_has_no_organization() {
        let resume = resume();
        let career_break = &resume.experience[0];
        assert!(career_break.organization.is_none());
        assert!(career_break.tags.is_empty());
        assert_eq!(career_break.date_range, "Nov 2022 - Present");
    }

    #[test]
    fn nested_previous_role_is_recorded_once() {
        let resume = resume();
        let with_nested: Vec<_> = resume
            .experience
            .iter()
            .filter(|job| job.previous_role.is_some())
            .collect();
        assert_eq!(with_nested.len(), 1);
        let previous = with_nested[0].previous_role.as_ref().unwrap();
        assert_eq!(previous.title, "Associate Software Test Engineer");
        assert_eq!(previous.date_range, "Oct 2017 - Apr 2018");
    }
}
