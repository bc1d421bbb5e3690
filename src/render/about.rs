//! About section markup.
//!
//! Four independent lists (personal info, skills, education, experience)
//! assembled into one fragment.

use super::markup::{escape_html, render_each};
use crate::models::{AboutConfig, InfoItem, Skill, TimelineEntry};

pub fn render_about(about: &AboutConfig) -> String {
    let intro = &about.intro;
    format!(
        concat!(
            r#"<div class="row"><div class="about-content padd-15">"#,
            r#"<div class="row"><div class="about-text padd-15"><h3>{title} <span>{highlight}</span></h3><p>{description}</p></div></div>"#,
            r#"<div class="row">"#,
            r#"<div class="personal-info padd-15"><div class="row">{info}</div>"#,
            r#"<div class="row"><div class="buttons padd-15"><a href="{cv}" class="btn">Download Cv</a></div></div></div>"#,
            r#"<div class="skills padd-15"><div class="row">{skills}</div></div>"#,
            r#"</div>"#,
            r#"<div class="row">"#,
            r#"<div class="education padd-15"><h3 class="title">Education</h3>{education}</div>"#,
            r#"<div class="experience padd-15"><h3 class="title">Experience</h3>{experience}</div>"#,
            r#"</div>"#,
            r#"</div></div>"#,
        ),
        title = escape_html(&intro.title),
        highlight = escape_html(&intro.highlight),
        description = escape_html(&intro.description),
        info = render_each(&about.personal_info, info_item),
        cv = escape_html(&about.cv_link),
        skills = render_each(&about.skills, skill_item),
        education = timeline(&about.education),
        experience = timeline(&about.experience),
    )
}

fn info_item(info: &InfoItem) -> String {
    format!(
        r#"<div class="info-item padd-15"><p>{} : <span>{}</span></p></div>"#,
        escape_html(&info.label),
        escape_html(&info.value),
    )
}

/// Bar width and label both come from the single `level` value
fn skill_item(skill: &Skill) -> String {
    let level = skill.level;
    format!(
        r#"<div class="skill-item padd-15"><h5>{name}</h5><div class="progress"><div class="progress-in" style="width: {level}%;"></div><div class="skill-porcent">{level}%</div></div></div>"#,
        name = escape_html(&skill.name),
        level = level,
    )
}

fn timeline(entries: &[TimelineEntry]) -> String {
    let rows = render_each(entries, |entry| {
        format!(
            r#"<div class="timeline-item"><div class="circle-dot"></div><h6 class="timeline-date"><i class="fa fa-calendar"></i> {}</h6><h4 class="timeline-title">{}</h4><p class="timeline-text">{}</p></div>"#,
            escape_html(&entry.date),
            escape_html(&entry.title),
            escape_html(&entry.description),
        )
    });
    format!(
        r#"<div class="row"><div class="timeline-box padd-15"><div class="timeline shadow-dark">{}</div></div></div>"#,
        rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intro;

    fn about() -> AboutConfig {
        AboutConfig {
            intro: Intro {
                title: "I'm Ada and".to_string(),
                highlight: "Engineer".to_string(),
                description: "Builds engines.".to_string(),
            },
            personal_info: vec![InfoItem {
                label: "City".to_string(),
                value: "London".to_string(),
            }],
            skills: vec![
                Skill { name: "Rust".to_string(), level: 85 },
                Skill { name: "Math".to_string(), level: 100 },
            ],
            education: vec![TimelineEntry {
                date: "1830 - 1835".to_string(),
                title: "Tutoring".to_string(),
                description: "Mathematics".to_string(),
            }],
            experience: vec![],
            cv_link: "cv.pdf".to_string(),
        }
    }

    #[test]
    fn test_skill_width_matches_label() {
        let html = render_about(&about());
        assert!(html.contains(r#"style="width: 85%;"></div><div class="skill-porcent">85%</div>"#));
        assert!(html.contains(r#"style="width: 100%;"></div><div class="skill-porcent">100%</div>"#));
    }

    #[test]
    fn test_lists_and_intro() {
        let html = render_about(&about());
        assert!(html.contains("<h3>I&#39;m Ada and <span>Engineer</span></h3>"));
        assert!(html.contains("<p>City : <span>London</span></p>"));
        assert!(html.contains(r#"<a href="cv.pdf" class="btn">Download Cv</a>"#));
        assert_eq!(html.matches(r#"<div class="timeline-item">"#).count(), 1);
        assert!(html.contains("1830 - 1835"));
    }

    #[test]
    fn test_empty_about_renders_empty_lists() {
        let html = render_about(&AboutConfig::default());
        assert!(!html.contains("info-item"));
        assert!(!html.contains("skill-item"));
        assert!(!html.contains("timeline-item"));
        assert_eq!(html.matches(r#"<div class="timeline shadow-dark"></div>"#).count(), 2);
    }
}
