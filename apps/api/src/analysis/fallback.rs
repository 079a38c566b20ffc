// Fallback Synthesizer: keyword heuristics used when no provider succeeded.
// Pure and deterministic: the same resume text always produces the same record.

use std::collections::HashSet;

use crate::analysis::models::{clamp_score, AnalysisRecord, DetailedAnalysis};

const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Swift", "Kotlin",
    "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring",
    "SQL", "NoSQL", "MongoDB", "MySQL", "PostgreSQL", "Oracle", "Firebase",
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD", "Git", "GitHub",
    "Machine Learning", "AI", "Data Science", "Big Data", "Data Analysis",
    "Project Management", "Agile", "Scrum", "Kanban", "Jira", "Confluence",
    "Leadership", "Communication", "Teamwork", "Problem Solving", "Critical Thinking",
    "Microsoft Office", "Excel", "PowerPoint", "Word", "Outlook",
    "Marketing", "Sales", "Customer Service", "SEO", "SEM", "Content Marketing",
    "Accounting", "Finance", "Budgeting", "Forecasting", "Financial Analysis",
    "HR", "Recruitment", "Talent Management", "Employee Relations", "Training",
];

const GENERIC_SKILLS: &[&str] = &[
    "Communication",
    "Problem Solving",
    "Teamwork",
    "Analytical Thinking",
    "Organization",
];

const ACHIEVEMENT_WORDS: &[&str] = &[
    "achieved", "improved", "increased", "decreased", "reduced", "saved",
    "developed", "created", "implemented", "launched", "led", "managed",
    "award", "recognition", "certificate", "honor", "prize", "scholarship",
    "achievement",
];

const INDUSTRIES: &[&str] = &[
    "Technology", "IT", "Software", "Healthcare", "Finance", "Banking",
    "Education", "Manufacturing", "Retail", "E-commerce", "Marketing",
    "Advertising", "Media", "Entertainment", "Hospitality", "Tourism",
    "Construction", "Real Estate", "Automotive", "Aerospace", "Energy",
    "Telecommunications", "Consulting", "Legal", "Government", "Non-profit",
];

const EDUCATION_WORDS: &[&str] = &[
    "Bachelor", "Master", "PhD", "Doctorate", "BSc", "MSc", "BA", "MA", "MBA",
    "University", "College", "School", "Institute", "Academy",
    "Degree", "Diploma", "Certificate", "Certification", "Graduate", "Undergraduate",
];

const EXPERIENCE_WORDS: &[&str] = &[
    "Experience", "Work", "Job", "Career", "Employment", "Position", "Role",
    "Manager", "Director", "Lead", "Senior", "Junior", "Intern", "Specialist",
    "Coordinator", "Supervisor", "Assistant", "Associate", "Consultant", "Leader",
];

const LANGUAGE_SKILLS: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Swift", "Kotlin",
];
const WEB_SKILLS: &[&str] = &[
    "React", "Angular", "Vue", "HTML", "CSS", "Node.js", "Express", "Django", "Flask",
];
const DATA_SKILLS: &[&str] = &[
    "SQL", "NoSQL", "MongoDB", "MySQL", "PostgreSQL", "Data Analysis", "Machine Learning", "AI",
];

const GENERIC_TITLES: &[&str] = &[
    "Project Manager",
    "Business Analyst",
    "Marketing Specialist",
    "Administrative Assistant",
    "Customer Service Representative",
];

const TITLE_REQUIREMENTS: &[(&str, &[&str])] = &[
    ("Software Developer", &["JavaScript", "Python", "Java", "C#", "Git", "Agile"]),
    ("Software Engineer", &["Data Structures", "Algorithms", "System Design", "CI/CD"]),
    ("Web Developer", &["HTML", "CSS", "JavaScript", "React", "Angular", "Node.js"]),
    ("Frontend Developer", &["HTML", "CSS", "JavaScript", "React", "Vue", "UI/UX"]),
    ("Full Stack Developer", &["Frontend", "Backend", "Database", "API Design"]),
    ("Data Analyst", &["SQL", "Excel", "Data Visualization", "Statistics"]),
    ("Data Engineer", &["SQL", "ETL", "Data Warehousing", "Big Data"]),
    ("Database Administrator", &["SQL", "Database Design", "Performance Tuning"]),
    ("Project Manager", &["Project Management", "Agile", "Scrum", "Leadership"]),
    ("Business Analyst", &["Requirements Analysis", "Process Modeling", "Documentation"]),
    ("Marketing Specialist", &["Digital Marketing", "SEO", "Content Marketing"]),
    ("Administrative Assistant", &["Microsoft Office", "Organization", "Communication"]),
    ("Customer Service Representative", &["Communication", "Problem Solving", "Patience"]),
];

const GENERIC_SKILL_GAPS: &[&str] = &[
    "Industry-specific certifications",
    "Leadership experience",
    "Project management skills",
];

const MAX_SKILLS: usize = 10;
const MAX_ACHIEVEMENTS: usize = 5;
const MAX_INDUSTRIES: usize = 3;
const MAX_JOB_TITLES: usize = 5;
const MAX_SKILL_GAPS: usize = 5;
const BASE_SCORE: i64 = 50;

/// Signals read off the resume text, shared by every derived section.
#[derive(Debug)]
struct TextSignals {
    skills: Vec<String>,
    achievements: Vec<String>,
    industries: Vec<String>,
    has_education: bool,
    has_experience: bool,
    text_len: usize,
}

impl TextSignals {
    fn read(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self {
            skills: extract_skills(&lower),
            achievements: extract_achievements(text),
            industries: matching_terms(&lower, INDUSTRIES)
                .take(MAX_INDUSTRIES)
                .collect(),
            has_education: mentions_any(&lower, EDUCATION_WORDS),
            has_experience: mentions_any(&lower, EXPERIENCE_WORDS),
            text_len: text.chars().count(),
        }
    }
}

pub fn synthesize(resume_text: &str) -> AnalysisRecord {
    let signals = TextSignals::read(resume_text);
    let job_titles = suggest_job_titles(&signals.skills);
    let skill_gaps = suggest_skill_gaps(&signals.skills, &job_titles);
    let areas_to_improve = weaknesses(&signals);
    let profile = professional_profile(&signals);

    let key_achievements = if signals.achievements.is_empty() {
        vec!["No significant achievements could be extracted from your resume. \
              Please add your concrete achievements to your resume."
            .to_string()]
    } else {
        signals.achievements.clone()
    };
    let industry_fit = if signals.industries.is_empty() {
        vec!["Your resume shows a generally professional profile.".to_string()]
    } else {
        vec![format!(
            "Your resume appears suitable for the following industries: {}",
            signals.industries.join(", ")
        )]
    };

    AnalysisRecord {
        summary: profile.clone(),
        strengths: strengths(&signals),
        recommendations: recommendations(&areas_to_improve),
        areas_to_improve,
        skills: signals.skills.clone(),
        resume_score: score(&signals),
        job_titles: job_titles.clone(),
        detailed_analysis: DetailedAnalysis {
            professional_profile: profile,
            key_achievements,
            industry_fit,
            recommended_job_titles: job_titles,
            skill_gaps,
        },
    }
}

fn matching_terms<'a>(lower_text: &'a str, terms: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    terms
        .iter()
        .filter(move |term| lower_text.contains(&term.to_lowercase()))
        .map(|term| term.to_string())
}

fn mentions_any(lower_text: &str, terms: &[&str]) -> bool {
    matching_terms(lower_text, terms).next().is_some()
}

fn extract_skills(lower_text: &str) -> Vec<String> {
    let found: Vec<String> = matching_terms(lower_text, SKILL_VOCABULARY)
        .take(MAX_SKILLS)
        .collect();
    if found.is_empty() {
        GENERIC_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}

fn extract_achievements(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .filter(|sentence| mentions_any(&sentence.to_lowercase(), ACHIEVEMENT_WORDS))
        .take(MAX_ACHIEVEMENTS)
        .map(String::from)
        .collect()
}

fn suggest_job_titles(skills: &[String]) -> Vec<String> {
    let has_any = |category: &[&str]| skills.iter().any(|s| category.contains(&s.as_str()));

    let mut titles: Vec<&str> = Vec::new();
    if has_any(LANGUAGE_SKILLS) {
        titles.extend(["Software Developer", "Software Engineer"]);
    }
    if has_any(WEB_SKILLS) {
        titles.extend(["Web Developer", "Frontend Developer", "Full Stack Developer"]);
    }
    if has_any(DATA_SKILLS) {
        titles.extend(["Data Analyst", "Database Administrator", "Data Engineer"]);
    }
    if titles.is_empty() {
        titles.extend(GENERIC_TITLES);
    }

    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|title| seen.insert(*title))
        .take(MAX_JOB_TITLES)
        .map(String::from)
        .collect()
}

fn suggest_skill_gaps(skills: &[String], job_titles: &[String]) -> Vec<String> {
    let owned: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let mut seen = HashSet::new();

    let gaps: Vec<String> = job_titles
        .iter()
        .filter_map(|title| {
            TITLE_REQUIREMENTS
                .iter()
                .find(|(known, _)| known == title)
                .map(|(_, required)| *required)
        })
        .flatten()
        .filter(|required| seen.insert(**required))
        .filter(|required| !owned.contains(&required.to_lowercase()))
        .take(MAX_SKILL_GAPS)
        .map(|required| required.to_string())
        .collect();

    if gaps.is_empty() {
        GENERIC_SKILL_GAPS.iter().map(|s| s.to_string()).collect()
    } else {
        gaps
    }
}

fn score(signals: &TextSignals) -> i64 {
    let mut score = BASE_SCORE;
    score += (signals.skills.len() as i64 * 2).min(15);
    if signals.has_education {
        score += 10;
    }
    if signals.has_experience {
        score += 10;
    }
    score += (signals.achievements.len() as i64 * 2).min(10);
    score += (signals.text_len as i64 / 500).min(5);
    clamp_score(score)
}

fn professional_profile(signals: &TextSignals) -> String {
    let mut profile = String::from("Your resume has been analyzed. ");
    if !signals.skills.is_empty() {
        let top: Vec<&str> = signals.skills.iter().take(3).map(String::as_str).collect();
        profile.push_str(&format!(
            "You appear to be a professional with skills such as {}. ",
            top.join(", ")
        ));
    }
    if signals.has_experience {
        profile.push_str("Your professional work experience is mentioned in your resume. ");
    }
    if signals.has_education {
        profile.push_str("Your educational background is included in your resume. ");
    }
    if !signals.industries.is_empty() {
        profile.push_str(&format!(
            "Your resume shows experience in the {} industries. ",
            signals.industries.join(", ")
        ));
    }
    profile.push_str("For a more detailed analysis, you can update your resume and try again.");
    profile
}

fn strengths(signals: &TextSignals) -> Vec<String> {
    let mut strengths = Vec::new();
    if signals.skills.len() >= 5 {
        strengths.push("Broad skill set".to_string());
    }
    if let Some(first) = signals.skills.first() {
        strengths.push(format!("Expertise in {first}"));
    }
    if signals.has_education {
        strengths.push("Educational background".to_string());
    }
    if signals.has_experience {
        strengths.push("Professional experience".to_string());
    }
    if !signals.achievements.is_empty() {
        strengths.push("Proven achievements".to_string());
    }
    if strengths.is_empty() {
        strengths.extend(
            [
                "Skills mentioned in your resume",
                "Professional approach",
                "Self-expression ability",
            ]
            .map(String::from),
        );
    }
    strengths
}

const LIMITED_SKILLS: &str = "Limited skill set";
const MISSING_EDUCATION: &str = "Missing or insufficient education information";
const MISSING_EXPERIENCE: &str = "Missing or insufficient work experience";
const NO_ACHIEVEMENTS: &str = "No concrete achievements mentioned";
const SHORT_RESUME: &str = "Resume content is short and insufficient";

fn weaknesses(signals: &TextSignals) -> Vec<String> {
    let checks = [
        (signals.skills.len() < 5, LIMITED_SKILLS),
        (!signals.has_education, MISSING_EDUCATION),
        (!signals.has_experience, MISSING_EXPERIENCE),
        (signals.achievements.is_empty(), NO_ACHIEVEMENTS),
        (signals.text_len < 1000, SHORT_RESUME),
    ];
    let weaknesses: Vec<String> = checks
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, label)| label.to_string())
        .collect();

    if weaknesses.is_empty() {
        return [
            "Your resume could include more quantitative results",
            "Describe your skills in more detail",
            "You could add industry-specific keywords",
        ]
        .map(String::from)
        .to_vec();
    }
    weaknesses
}

fn recommendations(weaknesses: &[String]) -> Vec<String> {
    if weaknesses.is_empty() {
        return [
            "Add quantitative achievements to your resume",
            "Describe your skills in more detail",
            "Include concrete results for each work experience",
        ]
        .map(String::from)
        .to_vec();
    }
    weaknesses
        .iter()
        .map(|weakness| match weakness.as_str() {
            LIMITED_SKILLS => "Add more technical and personal skills to your resume".to_string(),
            MISSING_EDUCATION => {
                "Detail your education information and add relevant courses".to_string()
            }
            MISSING_EXPERIENCE => {
                "List your work experiences chronologically and in detail".to_string()
            }
            NO_ACHIEVEMENTS => "Add measurable achievements for each work experience".to_string(),
            SHORT_RESUME => "Make your resume more comprehensive".to_string(),
            other => format!("Improve on {other}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const PM_RESUME: &str = "5 years experience as Project Manager using Agile and Scrum";

    #[test]
    fn test_project_manager_resume() {
        let record = synthesize(PM_RESUME);
        assert!(record.skills.contains(&"Agile".to_string()));
        assert!(record.skills.contains(&"Scrum".to_string()));
        assert!(!record.job_titles.is_empty());
        assert!(record.resume_score >= 50);
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let text = "Senior Python developer at a Healthcare startup. Increased test coverage to 90%. \
                    Bachelor of Science, State University.";
        assert_eq!(synthesize(text), synthesize(text));
        assert_eq!(
            serde_json::to_string(&synthesize(text)).unwrap(),
            serde_json::to_string(&synthesize(text)).unwrap()
        );
    }

    #[test]
    fn test_unknown_skills_fall_back_to_generic_list() {
        assert_eq!(extract_skills("zzz qqq"), owned(GENERIC_SKILLS));
    }

    #[test]
    fn test_skills_are_capped_at_ten() {
        let lower = "javascript python java c++ c# php ruby swift kotlin react angular vue";
        assert_eq!(extract_skills(lower).len(), MAX_SKILLS);
    }

    #[test]
    fn test_achievements_split_on_sentence_punctuation() {
        let text = "I like tea. Increased revenue by 20%! Won an award? Reduced costs. \
                    Launched app. Saved time. Improved onboarding.";
        let achievements = extract_achievements(text);
        assert_eq!(achievements.len(), MAX_ACHIEVEMENTS);
        assert_eq!(achievements[0], "Increased revenue by 20%");
        assert!(!achievements.iter().any(|a| a.contains("tea")));
    }

    #[test]
    fn test_language_and_data_skills_map_to_titles() {
        let titles = suggest_job_titles(&["Python".to_string(), "SQL".to_string()]);
        assert_eq!(
            titles,
            vec![
                "Software Developer",
                "Software Engineer",
                "Data Analyst",
                "Database Administrator",
                "Data Engineer"
            ]
        );
    }

    #[test]
    fn test_titles_capped_at_five() {
        let skills = ["Python", "React", "SQL"].map(String::from);
        assert_eq!(suggest_job_titles(&skills).len(), MAX_JOB_TITLES);
    }

    #[test]
    fn test_generic_titles_without_categories() {
        let titles = suggest_job_titles(&["Excel".to_string()]);
        assert_eq!(titles, owned(GENERIC_TITLES));
    }

    #[test]
    fn test_skill_gaps_exclude_owned_skills() {
        let skills = ["Project Management", "Agile"].map(String::from);
        let gaps = suggest_skill_gaps(&skills, &["Project Manager".to_string()]);
        assert_eq!(gaps, vec!["Scrum", "Leadership"]);
    }

    #[test]
    fn test_skill_gaps_generic_when_nothing_missing() {
        let skills = ["SQL", "Database Design", "Performance Tuning"].map(String::from);
        let gaps = suggest_skill_gaps(&skills, &["Database Administrator".to_string()]);
        assert_eq!(gaps, owned(GENERIC_SKILL_GAPS));
    }

    #[test]
    fn test_score_components_are_capped() {
        let signals = TextSignals {
            skills: vec!["x".to_string(); 10],
            achievements: vec!["y".to_string(); 5],
            industries: vec![],
            has_education: true,
            has_experience: true,
            text_len: 10_000,
        };
        // 50 + 15 + 10 + 10 + 10 + 5
        assert_eq!(score(&signals), 100);
    }

    #[test]
    fn test_weaknesses_drive_recommendations() {
        let record = synthesize("zzz");
        assert!(record.areas_to_improve.contains(&MISSING_EDUCATION.to_string()));
        assert!(!record.areas_to_improve.contains(&LIMITED_SKILLS.to_string()));
        assert!(record
            .recommendations
            .contains(&"Make your resume more comprehensive".to_string()));
        assert_eq!(record.areas_to_improve.len(), record.recommendations.len());
    }

    #[test]
    fn test_record_is_never_empty() {
        let record = synthesize("zzz");
        assert!(!record.summary.is_empty());
        assert!(!record.strengths.is_empty());
        assert!(!record.skills.is_empty());
        assert_eq!(record.detailed_analysis.key_achievements.len(), 1);
        assert_eq!(record.detailed_analysis.industry_fit.len(), 1);
        assert_eq!(record.detailed_analysis.recommended_job_titles, record.job_titles);
    }
}
