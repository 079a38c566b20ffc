// Provider prompt templates for resume analysis.
// The two schemas differ on purpose: each matches what that provider was tuned to return,
// and the normalizer reconciles them.

pub const OPENAI_PREAMBLE: &str = "You are an experienced HR professional and career consultant. \
    Analyze the given resume thoroughly and provide a comprehensive response in English only. \
    Your analysis should be detailed, insightful, and actionable.";

pub const OPENAI_SCHEMA: &str = r#"{
  "summary": "A comprehensive executive summary (at least 300 words) of background, key qualifications, notable achievements and career trajectory",
  "strengths": ["At least 7 strengths, each with a specific example from the resume"],
  "areasToImprove": ["4-5 areas for improvement with constructive, specific suggestions"],
  "recommendations": ["3 actionable recommendations with specific steps"],
  "personalSkills": ["At least 10 skills with level (Beginner/Intermediate/Advanced/Expert) and experience"],
  "resumeScore": 85,
  "detailedAnalysis": {
    "professionalProfile": "300-400 word profile: experience, achievements, career goals, unique value proposition",
    "keyAchievements": ["At least 7 concrete achievements with metrics and impact"],
    "industryFit": ["At least 7 suitable industries with rationale"],
    "recommendedJobTitles": ["7-8 suitable job titles with a brief explanation"],
    "skillGaps": ["5-6 skills needed for target roles with specific recommendations"]
  }
}"#;

pub const OPENAI_USER_TEMPLATE: &str = "Please analyze this resume thoroughly and provide a detailed \
    analysis in English only. Return your analysis in JSON format as specified: {resume_text}";

pub const DEEPSEEK_PREAMBLE: &str = "You are a professional resume analyst. \
    Analyze the given resume thoroughly and provide a comprehensive response in ENGLISH ONLY. \
    Your analysis should be detailed, insightful, and actionable.";

pub const DEEPSEEK_SCHEMA: &str = r#"{
  "summary": "A comprehensive executive summary (at least 300 words)",
  "professionalProfile": "Detailed professional profile (300-400 words)",
  "keySkills": ["Skill 1", "Skill 2"],
  "strengths": ["Strength 1", "Strength 2"],
  "weaknesses": ["Area to improve 1", "Area to improve 2"],
  "resumeScore": 85,
  "recommendations": ["3 actionable recommendations with specific steps"],
  "keyAchievements": ["Achievement 1 with metrics"],
  "industryFit": ["Industry 1 - Rationale"],
  "recommendedJobTitles": ["Recommended position 1"],
  "skillGaps": ["Missing skill 1"],
  "detailedAnalysis": {
    "professionalProfile": "300-400 word detailed profile summary",
    "keyAchievements": ["Achievement 1 with metrics"],
    "industryFit": ["Industry 1 - Rationale"],
    "recommendedJobTitles": ["Job title 1 - Rationale"],
    "skillGaps": ["Skill gap 1 - How to improve"]
  }
}"#;
