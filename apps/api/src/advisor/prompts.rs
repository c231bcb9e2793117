// Role, goal, backstory and task text for the three resume agents.
// Task descriptions use `{resume}` as the kickoff input placeholder.

pub const FEEDBACK_ROLE: &str = "Professional Resume Advisor";
pub const FEEDBACK_GOAL: &str = "Give detailed feedback on resumes";
pub const FEEDBACK_BACKSTORY: &str = "Expert in resume analysis and improvement.";

pub const FEEDBACK_TASK: &str = "\
Analyze this resume and return ONLY a valid JSON object with exactly these fields:
- sections_detected: array of strings
- missing_sections: array of strings
- well_written_sections: array of strings
- quality_score: number between 0-100
- suggestions: array of strings

Resume:
{resume}
";

pub const FEEDBACK_EXPECTED: &str = "Valid JSON object with the 5 required fields only.";

pub const REWRITE_ROLE: &str = "Resume Rewriting Expert";
pub const REWRITE_GOAL: &str = "Improve resumes based on structured feedback";
pub const REWRITE_BACKSTORY: &str = "Polishes and optimizes resumes for impact.";

pub const REWRITE_TASK: &str = "\
Improve this resume based on feedback in context. Keep the candidate's experience intact \
but improve clarity, grammar, and formatting.
Resume:
{resume}";

pub const REWRITE_EXPECTED: &str = "Improved resume as plain text.";

pub const GUIDANCE_ROLE: &str = "Job Research Expert";
pub const GUIDANCE_GOAL: &str = "Provide job search guidance based on a resume";
pub const GUIDANCE_BACKSTORY: &str = "Experienced in career guidance and job market analysis.";

pub const GUIDANCE_TASK: &str = "\
Based on the improved resume, provide job search guidance including: \
1) Recommended job titles to search for, \
2) Top companies in the candidate's field, \
3) Key job boards and websites to use, \
4) Networking tips specific to their industry.";

pub const GUIDANCE_EXPECTED: &str =
    "Structured job search guidance with specific recommendations.";
