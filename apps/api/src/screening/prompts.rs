// All LLM prompt constants for the Screening module.

/// System prompt for resume screening — enforces JSON-only output.
pub const SCREENING_SYSTEM: &str = "You are an AI-powered resume screening tool \
    that evaluates a candidate's resume against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Screening prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending.
pub const SCREENING_PROMPT_TEMPLATE: &str = r#"Evaluate the candidate's resume against the job description below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_score": 85,
  "missing_skills": ["skill required by the job description but absent from the resume"],
  "strengths": ["skill or experience from the resume that supports the fit"],
  "summary": ["bullet point summarizing the resume relative to the job description"]
}

Rules:
- "match_score" is an integer from 0 to 100; higher means a stronger fit.
- "missing_skills" lists only skills the job description requires and the resume does not show.
- "strengths" lists resume evidence that directly supports the job description.
- "summary" is 3-5 short bullet points, each a complete sentence.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

/// System prompt for the resume health check — no job description involved.
pub const HEALTH_CHECK_SYSTEM: &str = "You are an expert ATS (Applicant Tracking System) \
    and resume reviewer analyzing a resume for quality issues. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Health check prompt template. Replace `{resume_text}` before sending.
pub const HEALTH_CHECK_PROMPT_TEMPLATE: &str = r#"Analyze the resume below for grammar, spelling, formatting, and ATS-friendliness.

Return a JSON object with this EXACT schema (no extra fields):
{
  "ats_score": 80,
  "grammar_score": 90,
  "formatting_score": 75,
  "feedback": ["specific, actionable improvement suggestion"]
}

Rules:
- All scores are integers from 0 to 100.
- "ats_score" is the overall quality and ATS-friendliness of the resume.
- "feedback" is a list of concrete bullet points; be specific and constructive.

RESUME:
{resume_text}"#;

/// System prompt for the tailored summary generator.
pub const SUMMARY_SYSTEM: &str = "You are an expert resume summarizer. \
    You generate a concise summary of a candidate's resume tailored to a \
    specific job description, highlighting the most relevant skills and experience. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Summary prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Write a concise summary of the candidate's resume tailored to the job description below. Highlight the skills and experience most relevant to the role.

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "one short paragraph"
}

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}"#;
