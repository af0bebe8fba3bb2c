// Prompt template for the readiness analysis.

/// Readiness analysis prompt template.
/// Replace: {field}, {subfield}, {gpa}, {interview_score}, then {resume_text} last.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this candidate profile for a {field} position specializing in {subfield}.

Profile details:
- GPA: {gpa}/4.0
- Behavioral Interview Score: {interview_score}%

Resume text:
{resume_text}

Provide a detailed analysis covering:
1. Technical skills alignment with {subfield}
2. Academic performance assessment
3. Behavioral competencies
4. Areas for improvement
5. Overall placement readiness score (0-100)

Focus only on skills and experiences explicitly mentioned in the resume."#;
