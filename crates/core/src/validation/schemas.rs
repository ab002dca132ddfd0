//! Typed form records, one per entity.
//!
//! Field names and constraints mirror the admin and public forms. Each
//! `parse` runs every field so a rejected submission reports the complete
//! set of violations, not just the first.

use super::{fields, FormInput, ValidationErrors};

/// The singleton profile form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub upwork: Option<String>,
    pub location: Option<String>,
    pub open_to_work: bool,
    pub years_exp: i32,
    pub clients_served: i32,
    pub projects_count: i32,
}

impl ProfileForm {
    pub fn parse(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let form = Self {
            name: fields::required(input, "name", &mut errors),
            title: fields::required(input, "title", &mut errors),
            tagline: fields::required(input, "tagline", &mut errors),
            about: fields::required(input, "about", &mut errors),
            email: fields::email(input, "email", &mut errors),
            phone: fields::optional(input, "phone"),
            linkedin: fields::url_or_empty(input, "linkedin", &mut errors),
            github: fields::url_or_empty(input, "github", &mut errors),
            upwork: fields::url_or_empty(input, "upwork", &mut errors),
            location: fields::optional(input, "location"),
            open_to_work: fields::checkbox(input, "open_to_work"),
            years_exp: fields::non_negative_int(input, "years_exp", 0, &mut errors),
            clients_served: fields::non_negative_int(input, "clients_served", 0, &mut errors),
            projects_count: fields::non_negative_int(input, "projects_count", 0, &mut errors),
        };
        errors.finish(form)
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    pub category: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub outcome: Option<String>,
    pub featured: bool,
}

impl ProjectForm {
    pub fn parse(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let form = Self {
            title: fields::required(input, "title", &mut errors),
            description: fields::required(input, "description", &mut errors),
            images: fields::list(input, "images"),
            tech_stack: fields::list_required(input, "tech_stack", &mut errors),
            category: fields::required(input, "category", &mut errors),
            github_url: fields::url_or_empty(input, "github_url", &mut errors),
            live_url: fields::url_or_empty(input, "live_url", &mut errors),
            outcome: fields::optional(input, "outcome"),
            featured: fields::checkbox(input, "featured"),
        };
        errors.finish(form)
    }
}

/// A skill entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
    pub proficiency: i32,
}

impl SkillForm {
    pub fn parse(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let form = Self {
            name: fields::required(input, "name", &mut errors),
            category: fields::required(input, "category", &mut errors),
            proficiency: fields::bounded_int(input, "proficiency", 0, 100, 80, &mut errors),
        };
        errors.finish(form)
    }
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialForm {
    pub content: String,
    pub author_name: String,
    pub author_title: String,
    pub author_company: String,
    pub author_photo: Option<String>,
}

impl TestimonialForm {
    pub fn parse(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let form = Self {
            content: fields::required(input, "content", &mut errors),
            author_name: fields::required(input, "author_name", &mut errors),
            author_title: fields::required(input, "author_title", &mut errors),
            author_company: fields::required(input, "author_company", &mut errors),
            author_photo: fields::url_or_empty(input, "author_photo", &mut errors),
        };
        errors.finish(form)
    }
}

/// The public contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn parse(input: &FormInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let form = Self {
            name: fields::required(input, "name", &mut errors),
            email: fields::email(input, "email", &mut errors),
            message: fields::required_min(input, "message", 10, &mut errors),
        };
        errors.finish(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_profile_input() -> FormInput {
        input(&[
            ("name", "Ada Lovelace"),
            ("title", "Automation Expert"),
            ("tagline", "Making machines work"),
            ("about", "I automate things."),
            ("email", "ada@example.com"),
            ("linkedin", "https://linkedin.com/in/ada"),
            ("github", ""),
            ("open_to_work", "on"),
            ("years_exp", "7"),
        ])
    }

    #[test]
    fn test_profile_parse_valid() {
        let form = ProfileForm::parse(&valid_profile_input()).expect("profile should parse");
        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.linkedin.as_deref(), Some("https://linkedin.com/in/ada"));
        // Empty URL field is treated as absent, not as an error.
        assert_eq!(form.github, None);
        assert!(form.open_to_work);
        assert_eq!(form.years_exp, 7);
        // Defaults applied for absent numeric fields.
        assert_eq!(form.clients_served, 0);
        assert_eq!(form.projects_count, 0);
    }

    #[test]
    fn test_profile_parse_enumerates_all_violations() {
        let mut bad = valid_profile_input();
        bad.remove("name");
        bad.insert("email".into(), "nope".into());
        bad.insert("upwork".into(), "not-a-url".into());
        bad.insert("years_exp".into(), "-1".into());

        let errors = ProfileForm::parse(&bad).unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("upwork"));
        assert!(errors.contains("years_exp"));
        assert_eq!(errors.0.len(), 4);
    }

    #[test]
    fn test_project_parse_splits_lists() {
        let form = ProjectForm::parse(&input(&[
            ("title", "Invoice Bot"),
            ("description", "Automates invoices"),
            ("tech_stack", "UiPath,SAP, SQL Server"),
            ("images", "/uploads/a.png, /uploads/b.png"),
            ("category", "RPA"),
            ("featured", "true"),
        ]))
        .expect("project should parse");
        assert_eq!(form.tech_stack, vec!["UiPath", "SAP", "SQL Server"]);
        assert_eq!(form.images.len(), 2);
        assert!(form.featured);
        assert_eq!(form.github_url, None);
    }

    #[test]
    fn test_project_requires_tech_stack() {
        let errors = ProjectForm::parse(&input(&[
            ("title", "X"),
            ("description", "Y"),
            ("category", "Z"),
        ]))
        .unwrap_err();
        assert!(errors.contains("tech_stack"));
    }

    #[test]
    fn test_skill_proficiency_default_and_bounds() {
        let form = SkillForm::parse(&input(&[("name", "Rust"), ("category", "Languages")]))
            .expect("skill should parse");
        assert_eq!(form.proficiency, 80);

        let errors = SkillForm::parse(&input(&[
            ("name", "Rust"),
            ("category", "Languages"),
            ("proficiency", "120"),
        ]))
        .unwrap_err();
        assert!(errors.contains("proficiency"));
    }

    #[test]
    fn test_testimonial_requires_author_fields() {
        let errors = TestimonialForm::parse(&input(&[("content", "Great work")])).unwrap_err();
        assert!(errors.contains("author_name"));
        assert!(errors.contains("author_title"));
        assert!(errors.contains("author_company"));
    }

    #[test]
    fn test_contact_message_length_boundary() {
        // Nine characters: rejected.
        let errors = ContactForm::parse(&input(&[
            ("name", "Bob"),
            ("email", "bob@example.com"),
            ("message", "too short"),
        ]))
        .unwrap_err();
        assert!(errors.contains("message"));

        // Exactly ten characters: accepted.
        let form = ContactForm::parse(&input(&[
            ("name", "Bob"),
            ("email", "bob@example.com"),
            ("message", "1234567890"),
        ]))
        .expect("ten characters should pass");
        assert_eq!(form.message.chars().count(), 10);
    }
}
