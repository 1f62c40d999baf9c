//! Static lookup data shared by every extraction pass. Read-only for the process lifetime.

/// Country name or alias → nationality label. Several aliases may share a label.
/// Slice order is the order nationalities are reported in.
pub const NATIONALITY_TABLE: &[(&str, &str)] = &[
    ("United States", "American"),
    ("USA", "American"),
    ("India", "Indian"),
    ("Canada", "Canadian"),
    ("United Kingdom", "British"),
    ("UK", "British"),
    ("Australia", "Australian"),
    ("Germany", "German"),
    ("France", "French"),
    ("Spain", "Spanish"),
    ("Italy", "Italian"),
    ("China", "Chinese"),
    ("Japan", "Japanese"),
    ("South Korea", "Korean"),
    ("Brazil", "Brazilian"),
    ("Mexico", "Mexican"),
    ("Russia", "Russian"),
    ("Netherlands", "Dutch"),
    ("Turkey", "Turkish"),
    ("Sweden", "Swedish"),
    ("Norway", "Norwegian"),
    ("Denmark", "Danish"),
    ("Finland", "Finnish"),
    ("Switzerland", "Swiss"),
    ("South Africa", "South African"),
    ("Argentina", "Argentinian"),
    ("Egypt", "Egyptian"),
    ("Saudi Arabia", "Saudi"),
    ("United Arab Emirates", "Emirati"),
    ("UAE", "Emirati"),
    ("Pakistan", "Pakistani"),
    ("Bangladesh", "Bangladeshi"),
    ("Sri Lanka", "Sri Lankan"),
    ("Nepal", "Nepalese"),
    ("Philippines", "Filipino"),
    ("Ireland", "Irish"),
    ("New Zealand", "New Zealander"),
    ("Singapore", "Singaporean"),
    ("Nigeria", "Nigerian"),
    ("Qatar", "Qatari"),
    ("Kuwait", "Kuwaiti"),
];

/// Job-title keywords matched as whole words, case-insensitively.
pub const JOB_KEYWORDS: &[&str] = &[
    "Software Engineer",
    "Software Developer",
    "Web Developer",
    "Full Stack Developer",
    "Data Scientist",
    "Data Analyst",
    "Data Engineer",
    "Business Analyst",
    "Project Manager",
    "Product Manager",
    "Marketing Manager",
    "Sales Manager",
    "Sales Executive",
    "Account Manager",
    "Operations Manager",
    "HR Manager",
    "Team Lead",
    "Civil Engineer",
    "Mechanical Engineer",
    "Electrical Engineer",
    "Graphic Designer",
    "UI/UX Designer",
    "Engineer",
    "Developer",
    "Programmer",
    "Manager",
    "Analyst",
    "Consultant",
    "Architect",
    "Designer",
    "Accountant",
    "Administrator",
    "Director",
    "Supervisor",
    "Coordinator",
    "Specialist",
    "Technician",
    "Teacher",
    "Lecturer",
    "Nurse",
    "Pharmacist",
    "Intern",
];

/// Words stripped from file names before comparing them with an extracted name.
pub const NOISE_WORDS: &[&str] = &[
    "resume",
    "résumé",
    "cv",
    "profile",
    "application",
    "curriculum",
    "vitae",
    "biodata",
    "updated",
    "latest",
    "final",
];

pub fn is_noise_word(token: &str) -> bool {
    let lower = token.to_lowercase();
    NOISE_WORDS.iter().any(|w| *w == lower)
}
