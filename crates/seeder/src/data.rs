//! Constant pools the seeder draws from.

/// Department names, one `dept` row each.
pub const TECH_DEPARTMENTS: &[&str] = &[
    "Frontend Engineering", "Backend Engineering", "Full Stack Development", "Mobile Development",
    "DevOps Engineering", "Site Reliability Engineering", "Systems Engineering", "Embedded Systems",
    "Gaming Engineering", "Firmware Engineering", "Data Engineering", "Data Science",
    "Machine Learning Engineering", "Business Intelligence", "Data Analytics", "Artificial Intelligence",
    "Natural Language Processing", "Computer Vision Engineering", "Predictive Analytics",
    "Big Data Engineering", "Information Security", "Network Engineering", "Cloud Infrastructure",
    "Platform Engineering", "Security Operations", "Cybersecurity", "Identity & Access Management",
    "Infrastructure Automation", "Network Security", "Cloud Security", "Blockchain Development",
    "AR/VR Development", "IoT Engineering", "Quantum Computing", "Robotics Engineering",
    "Autonomous Systems", "5G Engineering", "Cryptography Engineering", "High Performance Computing",
    "Edge Computing", "Quality Assurance", "QA Automation", "Technical Support", "IT Operations",
    "Solutions Architecture", "Database Administration", "Release Engineering", "Production Engineering",
    "Technical Program Management", "API Development",
];

/// Skill tags; each employee gets 2–5 distinct picks, comma-joined.
pub const SKILLS: &[&str] = &[
    "Python", "Java", "JavaScript", "C++", "C#", "Ruby", "PHP", "Swift", "Kotlin", "Go", "Rust",
    "TypeScript", "SQL", "R", "MATLAB", "Scala", "Perl", "Assembly", "COBOL",
    "React", "Angular", "Vue.js", "Node.js", "Django", "Flask", "Spring Boot", "ASP.NET",
    "Express.js", "HTML5", "CSS3", "jQuery", "Bootstrap", "WordPress", "GraphQL", "REST APIs",
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Jenkins", "GitLab CI/CD", "Terraform",
    "Ansible", "Puppet", "Chef", "VMware", "OpenStack",
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Scikit-learn", "Data Analysis",
    "Natural Language Processing", "Computer Vision", "Neural Networks", "Reinforcement Learning",
    "Statistical Analysis", "Big Data", "Data Mining",
    "MySQL", "PostgreSQL", "MongoDB", "Oracle", "SQL Server", "Redis", "Cassandra", "DynamoDB",
    "Neo4j", "Elasticsearch",
    "Git", "SVN", "Mercurial", "JIRA", "Confluence", "Trello", "Slack", "Microsoft Teams",
    "Bitbucket",
    "Agile", "Scrum", "Kanban", "DevOps", "TDD", "BDD", "CI/CD", "Microservices", "SOA",
    "Design Patterns",
    "Leadership", "Communication", "Problem Solving", "Team Management", "Project Management",
    "Critical Thinking", "Time Management", "Mentoring", "Public Speaking", "Conflict Resolution",
    "Cybersecurity", "Penetration Testing", "Encryption", "Network Security", "Security Auditing",
    "Ethical Hacking", "OWASP", "Security Compliance",
    "iOS Development", "Android Development", "React Native", "Flutter", "Xamarin",
    "Mobile UI Design", "App Store Optimization",
];

/// Name pools for generated employees.
pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Anika", "Carlos", "Chen", "Dana", "Dmitri", "Elena", "Fatima",
    "Grace", "Hassan", "Ines", "Jamal", "Jun", "Kai", "Lena", "Linus", "Maria", "Miguel",
    "Nadia", "Omar", "Priya", "Ravi", "Sofia", "Tariq", "Uma", "Wei", "Yuki", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Almeida", "Andersson", "Baker", "Chen", "Diaz", "Dubois", "Fischer", "Garcia", "Haddad",
    "Hansen", "Ivanov", "Johnson", "Kaur", "Kim", "Kowalski", "Lee", "Lopez", "Mbeki", "Murphy",
    "Nakamura", "Nguyen", "Okafor", "Patel", "Rossi", "Sato", "Schmidt", "Silva", "Singh",
    "Tanaka", "Yilmaz",
];
