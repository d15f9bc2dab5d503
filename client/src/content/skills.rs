use super::{Icon, SkillCategory};

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Data Science & ML",
        icon: Icon::BarChart,
        skills: &[
            "Statistical Analysis & Inference",
            "Machine Learning (Scikit-learn, XGBoost)",
            "Time Series Forecasting",
            "A/B Testing & Experimentation",
            "Feature Engineering",
            "Model Evaluation & Deployment",
        ],
    },
    SkillCategory {
        name: "AI & Deep Learning",
        icon: Icon::Brain,
        skills: &[
            "Natural Language Processing",
            "Transformer Models (BERT, GPT)",
            "Computer Vision Basics",
            "LLM Fine-tuning & Prompting",
            "RAG Systems",
            "AI Agent Development",
        ],
    },
    SkillCategory {
        name: "Engineering & Tools",
        icon: Icon::Code,
        skills: &[
            "Python (Pandas, NumPy, SciPy)",
            "SQL & Database Design",
            "Data Pipeline Development",
            "Git & Version Control",
            "Docker & MLOps",
            "Cloud Platforms (AWS/GCP basics)",
        ],
    },
    SkillCategory {
        name: "Languages",
        icon: Icon::Code,
        skills: &["Python (Expert)", "SQL (Advanced)", "R (Intermediate)", "JavaScript/TypeScript"],
    },
    SkillCategory {
        name: "ML/AI Frameworks",
        icon: Icon::Brain,
        skills: &["TensorFlow / Keras", "PyTorch", "Scikit-learn", "LangChain", "Hugging Face Transformers"],
    },
    SkillCategory {
        name: "Data & Analytics",
        icon: Icon::Database,
        skills: &[
            "Pandas, NumPy",
            "PostgreSQL, MongoDB",
            "Apache Spark",
            "Tableau, Power BI",
            "Git & Version Control",
        ],
    },
];
