use super::{Icon, Project, ProjectGroup};

const AI_ML: &[Project] = &[
    Project {
        title: "Client Onboarding RAG Chatbot",
        description: "Internal onboarding assistant with secure authentication, personalized policy retrieval, and multimodal interaction using RAG and LLM integration. Real-time voice I/O via Groq Whisper.",
        tags: &["Python", "LangChain", "Streamlit", "Groq Whisper", "PostgreSQL", "ChromaDB"],
        icon: Icon::Brain,
        repo: Some("https://github.com/Sarjak369/Client-Onboarding-RAG-Chatbot"),
        video: None,
    },
    Project {
        title: "LogSenseAI: Intelligent Log Classification",
        description: "Hybrid framework combining Regex, Transformers, Llama 3.3, and Logistic Regression for complex log classification. 40% higher accuracy than rule-based systems, reducing operational costs by 30%.",
        tags: &["Python", "FastAPI", "DBSCAN", "Transformers", "LLMs"],
        icon: Icon::Brain,
        repo: Some("https://github.com/Sarjak369/LogSenseAI"),
        video: None,
    },
    Project {
        title: "AI Shop Assistant Chatbot",
        description: "E-commerce assistant combining GPT-4o with semantic search via Pinecone for context-aware product recommendations. Sub-second responses across 100+ catalog items with hybrid MySQL + vector search.",
        tags: &["Python", "FastAPI", "Streamlit", "OpenAI", "Pinecone", "MySQL"],
        icon: Icon::Brain,
        repo: Some("https://github.com/Sarjak369/Shop-Assistant-RAG-Chatbot"),
        video: None,
    },
    Project {
        title: "AI Role Validator",
        description: "AI validator aligning XML-defined job roles with unstructured PDFs using RAG and LLM-based extraction. Accelerated validation workflows by 80% through optimized embedding pipelines.",
        tags: &["Python", "LangChain", "Streamlit", "OpenAI", "ChromaDB"],
        icon: Icon::Brain,
        repo: Some("https://github.com/Sarjak369/AI-XML-Role-Validator"),
        video: None,
    },
    Project {
        title: "Financial Assistant Agent",
        description: "Full-stack financial assistant delivering real-time stock insights with Alpha Vantage API and Spark SQL for 5-minute updates. Redis caching cut API calls by 80%.",
        tags: &["Python", "FastAPI", "React.js", "Apache Spark", "Redis"],
        icon: Icon::TrendingUp,
        repo: Some("https://github.com/Sarjak369/financial-assistant-agent"),
        video: None,
    },
    Project {
        title: "LinkedIn Post Generator",
        description: "AI tool analyzing influencers' LinkedIn posts to learn their writing style and generate new posts using Llama 3.3. Two-stage pipeline improved workflow efficiency by ~40%.",
        tags: &["Python", "Streamlit", "Llama 3.3", "Groq Cloud"],
        icon: Icon::Sparkles,
        repo: Some("https://github.com/Sarjak369/LinkedIn-Post-Generator"),
        video: None,
    },
    Project {
        title: "Dynamic SQL Assistant: Text-to-SQL",
        description: "Text-to-SQL tool leveraging Llama model, LangChain, and Groq to convert natural language queries into SQL. Automated database creation from CSVs enabling non-technical data insights.",
        tags: &["LangChain", "Groq", "SQLite", "Streamlit"],
        icon: Icon::Database,
        repo: Some("https://github.com/Sarjak369/Text-to-SQL"),
        video: Some("https://youtu.be/p9tVqmoBhfQ?si=Xm9TCGAVs6-GWNy5"),
    },
    Project {
        title: "AI Doctor: Multimodal Medical Chatbot",
        description: "Multimodal medical chatbot using LLaMA 3 Vision and OpenAI Whisper. Interprets image and voice inputs for health queries with real-time AI-driven diagnoses via Gradio UI.",
        tags: &["LLamA 3 Vision", "Whisper", "Groq", "Gradio"],
        icon: Icon::Brain,
        repo: Some("https://github.com/Sarjak369/AI-Doctor"),
        video: Some("https://youtu.be/yS9xVH0iYYQ?si=jqKHAC0y-JzgbPqc"),
    },
    Project {
        title: "JobReachAI: Cold Email Generator",
        description: "Cold email generator using Llama model and ChromaDB to extract job listings and generate personalized outreach emails, automating business development with portfolio matching.",
        tags: &["LangChain", "ChromaDB", "Streamlit"],
        icon: Icon::Sparkles,
        repo: Some("https://github.com/Sarjak369/cold_email_generator_Llama3.1"),
        video: None,
    },
    Project {
        title: "ThyroPredict: Thyroid Classification",
        description: "ML pipeline to classify thyroid disorders achieving 92% accuracy and 98% ROC AUC with KNeighborsClassifier. KMeans clustering for adaptive segmentation, deployed on AWS EC2.",
        tags: &["Python", "Flask", "AWS", "Machine Learning"],
        icon: Icon::TrendingUp,
        repo: Some("https://github.com/Sarjak369/ThyroPredict"),
        video: None,
    },
    Project {
        title: "AdClickOptimizer: Predictive System",
        description: "Machine learning models (Random Forest, Logistic Regression) with 96% accuracy for ad CTR forecasting. 10% performance improvement via time-based feature engineering.",
        tags: &["Python", "Flask", "Random Forest", "Statistical Analysis"],
        icon: Icon::BarChart,
        repo: Some("https://github.com/Sarjak369/AdClickOptimizer"),
        video: None,
    },
    Project {
        title: "CreditPredictor: Credit Risk Classification",
        description: "ML pipeline forecasting credit card default risk achieving 87% accuracy and AUC 0.95 with XGBoost. KMeans clustering for adaptive segmentation, deployed on AWS EC2 with 99.9% uptime.",
        tags: &["Python", "Flask", "AWS", "XGBoost"],
        icon: Icon::TrendingUp,
        repo: None,
        video: None,
    },
    Project {
        title: "WaferSense: Fault Detection",
        description: "ML pipeline detecting faulty semiconductor wafers from 590+ sensor readings. Achieved ~91% accuracy & ROC AUC 0.96 with cluster-specific RF, SVM, and XGBoost models on AWS EC2.",
        tags: &["Python", "Flask", "AWS", "Machine Learning"],
        icon: Icon::TrendingUp,
        repo: None,
        video: None,
    },
];

const ANALYTICS: &[Project] = &[
    Project {
        title: "HR Analytics Dashboard",
        description: "Interactive Tableau dashboard analyzing 1,470 employees across key metrics like attrition rate (16.12%), job satisfaction, and department performance for data-driven HR strategies.",
        tags: &["Tableau", "Excel", "Data Visualization"],
        icon: Icon::BarChart,
        repo: Some("https://github.com/Sarjak369/HR-Analytics-Dashboard-Tableau"),
        video: None,
    },
    Project {
        title: "Expense Tracker Web App",
        description: "Full-featured web app with expense categorization, multi-account management, and monthly tracking. Automated CSV export and email functionality with interactive Plotly visualizations.",
        tags: &["Python", "Streamlit", "SQLite3", "Plotly"],
        icon: Icon::BarChart,
        repo: Some("https://github.com/Sarjak369/Expense_Tracker_WebApp"),
        video: None,
    },
    Project {
        title: "Caf\u{e9}Metrics: Revenue Analysis",
        description: "Interactive Excel dashboard analyzing 149,116 transactions for Maven Roasters NYC. Power Query transformation revealed consistent upward revenue trend of $698,812 and 17.5% monthly growth.",
        tags: &["Microsoft Excel", "Power Query", "PivotTables"],
        icon: Icon::BarChart,
        repo: Some("https://github.com/Sarjak369/CafeMetrics"),
        video: None,
    },
];

pub const PROJECT_GROUPS: &[ProjectGroup] = &[
    ProjectGroup { title: "AI & Machine Learning", icon: Icon::Brain, projects: AI_ML },
    ProjectGroup { title: "Data Analytics", icon: Icon::BarChart, projects: ANALYTICS },
];
