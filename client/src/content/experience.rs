use super::{Icon, Role};

pub const EXPERIENCE: &[Role] = &[
    Role {
        company: "XNODE Inc.",
        title: "AI Engineer",
        period: "Mar 2025 - Aug 2025",
        location: "Boston, Massachusetts, USA (Remote)",
        description: "Engineered a Workflow Builder Agent with LangChain + LangGraph that converts natural language into automated approval workflows, reducing turnaround time by 60%. Streamlined Azure DevOps backlog updates, cutting manual tracking and accelerating sprint planning by 30%. Orchestrated a RAG-based knowledge framework indexing internal docs and project data with vector embeddings, shrinking roadmap planning from 3 days to 6 hours.",
        icon: Icon::Briefcase,
        link: Some("https://xnode.ai/"),
    },
    Role {
        company: "Behavioral Informatics Labs",
        title: "Research Data Scientist",
        period: "Feb 2024 - Feb 2025",
        location: "New Brunswick, New Jersey, USA",
        description: "Assessed robustness of healthcare AI models using GPT and Llama LLMs, benchmarking the BlueBERT model (92.79% on medical abstracts and 78.2% on sentiment analysis), to evaluate reliability under real-world clinical challenges. Designed data perturbations (typos, homophones, removals) on clinical data simulating real-world noise and applied statistical analysis to quantify performance degradation and guide reliability improvements.",
        icon: Icon::Brain,
        link: Some("https://behavioralinformatics.org/"),
    },
    Role {
        company: "Mintex Tech",
        title: "Data Science Intern",
        period: "May 2023 - Aug 2023",
        location: "Edison, New Jersey, USA",
        description: "Developed time-series forecasting models (LSTM for daily demand, Prophet for weekly/monthly trends) on logistics data, delivering ~82% accuracy and enabling proactive inventory planning that reduced stockouts and overstocking by 17%. Analyzed delivery performance through SQL and Tableau dashboards, uncovering peak-hour bottlenecks and optimizing routes to improve delivery speed by 20%.",
        icon: Icon::Briefcase,
        link: Some("https://www.mintextech.com/"),
    },
    Role {
        company: "Leo9 Studio",
        title: "Data Science Analyst",
        period: "Aug 2021 - Jul 2022",
        location: "Mumbai, Maharashtra, India",
        description: "Performed customer segmentation using Hierarchical Clustering in Python, powering personalized campaigns (discount offers, loyalty rewards) that boosted engagement and repeat usage. Led A/B testing to refine ad creatives, increasing conversions by 20% and expanding the customer base by 10%. Applied cohort analysis to uncover high-value user segments, driving a 25% uplift in retention and engagement.",
        icon: Icon::Briefcase,
        link: Some("https://leo9studio.com/"),
    },
];
