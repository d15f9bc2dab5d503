use super::Contribution;

pub const CONTRIBUTIONS: &[Contribution] = &[Contribution {
    title: "LangFlow-Viz: Workflow Graph Visualizer for LangGraph",
    summary: "Developed and open-sourced a Python library to visualize and analyze LangGraph-style AI workflows, supporting Graphviz (SVG/PNG) and Mermaid.js (Markdown/HTML) exports for interactive documentation.",
    bullets: &[
        "Engineered an automated GitHub Actions CI/CD pipeline for trusted PyPI publishing, improving release reliability",
        "Enhanced developer usability with graph analytics, style customization, and conditional-edge rendering",
        "Enabled faster debugging and improved interpretability of complex AI agent flows",
    ],
    tags: &["Python", "GitHub Actions", "PyPI", "Graphviz", "Mermaid.js"],
    repo: "https://github.com/Sarjak369/langflow-viz",
    package: Some("https://pypi.org/project/langflow-viz/"),
}];
