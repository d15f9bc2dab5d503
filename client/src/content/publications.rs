use super::Publication;

const ICCCNT_2021: &str =
    "2021 12th International Conference on Computing Communication and Networking Technologies (ICCCNT)";

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        title: "To laugh or not to laugh \u{2013} LSTM based humor detection approach",
        venue: ICCCNT_2021,
        publisher: "IEEE",
        date: "06-08 July 2021",
        description: "Developed an LSTM-based model for humor detection in text, achieving 94.62% accuracy. The model uses word embeddings and sequential processing to identify humorous patterns in sentences, addressing the challenge of automated humor understanding.",
        link: Some("https://ieeexplore.ieee.org/document/9580124"),
    },
    Publication {
        title: "Generation and grading of arduous MCQs using NLP and OMR detection using OpenCV",
        venue: ICCCNT_2021,
        publisher: "IEEE",
        date: "06-08 July 2021",
        description: "Developed \u{e9}valuer, an automated system that generates difficult-to-search MCQs through text paraphrasing and automates grading using OMR detection. The system addresses the challenge of creating unique assessment questions and streamlines evaluation processes.",
        link: Some("https://ieeexplore.ieee.org/document/9580089"),
    },
];
