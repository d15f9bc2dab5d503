use super::{Education, Teaching};

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Science in Information Technology & Analytics",
        period: "Sep 2022 - Jan 2024",
        institution: "Rutgers University",
        grade: "GPA: 3.7/4.0",
        location: "New Brunswick, New Jersey, USA",
        courses: "Algorithmic Machine Learning, Data Analysis and Visualization, Multivariate Analysis, Business Forecasting",
        teaching: Some(Teaching {
            title: "Part-time Lecturer - CS170: Computer Applications for Business",
            period: "Sep 2023 - Dec 2023",
            bullets: &[
                "Conducted recitation lectures for 50+ students covering HTML, CSS, JavaScript, Algorithms, SQL, and Excel",
                "Prepared lecture materials, calculated grades using Excel and fostered foundational skills in data-driven problem-solving",
            ],
            playlist: Some(
                "https://youtube.com/playlist?list=PLWqTaavG1gQTJLLc5zHVHjaLaDijoibGR&si=q80m3GB9ju2z6p8p",
            ),
        }),
    },
    Education {
        degree: "Bachelor of Engineering in Information Technology",
        period: "Jun 2018 - May 2022",
        institution: "University of Mumbai",
        grade: "GPA: 9.3/10",
        location: "Mumbai, Maharashtra, India",
        courses: "Artificial Intelligence, Database Management System, Data Mining & Business Intelligence, Cloud Computing",
        teaching: None,
    },
];
