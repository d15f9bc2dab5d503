use super::Profile;

pub const PROFILE: Profile = Profile {
    name: "Sarjak Maniar",
    title: "AI Data Scientist",
    photo: "/profile-photo.png",
    headline: "Data is more than numbers\u{2014}",
    headline_accent: "it's a story waiting to be understood",
    tagline: "Transforming data into clear insights and building models that solve meaningful problems across business and technology.",
    about: &[
        "I specialize in transforming data into clear insights and building models that solve meaningful problems across business and technology.",
        "While my foundation lies in data science\u{2014}statistics, machine learning, and analytical storytelling, I'm equally drawn to exploring how AI can make those systems smarter, faster, and more human-centered. I enjoy bridging the gap between traditional analytics and modern AI applications, whether it's automating insights, creating intelligent tools, or experimenting with new learning frameworks.",
    ],
    quote: "Develop a passion for learning. If you do, you will never cease to grow.",
    quote_author: "Anthony J. D'Angelo",
    about_closing: "This mindset shapes how I approach every project\u{2014}with focus, humility, and a desire to keep evolving.",
    email: "sarjakm369@gmail.com",
    email_href: "mailto:sarjakm369@gmail.com",
    github_url: "https://github.com/Sarjak369",
    github_handle: "github.com/Sarjak369",
    repositories_url: "https://github.com/Sarjak369?tab=repositories",
    footer: "\u{a9} 2025 Sarjak Maniar \u{2022} AI Data Scientist \u{2022} Transforming data into insights",
};

/// Closing line of the about section, rendered with emphasis.
pub const ABOUT_SIGNATURE: &str = "At my core, I'm data-driven but people-focused\u{2014}committed to building reliable, transparent, and impactful data solutions that help others make better decisions.";
