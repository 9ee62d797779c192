//! Everything the landing page says. Order of each list is display order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Book,
    MessageSquare,
    Code,
    FileText,
    Map,
    BarChart,
    Briefcase,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Book => "📖",
            Icon::MessageSquare => "💬",
            Icon::Code => "💻",
            Icon::FileText => "📄",
            Icon::Map => "🗺️",
            Icon::BarChart => "📊",
            Icon::Briefcase => "💼",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Icon::Book => "book-icon",
            Icon::MessageSquare => "message-icon",
            Icon::Code => "code-icon",
            Icon::FileText => "file-icon",
            Icon::Map => "map-icon",
            Icon::BarChart => "chart-icon",
            Icon::Briefcase => "briefcase-icon",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub target: u64,
    /// Extra class for the number, e.g. brand colour of a social network.
    pub accent: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_src: &'static str,
}

impl SocialLink {
    /// mailto links open in the mail client, everything else in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Founder {
    pub name: &'static str,
    pub bio: [&'static str; 3],
    pub photo_src: &'static str,
    pub links: [SocialLink; 3],
}

pub const FEATURES: [Feature; 7] = [
    Feature {
        icon: Icon::Book,
        title: "Study Notes",
        description: "Comprehensive notes and cheatsheets for Java, Python, C++, CN, OS, DBMS, Aptitude",
    },
    Feature {
        icon: Icon::MessageSquare,
        title: "Interview Questions",
        description: "Frequently asked interview questions with detailed answers",
    },
    Feature {
        icon: Icon::Code,
        title: "Coding Questions",
        description: "Practice coding questions with LeetCode integration",
    },
    Feature {
        icon: Icon::FileText,
        title: "Resume Templates",
        description: "Professional resume formats and ATS Score Checker sites",
    },
    Feature {
        icon: Icon::Map,
        title: "Roadmaps",
        description: "Step-by-step guides for Web Dev, App Dev, FAANG prep, and more",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Aptitude Quiz",
        description: "Test your problem-solving skills with interactive quizzes",
    },
    Feature {
        icon: Icon::Briefcase,
        title: "Internship Companies",
        description: "Curated list of top internship opportunities with application links",
    },
];

pub const WHY_CHOOSE_US: [Highlight; 3] = [
    Highlight {
        id: "01",
        title: "Expert-Crafted Learning",
        text: "Our team of accomplished engineers, with impressive coding profiles, hails from top tech companies like Google, Amazon, Meta, and Microsoft.",
    },
    Highlight {
        id: "02",
        title: "Structured Learning Path",
        text: "Master Data Structures & Algorithms (DSA), System Design, core subjects, and practical projects with premium blog posts and video solutions.",
    },
    Highlight {
        id: "03",
        title: "Unmatched Content Depth",
        text: "We prioritize quality content, offering in-depth explanations and a wider range of solved problems in both free courses.",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { label: "Active Users", target: 100, accent: None },
    Stat { label: "Happy Clients", target: 50, accent: None },
    Stat { label: "Instagram", target: 1000, accent: Some("instagram") },
    Stat { label: "LinkedIn", target: 500, accent: Some("linkedin") },
];

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "What's the best way to prepare for coding interviews?",
        answer: "Preparation is key! Consistent practice with coding problems is more effective than cramming. Work on data structures, algorithms, and problem-solving patterns. Also, practice mock interviews to build confidence.",
    },
    Faq {
        question: "How should I approach system design interview questions?",
        answer: "System design is about understanding how to build scalable, reliable, and maintainable systems. Focus on the process: requirements, data flow, reliability, consistency, etc. We provide guides and examples on our site!",
    },
    Faq {
        question: "Are the Striver's SDE sheet & Love Babbar sheet questions enough for interview preparation?",
        answer: "The Striver's SDE Sheet & Love Babbar sheet is an excellent resource, but also explore additional platforms and problems. It's a good start, but combining it with more practice and real interview scenarios is recommended.",
    },
    Faq {
        question: "How do I get the most out of your website or PlacementPrep community?",
        answer: "Engage with the community! Ask questions, share resources, and collaborate on projects. Our site offers structured roadmaps, interactive quizzes, and expert blog posts to guide you.",
    },
    Faq {
        question: "What are the essential things to cover in core coding subjects?",
        answer: "Focus on Data Structures, Algorithms, Operating Systems, DBMS, and Networking. Also, build strong problem-solving and debugging skills. Our site has comprehensive notes for all of these!",
    },
    Faq {
        question: "Do you offer any 1:1 mentorship?",
        answer: "We’re planning to introduce 1:1 mentorship soon. Meanwhile, you can join our community sessions and Q&A forums for direct guidance from peers and experts.",
    },
];

pub const FOUNDER: Founder = Founder {
    name: "Varnikumar Patel",
    bio: [
        "Student at VIT Bhopal University",
        "Strong scores on LeetCode & GeeksforGeeks",
        "Passionate about Web Development",
    ],
    photo_src: "/assets/varni.jpg",
    links: [
        SocialLink {
            label: "GitHub",
            href: "https://github.com/Varni1512",
            icon_src: "https://cdn-icons-png.flaticon.com/512/25/25231.png",
        },
        SocialLink {
            label: "LinkedIn",
            href: "http://www.linkedin.com/in/varnikumarpatel",
            icon_src: "https://cdn-icons-png.flaticon.com/512/174/174857.png",
        },
        SocialLink {
            label: "Email",
            href: "mailto:varni1505@gmail.com",
            icon_src: "https://cdn-icons-png.flaticon.com/512/732/732200.png",
        },
    ],
};

pub const CONTACT_EMAIL: &str = "varnikumar1512@gmail.com";
pub const CONTACT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSfCfDXQaZX3lfioBYiVEWbvqHSxtK_jaStl0uu_AlmQWlTRDA/viewform?usp=dialog";
pub const CONTACT_ICON_SRC: &str = "https://cdn-icons-png.flaticon.com/512/166/166258.png";

pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
