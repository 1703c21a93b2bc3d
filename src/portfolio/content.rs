//! Static résumé content.

/// Who the site is about.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    /// Full name
    pub name: &'static str,
    /// One-line headline
    pub headline: &'static str,
    /// Degree and school
    pub program: &'static str,
    /// Minor
    pub minor: &'static str,
    /// Expected graduation
    pub class_of: &'static str,
    /// Grade point average
    pub gpa: &'static str,
    /// Research and engineering interests
    pub interests: &'static [&'static str],
    /// Short bio
    pub summary: &'static str,
    /// Where
    pub location: &'static str,
}

/// One position.
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    /// Job title
    pub role: &'static str,
    /// Employer or lab
    pub org: &'static str,
    /// Date range
    pub period: &'static str,
    /// `Research` or `Industry`
    pub tag: &'static str,
    /// Highlights
    pub bullets: &'static [&'static str],
}

/// One project.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    /// Project name
    pub name: &'static str,
    /// Technologies used
    pub stack: &'static str,
    /// Date range
    pub period: &'static str,
    /// Summary paragraph
    pub desc: &'static str,
    /// Highlights
    pub bullets: &'static [&'static str],
}

/// A named group of skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    /// Group heading
    pub category: &'static str,
    /// Skills in the group
    pub items: &'static [&'static str],
}

/// A certification.
#[derive(Debug, Clone, Copy)]
pub struct Certification {
    /// Certificate title
    pub name: &'static str,
    /// Issuer
    pub provider: &'static str,
    /// Year earned
    pub year: &'static str,
}

/// A contact channel.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    /// Channel name
    pub label: &'static str,
    /// Address shown to the user
    pub value: &'static str,
    /// Full URL
    pub href: &'static str,
}

/// Profile shown by `/me`.
pub const PROFILE: Profile = Profile {
    name: "Sarthak Gupta",
    headline: "Robotics · AI · Full-Stack · Researcher",
    program: "B.S. Computer Science, University of Florida",
    minor: "Accounting",
    class_of: "2027",
    gpa: "3.68",
    interests: &[
        "Machine Learning (Computer Vision, NLP)",
        "Robotics",
        "Full-stack software engineering",
    ],
    summary: "Building intelligent systems at the intersection of machine learning, \
              robotics, and software engineering.",
    location: "Gainesville, FL",
};

/// Positions, newest role first.
pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "Robotics Software Developer",
        org: "Machine Intelligence Lab @ UF",
        period: "Jan 2025 – Present",
        tag: "Research",
        bullets: &[
            "Developing a C++ Gazebo plugin within the ROS2 control framework for SubjuGator 9's \
             gripper, integrating JointController and JointTrajectoryController for 2-DOF velocity \
             and position control.",
            "Integrated a Water-Linked DVL using Bash, Linux, Python and C++; increased localization \
             to 10 Hz and reduced drift from 12 m/hr to 4 m/hr during sea trials.",
            "Advanced SubjuGator 9 to the semifinals of RoboSub 2025, ranking 12th of 55 \
             international teams.",
        ],
    },
    Experience {
        role: "Undergraduate Researcher",
        org: "VERG Lab @ University of Florida",
        period: "May 2025 – Present",
        tag: "Research",
        bullets: &[
            "Developing an end-to-end AI video generation pipeline in ComfyUI for the U.S. Air \
             Force, producing cadet training content on sexual assault prevention.",
            "Deployed on HiPerGator HPC processing 500 GB of raw data and generating 200 training \
             videos with automated text, voice, and visual effects.",
            "Research abstract accepted to the 2nd Annual Digital Health Symposium at UF/FSU.",
        ],
    },
    Experience {
        role: "AI Developer Intern",
        org: "Florida Community Innovation Foundation",
        period: "Oct 2025 – Present",
        tag: "Industry",
        bullets: &[
            "Designing LLM-driven agentic pipelines with LangChain, OpenAI APIs, and Python to \
             autonomously extract and structure non-profit service data from unstructured web \
             sources.",
            "Built scraping pipelines processing 5,000+ resource listings; improved data coverage \
             by 35%.",
            "Implemented a RAG system with vector search for resource recommendations, increasing \
             query accuracy by 40%.",
        ],
    },
];

/// Selected projects.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "Audionomous",
        stack: "Python · OpenCV · MediaPipe · PyCAW · Arduino",
        period: "Oct 2025 – Present",
        desc: "AI-driven real-time vision-audio modulation system adjusting headphone volume from \
               facial motion cues at 30 FPS via USB-serial with ~95% detection stability under \
               200ms latency.",
        bullets: &[
            "High-throughput serial pipeline with NICL framing and checksum validation",
            "MediaPipe FaceMesh (468 landmarks) with EMA temporal filtering",
            "Multi-threaded PyCAW subsystem with atomic cancellation and async ramping",
        ],
    },
    Project {
        name: "PlayCast",
        stack: "React Native · Node.js · FFmpeg · Gemini API · Firebase",
        period: "Sep 2025 – Present",
        desc: "Cross-platform mobile app delivering TikTok-style real-time highlight reels from \
               live sports using SportsRadar timestamps + Gemini NLP for automated clip scoring.",
        bullets: &[
            "Live-to-highlight FFmpeg pipeline with automated clip trimming",
            "REST backend with range-enabled media streaming",
            "Firebase Firestore for user interactions and personalization",
        ],
    },
    Project {
        name: "J.A.R.V.I.S",
        stack: "Python · PyQt6 · Vosk · Porcupine · Gemini API · OpenGL",
        period: "Jun 2025 – Present",
        desc: "Multithreaded offline voice assistant with wake-word detection, real-time \
               speech-to-text, and a PyQt6 interface featuring an OpenGL waveform visualizer.",
        bullets: &[
            "Low-latency wake-word detection with pvporcupine",
            "Gemini API integration for contextual NLP + WeatherAPI geolocation",
            "Extensible voice-command handlers for system controls and file operations",
        ],
    },
];

/// Skills by category.
pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        items: &["Java", "Python", "JavaScript", "C++", "R", "MATLAB"],
    },
    SkillGroup {
        category: "Frameworks & Platforms",
        items: &[
            "React.js",
            "React Native",
            "Node.js",
            "Express.js",
            "LangChain",
            "FastAPI",
            "TensorFlow",
            "PyTorch",
            "ROS2",
            "Firebase",
            "MongoDB",
            "Angular.js",
            "TypeScript",
            "Expo",
        ],
    },
    SkillGroup {
        category: "Tools & Tech",
        items: &[
            "Git",
            "OpenCV",
            "NVIDIA Isaac Sim",
            "AWS Polly",
            "Figma",
            "Ubuntu/Linux",
            "QGIS",
            "ArcGIS Pro",
            "ComfyUI",
            "CUDA / Slurm",
        ],
    },
    SkillGroup {
        category: "Methodologies",
        items: &[
            "Agile / Scrum",
            "SDLC",
            "RAG Pipelines",
            "Sensor Fusion",
            "Agentic AI",
        ],
    },
];

/// Certifications.
pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified AI Practitioner",
        provider: "Amazon Web Services",
        year: "2025",
    },
    Certification {
        name: "AWS Certified Cloud Practitioner",
        provider: "Amazon Web Services",
        year: "2025",
    },
    Certification {
        name: "Building Transformer-Based NLP Applications",
        provider: "NVIDIA",
        year: "2025",
    },
    Certification {
        name: "Fundamentals of Deep Learning",
        provider: "NVIDIA",
        year: "2025",
    },
    Certification {
        name: "Intermediate Web Development (WEB102)",
        provider: "CodePath",
        year: "2025",
    },
];

/// Contact channels in display order.
pub const CONTACT: &[Link] = &[
    Link {
        label: "Email",
        value: "sarthakgupta1703@gmail.com",
        href: "mailto:sarthakgupta1703@gmail.com",
    },
    Link {
        label: "LinkedIn",
        value: "linkedin.com/in/sarthak-gupta17",
        href: "https://www.linkedin.com/in/sarthak-gupta17/",
    },
    Link {
        label: "GitHub",
        value: "github.com/sgupta1703",
        href: "https://github.com/sgupta1703",
    },
];

/// Site-relative path of the downloadable résumé.
pub const RESUME_PATH: &str = "/Sarthak_Gupta_Resume.pdf";
