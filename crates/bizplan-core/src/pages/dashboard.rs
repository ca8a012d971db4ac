use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

/// Landing page linking to the five planning tools.
#[derive(Debug, Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn tools(&self) -> &'static [Tool] {
        TOOLS
    }
}

const TOOLS: &[Tool] = &[
    Tool {
        title: "AI Pitch Generator",
        description: "Generate compelling project pitches with AI assistance",
        route: "/pitch",
    },
    Tool {
        title: "Business Model Canvas",
        description: "Create comprehensive business models visually",
        route: "/business-model",
    },
    Tool {
        title: "Implementation Plans",
        description: "Detailed step-by-step implementation strategies",
        route: "/implementation",
    },
    Tool {
        title: "Project Roadmap",
        description: "Visual timeline and milestone tracking",
        route: "/roadmap",
    },
    Tool {
        title: "Resource Planning",
        description: "Team and resource allocation strategies",
        route: "/resources",
    },
];
