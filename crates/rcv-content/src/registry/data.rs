//! Registry contents. Edit here to add pages or stories.

use super::{Category, RegistryPage, Status, Story};

pub static PAGES: &[RegistryPage] = &[
    RegistryPage {
        id: "brand-anchor",
        title: "Brand Anchor",
        category: Category::Foundation,
        route: "docs-brand-anchor",
        status: Status::Complete,
        version: "2.0",
        last_updated: "2025-10-22",
        owner: "Product Team",
        description: "Product DNA, philosophy, messaging lab, and core values",
        dependencies: &[],
        related_pages: &["messaging-matrix", "design-system"],
        tags: &["dna", "philosophy", "messaging", "brand", "values"],
    },
    RegistryPage {
        id: "how-we-build",
        title: "How We Build",
        category: Category::Foundation,
        route: "docs-how-we-build",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-15",
        owner: "Product Team",
        description: "Building principles, decision framework, and architectural values",
        dependencies: &["brand-anchor"],
        related_pages: &["tech-stack"],
        tags: &["principles", "architecture", "philosophy"],
    },
    RegistryPage {
        id: "hcp",
        title: "Human Cognition Platform",
        category: Category::System,
        route: "docs-hcp",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Product Team",
        description: "Three-layer architecture: Intelligence, Therapeutic, Human layers",
        dependencies: &["brand-anchor"],
        related_pages: &["era-flow", "sphere-principle"],
        tags: &["architecture", "framework", "hcp", "system"],
    },
    RegistryPage {
        id: "era-flow",
        title: "ERA Flow",
        category: Category::System,
        route: "docs-era-flow",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Product Team",
        description: "Exploration → Reflection → Action: Turn insights into reflexes",
        dependencies: &["hcp"],
        related_pages: &["journey-infrastructure", "weekly-era-sprints"],
        tags: &["era", "framework", "flow", "therapeutic"],
    },
    RegistryPage {
        id: "sphere-principle",
        title: "Sphere Principle",
        category: Category::System,
        route: "docs-sphere-principle",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Product Team",
        description: "Visual system for representing recovery as continuous, multi-dimensional growth",
        dependencies: &["six-pillars"],
        related_pages: &["hcp"],
        tags: &["visualization", "framework", "sphere"],
    },
    RegistryPage {
        id: "infinite-canvas",
        title: "Infinite Canvas Principle",
        category: Category::System,
        route: "docs-infinite-canvas",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Product Team",
        description: "NaviCues spark curiosity, Building Blocks enable infinite exploration",
        dependencies: &["era-flow"],
        related_pages: &["navicue-suite", "building-blocks"],
        tags: &["design", "philosophy", "navigation", "exploration"],
    },
    RegistryPage {
        id: "journey-infrastructure",
        title: "Journey Infrastructure",
        category: Category::System,
        route: "docs-journey-infrastructure",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-20",
        owner: "Product Team",
        description: "The NOW Principle: No timelines, no completion tracking, always in the now",
        dependencies: &["era-flow"],
        related_pages: &["weekly-era-sprints", "navicue-suite"],
        tags: &["journey", "now-principle", "infrastructure"],
    },
    RegistryPage {
        id: "six-pillars",
        title: "Six Pillars",
        category: Category::Content,
        route: "docs-pillars",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Clinical Team",
        description: "Therapeutic framework: Emotional Regulation, Stress Resilience, Social Connectivity, Cognitive Reframing, Identity Integration, Decision Mastery",
        dependencies: &[],
        related_pages: &["micro-blocks", "weekly-era-sprints"],
        tags: &["pillars", "therapeutic", "framework", "clinical"],
    },
    RegistryPage {
        id: "micro-blocks",
        title: "Micro-Block Library",
        category: Category::Content,
        route: "docs-micro-block-library",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-15",
        owner: "Clinical Team",
        description: "48 fundamental brain states and therapeutic practices across all pillars",
        dependencies: &["six-pillars"],
        related_pages: &["weekly-era-sprints", "content-mapping"],
        tags: &["micro-blocks", "neuroscience", "brain-states", "practices"],
    },
    RegistryPage {
        id: "weekly-era-sprints",
        title: "Weekly ERA Sprints",
        category: Category::Content,
        route: "docs-weekly-era-sprints",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-15",
        owner: "Clinical Team",
        description: "12-week structured journeys mapping therapeutic content to the ERA flow",
        dependencies: &["era-flow", "micro-blocks"],
        related_pages: &["journey-infrastructure", "navicue-suite"],
        tags: &["journey", "era", "sprints", "12-week", "content"],
    },
    RegistryPage {
        id: "content-mapping",
        title: "Content Mapping System",
        category: Category::Content,
        route: "docs-content-mapping",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-15",
        owner: "Content Team",
        description: "Tag and track which resources target which micro-blocks for strategic gap analysis",
        dependencies: &["micro-blocks"],
        related_pages: &["video-library-audit"],
        tags: &["content", "mapping", "tagging", "analytics"],
    },
    RegistryPage {
        id: "video-library-audit",
        title: "Video Library Audit",
        category: Category::Content,
        route: "docs-video-library-audit",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-15",
        owner: "Content Team",
        description: "Comprehensive audit of video content with coverage matrix and gap prioritization",
        dependencies: &["content-mapping"],
        related_pages: &["micro-blocks"],
        tags: &["video", "audit", "content", "coverage"],
    },
    RegistryPage {
        id: "navicue-suite",
        title: "NaviCue Suite",
        category: Category::Content,
        route: "docs-navicue-suite",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-18",
        owner: "Product Team",
        description: "Complete framework: NaviCue types, scoring engine, library, and dynamic serving",
        dependencies: &["infinite-canvas", "micro-blocks"],
        related_pages: &["journey-infrastructure", "building-blocks"],
        tags: &["navicues", "micro-interventions", "framework"],
    },
    RegistryPage {
        id: "navicue-arsenal",
        title: "NaviCue Arsenal",
        category: Category::Content,
        route: "navicue-arsenal",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2024-12-23",
        owner: "Product Team",
        description: "Belief transformation command center: Ladders, heatmaps, voice archetypes, and live demos",
        dependencies: &["navicue-suite", "micro-blocks"],
        related_pages: &["navicue-suite", "journey-infrastructure"],
        tags: &["navicues", "belief-change", "arsenal", "voices", "sequences"],
    },
    RegistryPage {
        id: "content-lab",
        title: "Content Lab",
        category: Category::Content,
        route: "content-lab",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-18",
        owner: "Content Team",
        description: "Jira-style workspace for building and tracking therapeutic content",
        dependencies: &[],
        related_pages: &["weekly-era-sprints", "micro-blocks", "navicue-suite"],
        tags: &["workspace", "content", "building", "tools"],
    },
    RegistryPage {
        id: "core-features",
        title: "Core Features",
        category: Category::Platform,
        route: "docs-core-features",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Product Team",
        description: "The 10 functional blocks that define Recoverlution",
        dependencies: &["brand-anchor"],
        related_pages: &["feature-definitions", "roadmap"],
        tags: &["features", "platform", "roadmap"],
    },
    RegistryPage {
        id: "feature-definitions",
        title: "Feature Definitions",
        category: Category::Platform,
        route: "docs-feature-definitions",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Product Team",
        description: "What each feature is (and isn't)",
        dependencies: &["core-features"],
        related_pages: &["brand-anchor"],
        tags: &["features", "definitions", "clarity"],
    },
    RegistryPage {
        id: "roadmap",
        title: "Content Build-Out Roadmap",
        category: Category::Platform,
        route: "docs-content-roadmap",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Product Team",
        description: "Strategic plan for NaviCues, Building Blocks, and therapeutic content creation",
        dependencies: &[],
        related_pages: &["navicue-suite", "weekly-era-sprints"],
        tags: &["roadmap", "strategy", "planning"],
    },
    RegistryPage {
        id: "dna-hub",
        title: "DNA Hub",
        category: Category::Design,
        route: "dna-hub",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-20",
        owner: "Design Team",
        description: "Central hub for design system, assets, and visual standards",
        dependencies: &[],
        related_pages: &["design-system", "asset-manager", "messaging-matrix"],
        tags: &["design", "hub", "navigation"],
    },
    RegistryPage {
        id: "design-system",
        title: "Design System Documentation",
        category: Category::Design,
        route: "dna-design-system",
        status: Status::Complete,
        version: "2.0",
        last_updated: "2025-10-22",
        owner: "Design Team",
        description: "Complete design system: principles, components, patterns, and page templates",
        dependencies: &["brand-anchor"],
        related_pages: &["messaging-matrix", "asset-manager"],
        tags: &["design", "components", "patterns", "standards"],
    },
    RegistryPage {
        id: "asset-manager",
        title: "Image Asset Manager",
        category: Category::Design,
        route: "dna-asset-manager",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-21",
        owner: "Design Team",
        description: "Browse, search, and manage hero images from Pexels and Unsplash with live API integration",
        dependencies: &[],
        related_pages: &["design-system"],
        tags: &["images", "assets", "pexels", "unsplash", "api"],
    },
    RegistryPage {
        id: "messaging-matrix",
        title: "Messaging Matrix",
        category: Category::Design,
        route: "docs-brand-anchor",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-22",
        owner: "Product Team",
        description: "Complete map of every messaging touchpoint across the platform - ensures 100% consistency",
        dependencies: &["brand-anchor"],
        related_pages: &["design-system"],
        tags: &["messaging", "copy", "consistency", "brand"],
    },
    RegistryPage {
        id: "card-backgrounds",
        title: "Card Background Gallery",
        category: Category::Design,
        route: "demo-card-backgrounds",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-21",
        owner: "Design Team",
        description: "Map custom Pixabay abstracts to your 7 dashboard cards with visual preview and assignment system",
        dependencies: &[],
        related_pages: &["asset-manager", "design-system"],
        tags: &["backgrounds", "dashboard", "pixabay", "cards"],
    },
    RegistryPage {
        id: "email-blast",
        title: "Email Blast Tool",
        category: Category::Tools,
        route: "admin-email-blast",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-15",
        owner: "Marketing Team",
        description: "Campaign builder for CEO outreach with template system",
        dependencies: &[],
        related_pages: &[],
        tags: &["email", "marketing", "outreach", "tool"],
    },
    RegistryPage {
        id: "linkedin-carousel",
        title: "LinkedIn Carousel Generator",
        category: Category::Tools,
        route: "admin-linkedin-carousel",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-10",
        owner: "Marketing Team",
        description: "Create engaging LinkedIn carousel posts with brand styling",
        dependencies: &[],
        related_pages: &[],
        tags: &["linkedin", "social", "marketing", "carousel"],
    },
    RegistryPage {
        id: "pixabay-test",
        title: "Pixabay API Test",
        category: Category::Tools,
        route: "admin-pixabay-test",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-10-18",
        owner: "Engineering",
        description: "Diagnostic tool for testing Pixabay API integration and search queries",
        dependencies: &[],
        related_pages: &["asset-manager"],
        tags: &["api", "testing", "pixabay", "diagnostic"],
    },
    RegistryPage {
        id: "component-architecture-lab",
        title: "Component Architecture Lab",
        category: Category::Design,
        route: "component-architecture-lab",
        status: Status::Complete,
        version: "1.0",
        last_updated: "2025-11-04",
        owner: "Design Team",
        description: "Visual matrix system for managing component patterns, reusability decisions, and section auditing",
        dependencies: &["design-system"],
        related_pages: &["design-system", "dna-hub"],
        tags: &["components", "architecture", "patterns", "matrix", "cms", "organization"],
    },
];

pub static STORIES: &[Story] = &[
    Story {
        id: "ST42",
        number: 42,
        title: "Weekly ERA Sprints",
        status: Status::Complete,
        category: "Content",
        description: "12-week structured journeys mapped to the ERA flow",
        route: Some("docs-weekly-era-sprints"),
        dependencies: &[],
        related_stories: &["ST43", "ST44"],
    },
    Story {
        id: "ST43",
        number: 43,
        title: "Micro-Block Library",
        status: Status::Complete,
        category: "Content",
        description: "48 fundamental brain states and therapeutic practices",
        route: Some("docs-micro-block-library"),
        dependencies: &["ST42"],
        related_stories: &["ST44", "ST45"],
    },
    Story {
        id: "ST44",
        number: 44,
        title: "Content Mapping System",
        status: Status::Complete,
        category: "Content",
        description: "Tag and track resources mapped to micro-blocks",
        route: Some("docs-content-mapping"),
        dependencies: &["ST43"],
        related_stories: &["ST45", "ST46"],
    },
    Story {
        id: "ST45",
        number: 45,
        title: "Content Mapping & Tagging",
        status: Status::Complete,
        category: "Content",
        description: "Strategic gap analysis through content tagging",
        route: Some("docs-content-mapping"),
        dependencies: &["ST43", "ST44"],
        related_stories: &["ST46"],
    },
    Story {
        id: "ST46",
        number: 46,
        title: "Video Library Audit",
        status: Status::Complete,
        category: "Content",
        description: "Comprehensive audit with coverage matrix",
        route: Some("docs-video-library-audit"),
        dependencies: &["ST44", "ST45"],
        related_stories: &["ST47"],
    },
    Story {
        id: "ST47",
        number: 47,
        title: "Cross-Referencing System",
        status: Status::Complete,
        category: "Platform",
        description: "Auto-linking between related content",
        route: Some("docs-brand-anchor"),
        dependencies: &[],
        related_stories: &[],
    },
    Story {
        id: "ST48",
        number: 48,
        title: "NaviCue Suite Framework",
        status: Status::Complete,
        category: "Content",
        description: "Complete NaviCue framework with types, scoring, and library",
        route: Some("docs-navicue-suite"),
        dependencies: &["ST43"],
        related_stories: &["ST49"],
    },
    Story {
        id: "ST49",
        number: 49,
        title: "Journey Infrastructure - NOW Principle",
        status: Status::Complete,
        category: "Platform",
        description: "Patient-facing journey with no timelines, no completion tracking",
        route: Some("docs-journey-infrastructure"),
        dependencies: &["ST42", "ST48"],
        related_stories: &["ST50"],
    },
    Story {
        id: "ST50",
        number: 50,
        title: "Momentum Data Architecture",
        status: Status::Complete,
        category: "Platform",
        description: "Living analytics dashboard with inner metrics visualization",
        route: Some("docs-brand-anchor"),
        dependencies: &["ST49"],
        related_stories: &["ST51"],
    },
    Story {
        id: "ST51",
        number: 51,
        title: "Integration Specifications",
        status: Status::Complete,
        category: "Platform",
        description: "Backend integration for patient data and state tracking",
        route: Some("docs-brand-anchor"),
        dependencies: &["ST50"],
        related_stories: &["ST52"],
    },
    Story {
        id: "ST52",
        number: 52,
        title: "Alumni Messenger",
        status: Status::Complete,
        category: "Platform",
        description: "Post-treatment community platform with Stream Chat",
        route: Some("docs-brand-anchor"),
        dependencies: &[],
        related_stories: &[],
    },
];
