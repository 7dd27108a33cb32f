use std::collections::{ HashMap, HashSet };

use super::errors::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    SingleLine,
    MultiLine,
}

/// A single required answer in the worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Key used in the live answers and in the exported document.
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub help: Option<&'static str>,
    /// Inline message shown when the field is left empty.
    pub required_message: &'static str,
}

impl FieldDef {
    pub const fn single_line(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::SingleLine,
            placeholder: "",
            help: None,
            required_message: "This field is required",
        }
    }

    pub const fn multi_line(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: FieldKind::MultiLine,
            placeholder: "",
            help: None,
            required_message: "This field is required",
        }
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }

    pub const fn required(mut self, message: &'static str) -> Self {
        self.required_message = message;
        self
    }

    /// Fields are always required in the current worksheet.
    pub fn is_required(&self) -> bool {
        true
    }
}

/// One of the framework steps together with the fields that answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDef {
    pub number: u8,
    pub title: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub goal: &'static str,
    pub tool: &'static str,
    pub outcome: &'static str,
    pub fields: Vec<FieldDef>,
}

impl SectionDef {
    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.id)
    }
}

/// Read-only description of every section and field of the worksheet.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    sections: Vec<SectionDef>,
    // field id -> (section index, field index)
    index: HashMap<&'static str, (usize, usize)>,
}

impl FieldSchema {
    /// Builds a schema, rejecting duplicate ids, duplicate ordinals and empty sections.
    /// Sections are kept sorted by ordinal.
    pub fn new(mut sections: Vec<SectionDef>) -> Result<Self, SchemaError> {
        sections.sort_by_key(|s| s.number);

        let mut numbers = HashSet::new();
        let mut index = HashMap::new();

        for (section_idx, section) in sections.iter().enumerate() {
            if section.number == 0 {
                return Err(SchemaError::ZeroOrdinal);
            }
            if !numbers.insert(section.number) {
                return Err(SchemaError::DuplicateSection(section.number));
            }
            if section.fields.is_empty() {
                return Err(SchemaError::EmptySection(section.number));
            }
            for (field_idx, field) in section.fields.iter().enumerate() {
                if index.insert(field.id, (section_idx, field_idx)).is_some() {
                    return Err(SchemaError::DuplicateField(field.id.to_string()));
                }
            }
        }

        Ok(Self { sections, index })
    }

    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    pub fn section(&self, number: u8) -> Option<&SectionDef> {
        self.sections.iter().find(|s| s.number == number)
    }

    /// Ordered field ids of a section, empty when the ordinal is unknown.
    pub fn section_fields(&self, number: u8) -> Vec<&'static str> {
        self.section(number).map(|s| s.field_ids().collect()).unwrap_or_default()
    }

    pub fn field(&self, id: &str) -> Option<&FieldDef> {
        self.index.get(id).map(|&(s, f)| &self.sections[s].fields[f])
    }

    pub fn section_of(&self, id: &str) -> Option<u8> {
        self.index.get(id).map(|&(s, _)| self.sections[s].number)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All fields in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The nine-step framework worksheet.
    pub fn technopolis() -> Self {
        match Self::new(technopolis_sections()) {
            Ok(schema) => schema,
            Err(e) => unreachable!("built-in worksheet schema is invalid: {e}"),
        }
    }
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::technopolis()
    }
}

fn technopolis_sections() -> Vec<SectionDef> {
    vec![
        SectionDef {
            number: 1,
            title: "Audience & Context",
            heading: "Identify and segment your audience",
            description: "Consider demographic segments, developmental stages, and engagement contexts",
            goal: "Identify and segment your audience not just by demographic (families, schools, teens) but also by developmental stage and where they are.",
            tool: "Enhanced Audience-Context Matrix",
            outcome: "A clear map showing which audiences can be reached where, and how their needs evolve over time.",
            fields: vec![
                FieldDef::single_line("primaryAudience", "Primary Audience")
                    .placeholder("e.g., Families with school-age children")
                    .help("Identify your main target audience")
                    .required("Please identify your primary audience"),
                FieldDef::multi_line("audienceSegments", "Audience Segments")
                    .placeholder("e.g., Early childhood (3-5), Elementary (6-10), Tweens (11-12), Teens (13-17), Young Adults (18-24), Parents, Educators...")
                    .help("Break down your audience into developmental stages and age ranges")
                    .required("Please describe your audience segments"),
                FieldDef::multi_line("audienceContexts", "Audience Contexts")
                    .placeholder("e.g., At home, In classroom, Museum visits, Mobile devices, Streaming platforms...")
                    .help("List where and how your audience will engage with content")
                    .required("Please list key contexts where your audience engages"),
            ],
        },
        SectionDef {
            number: 2,
            title: "Substantive Anchor Points",
            heading: "Ground your concepts in appealing themes",
            description: "Identify themes with broad appeal and depth potential",
            goal: "Ground your concepts in scientific or societal themes that have broad appeal and can be appreciated at multiple depths.",
            tool: "Theme Matrix (with Layering Potential)",
            outcome: "A prioritized theme that resonates whether someone is 5, 15, or 50, and can be expanded over time.",
            fields: vec![
                FieldDef::single_line("theme", "Central Theme")
                    .placeholder("e.g., Climate Science, Space Exploration, Artificial Intelligence")
                    .help("Select a primary theme for your project")
                    .required("Please select a central theme"),
                FieldDef::multi_line("themeRelevance", "Theme Relevance")
                    .placeholder("Explain why this theme matters to your audience segments")
                    .help("Describe why this theme has broad appeal and relevance")
                    .required("Please explain the theme's relevance"),
                FieldDef::multi_line("themeScalability", "Theme Scalability")
                    .placeholder("e.g., For children: basic weather concepts; For teens: climate data analysis; For adults: policy implications")
                    .help("Explain how this theme can be appreciated at different depths across age groups")
                    .required("Please describe how the theme scales across age groups"),
            ],
        },
        SectionDef {
            number: 3,
            title: "Design Philosophy",
            heading: "Establish an overarching creative approach",
            description: "Define a design philosophy that works across platforms",
            goal: "Decide on the overarching creative lens (speculative, immersive, co-creative, cinematic) while ensuring it can flex for each platform.",
            tool: "Design Mode Selector",
            outcome: "A unifying creative approach that keeps Technopolis's brand consistent across experiences, while offering age-appropriate depths.",
            fields: vec![
                FieldDef::single_line("designApproach", "Design Approach")
                    .placeholder("e.g., Immersive, Speculative, Cinematic, Game-based, Co-creative")
                    .help("Choose your primary creative lens")
                    .required("Please select a design approach"),
                FieldDef::multi_line("platformAdaptations", "Platform Adaptations")
                    .placeholder("e.g., Physical exhibits: hands-on interactions; Mobile: quick challenges; Documentary: narrative-driven")
                    .help("Explain how your design approach adapts across platforms")
                    .required("Please explain how your design adapts across platforms"),
                FieldDef::multi_line("brandConsistency", "Brand Consistency")
                    .placeholder("Describe how you'll maintain a consistent brand experience")
                    .help("Outline how brand consistency will be maintained across experiences")
                    .required("Please describe how brand consistency will be maintained"),
            ],
        },
        SectionDef {
            number: 4,
            title: "Creative Constraints",
            heading: "Use constraints as innovation drivers",
            description: "Define constraints that ensure sustainability and adaptability",
            goal: "Use constraints (budget, time, format) as innovation drivers, ensuring experiences can be easily deployed off-site, updated over time, and accessed by varied audiences.",
            tool: "Creative Constraints Cards",
            outcome: "Efficient, sustainable concepts that can scale and adapt to different budgets, contexts, and age groups.",
            fields: vec![
                FieldDef::multi_line("budgetConstraints", "Budget Constraints")
                    .placeholder("e.g., Limited production budget requiring creative solutions")
                    .required("Please outline budget constraints"),
                FieldDef::multi_line("timeConstraints", "Time Constraints")
                    .placeholder("e.g., Seasonal release schedule, development timeline")
                    .required("Please outline time constraints"),
                FieldDef::multi_line("formatConstraints", "Format Constraints")
                    .placeholder("e.g., Mobile-first design, limited physical space, transportation requirements")
                    .required("Please outline format constraints"),
            ],
        },
        SectionDef {
            number: 5,
            title: "Translating Message into Layered Experiences",
            heading: "Create multi-layered content",
            description: "Design experiences with tiered complexity for different audiences",
            goal: "Turn your chosen theme into tangible or virtual experiences with tiered difficulty/complexity.",
            tool: "From Message to Medium",
            outcome: "A multi-layered content suite that reveals deeper layers to returning or older audiences, keeping them engaged as they mature.",
            fields: vec![
                FieldDef::multi_line("primaryExperiences", "Primary Experiences")
                    .placeholder("e.g., Interactive exhibit, documentary series, mobile game, educational kit")
                    .help("List the main types of experiences you'll create")
                    .required("Please describe primary experiences"),
                FieldDef::multi_line("contentTiers", "Content Tiers")
                    .placeholder("e.g., Beginner: simple interactions; Intermediate: guided exploration; Advanced: data analysis")
                    .help("Describe how content complexity will scale across audience segments")
                    .required("Please outline content tiers for different audiences"),
                FieldDef::multi_line("crossPlatformStrategy", "Cross-Platform Strategy")
                    .placeholder("e.g., Core concepts appear across all platforms with format-specific adaptations")
                    .help("Explain how experiences will connect across platforms")
                    .required("Please explain cross-platform strategy"),
            ],
        },
        SectionDef {
            number: 6,
            title: "Seriality & Modularity",
            heading: "Build for ongoing engagement",
            description: "Design experiences that unfold over time and encourage return visits",
            goal: "Build experiences in episodes or modules that can unfold over time, prompting audiences to return or progress to the next level of complexity.",
            tool: "Narrative Ladder",
            outcome: "Audiences feel there's always \"more\" to discover, fueling repeat engagement and long-term loyalty to Technopolis offerings.",
            fields: vec![
                FieldDef::multi_line("returnEngagement", "Return Engagement Strategy")
                    .placeholder("e.g., Progressive unlocking of content, seasonal updates, evolving challenges")
                    .help("Describe how you'll encourage audiences to return")
                    .required("Please describe strategy for return engagement"),
                FieldDef::multi_line("contentProgression", "Content Progression")
                    .placeholder("e.g., Basic concepts lead to advanced applications; narrative arcs span multiple episodes")
                    .help("Outline how content builds and progresses over time")
                    .required("Please outline content progression"),
                FieldDef::multi_line("modulesOrEpisodes", "Modules or Episodes")
                    .placeholder("e.g., Season 1: Foundations; Season 2: Applications; Season 3: Future Directions")
                    .help("List planned modules, episodes, or expansion phases")
                    .required("Please list planned modules or episodes"),
            ],
        },
        SectionDef {
            number: 7,
            title: "Diffusion & Partnerships",
            heading: "Extend reach through partnerships",
            description: "Identify strategic alliances to expand your audience",
            goal: "Extend reach beyond the physical museum via strategic alliances: production studios, streaming platforms, mobile app publishers, schools, libraries, community centers.",
            tool: "Out-of-Venue Playbook",
            outcome: "Access to new audiences, shared resources, and deeper penetration into everyday life, reducing dependency on high-season visits.",
            fields: vec![
                FieldDef::multi_line("potentialPartners", "Potential Partners")
                    .placeholder("e.g., Streaming platforms, schools, libraries, game publishers, community centers")
                    .help("List organizations you could partner with")
                    .required("Please list potential partners"),
                FieldDef::multi_line("distributionChannels", "Distribution Channels")
                    .placeholder("e.g., Educational networks, traveling exhibits circuit, app stores, streaming services")
                    .help("Identify channels for reaching audiences beyond your venue")
                    .required("Please identify distribution channels"),
                FieldDef::multi_line("partnershipGoals", "Partnership Goals")
                    .placeholder("e.g., Audience expansion, resource sharing, content distribution, revenue generation")
                    .help("Outline what you hope to achieve through partnerships")
                    .required("Please outline partnership goals"),
            ],
        },
        SectionDef {
            number: 8,
            title: "Hybrid & Digital Layers",
            heading: "Create phygital experiences",
            description: "Combine physical and digital elements for flexible engagement",
            goal: "Combine physical interaction with digital tools to allow audiences to engage wherever and whenever.",
            tool: "Phygital Spectrum Slider",
            outcome: "Experiences that seamlessly operate in-person and online, ensuring resilience against weather or location constraints.",
            fields: vec![
                FieldDef::multi_line("physicalElements", "Physical Elements")
                    .placeholder("e.g., Hands-on exhibits, physical kits, printed materials, in-person events")
                    .help("Describe tangible aspects of your experience")
                    .required("Please describe physical elements"),
                FieldDef::multi_line("digitalElements", "Digital Elements")
                    .placeholder("e.g., Mobile apps, online platforms, AR/VR experiences, streaming content")
                    .help("Describe digital components of your experience")
                    .required("Please describe digital elements"),
                FieldDef::multi_line("integrationStrategy", "Integration Strategy")
                    .placeholder("e.g., QR codes linking physical to digital, companion apps, online extensions of in-person experiences")
                    .help("Explain how physical and digital elements will work together")
                    .required("Please explain integration strategy"),
            ],
        },
        SectionDef {
            number: 9,
            title: "Social Layer & Multi-Generational Feedback",
            heading: "Foster connections and gather feedback",
            description: "Create mechanisms for social engagement and continuous improvement",
            goal: "Foster social connections, knowledge sharing, and iterative improvement based on real user data from different age groups.",
            tool: "Engagement Metrics Cards",
            outcome: "Continuous optimization. You can refine concepts as you learn how each generational segment engages, and adapt future releases, expansions, or episodes.",
            fields: vec![
                FieldDef::multi_line("successMetrics", "Success Metrics")
                    .placeholder("e.g., Engagement time, return visits, social shares, learning outcomes, progression through content tiers")
                    .help("Define how you'll measure the success of your experiences")
                    .required("Please define success metrics"),
                FieldDef::multi_line("feedbackMechanisms", "Feedback Mechanisms")
                    .placeholder("e.g., User testing, surveys, analytics tracking, social media monitoring, focus groups")
                    .help("Describe how you'll collect feedback from different audience segments")
                    .required("Please outline feedback mechanisms"),
                FieldDef::multi_line("iterationStrategy", "Iteration Strategy")
                    .placeholder("e.g., Quarterly content updates, annual major revisions, continuous A/B testing")
                    .help("Outline your approach to refining experiences based on feedback")
                    .required("Please describe iteration strategy"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(number: u8, ids: &[&'static str]) -> SectionDef {
        SectionDef {
            number,
            title: "t",
            heading: "h",
            description: "d",
            goal: "g",
            tool: "tool",
            outcome: "o",
            fields: ids.iter().map(|id| FieldDef::multi_line(id, "Label")).collect(),
        }
    }

    #[test]
    fn test_reference_schema_shape() {
        let schema = FieldSchema::technopolis();
        assert_eq!(schema.sections().len(), 9);
        assert_eq!(schema.len(), 27);
        for (i, section) in schema.sections().iter().enumerate() {
            assert_eq!(section.number as usize, i + 1);
            assert_eq!(section.fields.len(), 3);
        }

        assert_eq!(
            schema.section_fields(3),
            vec!["designApproach", "platformAdaptations", "brandConsistency"]
        );
        assert_eq!(schema.section_of("iterationStrategy"), Some(9));
        assert!(schema.section_fields(10).is_empty());
    }

    #[test]
    fn test_field_lookup() {
        let schema = FieldSchema::technopolis();
        let theme = schema.field("theme").unwrap();
        assert_eq!(theme.label, "Central Theme");
        assert_eq!(theme.kind, FieldKind::SingleLine);
        assert!(theme.is_required());

        let tiers = schema.field("contentTiers").unwrap();
        assert_eq!(tiers.kind, FieldKind::MultiLine);
        assert!(schema.field("nope").is_none());
    }

    #[test]
    fn test_custom_schema_sorted_and_generalized() {
        let schema = FieldSchema::new(vec![
            section(2, &["c", "d", "e", "f"]),
            section(1, &["a"]),
        ])
        .unwrap();

        let numbers: Vec<u8> = schema.sections().iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        let ids: Vec<&str> = schema.fields().map(|f| f.id).collect();
        assert_eq!(ids, vec!["a", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_schema_invariants_rejected() {
        assert_eq!(
            FieldSchema::new(vec![section(1, &["a"]), section(2, &["a"])]).unwrap_err(),
            SchemaError::DuplicateField("a".to_string())
        );
        assert_eq!(
            FieldSchema::new(vec![section(1, &["a"]), section(1, &["b"])]).unwrap_err(),
            SchemaError::DuplicateSection(1)
        );
        assert_eq!(
            FieldSchema::new(vec![section(1, &[])]).unwrap_err(),
            SchemaError::EmptySection(1)
        );
        assert_eq!(FieldSchema::new(vec![section(0, &["a"])]).unwrap_err(), SchemaError::ZeroOrdinal);
    }
}
