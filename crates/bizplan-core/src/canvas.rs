use crate::{BizPlanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The nine fixed sections of a business-model canvas, in canvas layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanvasSection {
    KeyPartners,
    KeyActivities,
    KeyResources,
    ValueProposition,
    CustomerRelationships,
    Channels,
    CustomerSegments,
    CostStructure,
    RevenueStreams,
}

impl CanvasSection {
    pub const ALL: [CanvasSection; 9] = [
        CanvasSection::KeyPartners,
        CanvasSection::KeyActivities,
        CanvasSection::KeyResources,
        CanvasSection::ValueProposition,
        CanvasSection::CustomerRelationships,
        CanvasSection::Channels,
        CanvasSection::CustomerSegments,
        CanvasSection::CostStructure,
        CanvasSection::RevenueStreams,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CanvasSection::KeyPartners => "key-partners",
            CanvasSection::KeyActivities => "key-activities",
            CanvasSection::KeyResources => "key-resources",
            CanvasSection::ValueProposition => "value-proposition",
            CanvasSection::CustomerRelationships => "customer-relationships",
            CanvasSection::Channels => "channels",
            CanvasSection::CustomerSegments => "customer-segments",
            CanvasSection::CostStructure => "cost-structure",
            CanvasSection::RevenueStreams => "revenue-streams",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CanvasSection::KeyPartners => "Key Partners",
            CanvasSection::KeyActivities => "Key Activities",
            CanvasSection::KeyResources => "Key Resources",
            CanvasSection::ValueProposition => "Value Propositions",
            CanvasSection::CustomerRelationships => "Customer Relationships",
            CanvasSection::Channels => "Channels",
            CanvasSection::CustomerSegments => "Customer Segments",
            CanvasSection::CostStructure => "Cost Structure",
            CanvasSection::RevenueStreams => "Revenue Streams",
        }
    }

    /// Guiding question shown with the section.
    pub fn prompt(&self) -> &'static str {
        match self {
            CanvasSection::KeyPartners => "Who are your key partners and suppliers?",
            CanvasSection::KeyActivities => {
                "What key activities does your value proposition require?"
            }
            CanvasSection::KeyResources => {
                "What key resources does your value proposition require?"
            }
            CanvasSection::ValueProposition => "What value do you deliver to your customers?",
            CanvasSection::CustomerRelationships => {
                "What type of relationship do you establish with your customers?"
            }
            CanvasSection::Channels => "Through which channels do you reach your customers?",
            CanvasSection::CustomerSegments => "For whom are you creating value?",
            CanvasSection::CostStructure => {
                "What are the most important costs inherent in your business model?"
            }
            CanvasSection::RevenueStreams => {
                "For what value are your customers really willing to pay?"
            }
        }
    }
}

impl fmt::Display for CanvasSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for CanvasSection {
    type Err = BizPlanError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        CanvasSection::ALL
            .into_iter()
            .find(|section| section.id() == wanted)
            .ok_or_else(|| BizPlanError::Parse(format!("unknown canvas section: {}", s)))
    }
}

/// Free text per canvas section. Sections never written read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanvasData {
    sections: BTreeMap<CanvasSection, String>,
}

impl CanvasData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the text of one section. No validation, no length limit.
    pub fn update_section(&mut self, section: CanvasSection, text: impl Into<String>) {
        self.sections.insert(section, text.into());
    }

    pub fn get(&self, section: CanvasSection) -> &str {
        self.sections.get(&section).map(String::as_str).unwrap_or("")
    }

    /// Sections holding non-blank text, in canvas order.
    pub fn filled_sections(&self) -> Vec<CanvasSection> {
        self.sections
            .iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(section, _)| *section)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_round_trips_through_its_id() {
        for section in CanvasSection::ALL {
            assert_eq!(section.id().parse::<CanvasSection>().unwrap(), section);
        }
        assert!("key-investors".parse::<CanvasSection>().is_err());
    }

    #[test]
    fn update_overwrites_previous_text() {
        let mut data = CanvasData::new();
        data.update_section(CanvasSection::Channels, "Direct sales");
        data.update_section(CanvasSection::Channels, "App stores");
        assert_eq!(data.get(CanvasSection::Channels), "App stores");
        assert_eq!(data.get(CanvasSection::KeyPartners), "");
    }

    #[test]
    fn filled_sections_skip_blank_text_and_keep_canvas_order() {
        let mut data = CanvasData::new();
        data.update_section(CanvasSection::RevenueStreams, "Subscriptions");
        data.update_section(CanvasSection::KeyPartners, "Cloud vendor");
        data.update_section(CanvasSection::Channels, "  ");
        assert_eq!(
            data.filled_sections(),
            vec![CanvasSection::KeyPartners, CanvasSection::RevenueStreams]
        );
    }

    #[test]
    fn serializes_as_map_keyed_by_section_id() {
        let mut data = CanvasData::new();
        data.update_section(CanvasSection::ValueProposition, "Faster planning");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["value-proposition"], "Faster planning");
    }
}
